//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every row rejected or merged while loading the CSV.
    pub log_loader_rows: bool,

    /// Log the month buckets produced by the resampler.
    pub log_resample: bool,

    /// Log each period walked by the DCA calculator.
    pub log_calculator_steps: bool,

    /// Log requests arriving at the simulation engine.
    pub log_engine_requests: bool,

    /// Anything about the side panel form (clamping, validation failures)
    pub log_form: bool,
}

pub const DF: LogFlags = LogFlags {
    log_loader_rows: false,
    log_resample: false,
    log_calculator_steps: false,

    log_engine_requests: true,
    log_form: false,
};

// Activate trace_time macro (for cool scope-level timing)
pub const LOG_PERFORMANCE: bool = cfg!(debug_assertions);
