mod phases;
mod root;
mod state;

pub(crate) use state::{AppState, ReadyState};

pub use root::App;
