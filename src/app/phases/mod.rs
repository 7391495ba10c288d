pub(super) mod phase_view;
pub(super) mod loading;
pub(super) mod ready;
pub(super) mod load_failed;

pub(crate) use phase_view::PhaseView;
