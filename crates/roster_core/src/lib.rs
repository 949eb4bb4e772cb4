//! Roster core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, FormState, LoadKind, LoadState, PageError, PageRequest, User};
pub use update::update;
pub use validate::{is_valid_email, is_valid_password};
pub use view_model::{FormView, RosterViewModel};
