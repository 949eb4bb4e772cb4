use crate::{LoadState, User};

/// Snapshot of the login form exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub email: String,
    pub password: String,
    pub is_valid: bool,
}

/// Everything the presentation layer needs to render one roster screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterViewModel {
    pub load: LoadState,
    /// Accumulated users, in fetch order.
    pub users: Vec<User>,
    /// Current pagination cursor (read-only to the presentation layer).
    pub cursor: u32,
    /// Whether a page fetch is in flight; lets the UI disable controls.
    pub busy: bool,
    /// Navigation target recorded by a selection, if any.
    pub route: Option<User>,
    pub form: FormView,
    pub dirty: bool,
}
