use crate::{PageError, PageRequest, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked for a fresh page-1 load (initial load or full reload).
    FirstPageRequested,
    /// User asked for the next page to be appended.
    NextPageRequested,
    /// Engine completion for a page fetch, echoing the originating request.
    PageLoaded {
        request: PageRequest,
        result: Result<Vec<User>, PageError>,
    },
    /// User picked an entry from the list; records the navigation target.
    UserSelected(User),
    /// The presentation layer finished navigating and consumed the target.
    RouteConsumed,
    /// User edited the login email field.
    EmailChanged(String),
    /// User edited the login password field.
    PasswordChanged(String),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
