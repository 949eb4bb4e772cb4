use crate::validate::{is_valid_email, is_valid_password};
use crate::view_model::{FormView, RosterViewModel};

/// An immutable entity fetched from the remote directory.
///
/// Created only by decoding a fetch response; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Status of the list-loading operation. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No full load has been attempted yet.
    #[default]
    Idle,
    /// A full (page-1) load is in flight.
    Loading,
    /// The last full load completed; the list is populated (possibly empty).
    Loaded,
    /// The last full load failed, with a human-readable description.
    Failed(String),
}

/// Whether a page request replaces the list or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// Page 1; the response replaces the whole list.
    Full,
    /// Page N>1; the response is appended to the list.
    Incremental,
}

/// A page request, created when the request is accepted and echoed back
/// with the completion so the failure policy for its kind can be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub kind: LoadKind,
}

/// Failure description for a completed page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageError {
    pub message: String,
}

/// Raw login form fields plus the validity flag derived from them.
///
/// `is_valid` is recomputed on every field write and never stored
/// independently of the fields, so it cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    email: String,
    password: String,
    is_valid: bool,
}

impl FormState {
    fn recompute(&mut self) {
        self.is_valid = is_valid_email(&self.email) && is_valid_password(&self.password);
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

/// All observable state for one roster screen.
///
/// One instance exclusively owns the load status, the user list, the
/// pagination cursor, the navigation target, and the login form for the
/// lifetime of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    load: LoadState,
    users: Vec<User>,
    cursor: u32,
    in_flight: Option<PageRequest>,
    route: Option<User>,
    form: FormState,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            load: LoadState::Idle,
            users: Vec::new(),
            cursor: 1,
            in_flight: None,
            route: None,
            form: FormState::default(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> RosterViewModel {
        RosterViewModel {
            load: self.load.clone(),
            users: self.users.clone(),
            cursor: self.cursor,
            busy: self.in_flight.is_some(),
            route: self.route.clone(),
            form: FormView {
                email: self.form.email.clone(),
                password: self.form.password.clone(),
                is_valid: self.form.is_valid,
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Accepts a full-load request: cursor back to 1, status to `Loading`.
    pub(crate) fn begin_full_load(&mut self) -> PageRequest {
        self.cursor = 1;
        self.load = LoadState::Loading;
        let request = PageRequest {
            page: 1,
            kind: LoadKind::Full,
        };
        self.in_flight = Some(request);
        self.dirty = true;
        request
    }

    /// Accepts an incremental request: cursor advances by one regardless of
    /// how the fetch later turns out. The load status is not touched.
    pub(crate) fn begin_incremental_load(&mut self) -> PageRequest {
        self.cursor += 1;
        let request = PageRequest {
            page: self.cursor,
            kind: LoadKind::Incremental,
        };
        self.in_flight = Some(request);
        self.dirty = true;
        request
    }

    /// Applies a page completion under the per-kind failure policy.
    ///
    /// Full loads replace the list on success and surface failures as
    /// `LoadState::Failed`. Incremental loads append on success and absorb
    /// failures without touching the list or the load status.
    ///
    /// Completions that do not match the in-flight request are ignored;
    /// they can only come from a fetch that outlived its screen.
    pub(crate) fn apply_page_result(
        &mut self,
        request: PageRequest,
        result: Result<Vec<User>, PageError>,
    ) {
        if self.in_flight != Some(request) {
            return;
        }
        self.in_flight = None;
        self.dirty = true;

        match (request.kind, result) {
            (LoadKind::Full, Ok(users)) => {
                self.users = users;
                self.load = LoadState::Loaded;
            }
            (LoadKind::Full, Err(error)) => {
                // List left as-is from whatever it was.
                self.load = LoadState::Failed(error.message);
            }
            (LoadKind::Incremental, Ok(mut users)) => {
                // No de-duplication: overlapping pages show up as-is.
                self.users.append(&mut users);
            }
            (LoadKind::Incremental, Err(_)) => {
                // Absorbed. The effect runner logs the dropped page; nothing
                // reaches observable state.
            }
        }
    }

    pub(crate) fn set_route(&mut self, user: User) {
        self.route = Some(user);
        self.dirty = true;
    }

    pub(crate) fn clear_route(&mut self) {
        if self.route.take().is_some() {
            self.dirty = true;
        }
    }

    pub(crate) fn set_email(&mut self, value: String) {
        self.form.email = value;
        self.form.recompute();
        self.dirty = true;
    }

    pub(crate) fn set_password(&mut self, value: String) {
        self.form.password = value;
        self.form.recompute();
        self.dirty = true;
    }
}
