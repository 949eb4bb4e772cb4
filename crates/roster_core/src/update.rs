use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FirstPageRequested => {
            // Busy guard: overlapping load requests are ignored rather than
            // racing on the shared list.
            if state.is_busy() {
                Vec::new()
            } else {
                let request = state.begin_full_load();
                vec![Effect::FetchPage(request)]
            }
        }
        Msg::NextPageRequested => {
            if state.is_busy() {
                Vec::new()
            } else {
                let request = state.begin_incremental_load();
                vec![Effect::FetchPage(request)]
            }
        }
        Msg::PageLoaded { request, result } => {
            state.apply_page_result(request, result);
            Vec::new()
        }
        Msg::UserSelected(user) => {
            state.set_route(user);
            Vec::new()
        }
        Msg::RouteConsumed => {
            state.clear_route();
            Vec::new()
        }
        Msg::EmailChanged(value) => {
            state.set_email(value);
            Vec::new()
        }
        Msg::PasswordChanged(value) => {
            state.set_password(value);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
