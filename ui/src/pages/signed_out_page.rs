use egui::{Response, Ui};
use log::info;
use roster_business::{FetchUsersCommand, Route};

use crate::state::State;

pub const SIGN_IN_AGAIN: &str = "Sign in again";

/// Notice shown after logging out, with a way back to the listing.
pub fn signed_out_page(state: &mut State, ui: &mut Ui) -> Response {
    let mut sign_in = false;

    let response = ui
        .vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.heading("You have been logged out.");
            ui.add_space(16.0);
            sign_in = ui.button(SIGN_IN_AGAIN).clicked();
        })
        .response;

    if sign_in {
        info!("Signing back in");
        state.ctx.update::<Route>(|route| *route = Route::Users);
        state.ctx.enqueue_command::<FetchUsersCommand>();
    }

    response
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use egui_kittest::Harness;
    use kittest::Queryable;
    use roster_business::{BusinessConfig, MockUserService};

    use super::*;

    #[test]
    fn test_sign_in_again_returns_to_users_and_refetches() {
        let service = Arc::new(MockUserService::default());
        let mut state = State::with_service(BusinessConfig::default(), service.clone());
        state.ctx.update::<Route>(|route| *route = Route::SignedOut);

        let mut harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                signed_out_page(state, ui);
                state.ctx.flush_commands();
            },
            state,
        );
        harness.step();

        harness.get_by_label(SIGN_IN_AGAIN).click();
        harness.step();

        assert_eq!(*harness.state().ctx.state::<Route>(), Route::Users);
        assert_eq!(service.calls(), 1);
        assert!(harness.query_by_label("You have been logged out.").is_some());
    }
}
