//! Paginated user listing.
//!
//! Reads `FetchUsersCompute` and `UserPageCompute` from the [`StateCtx`]:
//! a spinner while the fetch is in flight, the error message with a retry
//! button when it failed, otherwise the current page of the table plus the
//! pagination control. Every interaction is applied after drawing, so the
//! widget never holds a borrow of the context while mutating it.

pub mod pagination;
pub mod table;

use egui::{Response, Ui};
use log::info;
use roster_business::{
    FetchUsersCommand, FetchUsersCompute, ListingPage, Route, User, UserPageCompute,
};
use roster_states::StateCtx;

use pagination::pagination_control;
use table::users_table;

pub const LOADING_USERS: &str = "Loading users...";
pub const RETRY: &str = "Try again";

enum ListingAction {
    Retry,
    GoToPage { page: usize, total_pages: usize },
    View(User),
}

/// The listing widget. `on_select_user` is called with the user whose "View"
/// button was clicked, right after navigating to their detail route.
#[derive(Default)]
pub struct UserListing<'a> {
    on_select_user: Option<Box<dyn FnOnce(&User) + 'a>>,
}

impl<'a> UserListing<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_select_user(mut self, on_select_user: impl FnOnce(&User) + 'a) -> Self {
        self.on_select_user = Some(Box::new(on_select_user));
        self
    }

    pub fn show(self, state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
        let mut action = None;

        let response = ui.vertical(|ui| {
            action = draw(state_ctx, ui);
        });

        match action {
            Some(ListingAction::Retry) => {
                info!("Retrying users fetch");
                state_ctx.enqueue_command::<FetchUsersCommand>();
            }
            Some(ListingAction::GoToPage { page, total_pages }) => {
                state_ctx.update::<ListingPage>(|listing| listing.set_page(page, total_pages));
            }
            Some(ListingAction::View(user)) => {
                let route = Route::UserDetail(user.id);
                info!("Navigating to {}", route.path());
                state_ctx.update::<Route>(|current| *current = route);
                if let Some(on_select_user) = self.on_select_user {
                    on_select_user(&user);
                }
            }
            None => {}
        }

        response.response
    }
}

/// [`UserListing`] without a selection callback.
pub fn user_listing(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    UserListing::new().show(state_ctx, ui)
}

fn draw(state_ctx: &StateCtx, ui: &mut Ui) -> Option<ListingAction> {
    let fetch = state_ctx.cached::<FetchUsersCompute>();

    if fetch.is_none_or(FetchUsersCompute::is_loading) {
        loading_view(ui);
        return None;
    }

    if let Some(message) = fetch.and_then(FetchUsersCompute::error_message) {
        return error_view(ui, message).then_some(ListingAction::Retry);
    }

    let current = state_ctx.cached::<UserPageCompute>()?;
    let pagination = current.pagination();

    let selected = users_table(ui, current.rows());
    ui.add_space(8.0);
    let requested = pagination_control(ui, &pagination);

    selected.map(ListingAction::View).or_else(|| {
        requested.map(|page| ListingAction::GoToPage {
            page,
            total_pages: pagination.total_pages(),
        })
    })
}

/// Spinner shown while a fetch is in flight.
pub fn loading_view(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.spinner();
        ui.label(LOADING_USERS);
    });
}

/// Returns `true` if the retry button was clicked.
fn error_view(ui: &mut Ui, message: &str) -> bool {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.colored_label(ui.visuals().error_fg_color, message);
        ui.add_space(8.0);
        ui.button(RETRY).clicked()
    })
    .inner
}
