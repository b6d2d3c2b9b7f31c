use egui::{Image, Response, RichText, Ui, Vec2};
use roster_business::{FetchUsersCompute, Route, User};

use crate::{state::State, widgets::user_listing::loading_view};

pub const BACK_TO_USERS: &str = "Back to users";
pub const USER_NOT_FOUND: &str = "User not found";

const AVATAR_SIZE: f32 = 96.0;

/// Shows one user of the already fetched listing. Never fetches.
pub fn user_detail_page(state: &mut State, ui: &mut Ui, id: u64) -> Response {
    let mut back = false;

    let response = ui
        .vertical(|ui| {
            back = ui.button(BACK_TO_USERS).clicked();
            ui.add_space(16.0);

            let fetch = state.ctx.cached::<FetchUsersCompute>();
            if fetch.is_none_or(FetchUsersCompute::is_loading) {
                loading_view(ui);
                return;
            }

            match fetch
                .and_then(FetchUsersCompute::listing)
                .and_then(|listing| listing.find(id))
            {
                Some(user) => user_details(ui, user),
                None => {
                    ui.heading(USER_NOT_FOUND);
                    ui.label(format!("No user with id {id} in the listing."));
                }
            }
        })
        .response;

    if back {
        state.ctx.update::<Route>(|route| *route = Route::Users);
    }

    response
}

fn user_details(ui: &mut Ui, user: &User) {
    ui.horizontal(|ui| {
        if !user.avatar.is_empty() {
            ui.add(
                Image::new(user.avatar.as_str())
                    .fit_to_exact_size(Vec2::splat(AVATAR_SIZE))
                    .corner_radius(AVATAR_SIZE / 2.0),
            );
            ui.add_space(16.0);
        }

        ui.vertical(|ui| {
            ui.heading(user.full_name());
            if let Some(email) = &user.email {
                ui.label(email);
            }
            ui.label(RichText::new(format!("#{}", user.id)).monospace().weak());
        });
    });
}
