use egui::{Response, Ui};
use log::info;

use crate::{state::State, widgets::UserListing};

/// Renders the users listing.
pub fn users_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Users");
        ui.add_space(8.0);

        UserListing::new()
            .on_select_user(|user| info!("Selected user {} ({})", user.id, user.full_name()))
            .show(&mut state.ctx, ui);
    })
    .response
}
