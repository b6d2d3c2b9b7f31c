//! Cell rendering functions for the users table.

use egui::{Align2, FontId, Image, InnerResponse, Margin, Sense, Ui, Vec2};
use roster_business::User;

use super::columns::AVATAR_SIZE;

/// Pads a data cell.
#[inline]
pub fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    egui::Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Renders the avatar image, or the user's initials in a circle when the
/// record has no avatar URL.
#[inline]
pub fn render_avatar_cell(ui: &mut Ui, user: &User) {
    if user.avatar.is_empty() {
        render_initials(ui, &user.initials());
    } else {
        ui.add(
            Image::new(user.avatar.as_str())
                .fit_to_exact_size(Vec2::splat(AVATAR_SIZE))
                .corner_radius(AVATAR_SIZE / 2.0),
        )
        .on_hover_text(user.full_name());
    }
}

fn render_initials(ui: &mut Ui, initials: &str) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(AVATAR_SIZE), Sense::hover());
    let visuals = ui.visuals();
    let painter = ui.painter();
    painter.circle_filled(
        rect.center(),
        AVATAR_SIZE / 2.0,
        visuals.widgets.inactive.bg_fill,
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        initials,
        FontId::proportional(AVATAR_SIZE * 0.4),
        visuals.text_color(),
    );
}

#[inline]
pub fn render_name_cell(ui: &mut Ui, user: &User) {
    ui.label(user.full_name());
}

/// Returns `true` if the button was clicked.
#[inline]
pub fn render_view_button(ui: &mut Ui, user: &User) -> bool {
    ui.button("View")
        .on_hover_text(format!("View details of {}", user.full_name()))
        .clicked()
}
