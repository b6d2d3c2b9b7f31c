//! Row rendering for the users table.

use egui::Ui;
use roster_business::User;

use super::cells::{data_cell, render_avatar_cell, render_name_cell, render_view_button};

/// Renders the avatar, full name and "View" cells of `user`.
///
/// Returns `true` if "View" was clicked.
#[inline]
pub fn render_user_row(ui: &mut Ui, user: &User) -> bool {
    data_cell(ui, |ui| render_avatar_cell(ui, user));
    data_cell(ui, |ui| render_name_cell(ui, user));
    data_cell(ui, |ui| render_view_button(ui, user)).inner
}
