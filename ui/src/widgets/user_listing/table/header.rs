//! Table header rendering for the users table.

use egui::{Color32, Frame, Margin, Ui};

/// Header column labels.
pub const HEADERS: [&str; super::columns::NUM_COLUMNS] = ["Avatar", "Full Name", "View"];

/// Light gray header background.
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Renders one header cell per column. The caller ends the row.
#[inline]
pub fn render_table_header(ui: &mut Ui) {
    for label in HEADERS {
        render_header_cell(ui, label);
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, |ui| {
            ui.strong(label);
        });
}
