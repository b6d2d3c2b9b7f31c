//! Users table, split into small pieces:
//! - `columns`: column count and sizes
//! - `header`: header row
//! - `row`: one row per user
//! - `cells`: content of each cell

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Color32, Frame, Margin, ScrollArea, Stroke, Ui};
use roster_business::User;

use header::render_table_header;
use row::render_user_row;

/// Subtle gray border around the table.
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Renders the table for `rows`.
///
/// Returns the user whose "View" button was clicked, if any.
pub fn users_table(ui: &mut Ui, rows: &[User]) -> Option<User> {
    let mut selected = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("users_table")
                    .num_columns(columns::NUM_COLUMNS)
                    .striped(true)
                    .spacing([16.0, 0.0])
                    .min_col_width(columns::MIN_COL_WIDTH)
                    .min_row_height(columns::ROW_HEIGHT)
                    .show(ui, |ui| {
                        render_table_header(ui);
                        ui.end_row();

                        for user in rows {
                            if render_user_row(ui, user) {
                                selected = Some(user.clone());
                            }
                            ui.end_row();
                        }
                    });
            });
        });

    selected
}
