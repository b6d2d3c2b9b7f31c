//! Previous / numbered pages / next control.

use egui::Ui;
use roster_business::{PageItem, Pagination};

pub const PREVIOUS_PAGE: &str = "◀";
pub const NEXT_PAGE: &str = "▶";

/// Renders the control for `pagination`.
///
/// Returns the page the user asked for, if any. Nothing is drawn when there
/// are no pages.
pub fn pagination_control(ui: &mut Ui, pagination: &Pagination) -> Option<usize> {
    if pagination.total_pages() == 0 {
        return None;
    }

    let current = pagination.page();
    let mut requested = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(pagination.has_previous(), egui::Button::new(PREVIOUS_PAGE))
            .on_hover_text("Go to previous page")
            .clicked()
        {
            requested = Some(current - 1);
        }

        for item in pagination.page_items() {
            match item {
                PageItem::Page(page) => {
                    if ui
                        .selectable_label(page == current, page.to_string())
                        .clicked()
                        && page != current
                    {
                        requested = Some(page);
                    }
                }
                PageItem::Ellipsis => {
                    ui.label("…");
                }
            }
        }

        if ui
            .add_enabled(pagination.has_next(), egui::Button::new(NEXT_PAGE))
            .on_hover_text("Go to next page")
            .clicked()
        {
            requested = Some(current + 1);
        }

        ui.add_space(8.0);
        ui.weak(range_summary(pagination));
    });

    requested
}

/// "4-6 of 7": 1-indexed bounds of the rows on the current page.
fn range_summary(pagination: &Pagination) -> String {
    let range = pagination.range();
    format!("{}-{} of {}", range.start + 1, range.end, pagination.total())
}
