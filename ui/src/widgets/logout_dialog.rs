//! Logout confirmation dialog.
//!
//! Fully controlled by the caller: visibility comes in as `show`, the user's
//! choice goes out either as a [`LogoutDialogAction`] or through the
//! `on_close` / `on_confirm` callbacks of [`LogoutDialog`].

use egui::{Color32, Id, Modal, RichText, Ui};

pub const LOGOUT_DIALOG_TITLE: &str = "Confirm Logout";
pub const LOGOUT_DIALOG_BODY: &str = "Are you sure you want to log out from your account?";

/// What the user did with the dialog this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogoutDialogAction {
    #[default]
    None,
    /// "Cancel", Escape, or a click outside the dialog.
    Close,
    /// "Yes, Logout".
    Confirm,
}

/// Callback flavour of [`logout_dialog`].
#[derive(Default)]
pub struct LogoutDialog<'a> {
    show: bool,
    on_close: Option<Box<dyn FnOnce() + 'a>>,
    on_confirm: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> LogoutDialog<'a> {
    pub fn new(show: bool) -> Self {
        Self {
            show,
            ..Self::default()
        }
    }

    pub fn on_close(mut self, on_close: impl FnOnce() + 'a) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    pub fn on_confirm(mut self, on_confirm: impl FnOnce() + 'a) -> Self {
        self.on_confirm = Some(Box::new(on_confirm));
        self
    }

    /// Draws the dialog and invokes at most one callback.
    pub fn show(self, ui: &mut Ui) -> LogoutDialogAction {
        let action = logout_dialog(ui, self.show);
        match action {
            LogoutDialogAction::Close => {
                if let Some(on_close) = self.on_close {
                    on_close();
                }
            }
            LogoutDialogAction::Confirm => {
                if let Some(on_confirm) = self.on_confirm {
                    on_confirm();
                }
            }
            LogoutDialogAction::None => {}
        }
        action
    }
}

/// Renders the logout confirmation modal when `show` is true.
///
/// Nothing is drawn while `show` is false.
pub fn logout_dialog(ui: &mut Ui, show: bool) -> LogoutDialogAction {
    if !show {
        return LogoutDialogAction::None;
    }

    let mut action = LogoutDialogAction::None;

    let modal = Modal::new(Id::new("logout_dialog")).show(ui.ctx(), |ui| {
        ui.set_width(320.0);

        ui.heading(LOGOUT_DIALOG_TITLE);
        ui.add_space(8.0);
        ui.label(LOGOUT_DIALOG_BODY);
        ui.add_space(16.0);

        egui::Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                // right-to-left: the confirm button ends up last
                if ui
                    .button(RichText::new("Yes, Logout").color(Color32::from_rgb(220, 53, 69)))
                    .clicked()
                {
                    action = LogoutDialogAction::Confirm;
                }
                if ui.button("Cancel").clicked() {
                    action = LogoutDialogAction::Close;
                }
            },
        );
    });

    if action == LogoutDialogAction::None && modal.should_close() {
        action = LogoutDialogAction::Close;
    }

    action
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    #[derive(Default)]
    struct Fixture {
        show: bool,
        closed: usize,
        confirmed: usize,
    }

    fn harness<'a>(show: bool) -> Harness<'a, Fixture> {
        Harness::new_ui_state(
            |ui, fixture: &mut Fixture| {
                let Fixture {
                    show,
                    closed,
                    confirmed,
                } = fixture;
                LogoutDialog::new(*show)
                    .on_close(|| *closed += 1)
                    .on_confirm(|| *confirmed += 1)
                    .show(ui);
            },
            Fixture {
                show,
                ..Fixture::default()
            },
        )
    }

    #[test]
    fn test_hidden_dialog_renders_nothing() {
        let mut harness = harness(false);
        harness.step();

        assert!(harness.query_by_label(LOGOUT_DIALOG_TITLE).is_none());
        assert!(harness.query_by_label("Cancel").is_none());
        assert!(harness.query_by_label("Yes, Logout").is_none());
        assert_eq!(harness.state().closed, 0);
        assert_eq!(harness.state().confirmed, 0);
    }

    #[test]
    fn test_shown_dialog_has_title_body_and_buttons() {
        let mut harness = harness(true);
        harness.step();

        assert!(harness.query_by_label(LOGOUT_DIALOG_TITLE).is_some());
        assert!(harness.query_by_label(LOGOUT_DIALOG_BODY).is_some());
        assert!(harness.query_by_label("Cancel").is_some());
        assert!(harness.query_by_label("Yes, Logout").is_some());
    }

    #[test]
    fn test_cancel_invokes_only_on_close() {
        let mut harness = harness(true);
        harness.step();

        harness.get_by_label("Cancel").click();
        harness.step();

        assert_eq!(harness.state().closed, 1);
        assert_eq!(harness.state().confirmed, 0);
    }

    #[test]
    fn test_confirm_invokes_only_on_confirm() {
        let mut harness = harness(true);
        harness.step();

        harness.get_by_label("Yes, Logout").click();
        harness.step();

        assert_eq!(harness.state().confirmed, 1);
        assert_eq!(harness.state().closed, 0);
    }

    #[test]
    fn test_escape_counts_as_close() {
        let mut harness = harness(true);
        harness.step();

        harness.key_press(egui::Key::Escape);
        harness.step();

        assert_eq!(harness.state().closed, 1);
        assert_eq!(harness.state().confirmed, 0);
    }

    #[test]
    fn test_action_without_callbacks() {
        let mut harness = Harness::new_ui_state(
            |ui, last: &mut LogoutDialogAction| {
                let action = logout_dialog(ui, true);
                if action != LogoutDialogAction::None {
                    *last = action;
                }
            },
            LogoutDialogAction::None,
        );
        harness.step();

        harness.get_by_label("Yes, Logout").click();
        harness.step();

        assert_eq!(*harness.state(), LogoutDialogAction::Confirm);
    }
}
