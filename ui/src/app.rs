use log::info;
use roster_business::{FetchUsersCommand, Route};

use crate::{
    pages,
    state::State,
    widgets::{self, LogoutDialogAction},
};

pub const LOGOUT: &str = "Logout";

pub struct RosterApp {
    pub state: State,
}

impl RosterApp {
    /// Called once before the first frame. Queues the initial users fetch,
    /// which runs at the end of the first frame.
    pub fn new(mut state: State) -> Self {
        state.ctx.enqueue_command::<FetchUsersCommand>();
        Self { state }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();

        let route = *self.state.ctx.state::<Route>();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Roster");
                ui.label(route.path());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if route != Route::SignedOut && ui.button(LOGOUT).clicked() {
                        self.state.logout_dialog_open = true;
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match route {
                Route::Users => {
                    pages::users_page(&mut self.state, ui);
                }
                Route::UserDetail(id) => {
                    pages::user_detail_page(&mut self.state, ui, id);
                }
                Route::SignedOut => {
                    pages::signed_out_page(&mut self.state, ui);
                }
            }

            match widgets::logout_dialog(ui, self.state.logout_dialog_open) {
                LogoutDialogAction::Close => self.state.logout_dialog_open = false,
                LogoutDialogAction::Confirm => {
                    info!("Logging out");
                    self.state.logout_dialog_open = false;
                    self.state
                        .ctx
                        .update::<Route>(|route| *route = Route::SignedOut);
                }
                LogoutDialogAction::None => {}
            }
        });

        // Run queued commands, then refresh derived state
        self.state.ctx.flush_commands();
        self.state.ctx.run_computed();
    }
}
