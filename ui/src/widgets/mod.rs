mod logout_dialog;
pub mod user_listing;

pub use logout_dialog::{
    LOGOUT_DIALOG_BODY, LOGOUT_DIALOG_TITLE, LogoutDialog, LogoutDialogAction, logout_dialog,
};
pub use user_listing::{UserListing, user_listing};
