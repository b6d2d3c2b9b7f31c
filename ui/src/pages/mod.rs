//! Pages, one per [`Route`](roster_business::Route):
//! - `users_page`: the paginated listing
//! - `user_detail_page`: one user from the fetched listing
//! - `signed_out_page`: shown after confirming logout

mod signed_out_page;
mod user_detail_page;
mod users_page;

pub use signed_out_page::{SIGN_IN_AGAIN, signed_out_page};
pub use user_detail_page::{BACK_TO_USERS, USER_NOT_FOUND, user_detail_page};
pub use users_page::users_page;
