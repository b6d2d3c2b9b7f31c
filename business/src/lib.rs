//! Business layer of the roster app: users service, fetch command, pagination
//! and navigation state. Nothing in here draws.

mod config;
mod error;
mod fetch_users_compute;
mod listing;
mod pagination;
mod route;
mod service;
mod user;

use std::sync::Arc;

use roster_states::StateCtx;

pub use config::{BusinessConfig, DEFAULT_API_BASE_URL};
pub use error::FetchError;
pub use fetch_users_compute::{
    FetchUsersCommand, FetchUsersCompute, FetchUsersResult, LISTING_FETCH_FAILED,
};
pub use listing::{ListingPage, UserPageCompute};
pub use pagination::{PageItem, Pagination};
pub use route::Route;
#[cfg(any(test, feature = "test-utils"))]
pub use service::{MockReply, MockUserService, sample_users};
pub use service::{FetchUsersCallback, HttpUserService, UserService, UserServiceState};
pub use user::{User, UserListing, UsersPageResponse};

/// Register every state, compute and command of the users feature.
pub fn register(ctx: &mut StateCtx, config: BusinessConfig, service: Arc<dyn UserService>) {
    ctx.add_state(config);
    ctx.add_state(UserServiceState::new(service));
    ctx.add_state(Route::default());
    ctx.add_state(ListingPage::default());
    ctx.record_compute(FetchUsersCompute::default());
    ctx.record_compute(UserPageCompute::default());
    ctx.record_command(FetchUsersCommand);
}
