//! Fetch users command + compute cache.
//!
//! Fetching users is a side effect (network IO), so it lives in a command:
//! - `FetchUsersCompute`: a compute-shaped cache holding the latest fetch cycle
//! - `FetchUsersCommand`: dispatched on mount and on retry, performs the fetch
//!   through the registered [`UserService`](crate::UserService) and publishes
//!   into `FetchUsersCompute` via `Updater`.
//!
//! Every dispatch is a new task generation, so a response that arrives after
//! a retry was issued is dropped instead of overwriting the newer cycle.

use std::any::{Any, TypeId};

use log::{error, info};
use roster_states::{Command, Compute, ComputeDeps, Dep, Updater, assign_impl};

use crate::{ListingPage, UserListing, UserServiceState};

/// The only message users see when a fetch cycle fails, whatever the cause.
pub const LISTING_FETCH_FAILED: &str = "Failed to fetch users. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchUsersResult {
    /// No fetch dispatched yet.
    #[default]
    Idle,
    Pending,
    Success(UserListing),
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct FetchUsersCompute {
    pub result: FetchUsersResult,
}

impl FetchUsersCompute {
    /// Before the first dispatch the listing is considered loading too.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.result,
            FetchUsersResult::Idle | FetchUsersResult::Pending
        )
    }

    pub fn listing(&self) -> Option<&UserListing> {
        if let FetchUsersResult::Success(ref listing) = self.result {
            Some(listing)
        } else {
            None
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        if let FetchUsersResult::Error(ref message) = self.result {
            Some(message)
        } else {
            None
        }
    }
}

impl Compute for FetchUsersCompute {
    fn deps(&self) -> ComputeDeps {
        const STATE_IDS: [TypeId; 0] = [];
        const COMPUTE_IDS: [TypeId; 0] = [];
        (&STATE_IDS, &COMPUTE_IDS)
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Written by `FetchUsersCommand` only.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let service = deps.get_state_ref::<UserServiceState>().inner.clone();
        let generation = updater.task().map(|task| task.id().generation());

        info!("FetchUsersCommand: fetching users, generation {generation:?}");

        // A new cycle starts on page 1.
        updater.set(ListingPage::default());
        updater.set(FetchUsersCompute {
            result: FetchUsersResult::Pending,
        });

        service.fetch_all_users(Box::new(move |result| match result {
            Ok(listing) => {
                info!(
                    "FetchUsersCommand: fetched {} users, {} per page",
                    listing.users.len(),
                    listing.per_page
                );
                updater.set(FetchUsersCompute {
                    result: FetchUsersResult::Success(listing),
                });
            }
            Err(err) => {
                error!("FetchUsersCommand: error fetching users: {err}");
                updater.set(FetchUsersCompute {
                    result: FetchUsersResult::Error(LISTING_FETCH_FAILED.to_owned()),
                });
            }
        }));
    }
}
