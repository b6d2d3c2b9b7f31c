//! View state of the paginated user listing.

use std::any::{Any, TypeId};

use roster_states::{
    Compute, ComputeDeps, Dep, State, Updater, assign_impl, state_assign_impl,
};

use crate::{FetchUsersCompute, Pagination, User};

/// Current page of the listing, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingPage {
    page: usize,
}

impl Default for ListingPage {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl ListingPage {
    pub fn page(&self) -> usize {
        self.page
    }

    /// Move to `page`, clamped to `1..=total_pages`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }
}

impl State for ListingPage {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Rows of the current page, derived from the fetched listing and [`ListingPage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPageCompute {
    pagination: Pagination,
    rows: Vec<User>,
}

impl UserPageCompute {
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn rows(&self) -> &[User] {
        &self.rows
    }
}

impl Compute for UserPageCompute {
    fn deps(&self) -> ComputeDeps {
        const STATE_IDS: [TypeId; 1] = [TypeId::of::<ListingPage>()];
        const COMPUTE_IDS: [TypeId; 1] = [TypeId::of::<FetchUsersCompute>()];
        (&STATE_IDS, &COMPUTE_IDS)
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let page = deps.get_state_ref::<ListingPage>().page();
        let listing = deps
            .get_compute_ref::<FetchUsersCompute>()
            .listing();

        let next = match listing {
            Some(listing) => {
                let pagination =
                    Pagination::new(listing.users.len(), listing.per_page, page);
                Self {
                    pagination,
                    rows: pagination.slice(&listing.users).to_vec(),
                }
            }
            None => Self::default(),
        };

        if next != *self {
            updater.set(next);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
