//! Route state for page navigation.

use roster_states::{State, state_assign_impl};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Represents the current page of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Paginated user listing.
    #[default]
    Users,
    /// Detail screen of one user, keyed by id.
    UserDetail(u64),
    /// Shown after the user confirmed logging out.
    SignedOut,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Users => "/users".to_owned(),
            Self::UserDetail(id) => format!("/details/user/{id}"),
            Self::SignedOut => "/signed-out".to_owned(),
        }
    }
}

impl State for Route {
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
