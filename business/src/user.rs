//! User records as served by the users endpoint.

use serde::{Deserialize, Serialize};

/// A user record. Read-only on the client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    /// Up to two uppercase initials, used when there is no avatar.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|name| name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The full user collection produced by one fetch cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListing {
    pub users: Vec<User>,
    /// Page size suggested by the service.
    pub per_page: usize,
}

impl UserListing {
    pub fn find(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}

/// One page of `GET /users?page=N`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersPageResponse {
    pub page: u32,
    pub per_page: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub total_pages: u32,
    pub data: Vec<User>,
}
