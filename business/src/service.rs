//! Boundary to the external users service.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use log::{error, info};
use roster_states::{State, state_assign_impl};

use crate::{BusinessConfig, FetchError, User, UserListing, UsersPageResponse};

/// Receives the outcome of one fetch cycle, possibly on another thread.
pub type FetchUsersCallback = Box<dyn FnOnce(Result<UserListing, FetchError>) + Send + 'static>;

pub trait UserService: Send + Sync + Debug {
    /// Fetch the whole user collection and report it through `on_done` exactly once.
    fn fetch_all_users(&self, on_done: FetchUsersCallback);
}

/// Upper bound on followed pages, in case the server keeps reporting more.
const MAX_PAGES: u32 = 1000;

/// Talks to a reqres-style `GET {api_url}/users?page=N` endpoint.
///
/// Pages are fetched one after another and concatenated; the page size of
/// the first page is reported as the listing's `per_page`.
#[derive(Debug, Clone)]
pub struct HttpUserService {
    api_url: String,
    api_key: Option<String>,
}

impl HttpUserService {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: None,
        }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self {
            api_url: config.api_url().to_string(),
            api_key: config.api_key().map(str::to_owned),
        }
    }

    fn fetch_page(
        self,
        page: u32,
        mut users: Vec<User>,
        per_page: Option<usize>,
        on_done: FetchUsersCallback,
    ) {
        let url = format!("{}/users?page={page}", self.api_url);
        let mut request = ehttp::Request::get(&url);
        if let Some(api_key) = &self.api_key {
            request.headers.insert("x-api-key", api_key);
        }

        ehttp::fetch(request, move |result| {
            let response = match decode_page(result) {
                Ok(response) => response,
                Err(err) => {
                    error!("Fetching {url} failed: {err}");
                    on_done(Err(err));
                    return;
                }
            };

            let per_page = per_page.unwrap_or(response.per_page);
            let has_more = page < response.total_pages
                && !response.data.is_empty()
                && page < MAX_PAGES;
            users.extend(response.data);

            if has_more {
                self.fetch_page(page + 1, users, Some(per_page), on_done);
            } else {
                info!("Fetched {} users over {page} page(s)", users.len());
                on_done(Ok(UserListing { users, per_page }));
            }
        });
    }
}

impl UserService for HttpUserService {
    fn fetch_all_users(&self, on_done: FetchUsersCallback) {
        self.clone().fetch_page(1, Vec::new(), None, on_done);
    }
}

fn decode_page(result: ehttp::Result<ehttp::Response>) -> Result<UsersPageResponse, FetchError> {
    let response = result.map_err(FetchError::Network)?;
    if !(200..300).contains(&response.status) {
        return Err(FetchError::Status(response.status));
    }
    Ok(serde_json::from_slice(&response.bytes)?)
}

/// The registered users service, shared with in-flight commands.
#[derive(Debug, Clone)]
pub struct UserServiceState {
    pub inner: Arc<dyn UserService>,
}

impl UserServiceState {
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self { inner: service }
    }
}

impl State for UserServiceState {
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

#[cfg(any(test, feature = "test-utils"))]
pub use mock::{MockReply, MockUserService, sample_users};

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::collections::VecDeque;
    use std::fmt::{Debug, Formatter};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use super::{FetchUsersCallback, UserService};
    use crate::{FetchError, User, UserListing};

    /// What the mock does with the next fetch.
    #[derive(Debug, Clone)]
    pub enum MockReply {
        /// Answer synchronously with this listing.
        Users(UserListing),
        /// Answer synchronously with a network error.
        Fail(String),
        /// Keep the callback until the test completes it.
        Hold,
    }

    /// In-process [`UserService`]. Replies are consumed in order; once they
    /// run out, fetches are held.
    #[derive(Default)]
    pub struct MockUserService {
        replies: Mutex<VecDeque<MockReply>>,
        held: Mutex<Vec<FetchUsersCallback>>,
        calls: AtomicUsize,
    }

    impl Debug for MockUserService {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("MockUserService")
                .field("calls", &self.calls())
                .field("held", &self.held())
                .finish_non_exhaustive()
        }
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    impl MockUserService {
        pub fn new(replies: impl IntoIterator<Item = MockReply>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().collect()),
                ..Self::default()
            }
        }

        /// Number of fetches issued so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Number of fetches waiting for `complete_held`.
        pub fn held(&self) -> usize {
            lock(&self.held).len()
        }

        /// Resolve the `index`-th held fetch (in issue order). Returns `false`
        /// if there is no such fetch.
        pub fn complete_held(&self, index: usize, result: Result<UserListing, FetchError>) -> bool {
            let callback = {
                let mut held = lock(&self.held);
                if index >= held.len() {
                    return false;
                }
                held.remove(index)
            };
            callback(result);
            true
        }
    }

    impl UserService for MockUserService {
        fn fetch_all_users(&self, on_done: FetchUsersCallback) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let reply = lock(&self.replies).pop_front().unwrap_or(MockReply::Hold);
            match reply {
                MockReply::Users(listing) => on_done(Ok(listing)),
                MockReply::Fail(message) => on_done(Err(FetchError::Network(message))),
                MockReply::Hold => lock(&self.held).push(on_done),
            }
        }
    }

    /// `count` users named `User{i} Sample`, ids starting at 1.
    pub fn sample_users(count: u64) -> Vec<User> {
        (1..=count)
            .map(|id| User {
                id,
                first_name: format!("User{id}"),
                last_name: "Sample".to_owned(),
                avatar: String::new(),
                email: Some(format!("user{id}@example.com")),
            })
            .collect()
    }
}
