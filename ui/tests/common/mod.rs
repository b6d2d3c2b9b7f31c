use std::time::Duration;

use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Upper bound on frames spent waiting for the mock server.
pub const MAX_FRAMES: usize = 200;
pub const FRAME_WAIT_MS: u64 = 10;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    /// App talking to a server that serves `count` users, `per_page` per page.
    pub async fn new_app_with_users(count: u64, per_page: u64) -> Self {
        let mock_server = MockServer::start().await;
        mount_users(&mock_server, count, per_page).await;
        Self::with_server(mock_server)
    }

    /// Like [`Self::new_app_with_users`], but every response is held back
    /// for `delay`, so the pending state is observable.
    #[allow(unused)]
    pub async fn new_app_with_slow_users(count: u64, per_page: u64, delay: Duration) -> Self {
        let mock_server = MockServer::start().await;
        mount_users_with_delay(&mock_server, count, per_page, delay).await;
        Self::with_server(mock_server)
    }

    /// App talking to a server that answers every request with `status_code`.
    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&mock_server)
            .await;
        Self::with_server(mock_server)
    }

    fn with_server(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = RosterApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Requests received so far for the users endpoint.
    #[allow(unused)]
    pub async fn users_requests(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == "/api/users")
            .count()
    }

    /// Steps frames until `condition` holds, giving the HTTP thread time in
    /// between. Returns whether the condition was met.
    pub async fn step_until(
        &mut self,
        mut condition: impl FnMut(&Harness<'a, RosterApp>) -> bool,
    ) -> bool {
        for _ in 0..MAX_FRAMES {
            self.harness.step();
            if condition(&self.harness) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(FRAME_WAIT_MS)).await;
        }
        false
    }
}

/// Serves `count` users over `ceil(count / per_page)` pages.
pub async fn mount_users(server: &MockServer, count: u64, per_page: u64) {
    mount_users_with_delay(server, count, per_page, Duration::ZERO).await;
}

pub async fn mount_users_with_delay(
    server: &MockServer,
    count: u64,
    per_page: u64,
    delay: Duration,
) {
    let total_pages = count.div_ceil(per_page).max(1);

    for page in 1..=total_pages {
        let first = (page - 1) * per_page + 1;
        let last = (page * per_page).min(count);
        let data: Vec<_> = (first..=last)
            .map(|id| {
                json!({
                    "id": id,
                    "email": format!("user{id}@reqres.in"),
                    "first_name": format!("First{id}"),
                    "last_name": format!("Last{id}"),
                    "avatar": "",
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_delay(delay).set_body_json(json!({
                "page": page,
                "per_page": per_page,
                "total": count,
                "total_pages": total_pages,
                "data": data,
            })))
            .mount(server)
            .await;
    }
}
