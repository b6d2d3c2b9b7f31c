use std::sync::Arc;

use roster_business::{BusinessConfig, HttpUserService, UserService};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Whether the logout confirmation dialog is open.
    pub logout_dialog_open: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    /// State talking to the users endpoint described by `config`.
    pub fn new(config: BusinessConfig) -> Self {
        let service = Arc::new(HttpUserService::from_config(&config));
        Self::with_service(config, service)
    }

    pub fn with_service(config: BusinessConfig, service: Arc<dyn UserService>) -> Self {
        let mut ctx = StateCtx::new();
        roster_business::register(&mut ctx, config, service);

        Self {
            ctx,
            logout_dialog_open: false,
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }
}
