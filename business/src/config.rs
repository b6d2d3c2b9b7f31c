use log::info;
use roster_states::{State, state_assign_impl};
use serde::Deserialize;
use std::any::Any;
use ustr::Ustr;

/// Public reqres-compatible backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://reqres.in";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Sent as the `x-api-key` header when present.
    pub api_key: Option<String>,
}

/// Environment variables read by [`BusinessConfig::from_env`].
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_api_base_url: Option<String>,
    roster_api_key: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url.trim_end_matches('/')))
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Reads `ROSTER_API_BASE_URL` and `ROSTER_API_KEY`, loading `.env` first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> anyhow::Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            roster_api_base_url,
            roster_api_key,
        } = raw;

        let mut config = match roster_api_base_url {
            Some(base_url) => {
                info!("Using provided ROSTER_API_BASE_URL: {base_url}");
                Self::new(base_url)
            }
            None => Self::default(),
        };
        config.api_key = roster_api_key.filter(|key| !key.is_empty());
        config
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            // the web build is served next to its API
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                DEFAULT_API_BASE_URL.to_owned()
            },
            api_key: None,
        }
    }
}

impl State for BusinessConfig {
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
