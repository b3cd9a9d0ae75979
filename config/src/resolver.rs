use std::env;
use std::net::IpAddr;

use dotenv::dotenv;
use log::{info, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::error::ConfigError;
use crate::net;
use crate::plugin::{Plugin, DEFAULT_PLUGINS};

/// Application display name handed to the framework.
pub const APP_NAME: &str = "StepDaddyLiveHD";

/// Backend API port used by development deployments.
const DEV_API_PORT: u16 = 8000;
/// Fallback for PORT in PORT-driven deployments.
const DEFAULT_PORT: &str = "3000";
/// Fallback for API_URL.
const DEFAULT_API_URL: &str = "http://";

/// The resolved startup configuration, in the exact shape the framework's
/// configuration loader consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_url: String,
    pub app_name: String,
    pub proxy_content: bool,
    pub socks5: String,
    pub show_built_with_reflex: bool,
    pub plugins: Vec<Plugin>,
}

static INSTALLED: OnceCell<RuntimeConfig> = OnceCell::new();

impl RuntimeConfig {
    /// Resolve the runtime configuration from the process environment.
    ///
    /// Loads an optional `.env` file, picks the deployment environment from
    /// `RUST_ENV`, resolves this machine's own address, and derives the
    /// remaining fields from `PROXY_CONTENT`, `SOCKS5`, `API_URL` and `PORT`.
    /// Reports the resolved proxy settings on standard output.
    pub fn resolve() -> Result<Self, ConfigError> {
        dotenv().ok();

        let environment = Environment::from_process_env();
        info!("Loading configuration for environment: {:?}", environment);
        if environment == Environment::Development {
            warn!("Running in development mode - using the fixed development API port");
        }

        let host = net::local_host_addr()?;
        let config = Self::resolve_for(&environment, host);

        println!(
            "PROXY_CONTENT: {}\nSOCKS5: {}",
            config.proxy_content, config.socks5
        );
        config.log_configuration();

        Ok(config)
    }

    /// Derive every field from the process environment, with the host
    /// address supplied by the caller.
    pub(crate) fn resolve_for(environment: &Environment, host: IpAddr) -> Self {
        let proxy_content = proxy_content_flag(env::var("PROXY_CONTENT").ok().as_deref());
        let socks5 = socks_endpoint(
            environment,
            env::var("SOCKS5").ok().as_deref(),
            env::var("API_URL").ok().as_deref(),
        );
        let api_url = api_url_for(environment, host, env::var("PORT").ok().as_deref());

        RuntimeConfig {
            api_url,
            app_name: APP_NAME.to_string(),
            proxy_content,
            socks5,
            show_built_with_reflex: false,
            plugins: DEFAULT_PLUGINS.to_vec(),
        }
    }

    fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("App: {}", self.app_name);
        info!("API URL: {}", self.api_url);
        info!(
            "Content proxy: {} (SOCKS endpoint: {:?})",
            self.proxy_content, self.socks5
        );
        info!(
            "Plugins: {}",
            self.plugins
                .iter()
                .map(|plugin| plugin.id())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

/// PROXY_CONTENT compared case-insensitively against "TRUE"; absence means
/// the literal default string "TRUE", so the proxy is on unless the variable
/// says otherwise.
pub(crate) fn proxy_content_flag(raw: Option<&str>) -> bool {
    raw.unwrap_or("TRUE").to_uppercase() == "TRUE"
}

/// SOCKS5 is read first in every deployment. Development then reads API_URL
/// and keeps that value unconditionally, so there API_URL wins even when
/// SOCKS5 is set.
pub(crate) fn socks_endpoint(
    environment: &Environment,
    socks5: Option<&str>,
    api_url: Option<&str>,
) -> String {
    let mut endpoint = socks5.unwrap_or("").to_string();
    if *environment == Environment::Development {
        endpoint = api_url.unwrap_or(DEFAULT_API_URL).to_string();
    }
    endpoint
}

/// Compose the reachable API base URL. Development pins the backend port;
/// Production splices the raw PORT string in without parsing it, so a
/// malformed port surfaces later, inside the framework.
pub(crate) fn api_url_for(environment: &Environment, host: IpAddr, port: Option<&str>) -> String {
    match environment {
        Environment::Development => format!("http://{}:{}", host, DEV_API_PORT),
        Environment::Production => {
            format!("http://{}:{}", host, port.unwrap_or(DEFAULT_PORT))
        }
    }
}

/// Install the resolved configuration as process-wide state. The record can
/// be installed exactly once; later callers read it through [`installed`].
pub fn install(config: RuntimeConfig) -> Result<(), ConfigError> {
    INSTALLED
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)
}

/// The process-wide configuration, if [`install`] has run.
pub fn installed() -> Option<&'static RuntimeConfig> {
    INSTALLED.get()
}
