use thiserror::Error;

/// Failures that abort configuration loading. Malformed environment values
/// are not in this taxonomy: they default or pass through uninterpreted and
/// surface later, inside the framework that consumes the record.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read local hostname: {0}")]
    Hostname(#[source] std::io::Error),

    #[error("Failed to resolve host {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Host {0} resolved to no addresses")]
    NoAddress(String),

    #[error("Runtime configuration is already installed")]
    AlreadyInstalled,
}
