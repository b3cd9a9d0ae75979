use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use crate::error::ConfigError;

/// Resolve this machine's own address: read the local hostname from the OS,
/// then ask the system resolver for it. Any failure here is fatal to
/// configuration loading; there is no retry and no fallback address.
pub fn local_host_addr() -> Result<IpAddr, ConfigError> {
    let name = hostname::get()
        .map_err(ConfigError::Hostname)?
        .to_string_lossy()
        .into_owned();

    addr_of(&name)
}

/// First address the system resolver returns for `host`. IPv4 is preferred
/// when present: the address is spliced into a URL without bracket quoting.
pub(crate) fn addr_of(host: &str) -> Result<IpAddr, ConfigError> {
    // The resolver wants a socket address; the port half is discarded.
    let addrs: Vec<SocketAddr> = (host, 0u16)
        .to_socket_addrs()
        .map_err(|source| ConfigError::Resolve {
            host: host.to_string(),
            source,
        })?
        .collect();

    addrs
        .iter()
        .find(|addr| addr.ip().is_ipv4())
        .or_else(|| addrs.first())
        .map(|addr| addr.ip())
        .ok_or_else(|| ConfigError::NoAddress(host.to_string()))
}
