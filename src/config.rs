//! Command-line and environment configuration.

use clap::Parser;
use tokio::net::TcpListener;

/// OC Lettings - holiday lettings and user profiles over HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "oc-lettings")]
#[command(about = "OC Lettings - holiday lettings and user profiles over HTTP")]
#[command(version)]
pub struct Config {
    /// Interface to bind: an IP literal (`0.0.0.0`, `::1`) or a host name (`localhost`)
    #[arg(long, env = "OC_LETTINGS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "OC_LETTINGS_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Log filter directives (e.g. `info`, `oc_lettings=debug`)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    /// Request queue depth of each relation actor
    #[arg(long, env = "OC_LETTINGS_CHANNEL_BUFFER", default_value_t = 32,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub channel_buffer: u32,

    /// Load a small set of demo records at startup
    #[arg(long, env = "OC_LETTINGS_SEED_DEMO_DATA")]
    pub seed_demo_data: bool,
}

impl Config {
    /// `(host, port)` as given, resolved by the socket layer.
    pub fn listen_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Binds the HTTP listener, resolving the host if it is a name.
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind(self.listen_addr()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["oc-lettings"]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.channel_buffer, 32);
        assert!(!config.seed_demo_data);
        assert_eq!(config.listen_addr(), ("127.0.0.1", 8000));
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "oc-lettings",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--seed-demo-data",
        ])
        .unwrap();
        assert_eq!(config.listen_addr(), ("0.0.0.0", 9000));
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        assert!(Config::try_parse_from(["oc-lettings", "--channel-buffer", "0"]).is_err());
    }

    #[test]
    fn test_ipv6_literal_host_is_accepted() {
        use std::net::ToSocketAddrs;

        let config = Config::try_parse_from(["oc-lettings", "--host", "::1"]).unwrap();
        let addr = config.listen_addr().to_socket_addrs().unwrap().next().unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.port(), 8000);
    }

    #[tokio::test]
    async fn test_binds_a_host_name() {
        let config =
            Config::try_parse_from(["oc-lettings", "--host", "localhost", "--port", "0"]).unwrap();
        let listener = config.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
