use std::net::{AddrParseError, IpAddr, SocketAddr};

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "tsunagid",
    version = env!("CARGO_PKG_VERSION"),
    about = "OAuth 2.0 authorization-code server for voice-assistant account linking"
)]
pub struct Options {
    /// Port to listen on.
    #[clap(long, env = "PORT", default_value = "3000")]
    pub port: u16,
    /// Interface to listen on.
    #[clap(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: String,
    /// Public base URL of this server. Defaults to http://localhost:<PORT>.
    #[clap(long, env = "HOST")]
    pub host: Option<String>,
    /// Registered clients as comma-separated client_id:client_secret pairs.
    #[clap(long, env = "CLIENTS", default_value = "alexa-button-skill:secret")]
    pub clients: String,
    /// Lifetime of authorization codes, also reported as expires_in for
    /// access tokens.
    #[clap(long, env = "CODE_TTL_SECS", default_value = "3600")]
    pub code_ttl_secs: u64,
    /// Period of the expired-code sweeper; 0 disables it.
    #[clap(long, env = "CLEAN_UP_INTERVAL_SECS", default_value = "15")]
    pub clean_up_interval_secs: u64,
}

impl Options {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.bind_address.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn public_url(&self) -> String {
        self.host
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_public_url_follows_port() {
        let options = Options::try_parse_from(&["tsunagid"]).expect("defaults parse");

        assert_eq!(
            options.socket_addr().map(|a| a.port()),
            Ok(options.port)
        );
        if options.host.is_none() {
            assert_eq!(options.public_url(), format!("http://localhost:{}", options.port));
        }
    }

    #[test]
    fn flags_override_defaults() {
        let options = Options::try_parse_from(&[
            "tsunagid",
            "--port",
            "8080",
            "--bind-address",
            "127.0.0.1",
            "--host",
            "https://link.example.com",
            "--clients",
            "a:b",
        ])
        .expect("flags parse");

        assert_eq!(
            options.socket_addr(),
            Ok("127.0.0.1:8080".parse::<SocketAddr>().expect("addr"))
        );
        assert_eq!(options.public_url(), "https://link.example.com");
        assert_eq!(options.clients, "a:b");
    }
}
