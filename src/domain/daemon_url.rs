//! Usage: Build the daemon web UI URL from connection settings.

use super::connection::ConnectionSettings;

const HTTP_SCHEME: &str = "http://";
const HTTPS_SCHEME: &str = "https://";

/// `{scheme}{host}:{port}`; the host is passed through unvalidated and no path is appended.
pub fn daemon_url(settings: &ConnectionSettings) -> String {
    let scheme = if settings.tls_enabled {
        HTTPS_SCHEME
    } else {
        HTTP_SCHEME
    };
    format!("{scheme}{}:{}", settings.host, settings.port)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(host: &str, port: u16, tls_enabled: bool) -> ConnectionSettings {
        ConnectionSettings {
            host: host.to_string(),
            port,
            tls_enabled,
        }
    }

    #[test]
    fn plain_http_without_tls() {
        assert_eq!(daemon_url(&conn("localhost", 11987, false)), "http://localhost:11987");
    }

    #[test]
    fn https_with_tls() {
        assert_eq!(daemon_url(&conn("daemon.lan", 443, true)), "https://daemon.lan:443");
    }

    #[test]
    fn scheme_follows_tls_flag_for_any_host_and_port() {
        for host in ["127.0.0.1", "::1", "my-host", ""] {
            for port in [1_u16, 80, 11987, 65535] {
                let plain = daemon_url(&conn(host, port, false));
                let secure = daemon_url(&conn(host, port, true));
                assert_eq!(plain, format!("http://{host}:{port}"));
                assert_eq!(secure, format!("https://{host}:{port}"));
            }
        }
    }
}
