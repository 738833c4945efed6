use crate::source::{BurstListSource, BURSTLIST_PATH, DEFAULT_FETCH_TIMEOUT};
use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub web_root: PathBuf,
    pub burstlist_url: Option<String>,
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let web_root = env::var("ROBUST_WEB_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("html"));

        let burstlist_url = env::var("ROBUST_BURSTLIST_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let fetch_timeout = env::var("ROBUST_FETCH_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT);

        Self {
            port,
            web_root,
            burstlist_url,
            fetch_timeout,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn burst_source(&self) -> BurstListSource {
        let source = match &self.burstlist_url {
            Some(url) => BurstListSource::http(url.clone()),
            None => BurstListSource::file(self.web_root.join(BURSTLIST_PATH)),
        };
        source.with_timeout(self.fetch_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Origin;

    fn config(burstlist_url: Option<&str>) -> Config {
        Config {
            port: DEFAULT_PORT,
            web_root: PathBuf::from("/srv/robust"),
            burstlist_url: burstlist_url.map(str::to_string),
            fetch_timeout: Duration::from_millis(750),
        }
    }

    #[test]
    fn file_source_lives_under_web_root() {
        let source = config(None).burst_source();
        match source.origin {
            Origin::File(path) => {
                assert_eq!(path, PathBuf::from("/srv/robust/ecallisto-plugins/burstlist.json"))
            }
            other => panic!("unexpected source {other:?}"),
        }
        assert_eq!(source.timeout, Duration::from_millis(750));
    }

    #[test]
    fn url_selects_http_source() {
        let config = config(Some("http://example.org/burstlist.json"));
        let source = config.burst_source();
        assert!(matches!(source.origin, Origin::Http { .. }));
        assert_eq!(source.timeout, Duration::from_millis(750));
        assert_eq!(config.addr().port(), 8000);
    }
}
