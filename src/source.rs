use crate::errors::BurstListError;
use crate::models::BurstList;
use std::path::PathBuf;
use std::time::Duration;
use tokio::{fs, time};

pub const BURSTLIST_PATH: &str = "ecallisto-plugins/burstlist.json";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub enum Origin {
    File(PathBuf),
    Http { client: reqwest::Client, url: String },
}

/// Where the burst list is read from on every render. A fetch that does not
/// finish within `timeout` fails like any other.
#[derive(Debug, Clone)]
pub struct BurstListSource {
    pub origin: Origin,
    pub timeout: Duration,
}

impl BurstListSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn http(url: impl Into<String>) -> Self {
        Self {
            origin: Origin::Http {
                client: reqwest::Client::new(),
                url: url.into(),
            },
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn describe(&self) -> String {
        match &self.origin {
            Origin::File(path) => path.display().to_string(),
            Origin::Http { url, .. } => url.clone(),
        }
    }

    pub async fn fetch(&self) -> Result<BurstList, BurstListError> {
        let bytes = time::timeout(self.timeout, self.read_body())
            .await
            .map_err(|_| BurstListError::Timeout(self.timeout))??;

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn read_body(&self) -> Result<Vec<u8>, BurstListError> {
        match &self.origin {
            Origin::File(path) => Ok(fs::read(path).await?),
            Origin::Http { client, url } => {
                let response = client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(BurstListError::Status(status.as_u16()));
                }
                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("robust_page_{}_{}_{name}", std::process::id(), nanos));
        path
    }

    async fn serve_stub(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}/burstlist.json")
    }

    #[tokio::test]
    async fn file_source_reads_typed_list() {
        let path = temp_path("burstlist.json");
        let body = serde_json::json!({
            "last_update": "2024-02-13 10:00",
            "newest_file": "GRAZ_20240213_0945.fit",
            "txt_filename": "ROBUST_Graz_2024_02_13.txt",
            "bursts": [{
                "time": "09:41",
                "type": "III",
                "name": "20240213_0941",
                "stations": [{ "name": "Graz", "file": "graz.png" }]
            }]
        });
        fs::write(&path, body.to_string()).await.unwrap();

        let list = BurstListSource::file(&path).fetch().await.unwrap();
        assert_eq!(list.bursts.len(), 1);
        assert_eq!(list.bursts[0].kind, "III");
        assert_eq!(list.bursts[0].stations[0].file, "graz.png");

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn missing_field_is_a_parse_error() {
        let path = temp_path("partial.json");
        fs::write(&path, r#"{"last_update": "x", "bursts": []}"#)
            .await
            .unwrap();

        let err = BurstListSource::file(&path).fetch().await.unwrap_err();
        assert!(matches!(err, BurstListError::Parse(_)));

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = BurstListSource::file(temp_path("absent.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, BurstListError::Io(_)));
    }

    #[tokio::test]
    async fn http_source_reads_typed_list() {
        let app = Router::new().route(
            "/burstlist.json",
            get(|| async {
                r#"{"last_update":"u","newest_file":"n","txt_filename":"t","bursts":[]}"#
            }),
        );
        let url = serve_stub(app).await;

        let list = BurstListSource::http(url).fetch().await.unwrap();
        assert_eq!(list.txt_filename, "t");
        assert!(list.bursts.is_empty());
    }

    #[tokio::test]
    async fn http_error_status_is_reported() {
        let app = Router::new().route(
            "/burstlist.json",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let url = serve_stub(app).await;

        let err = BurstListSource::http(url).fetch().await.unwrap_err();
        assert!(matches!(err, BurstListError::Status(503)));
    }

    #[tokio::test]
    async fn refused_connection_is_an_http_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = BurstListSource::http(format!("http://{addr}/burstlist.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, BurstListError::Http(_)));
    }

    #[tokio::test]
    async fn silent_upstream_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        let started = std::time::Instant::now();
        let err = BurstListSource::http(format!("http://{addr}/burstlist.json"))
            .with_timeout(Duration::from_millis(200))
            .fetch()
            .await
            .unwrap_err();

        assert!(matches!(err, BurstListError::Timeout(_)));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
