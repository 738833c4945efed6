use crate::errors::AppError;
use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Joins a request path onto `root`, refusing anything that could leave it.
pub fn resolve(root: &Path, request: &str) -> Option<PathBuf> {
    let relative = Path::new(request);
    let mut resolved = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if resolved == root {
        return None;
    }
    Some(resolved)
}

pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("txt") => "text/plain; charset=utf-8",
        Some("zip") => "application/zip",
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        _ => "application/octet-stream",
    }
}

/// Serves a file from the web root with caching disabled, so a refreshed
/// burst list or image is picked up on the next load.
pub async fn serve(root: &Path, request: &str) -> Result<Response, AppError> {
    let Some(path) = resolve(root, request) else {
        debug!("rejected static path {request}");
        return Err(AppError::not_found());
    };

    let bytes = fs::read(&path).await?;
    Ok((
        [
            (header::CONTENT_TYPE, content_type(&path)),
            (header::CACHE_CONTROL, NO_CACHE),
            (header::EXPIRES, "0"),
        ],
        bytes,
    )
        .into_response())
}
