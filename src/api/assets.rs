use axum::{
    body::Body,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static"]
struct Asset;

fn respond(path: &str) -> Option<Response> {
    let content = Asset::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(([(header::CONTENT_TYPE, mime.as_ref())], Body::from(content.data)).into_response())
}

/// Serves the bundled UI; unknown paths get `index.html`.
pub async fn serve_asset(uri: Uri) -> Response {
    let path = match uri.path().trim_start_matches('/') {
        "" => "index.html",
        other => other,
    };

    respond(path)
        .or_else(|| respond("index.html"))
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, "404 Not Found").into_response())
}
