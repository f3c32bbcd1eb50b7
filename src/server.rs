use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    Res, api, info, success, warning,
    ytmusic::{MusicService, YtMusicClient},
};

/// Builds the router around one shared music service client.
pub fn make_app(service: Arc<dyn MusicService>) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/api/auth", post(api::authenticate))
        .route("/api/auth/check", post(api::check_auth))
        .route("/api/playlist", post(api::create_playlist))
        .layer(Extension(service))
}

pub async fn start_api_server(addr: String, open_browser: bool) -> Res<()> {
    let addr = SocketAddr::from_str(&addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", addr, e))?;

    let app = make_app(Arc::new(YtMusicClient::from_env()));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let url = format!("http://{}", listener.local_addr()?);
    success!("Festival Playlist Generator listening on {}", url);

    if open_browser {
        info!("Opening {} in your browser", url);
        if webbrowser::open(&url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
