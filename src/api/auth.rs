use std::sync::Arc;

use axum::{Extension, response::Json};

use super::ApiError;
use crate::{
    auth, success,
    types::{AuthCheckForm, AuthForm, StoredAuth},
    warning,
    ytmusic::MusicService,
};

/// Accepts freshly pasted headers and returns the blob to keep in the browser.
pub async fn authenticate(
    Extension(service): Extension<Arc<dyn MusicService>>,
    Json(form): Json<AuthForm>,
) -> Result<Json<StoredAuth>, ApiError> {
    let creds = auth::parse_credentials(&form.auth_json)?;
    match auth::verify(service.as_ref(), &creds).await {
        Ok(stored) => {
            success!("Authentication successful");
            Ok(Json(stored))
        }
        Err(e) => {
            warning!("Authentication test failed: {}", e);
            Err(e.into())
        }
    }
}

/// Re-checks a blob the browser already holds and refreshes its timestamp.
pub async fn check_auth(
    Extension(service): Extension<Arc<dyn MusicService>>,
    Json(form): Json<AuthCheckForm>,
) -> Result<Json<StoredAuth>, ApiError> {
    let creds = auth::decode_credentials(&form.auth)?;
    let stored = auth::verify(service.as_ref(), &creds).await?;
    Ok(Json(stored))
}
