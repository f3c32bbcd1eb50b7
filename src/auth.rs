use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Local, Utc};
use serde_json::Value;

use crate::{
    error::{Error, Result},
    types::{SessionCredentials, StoredAuth},
    ytmusic::MusicService,
};

/// Parses the pasted header JSON into credentials.
///
/// Both `authorization` and `cookie` must be present, be strings and be
/// non-empty. Any other keys the user copied along are ignored.
pub fn parse_credentials(auth_json: &str) -> Result<SessionCredentials> {
    let value: Value = serde_json::from_str(auth_json.trim())
        .map_err(|e| Error::InvalidAuthFormat(format!("not valid JSON ({})", e)))?;

    Ok(SessionCredentials {
        authorization: required_field(&value, "authorization")?,
        cookie: required_field(&value, "cookie")?,
    })
}

fn required_field(value: &Value, field: &str) -> Result<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidAuthFormat(format!("missing or empty \"{}\"", field)))
}

/// Encodes credentials the way the browser keeps them.
pub fn encode_credentials(creds: &SessionCredentials) -> Result<String> {
    let json = serde_json::to_string(creds)
        .map_err(|e| Error::InvalidAuthFormat(e.to_string()))?;
    Ok(STANDARD.encode(json))
}

pub fn decode_credentials(encoded: &str) -> Result<SessionCredentials> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| Error::InvalidAuthFormat(format!("stored authentication is corrupt ({})", e)))?;
    let json = String::from_utf8(bytes)
        .map_err(|e| Error::InvalidAuthFormat(format!("stored authentication is corrupt ({})", e)))?;
    parse_credentials(&json)
}

/// Formats an RFC 3339 timestamp in the server's local time zone, `Unknown`
/// when it does not parse.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => "Unknown".to_string(),
    }
}

/// Runs the session check; any failure means the credentials cannot be used.
pub async fn check(service: &dyn MusicService, creds: &SessionCredentials) -> Result<()> {
    service.check_session(creds).await.map_err(|e| match e {
        Error::AuthRejected(_) => e,
        other => Error::AuthRejected(other.to_string()),
    })
}

/// Checks the session against the music service with the given credentials and, when they work,
/// returns the encoded blob for the browser to keep.
pub async fn verify(service: &dyn MusicService, creds: &SessionCredentials) -> Result<StoredAuth> {
    check(service, creds).await?;

    let now = Utc::now().to_rfc3339();
    Ok(StoredAuth {
        auth: encode_credentials(creds)?,
        authenticated_at_display: format_timestamp(&now),
        authenticated_at: now,
    })
}
