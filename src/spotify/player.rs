use reqwest::StatusCode;

use crate::{
    Res, config,
    spotify::{client, send},
    types::{Device, DevicesResponse, PlayRequest},
};

/// Maximum number of URIs the play endpoint accepts in one request.
pub const PLAYBACK_URI_LIMIT: usize = 100;

/// The leading part of `uris` that fits into one play request.
pub fn playback_uris(uris: &[String]) -> &[String] {
    &uris[..uris.len().min(PLAYBACK_URI_LIMIT)]
}

/// Lists the devices currently available for playback.
pub async fn get_devices(token: &str) -> Result<Vec<Device>, reqwest::Error> {
    let api_url = format!("{uri}/me/player/devices", uri = &config::spotify_apiurl());
    let response = send(|| client().get(&api_url).bearer_auth(token))
        .await?
        .error_for_status()?;

    Ok(response.json::<DevicesResponse>().await?.devices)
}

/// Sets the device's own shuffle state.
///
/// Player endpoints are reserved to premium accounts, so the answer doubles
/// as a premium check: `Ok(true)` on 204, `Ok(false)` on 403.
///
/// # Errors
///
/// Any other status code is reported as an error.
pub async fn set_playback_shuffle(token: &str, device_id: &str, enabled: bool) -> Res<bool> {
    let api_url = format!(
        "{uri}/me/player/shuffle?device_id={device_id}&state={state}",
        uri = &config::spotify_apiurl(),
        device_id = device_id,
        state = enabled
    );
    let response = send(|| client().put(&api_url).bearer_auth(token).body("")).await?;

    match response.status() {
        StatusCode::NO_CONTENT | StatusCode::OK => Ok(true),
        StatusCode::FORBIDDEN => Ok(false),
        status => Err(format!("Invalid HTTP Status Code {}", status).into()),
    }
}

/// Starts playback of `uris` on the given device, in the given order.
///
/// Only the first [`PLAYBACK_URI_LIMIT`] URIs are sent.
pub async fn play_tracks(token: &str, device_id: &str, uris: &[String]) -> Res<()> {
    let api_url = format!(
        "{uri}/me/player/play?device_id={device_id}",
        uri = &config::spotify_apiurl(),
        device_id = device_id
    );
    let body = PlayRequest {
        uris: playback_uris(uris).to_vec(),
    };

    let response = send(|| client().put(&api_url).bearer_auth(token).json(&body)).await?;
    match response.status() {
        StatusCode::NO_CONTENT | StatusCode::OK | StatusCode::ACCEPTED => Ok(()),
        status => Err(format!("Invalid HTTP Status Code {}", status).into()),
    }
}
