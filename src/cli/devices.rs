use tabled::Table;

use crate::{
    cli::{load_token_manager, spinner},
    error, spotify,
    types::DeviceTableRow,
    warning,
};

pub async fn list_devices() {
    let mut token_mgr = load_token_manager().await;
    let token = token_mgr.get_valid_token().await;

    let pb = spinner("Fetching devices...");
    let devices = match spotify::player::get_devices(&token).await {
        Ok(devices) => devices,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch devices: {}", e);
        }
    };
    pb.finish_and_clear();

    if devices.is_empty() {
        warning!("No devices found. Open Spotify on the device you want to play on.");
        return;
    }

    let rows: Vec<DeviceTableRow> = devices
        .into_iter()
        .map(|d| DeviceTableRow {
            id: d.id.unwrap_or_else(|| "-".to_string()),
            name: d.name,
            kind: d.kind,
            active: String::from(if d.is_active { "yes" } else { "" }),
        })
        .collect();

    println!("{}", Table::new(rows));
}
