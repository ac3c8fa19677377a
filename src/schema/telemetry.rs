use std::path::Path;

use serde::{Deserialize, Serialize};

use super::geo::{Angular, GeoLocation};
use crate::error::Error;

/// Fields shared by every telemetry record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// A telemetry record dropped by the host into a telemetry stream folder.
///
/// The `iStreamType` discriminator selects the variant; it is fixed by the
/// variant itself and survives compact serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "iStreamType")]
pub enum Telemetry {
    #[serde(rename = "GIMBAL")]
    Gimbal(GimbalTelemetry),
    #[serde(rename = "BATTERY")]
    Battery(BatteryTelemetry),
    #[serde(rename = "GEOLOCATION")]
    Geolocation(GeolocationTelemetry),
    #[serde(rename = "SIGNAL_STRENGTH")]
    SignalStrength(SignalStrengthTelemetry),
}

impl Telemetry {
    /// Parse a telemetry record from a file dropped by the host.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn header(&self) -> &TelemetryHeader {
        match self {
            Telemetry::Gimbal(t) => &t.header,
            Telemetry::Battery(t) => &t.header,
            Telemetry::Geolocation(t) => &t.header,
            Telemetry::SignalStrength(t) => &t.header,
        }
    }
}

/// Current gimbal attitude.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GimbalTelemetry {
    #[serde(flatten)]
    pub header: TelemetryHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gimbal: Option<Angular>,
}

/// Battery state of charge and health.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryTelemetry {
    #[serde(flatten)]
    pub header: TelemetryHeader,
    #[serde(default)]
    pub percent: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_voltages: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_discharges: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_charge_capacity: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_capacity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
}

/// Current position and velocity of the vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeolocationTelemetry {
    #[serde(flatten)]
    pub header: TelemetryHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<GeoLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<GeoLocation>,
}

/// Link quality between vehicle and controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalStrengthTelemetry {
    #[serde(flatten)]
    pub header: TelemetryHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbm: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uplink: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downlink: Option<i32>,
}
