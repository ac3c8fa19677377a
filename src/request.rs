use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChannelKind, Error};

/// Folder roots for the telemetry feeds of one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryFeeds {
    pub camera_feeds_image_folders: Vec<String>,
    pub camera_feeds_video_folders: Vec<String>,
    pub gimbals_folder: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geolocation_folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_strength_folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_folder: Option<String>,
}

/// One input or output channel: an id and the folder JSON records move through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub json_folder: String,
}

/// The host's job description, read once from the request file at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub org_profile_file: String,
    #[serde(default)]
    pub job_param_file: String,
    #[serde(default)]
    pub user_profile_file: String,
    pub telemetry_feeds: Vec<TelemetryFeeds>,
    pub input_channels: Vec<Channel>,
    pub output_channels: Vec<Channel>,
}

impl PluginRequest {
    /// Parse the request file the host wrote for this job.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Folder of the input channel with numeric id `idx`.
    pub fn input_channel_folder(&self, idx: u32) -> Result<&Path, Error> {
        channel_folder(&self.input_channels, idx, ChannelKind::Input)
    }

    /// Folder of the output channel with numeric id `idx`.
    pub fn output_channel_folder(&self, idx: u32) -> Result<&Path, Error> {
        channel_folder(&self.output_channels, idx, ChannelKind::Output)
    }
}

fn channel_folder(channels: &[Channel], idx: u32, kind: ChannelKind) -> Result<&Path, Error> {
    let id = idx.to_string();
    channels
        .iter()
        .find(|c| c.id == id)
        .map(|c| Path::new(c.json_folder.as_str()))
        .ok_or(Error::ChannelNotFound { kind, id })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = r#"{
        "id": "job-7",
        "orgProfileFile": "/profiles/org.json",
        "jobParamFile": "/profiles/job.json",
        "userProfileFile": "/profiles/user.json",
        "telemetryFeeds": [{
            "cameraFeedsImageFolders": ["/telemetry/cam0/images"],
            "cameraFeedsVideoFolders": [],
            "gimbalsFolder": ["/telemetry/gimbal0"],
            "batteryFolder": "/telemetry/battery0"
        }],
        "inputChannels": [{"id": "0", "jsonFolder": "/channels/in/0"}],
        "outputChannels": [
            {"id": "0", "jsonFolder": "/channels/out/0"},
            {"id": "1", "jsonFolder": "/channels/out/1"}
        ]
    }"#;

    #[test]
    fn loads_request_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(&path, REQUEST).unwrap();

        let request = PluginRequest::load(&path).unwrap();
        assert_eq!(request.id, "job-7");
        assert_eq!(request.telemetry_feeds.len(), 1);
        let feeds = &request.telemetry_feeds[0];
        assert_eq!(feeds.battery_folder.as_deref(), Some("/telemetry/battery0"));
        assert!(feeds.geolocation_folder.is_none());
    }

    #[test]
    fn channel_lookup_by_numeric_id() {
        let request: PluginRequest = serde_json::from_str(REQUEST).unwrap();
        assert_eq!(
            request.input_channel_folder(0).unwrap(),
            Path::new("/channels/in/0")
        );
        assert_eq!(
            request.output_channel_folder(1).unwrap(),
            Path::new("/channels/out/1")
        );
    }

    #[test]
    fn missing_channel_is_an_error() {
        let request: PluginRequest = serde_json::from_str(REQUEST).unwrap();
        let err = request.input_channel_folder(9).unwrap_err();
        assert!(err.to_string().contains("input channel 9"));
    }

    #[test]
    fn absent_optional_feeds_stay_absent_on_output() {
        let request: PluginRequest = serde_json::from_str(REQUEST).unwrap();
        let out = crate::json::to_compact_json(&request).unwrap();
        assert!(!out.contains("geolocationFolder"));
        assert!(out.contains("batteryFolder"));
    }
}
