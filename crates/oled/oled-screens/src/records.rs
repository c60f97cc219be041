//! Plain data shown by the screen recipes
//!
//! With the `serde` feature these load from JSON, which is how `xtask render`
//! feeds sample data into screens.

/// A mesh node as shown on the node-info screen
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NodeInfo {
    /// Four-character handle
    pub short_name: String,
    /// Full node name
    pub long_name: String,
    /// Node id, e.g. `!a1b2c3d4`
    pub node_id: String,
    /// Remote battery level in percent
    pub battery_level: Option<u8>,
    /// Human-readable time since last packet
    pub last_heard: Option<String>,
    /// Signal-to-noise ratio of the last packet in dB
    pub snr: Option<f32>,
    /// Hops between us and the node (0 = direct)
    pub hops_away: Option<u32>,
}

/// A received text message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MessageInfo {
    /// Sender short name
    pub from: String,
    /// Message body
    pub text: String,
    /// Receive time as displayed
    pub time: String,
    /// Channel name, used as the header title when present
    pub channel: Option<String>,
}

/// GPS fix state
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GpsInfo {
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// Altitude in meters
    pub altitude: Option<f64>,
    /// Satellites in view
    pub satellites: Option<u32>,
    /// Whether the receiver has a position fix
    pub has_lock: bool,
    /// Ground speed in km/h
    pub speed: Option<f64>,
}

/// One row of the node list
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NodeSummary {
    /// Four-character handle
    pub short_name: String,
    /// Full node name
    pub long_name: String,
    /// Human-readable time since last packet
    pub last_heard: String,
    /// Signal-to-noise ratio in dB
    pub snr: Option<f32>,
}

/// Device health counters
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SystemInfo {
    /// Uptime as displayed
    pub uptime: String,
    /// Channel utilisation in percent
    pub channel_util: f32,
    /// Own airtime in percent
    pub air_util: f32,
    /// Battery voltage
    pub battery_voltage: Option<f32>,
    /// Known nodes
    pub nodes: u32,
    /// Free heap in bytes
    pub free_memory: Option<u32>,
}

/// Navigation target for the compass screen
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompassInfo {
    /// Device heading in degrees
    pub heading: f64,
    /// Bearing to the target in degrees
    pub bearing: f64,
    /// Distance to the target in meters
    pub distance: Option<f64>,
    /// Target name, used as the header title when present
    pub target_name: Option<String>,
}
