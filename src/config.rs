//! Per-device configuration

use std::time::Duration;

/// Configuration applied to a single device.
///
/// A scan filter can attach one to an acknowledgement with [`Please::acknowledge_with`][crate::Please::acknowledge_with]
/// to override the framework-wide defaults for the device it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    /// Automatically try to reconnect after an unintentional disconnect
    pub auto_reconnect: bool,
    /// Use the platform's "auto connect" mode for every connection attempt instead of a direct connection
    pub always_use_autoconnect: bool,
    /// Give up on a connection attempt after this long, `None` to wait indefinitely
    pub connect_timeout: Option<Duration>,
    /// Mark the device undiscovered when it has not been seen for this long, `None` to never undiscover it
    pub undiscovery_keep_alive: Option<Duration>,
    /// Poll the signal strength of a connected device at this rate, `None` to disable polling
    pub rssi_auto_poll_rate: Option<Duration>,
    /// A scan must run for at least this long before devices that were not seen are undiscovered
    pub min_scan_time_to_undiscover: Duration,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            auto_reconnect: true,
            always_use_autoconnect: false,
            connect_timeout: Some(Duration::from_secs(10)),
            undiscovery_keep_alive: None,
            rssi_auto_poll_rate: None,
            min_scan_time_to_undiscover: Duration::from_secs(5),
        }
    }
}

impl DeviceConfig {
    /// Sets [`auto_reconnect`][DeviceConfig::auto_reconnect].
    pub fn with_auto_reconnect(mut self, auto_reconnect: bool) -> Self {
        self.auto_reconnect = auto_reconnect;
        self
    }

    /// Sets [`always_use_autoconnect`][DeviceConfig::always_use_autoconnect].
    pub fn with_always_use_autoconnect(mut self, always_use_autoconnect: bool) -> Self {
        self.always_use_autoconnect = always_use_autoconnect;
        self
    }

    /// Sets [`connect_timeout`][DeviceConfig::connect_timeout].
    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets [`undiscovery_keep_alive`][DeviceConfig::undiscovery_keep_alive].
    pub fn with_undiscovery_keep_alive(mut self, keep_alive: Option<Duration>) -> Self {
        self.undiscovery_keep_alive = keep_alive;
        self
    }

    /// Sets [`rssi_auto_poll_rate`][DeviceConfig::rssi_auto_poll_rate].
    pub fn with_rssi_auto_poll_rate(mut self, rate: Option<Duration>) -> Self {
        self.rssi_auto_poll_rate = rate;
        self
    }

    /// Sets [`min_scan_time_to_undiscover`][DeviceConfig::min_scan_time_to_undiscover].
    pub fn with_min_scan_time_to_undiscover(mut self, min: Duration) -> Self {
        self.min_scan_time_to_undiscover = min;
        self
    }
}
