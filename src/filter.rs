//! Scan filtering

use tracing::trace;

use crate::{DeviceConfig, ScanEvent};

/// Decides what to do with the devices found during a scan.
///
/// The scanning engine calls [`on_event`][ScanFilter::on_event] once for every qualifying advertisement and applies
/// the returned [`Please`]: the device is dropped unless the decision [acknowledges][Please::ack] it, an acknowledged
/// device gets the decision's [config override][Please::config] if there is one, and scanning halts when
/// [`then_stop_scan`][Please::then_stop_scan] was requested.
///
/// Any `FnMut(&ScanEvent) -> Please` closure is a `ScanFilter`.
pub trait ScanFilter {
    /// Inspects one advertisement and returns the decision for it.
    fn on_event(&mut self, event: &ScanEvent) -> Please;
}

impl<F> ScanFilter for F
where
    F: FnMut(&ScanEvent) -> Please,
{
    fn on_event(&mut self, event: &ScanEvent) -> Please {
        self(event)
    }
}

/// The decision a [`ScanFilter`] returns for one [`ScanEvent`].
///
/// Built with one of the constructors, optionally followed by [`then_stop_scan`][Please::then_stop_scan]:
///
/// ```
/// use bluest_state::{DeviceConfig, Please, ScanEvent};
///
/// fn filter(event: &ScanEvent) -> Please {
///     let is_ours = event.manufacturer_id() == 0x004c;
///     Please::acknowledge_if_with(is_ours, DeviceConfig::default().with_auto_reconnect(false))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a scan decision has no effect unless it is returned to the scanning engine"]
pub struct Please {
    ack: bool,
    stop_scan: bool,
    config: Option<DeviceConfig>,
}

impl Please {
    fn new(ack: bool, config: Option<DeviceConfig>) -> Self {
        Please {
            ack,
            stop_scan: false,
            config,
        }
    }

    /// Accept the device.
    pub fn acknowledge() -> Self {
        Please::new(true, None)
    }

    /// Accept the device and apply `config` to it instead of the framework defaults.
    pub fn acknowledge_with(config: DeviceConfig) -> Self {
        Please::new(true, Some(config))
    }

    /// Accept the device if `condition` holds, otherwise ignore it.
    pub fn acknowledge_if(condition: bool) -> Self {
        if condition {
            Please::acknowledge()
        } else {
            Please::ignore()
        }
    }

    /// Accept the device with `config` if `condition` holds, otherwise ignore it.
    pub fn acknowledge_if_with(condition: bool, config: DeviceConfig) -> Self {
        if condition {
            Please::acknowledge_with(config)
        } else {
            Please::ignore()
        }
    }

    /// Ignore the device.
    pub fn ignore() -> Self {
        Please::new(false, None)
    }

    /// Ignore the device if `condition` holds, otherwise accept it.
    ///
    /// The accepting branch never carries a config override; use
    /// [`acknowledge_if_with`][Please::acknowledge_if_with] for that.
    pub fn ignore_if(condition: bool) -> Self {
        if condition {
            Please::ignore()
        } else {
            Please::acknowledge()
        }
    }

    /// Also stop the scan once this decision has been applied.
    ///
    /// This is independent of whether the device is accepted, so a filter can ignore a device and still end the scan.
    pub fn then_stop_scan(mut self) -> Self {
        trace!(ack = self.ack, "scan filter requested scan stop");
        self.stop_scan = true;
        self
    }

    /// Whether the device is accepted.
    pub fn ack(&self) -> bool {
        self.ack
    }

    /// The config override for an accepted device, if any.
    pub fn config(&self) -> Option<&DeviceConfig> {
        self.config.as_ref()
    }

    /// Whether scanning should stop.
    pub fn stop_scan(&self) -> bool {
        self.stop_scan
    }
}
