#![warn(missing_docs)]

//! Bluest state is the platform independent core of a [Bluetooth Low Energy] (BLE) device manager for [Rust]. It
//! answers two questions the connection and scanning machinery keeps asking:
//!
//! - Given the state of a device or manager before and after a transition, which states were entered or exited, and
//!   did the application user intend each of those changes?
//! - Given an advertisement seen during a scan, should the device be kept, with which configuration, and should the
//!   scan go on?
//!
//! It does not talk to a Bluetooth radio. The owning framework computes state masks and decodes advertisements, and
//! this crate turns them into events and decisions.
//!
//! [Rust]: https://www.rust-lang.org/
//! [Bluetooth Low Energy]: https://www.bluetooth.com/specifications/specs/
//!
//! # Usage
//!
//! ```rust
//!# use bluest_state::{ChangeEvent, ChangeIntent, DeviceState, State, StateMask};
//!let old: StateMask = DeviceState::Discovered.bit() | DeviceState::Connected.bit();
//!let new: StateMask = DeviceState::Discovered.bit() | DeviceState::Disconnected.bit()
//!    | DeviceState::ReconnectingShortTerm.bit();
//!// the user pressed "disconnect"; the reconnect attempt was the framework's own doing
//!let intent: StateMask = DeviceState::Connected.bit() | DeviceState::Disconnected.bit();
//!
//!let event = ChangeEvent::new(old, new, intent);
//!assert!(event.was_exited(DeviceState::Connected));
//!assert_eq!(event.intent(DeviceState::Disconnected), ChangeIntent::Intentional);
//!assert_eq!(event.intent(DeviceState::ReconnectingShortTerm), ChangeIntent::Unintentional);
//!assert_eq!(event.intent(DeviceState::Discovered), ChangeIntent::Null);
//! ```
//!
//! # Overview
//!
//! - State bits:
//!   - The [`State`] trait gives every state of a family a unique bit derived from its declaration order
//!   - [`DeviceState`] and [`ManagerState`] are the built-in families; [`bit_states!`] declares new ones
//! - State transitions:
//!   - [`ChangeEvent`] bundles the old, new and intent masks of one transition
//!   - [`ChangeIntent`] classifies one state's change and has a stable [disk encoding][ChangeIntent::to_disk_value]
//! - Scanning:
//!   - [`ScanEvent`] describes one advertisement; its accessors never return missing values
//!   - [`AdvertisementInfo::parse`] decodes raw advertisement records
//!   - A [`ScanFilter`] answers each `ScanEvent` with a [`Please`], optionally carrying a [`DeviceConfig`]
//!
//! # Feature flags
//!
//! The `serde` feature is available to enable serializing/deserializing change events, change intents (as their disk
//! value), device configuration and MAC addresses.
//!
//! # Examples
//!
//! A scan filter demonstration is available in the `demos` folder (`cargo run --example scan_filter`).

pub mod btuuid;
pub mod error;
pub mod state;

mod config;
mod event;
mod filter;
mod intent;
mod scan;
mod scan_record;

pub use config::DeviceConfig;
pub use error::Error;
pub use event::ChangeEvent;
pub use filter::{Please, ScanFilter};
pub use intent::ChangeIntent;
pub use scan::{MacAddress, NativeDevice, ScanEvent};
pub use scan_record::AdvertisementInfo;
pub use state::{DeviceState, ManagerState, State, StateMask};
pub use uuid::Uuid;

/// Convenience alias for a result with [`Error`]
pub type Result<T, E = Error> = core::result::Result<T, E>;
