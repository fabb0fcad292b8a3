//! Scan events handed to a [`ScanFilter`][crate::ScanFilter].

use std::borrow::Cow;
use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{Error, ErrorKind};
use crate::{btuuid, AdvertisementInfo};

/// A 48-bit Bluetooth device address.
///
/// Displays as `AA:BB:CC:DD:EE:FF`. Parsing accepts hex digits of either case and `-` in place of `:`, as long as one
/// separator is used throughout.
///
/// ```
/// # use bluest_state::MacAddress;
/// let addr: MacAddress = "c0-ff-ee-00-12-ab".parse().unwrap();
/// assert_eq!(addr.to_string(), "C0:FF:EE:00:12:AB");
/// assert!("C0:FF-EE:00:12:AB".parse::<MacAddress>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Creates an address from its octets, most significant first.
    pub const fn new(octets: [u8; 6]) -> Self {
        MacAddress(octets)
    }

    /// The octets of this address, most significant first.
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}", a, b, c, d, e, g)
    }
}

impl std::str::FromStr for MacAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the first separator fixes the one used for the whole address
        let separator = s.chars().find(|&c| c == ':' || c == '-').unwrap_or(':');
        let mut octets = [0u8; 6];
        let mut parts = s.split(separator);
        for (i, octet) in octets.iter_mut().enumerate() {
            let part = parts
                .next()
                .ok_or_else(|| Error::new(ErrorKind::InvalidAddress, None, format!("{:?} has only {} octets", s, i)))?;
            // from_str_radix alone would also take a leading sign
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(Error::new(
                    ErrorKind::InvalidAddress,
                    None,
                    format!("octet {} of {:?} is not two hex digits", i, s),
                ));
            }
            *octet = u8::from_str_radix(part, 16).map_err(|err| {
                Error::new(
                    ErrorKind::InvalidAddress,
                    Some(Box::new(err)),
                    format!("octet {} of {:?}", i, s),
                )
            })?;
        }

        if parts.next().is_some() {
            return Err(Error::new(
                ErrorKind::InvalidAddress,
                None,
                format!("{:?} has more than 6 octets", s),
            ));
        }

        Ok(MacAddress(octets))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MacAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MacAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The platform's handle for a device that was seen in a scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeDevice {
    address: MacAddress,
}

impl NativeDevice {
    /// Wraps the platform device with the given address.
    pub fn new(address: MacAddress) -> Self {
        NativeDevice { address }
    }

    /// The device's Bluetooth address.
    pub fn address(&self) -> MacAddress {
        self.address
    }
}

/// One advertisement observed during a scan.
///
/// Every accessor derived from the advertising data falls back to an empty or zero value when the platform provided
/// no advertising data, so none of them return an `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEvent {
    device: NativeDevice,
    advertisement: Option<AdvertisementInfo>,
    name_native: String,
    name_device: String,
    rssi: i16,
}

impl ScanEvent {
    /// Creates the event for one observed advertisement.
    pub fn new(
        device: NativeDevice,
        advertisement: Option<AdvertisementInfo>,
        name_native: impl Into<String>,
        name_device: impl Into<String>,
        rssi: i16,
    ) -> Self {
        ScanEvent {
            device,
            advertisement,
            name_native: name_native.into(),
            name_device: name_device.into(),
            rssi,
        }
    }

    /// The platform device that sent the advertisement.
    pub fn native_device(&self) -> &NativeDevice {
        &self.device
    }

    /// The decoded advertising data, if the platform provided any.
    pub fn advertisement(&self) -> Option<&AdvertisementInfo> {
        self.advertisement.as_ref()
    }

    /// The services advertised by the device.
    pub fn advertised_services(&self) -> &[Uuid] {
        match &self.advertisement {
            Some(info) => &info.services,
            None => &[],
        }
    }

    /// The name reported by the platform.
    pub fn name_native(&self) -> &str {
        &self.name_native
    }

    /// The name the framework resolved for the device, normalized for display and comparison.
    pub fn name_device(&self) -> &str {
        &self.name_device
    }

    /// The raw advertisement record.
    pub fn scan_record(&self) -> &[u8] {
        match &self.advertisement {
            Some(info) => &info.scan_record,
            None => &[],
        }
    }

    /// The signal strength of the advertisement in dBm.
    pub fn rssi(&self) -> i16 {
        self.rssi
    }

    /// The advertised transmit power level in dBm.
    pub fn tx_power(&self) -> i16 {
        match &self.advertisement {
            Some(info) => info.tx_power,
            None => 0,
        }
    }

    /// The address of the device.
    pub fn mac_address(&self) -> MacAddress {
        self.device.address()
    }

    /// The advertising flags.
    pub fn advertising_flags(&self) -> u8 {
        match &self.advertisement {
            Some(info) => info.advertising_flags,
            None => 0,
        }
    }

    /// The company identifier of the manufacturer specific data.
    pub fn manufacturer_id(&self) -> u16 {
        match &self.advertisement {
            Some(info) => info.manufacturer_id,
            None => 0,
        }
    }

    /// The manufacturer specific data, without the company identifier.
    pub fn manufacturer_data(&self) -> &[u8] {
        match &self.advertisement {
            Some(info) => &info.manufacturer_data,
            None => &[],
        }
    }

    /// Service data keyed by service UUID.
    pub fn service_data(&self) -> Cow<'_, HashMap<Uuid, Vec<u8>>> {
        match &self.advertisement {
            Some(info) => Cow::Borrowed(&info.service_data),
            None => Cow::Owned(HashMap::new()),
        }
    }
}

impl std::fmt::Display for ScanEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScanEvent(mac_address={}, name={}, services=[", self.mac_address(), self.name_device)?;
        for (i, uuid) in self.advertised_services().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match btuuid::try_to_u16(uuid) {
                Some(short) => write!(f, "{:#06x}", short)?,
                None => write!(f, "{}", uuid)?,
            }
        }
        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_addresses() {
        let addr: MacAddress = "c0:ff:ee:00:12:ab".parse().unwrap();
        assert_eq!(addr.octets(), [0xc0, 0xff, 0xee, 0x00, 0x12, 0xab]);
        assert_eq!(addr.to_string(), "C0:FF:EE:00:12:AB");
        assert_eq!("C0-FF-EE-00-12-AB".parse::<MacAddress>().unwrap(), addr);
    }

    #[test]
    fn rejects_bad_addresses() {
        for bad in [
            "",
            "C0:FF:EE:00:12",
            "C0:FF:EE:00:12:AB:01",
            "C0:FF:EE:00:12:GG",
            "C0:FF:EE:00:12:ABC",
            "+a:+b:00:00:00:00",
            "C0:FF-EE:00-12:AB",
            "C0-FF-EE-00-12:AB",
        ] {
            let err = bad.parse::<MacAddress>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidAddress, "{bad}");
        }
    }
}
