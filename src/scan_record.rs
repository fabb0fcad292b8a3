//! Parsed advertising data and the parser for raw advertisement records.

use std::collections::HashMap;

use tracing::trace;
use uuid::Uuid;

use crate::error::Error;
use crate::{btuuid, Result};

const AD_FLAGS: u8 = 0x01;
const AD_INCOMPLETE_UUID16: u8 = 0x02;
const AD_COMPLETE_UUID16: u8 = 0x03;
const AD_INCOMPLETE_UUID32: u8 = 0x04;
const AD_COMPLETE_UUID32: u8 = 0x05;
const AD_INCOMPLETE_UUID128: u8 = 0x06;
const AD_COMPLETE_UUID128: u8 = 0x07;
const AD_TX_POWER_LEVEL: u8 = 0x0a;
const AD_SERVICE_DATA_UUID16: u8 = 0x16;
const AD_SERVICE_DATA_UUID32: u8 = 0x20;
const AD_SERVICE_DATA_UUID128: u8 = 0x21;
const AD_MANUFACTURER_DATA: u8 = 0xff;

/// Data included in a Bluetooth advertisement and scan response.
///
/// Platforms that hand over already-decoded advertising data can fill in the fields directly. Otherwise
/// [`AdvertisementInfo::parse`] decodes the raw record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvertisementInfo {
    /// Advertised GATT service UUIDs, complete and incomplete lists combined (CSS §A.1.1)
    pub services: Vec<Uuid>,
    /// The raw advertisement record the other fields were decoded from
    pub scan_record: Vec<u8>,
    /// Transmitted power level in dBm, 0 if not advertised (CSS §A.1.5)
    pub tx_power: i16,
    /// Advertising flags, 0 if not advertised (CSS §A.1.3)
    pub advertising_flags: u8,
    /// Company identifier of the manufacturer specific data, 0 if not advertised (CSS §A.1.4)
    pub manufacturer_id: u16,
    /// Manufacturer specific data following the company identifier (CSS §A.1.4)
    pub manufacturer_data: Vec<u8>,
    /// Service associated data (CSS §A.1.11)
    pub service_data: HashMap<Uuid, Vec<u8>>,
}

impl AdvertisementInfo {
    /// Decodes the AD structures of a raw advertisement record.
    ///
    /// A zero length octet ends the significant part of the record, so trailing zero padding is accepted. Unknown AD
    /// types are skipped. When a record carries more than one manufacturer specific data structure, the first one is
    /// used.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [`MalformedRecord`][crate::error::ErrorKind::MalformedRecord] if a structure runs
    /// past the end of the record or its payload does not fit its type.
    pub fn parse(record: &[u8]) -> Result<Self> {
        let mut info = AdvertisementInfo {
            scan_record: record.to_vec(),
            ..Default::default()
        };
        let mut manufacturer_seen = false;

        let mut offset = 0;
        while offset < record.len() {
            let len = usize::from(record[offset]);
            if len == 0 {
                break;
            }

            let end = offset + 1 + len;
            if end > record.len() {
                return Err(Error::malformed(format!(
                    "structure at offset {} claims {} octets but only {} remain",
                    offset,
                    len,
                    record.len() - offset - 1
                )));
            }

            let ad_type = record[offset + 1];
            let data = &record[offset + 2..end];
            match ad_type {
                AD_FLAGS => {
                    info.advertising_flags = *data
                        .first()
                        .ok_or_else(|| Error::malformed(format!("empty flags at offset {}", offset)))?;
                }
                AD_INCOMPLETE_UUID16 | AD_COMPLETE_UUID16 => info.push_services(data, 2, offset)?,
                AD_INCOMPLETE_UUID32 | AD_COMPLETE_UUID32 => info.push_services(data, 4, offset)?,
                AD_INCOMPLETE_UUID128 | AD_COMPLETE_UUID128 => info.push_services(data, 16, offset)?,
                AD_TX_POWER_LEVEL => match data {
                    [level] => info.tx_power = i16::from(*level as i8),
                    _ => {
                        return Err(Error::malformed(format!(
                            "tx power level at offset {} has {} octets",
                            offset,
                            data.len()
                        )))
                    }
                },
                AD_SERVICE_DATA_UUID16 => info.insert_service_data(data, 2, offset)?,
                AD_SERVICE_DATA_UUID32 => info.insert_service_data(data, 4, offset)?,
                AD_SERVICE_DATA_UUID128 => info.insert_service_data(data, 16, offset)?,
                AD_MANUFACTURER_DATA => {
                    let (company_id, payload) = match data {
                        [lo, hi, payload @ ..] => (u16::from_le_bytes([*lo, *hi]), payload),
                        _ => {
                            return Err(Error::malformed(format!(
                                "manufacturer data at offset {} is missing its company identifier",
                                offset
                            )))
                        }
                    };
                    if manufacturer_seen {
                        trace!("ignoring additional manufacturer data for company {:#06x}", company_id);
                    } else {
                        manufacturer_seen = true;
                        info.manufacturer_id = company_id;
                        info.manufacturer_data = payload.to_vec();
                    }
                }
                other => trace!("skipping AD type {:#04x} at offset {}", other, offset),
            }

            offset = end;
        }

        Ok(info)
    }

    fn push_services(&mut self, data: &[u8], width: usize, offset: usize) -> Result<()> {
        if data.len() % width != 0 {
            return Err(Error::malformed(format!(
                "service list at offset {} is not a whole number of {}-octet UUIDs",
                offset, width
            )));
        }

        for uuid in data.chunks_exact(width).filter_map(btuuid::from_le_bytes) {
            if !self.services.contains(&uuid) {
                self.services.push(uuid);
            }
        }
        Ok(())
    }

    fn insert_service_data(&mut self, data: &[u8], width: usize, offset: usize) -> Result<()> {
        let uuid = data
            .get(..width)
            .and_then(btuuid::from_le_bytes)
            .ok_or_else(|| Error::malformed(format!("service data at offset {} is shorter than its UUID", offset)))?;
        self.service_data.insert(uuid, data[width..].to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn skips_unknown_types_and_padding() {
        // complete local name "ab", then padding
        let record = [0x03, 0x09, b'a', b'b', 0x02, 0x01, 0x06, 0x00, 0x00, 0x00];
        let info = AdvertisementInfo::parse(&record).unwrap();
        assert_eq!(info.advertising_flags, 0x06);
        assert_eq!(info.scan_record, record);
        assert!(info.services.is_empty());
    }

    #[test]
    fn first_manufacturer_data_wins() {
        let record = [0x04, 0xff, 0x4c, 0x00, 0x01, 0x04, 0xff, 0x59, 0x00, 0x02];
        let info = AdvertisementInfo::parse(&record).unwrap();
        assert_eq!(info.manufacturer_id, 0x004c);
        assert_eq!(info.manufacturer_data, [0x01]);
    }

    #[test]
    fn rejects_ragged_uuid_lists() {
        let record = [0x04, 0x03, 0x0d, 0x18, 0x0f];
        let err = AdvertisementInfo::parse(&record).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
    }
}
