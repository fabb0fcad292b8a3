//! Bluetooth UUID helpers for advertisement payloads

use uuid::Uuid;

/// This is the Bluetooth Base UUID. It is used with 16-bit and 32-bit UUIDs
/// [defined](https://www.bluetooth.com/specifications/assigned-numbers/) by the Bluetooth SIG.
pub const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

/// Const function to create a 16-bit Bluetooth UUID
pub const fn bluetooth_uuid_from_u16(uuid: u16) -> Uuid {
    Uuid::from_u128(((uuid as u128) << 96) | BLUETOOTH_BASE_UUID)
}

/// Const function to create a 32-bit Bluetooth UUID
pub const fn bluetooth_uuid_from_u32(uuid: u32) -> Uuid {
    Uuid::from_u128(((uuid as u128) << 96) | BLUETOOTH_BASE_UUID)
}

/// Creates a UUID from the little-endian octets used on air in advertising data.
///
/// Returns `None` unless `bytes` is 2, 4 or 16 octets long.
pub fn from_le_bytes(bytes: &[u8]) -> Option<Uuid> {
    match bytes.len() {
        2 => Some(bluetooth_uuid_from_u16(u16::from_le_bytes([bytes[0], bytes[1]]))),
        4 => Some(bluetooth_uuid_from_u32(u32::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3],
        ]))),
        16 => {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(bytes);
            Some(Uuid::from_u128(u128::from_le_bytes(octets)))
        }
        _ => None,
    }
}

/// Tries to convert `uuid` into a 16-bit Bluetooth UUID
pub fn try_to_u16(uuid: &Uuid) -> Option<u16> {
    let u = uuid.as_u128();
    ((u & ((1 << 96) - 1)) == BLUETOOTH_BASE_UUID && (u >> 112) == 0).then(|| (u >> 96) as u16)
}

/// Bluetooth GATT Service 16-bit UUIDs
pub mod services {
    #![allow(missing_docs)]

    use uuid::Uuid;

    use super::bluetooth_uuid_from_u16;

    pub const DEVICE_INFORMATION: Uuid = bluetooth_uuid_from_u16(0x180a);
    pub const HEART_RATE: Uuid = bluetooth_uuid_from_u16(0x180d);
    pub const BATTERY: Uuid = bluetooth_uuid_from_u16(0x180f);
    pub const ENVIRONMENTAL_SENSING: Uuid = bluetooth_uuid_from_u16(0x181a);
}
