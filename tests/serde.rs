use std::time::Duration;

use bluest_state::{ChangeEvent, ChangeIntent, DeviceConfig, MacAddress};
use serde_json::json;

#[test]
fn intents_serialize_as_disk_values() {
    assert_eq!(serde_json::to_value(ChangeIntent::Intentional).unwrap(), json!(1));
    assert_eq!(serde_json::to_value(ChangeIntent::Unintentional).unwrap(), json!(0));
    assert_eq!(serde_json::to_value(ChangeIntent::Null).unwrap(), json!(-1));

    for intent in ChangeIntent::ALL {
        let stored = serde_json::to_string(&intent).unwrap();
        assert_eq!(serde_json::from_str::<ChangeIntent>(&stored).unwrap(), intent);
    }
}

#[test]
fn unknown_stored_intents_read_as_null() {
    for stored in ["7", "-2", "4294967296", "-9223372036854775808", "18446744073709551615"] {
        assert_eq!(serde_json::from_str::<ChangeIntent>(stored).unwrap(), ChangeIntent::Null);
    }
    assert!(serde_json::from_str::<ChangeIntent>("\"intentional\"").is_err());
}

#[test]
fn change_events_keep_their_masks() {
    let event = ChangeEvent::new(0b001, 0b011, 0b010);
    let value = serde_json::to_value(event).unwrap();
    assert_eq!(value, json!({ "old_bits": 1, "new_bits": 3, "intent_bits": 2 }));
    assert_eq!(serde_json::from_value::<ChangeEvent>(value).unwrap(), event);
}

#[test]
fn addresses_serialize_as_strings() {
    let addr = MacAddress::new([0xc0, 0xff, 0xee, 0x00, 0x12, 0xab]);
    assert_eq!(serde_json::to_value(addr).unwrap(), json!("C0:FF:EE:00:12:AB"));
    assert_eq!(
        serde_json::from_str::<MacAddress>("\"c0:ff:ee:00:12:ab\"").unwrap(),
        addr
    );
    assert!(serde_json::from_str::<MacAddress>("\"c0:ff\"").is_err());
}

#[test]
fn device_config_fills_missing_fields_with_defaults() {
    let config: DeviceConfig = serde_json::from_value(json!({ "auto_reconnect": false })).unwrap();
    assert_eq!(config, DeviceConfig::default().with_auto_reconnect(false));

    let config = DeviceConfig::default().with_rssi_auto_poll_rate(Some(Duration::from_millis(500)));
    let round_trip: DeviceConfig = serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(round_trip, config);
}
