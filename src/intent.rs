//! Intent behind a single state change.

use tracing::debug;

const DISK_VALUE_NULL: i32 = -1;
const DISK_VALUE_UNINTENTIONAL: i32 = 0;
const DISK_VALUE_INTENTIONAL: i32 = 1;

/// Whether the application user intended a state change to happen.
///
/// Intentional generally means app code called into the framework, usually in response to a user input event, to
/// trigger the change. Calling disconnect from a button handler is intentional; a device dropping out of range is not.
/// A reconnect scheduled by the framework after an unexpected disconnect is unintentional from the user's point of
/// view even though the programmer asked for it, so intents are best used for analytics and debugging rather than to
/// gate application logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeIntent {
    /// No change happened for the queried state.
    #[default]
    Null,
    /// The state change was not intentional.
    Unintentional,
    /// The state change was intentional.
    Intentional,
}

impl ChangeIntent {
    /// Every intent.
    pub const ALL: [ChangeIntent; 3] = [ChangeIntent::Null, ChangeIntent::Unintentional, ChangeIntent::Intentional];

    /// The integer value to persist.
    ///
    /// The encoding is fixed per variant and does not depend on the order the variants are declared in.
    pub const fn to_disk_value(self) -> i32 {
        match self {
            ChangeIntent::Intentional => DISK_VALUE_INTENTIONAL,
            ChangeIntent::Unintentional => DISK_VALUE_UNINTENTIONAL,
            ChangeIntent::Null => DISK_VALUE_NULL,
        }
    }

    /// Transforms a value produced by [`to_disk_value`][ChangeIntent::to_disk_value] back into an intent.
    ///
    /// Returns [`Null`][ChangeIntent::Null] if `disk_value` is not recognized.
    pub fn from_disk_value(disk_value: i32) -> Self {
        match Self::ALL.into_iter().find(|intent| intent.to_disk_value() == disk_value) {
            Some(intent) => intent,
            None => {
                debug!("unrecognized change intent disk value {}", disk_value);
                ChangeIntent::Null
            }
        }
    }

    /// Returns `true` unless this is [`Null`][ChangeIntent::Null].
    pub fn is_change(self) -> bool {
        self != ChangeIntent::Null
    }
}

impl From<ChangeIntent> for i32 {
    fn from(intent: ChangeIntent) -> Self {
        intent.to_disk_value()
    }
}

impl From<i32> for ChangeIntent {
    fn from(disk_value: i32) -> Self {
        ChangeIntent::from_disk_value(disk_value)
    }
}

impl std::fmt::Display for ChangeIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ChangeIntent::Null => "null",
            ChangeIntent::Unintentional => "unintentional",
            ChangeIntent::Intentional => "intentional",
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChangeIntent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.to_disk_value())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ChangeIntent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_i64(DiskValueVisitor)
    }
}

/// Reads any integer; values that do not fit an `i32` can't be a disk value and read as `Null`.
#[cfg(feature = "serde")]
struct DiskValueVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for DiskValueVisitor {
    type Value = ChangeIntent;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an integer change intent disk value")
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(i32::try_from(v).map_or(ChangeIntent::Null, ChangeIntent::from_disk_value))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(i32::try_from(v).map_or(ChangeIntent::Null, ChangeIntent::from_disk_value))
    }

    fn visit_i128<E: serde::de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(i32::try_from(v).map_or(ChangeIntent::Null, ChangeIntent::from_disk_value))
    }

    fn visit_u128<E: serde::de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(i32::try_from(v).map_or(ChangeIntent::Null, ChangeIntent::from_disk_value))
    }
}
