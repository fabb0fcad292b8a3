use crate::state::{states_in, State, StateMask};
use crate::ChangeIntent;

/// A snapshot of one state transition of a device or manager.
///
/// The framework builds a `ChangeEvent` at the moment the state mask changes and hands it to listeners. It is never
/// modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeEvent {
    old_bits: StateMask,
    new_bits: StateMask,
    intent_bits: StateMask,
}

impl ChangeEvent {
    /// Creates a new event from the state mask before the transition, the state mask after it and the intent mask.
    ///
    /// `intent_bits` only carries information for the bits that differ between `old_bits` and `new_bits`.
    pub const fn new(old_bits: StateMask, new_bits: StateMask, intent_bits: StateMask) -> Self {
        ChangeEvent {
            old_bits,
            new_bits,
            intent_bits,
        }
    }

    /// The state mask before the event took place.
    #[inline]
    pub const fn old_bits(&self) -> StateMask {
        self.old_bits
    }

    /// The new and now current state mask.
    #[inline]
    pub const fn new_bits(&self) -> StateMask {
        self.new_bits
    }

    /// For each old to new bit difference, whether the transition was intentional.
    ///
    /// See [`ChangeIntent`] for what intentional means.
    #[inline]
    pub const fn intent_bits(&self) -> StateMask {
        self.intent_bits
    }

    /// Convenience forwarding of [`State::was_entered`].
    pub fn was_entered<S: State>(&self, state: S) -> bool {
        state.was_entered(self.old_bits, self.new_bits)
    }

    /// Convenience forwarding of [`State::was_exited`].
    pub fn was_exited<S: State>(&self, state: S) -> bool {
        state.was_exited(self.old_bits, self.new_bits)
    }

    /// Returns the intention behind the change of `state`, or [`ChangeIntent::Null`] if `state` did not change.
    pub fn intent<S: State>(&self, state: S) -> ChangeIntent {
        if (state.bit() & self.old_bits) == (state.bit() & self.new_bits) {
            ChangeIntent::Null
        } else if state.overlaps(self.intent_bits) {
            ChangeIntent::Intentional
        } else {
            ChangeIntent::Unintentional
        }
    }

    /// Every state of family `S` entered by this event, in ordinal order.
    pub fn entered<S: State>(&self) -> impl Iterator<Item = S> {
        states_in(self.new_bits & !self.old_bits)
    }

    /// Every state of family `S` exited by this event, in ordinal order.
    pub fn exited<S: State>(&self) -> impl Iterator<Item = S> {
        states_in(self.old_bits & !self.new_bits)
    }
}

impl std::fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:#b} -> {:#b} (intent {:#b})",
            self.old_bits, self.new_bits, self.intent_bits
        )
    }
}
