//! Bitwise state contract for devices and managers.
//!
//! Every state family (see [`DeviceState`] and [`ManagerState`]) is a fieldless enum whose variants each own one bit
//! of a [`StateMask`]. The bit is derived from the declaration order of the variant, so the `n`th variant of a family
//! is `1 << n`. Families are declared with [`bit_states!`][crate::bit_states], which refuses to compile a family that
//! does not fit in a `StateMask`.

mod device;
mod manager;

pub use device::DeviceState;
pub use manager::ManagerState;

/// The union of zero or more state bits.
pub type StateMask = u32;

/// The number of distinct states a single family may declare.
pub const MASK_WIDTH: u32 = StateMask::BITS;

/// A single state of a device or manager, identified by a unique bit.
///
/// Implementations are generated by [`bit_states!`][crate::bit_states]; only [`ordinal`][State::ordinal],
/// [`name`][State::name] and [`ALL`][State::ALL] need to be provided; everything else is derived from the ordinal.
pub trait State: Copy + Eq + std::fmt::Debug + 'static {
    /// Every state of the family, in ordinal order.
    const ALL: &'static [Self];

    /// The position of this state within its family, starting at zero.
    fn ordinal(self) -> u32;

    /// The name of this state as declared.
    fn name(self) -> &'static str;

    /// Returns the bit (`0x1`, `0x2`, `0x4`, ...) this state represents based on its [`ordinal`][State::ordinal].
    #[inline]
    fn bit(self) -> StateMask {
        1 << self.ordinal()
    }

    /// Convenience method for checking if `(self.bit() & mask) != 0`.
    #[inline]
    fn overlaps(self, mask: StateMask) -> bool {
        (self.bit() & mask) != 0
    }

    /// Given an old and new state mask, tells you whether this state was appended.
    #[inline]
    fn was_entered(self, old_bits: StateMask, new_bits: StateMask) -> bool {
        !self.overlaps(old_bits) && self.overlaps(new_bits)
    }

    /// Reverse of [`was_entered`][State::was_entered]: the state was present in `old_bits` and is gone from
    /// `new_bits`.
    #[inline]
    fn was_exited(self, old_bits: StateMask, new_bits: StateMask) -> bool {
        self.overlaps(old_bits) && !self.overlaps(new_bits)
    }
}

/// Builds a mask out of `states`.
pub fn mask_of<S: State>(states: impl IntoIterator<Item = S>) -> StateMask {
    states.into_iter().fold(0, |mask, state| mask | state.bit())
}

/// The states of family `S` present in `mask`, in ordinal order.
///
/// Bits beyond the end of the family are ignored.
pub fn states_in<S: State>(mask: StateMask) -> impl Iterator<Item = S> {
    S::ALL.iter().copied().filter(move |state| state.overlaps(mask))
}

/// Declares a state family.
///
/// The generated enum derives the usual value traits, implements [`State`][crate::State] with ordinals taken from the
/// declaration order and implements [`Display`][std::fmt::Display] as the variant name. Declaring more states than
/// [`MASK_WIDTH`][crate::state::MASK_WIDTH] is a compile error.
///
/// ```
/// bluest_state::bit_states! {
///     /// Power states of a sensor
///     pub enum SensorState {
///         /// Sleeping
///         Asleep,
///         /// Awake and sampling
///         Sampling,
///     }
/// }
///
/// use bluest_state::State;
/// assert_eq!(SensorState::Sampling.bit(), 0b10);
/// ```
///
/// A family of 33 states does not fit in a `StateMask`:
///
/// ```compile_fail
/// bluest_state::bit_states! {
///     enum TooMany {
///         S0, S1, S2, S3, S4, S5, S6, S7, S8, S9, S10, S11, S12, S13, S14, S15,
///         S16, S17, S18, S19, S20, S21, S22, S23, S24, S25, S26, S27, S28, S29, S30, S31,
///         S32,
///     }
/// }
/// ```
#[macro_export]
macro_rules! bit_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u32)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        const _: () = assert!(
            [$(stringify!($variant)),+].len() <= $crate::state::MASK_WIDTH as usize,
            "state family declares more states than fit in a StateMask",
        );

        impl $crate::state::State for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            #[inline]
            fn ordinal(self) -> u32 {
                self as u32
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::state::State::name(*self))
            }
        }
    };
}
