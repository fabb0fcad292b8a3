crate::bit_states! {
    /// The logical states of the Bluetooth manager, which mirror the power state of the local adapter plus whether a
    /// scan is running.
    pub enum ManagerState {
        /// The adapter is off.
        Off,
        /// The adapter is powering on.
        TurningOn,
        /// The adapter is on.
        On,
        /// The adapter is powering off.
        TurningOff,
        /// A scan is running.
        Scanning,
        /// The adapter is being reset.
        Resetting,
    }
}

impl ManagerState {
    /// Returns `true` for the transitional power states.
    pub fn is_transitional(self) -> bool {
        matches!(self, ManagerState::TurningOn | ManagerState::TurningOff | ManagerState::Resetting)
    }
}
