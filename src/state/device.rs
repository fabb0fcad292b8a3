crate::bit_states! {
    /// The logical states of a single Bluetooth LE device.
    ///
    /// A device is usually in several states at once; for example a connected device is also `Discovered` and
    /// possibly `Bonded` and `Initialized`. The framework tracks them together as a [`StateMask`][crate::StateMask].
    ///
    /// The declaration order defines the bits, so new states must only ever be appended.
    pub enum DeviceState {
        /// Placeholder used instead of an absent state.
        Null,
        /// The device has not been seen by a scan, or has timed out since it was last seen.
        Undiscovered,
        /// The device is trying to reconnect over a long period after it was lost.
        ReconnectingLongTerm,
        /// The device has been seen advertising at least once.
        Discovered,
        /// The device is currently advertising.
        Advertising,
        /// The device is not connected.
        Disconnected,
        /// Umbrella state covering every step from [`Connecting`][DeviceState::Connecting] to
        /// [`Initialized`][DeviceState::Initialized].
        ConnectingOverall,
        /// A connection attempt is in progress.
        Connecting,
        /// The device has a link-layer connection.
        Connected,
        /// Bonding with the device is in progress.
        Bonding,
        /// The device is bonded.
        Bonded,
        /// The device is not bonded.
        Unbonded,
        /// GATT service discovery is in progress.
        DiscoveringServices,
        /// GATT services have been discovered.
        ServicesDiscovered,
        /// Application-level authentication is in progress.
        Authenticating,
        /// Application-level authentication finished.
        Authenticated,
        /// Application-level initialization is in progress.
        Initializing,
        /// The device is fully ready for use.
        Initialized,
        /// The device is trying to reconnect shortly after an unexpected disconnect.
        ReconnectingShortTerm,
        /// A firmware update is being transferred to the device.
        PerformingOta,
    }
}

impl DeviceState {
    /// The states that together make up an established, usable connection.
    pub const CONNECTED_STATES: &'static [DeviceState] = &[
        DeviceState::Connected,
        DeviceState::ServicesDiscovered,
        DeviceState::Authenticated,
        DeviceState::Initialized,
    ];

    /// Returns `true` for the states the framework enters on its own while trying to restore a lost connection.
    pub fn is_reconnecting(self) -> bool {
        matches!(
            self,
            DeviceState::ReconnectingShortTerm | DeviceState::ReconnectingLongTerm
        )
    }
}
