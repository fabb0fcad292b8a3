use bluest_state::state::{mask_of, states_in};
use bluest_state::{bit_states, ChangeEvent, ChangeIntent, DeviceState, ManagerState, State, StateMask};

bit_states! {
    enum Letter {
        A,
        B,
        C,
    }
}

fn all_masks() -> impl Iterator<Item = StateMask> {
    0..8
}

#[test]
fn bit_is_one_shifted_by_ordinal() {
    for (i, state) in DeviceState::ALL.iter().enumerate() {
        assert_eq!(state.ordinal() as usize, i);
        assert_eq!(state.bit(), 1 << i);
    }
    for (i, state) in ManagerState::ALL.iter().enumerate() {
        assert_eq!(state.bit(), 1 << i);
    }
}

#[test]
fn distinct_states_never_overlap() {
    for a in DeviceState::ALL {
        for b in DeviceState::ALL {
            assert_eq!(a.overlaps(b.bit()), a == b, "{a} vs {b}");
        }
    }
}

#[test]
fn entered_and_exited_follow_overlap() {
    for old in all_masks() {
        for new in all_masks() {
            for &state in Letter::ALL {
                assert_eq!(
                    state.was_entered(old, new),
                    !state.overlaps(old) && state.overlaps(new)
                );
                assert_eq!(
                    state.was_exited(old, new),
                    state.overlaps(old) && !state.overlaps(new)
                );
                assert_eq!(state.was_exited(old, new), state.was_entered(new, old));

                let event = ChangeEvent::new(old, new, 0);
                assert_eq!(event.was_entered(state), state.was_entered(old, new));
                assert_eq!(event.was_exited(state), state.was_exited(old, new));
            }
        }
    }
}

#[test]
fn intent_is_keyed_per_bit() {
    for old in all_masks() {
        for new in all_masks() {
            for intent in all_masks() {
                let event = ChangeEvent::new(old, new, intent);
                for &state in Letter::ALL {
                    let expected = if state.bit() & old == state.bit() & new {
                        ChangeIntent::Null
                    } else if state.overlaps(intent) {
                        ChangeIntent::Intentional
                    } else {
                        ChangeIntent::Unintentional
                    };
                    assert_eq!(event.intent(state), expected, "{event} {state}");
                }
            }
        }
    }
}

#[test]
fn intentional_when_intent_bit_set() {
    let event = ChangeEvent::new(0b001, 0b011, 0b010);
    assert_eq!(event.intent(Letter::A), ChangeIntent::Null);
    assert_eq!(event.intent(Letter::B), ChangeIntent::Intentional);
    assert_eq!(event.intent(Letter::C), ChangeIntent::Null);
}

#[test]
fn unintentional_without_intent_bit() {
    let event = ChangeEvent::new(0b001, 0b011, 0b000);
    assert_eq!(event.intent(Letter::A), ChangeIntent::Null);
    assert_eq!(event.intent(Letter::B), ChangeIntent::Unintentional);
}

#[test]
fn mixed_intents_in_one_disconnect() {
    let old = mask_of([DeviceState::Discovered, DeviceState::Connected, DeviceState::Initialized]);
    let new = mask_of([
        DeviceState::Discovered,
        DeviceState::Disconnected,
        DeviceState::ReconnectingShortTerm,
    ]);
    let intent = mask_of([DeviceState::Connected, DeviceState::Initialized, DeviceState::Disconnected]);
    let event = ChangeEvent::new(old, new, intent);

    assert_eq!(event.intent(DeviceState::Disconnected), ChangeIntent::Intentional);
    assert_eq!(event.intent(DeviceState::ReconnectingShortTerm), ChangeIntent::Unintentional);
    assert_eq!(event.intent(DeviceState::Discovered), ChangeIntent::Null);

    assert_eq!(
        event.entered::<DeviceState>().collect::<Vec<_>>(),
        [DeviceState::Disconnected, DeviceState::ReconnectingShortTerm]
    );
    assert_eq!(
        event.exited::<DeviceState>().collect::<Vec<_>>(),
        [DeviceState::Connected, DeviceState::Initialized]
    );
    assert!(event
        .entered::<DeviceState>()
        .any(DeviceState::is_reconnecting));
}

#[test]
fn intent_bits_on_unchanged_states_are_ignored() {
    let event = ChangeEvent::new(0b100, 0b100, 0b111);
    for &state in Letter::ALL {
        assert_eq!(event.intent(state), ChangeIntent::Null);
    }
}

#[test]
fn manager_scan_start() {
    let old = mask_of([ManagerState::On]);
    let new = mask_of([ManagerState::On, ManagerState::Scanning]);
    let event = ChangeEvent::new(old, new, ManagerState::Scanning.bit());

    assert!(event.was_entered(ManagerState::Scanning));
    assert!(!event.was_entered(ManagerState::On));
    assert_eq!(event.intent(ManagerState::Scanning), ChangeIntent::Intentional);
    assert!(!ManagerState::Scanning.is_transitional());
    assert!(states_in::<ManagerState>(new).all(|state| !state.is_transitional()));
    assert_eq!(event.to_string(), "0b100 -> 0b10100 (intent 0b10000)");
}

#[test]
fn disk_values_are_fixed() {
    assert_eq!(ChangeIntent::Intentional.to_disk_value(), 1);
    assert_eq!(ChangeIntent::Unintentional.to_disk_value(), 0);
    assert_eq!(ChangeIntent::Null.to_disk_value(), -1);
}

#[test]
fn disk_value_round_trip() {
    for intent in ChangeIntent::ALL {
        assert_eq!(ChangeIntent::from_disk_value(intent.to_disk_value()), intent);
        assert_eq!(ChangeIntent::from(i32::from(intent)), intent);
    }
}

#[test]
fn unknown_disk_values_read_as_null() {
    for value in [-2, 2, 42, i32::MIN, i32::MAX] {
        assert_eq!(ChangeIntent::from_disk_value(value), ChangeIntent::Null);
    }
    assert_eq!(ChangeIntent::default(), ChangeIntent::Null);
    assert!(!ChangeIntent::Null.is_change());
    assert!(ChangeIntent::Unintentional.is_change());
}

#[test]
fn connected_states_form_a_mask() {
    let mask = mask_of(DeviceState::CONNECTED_STATES.iter().copied());
    assert_eq!(
        states_in::<DeviceState>(mask).collect::<Vec<_>>(),
        DeviceState::CONNECTED_STATES
    );
}
