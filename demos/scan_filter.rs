use std::error::Error;

use bluest_state::btuuid::services;
use bluest_state::{
    AdvertisementInfo, ChangeEvent, DeviceConfig, ManagerState, NativeDevice, Please, ScanEvent, ScanFilter, State,
};
use tracing::{info, metadata::LevelFilter, warn};

const RECORDS: &[(&str, &str, &[u8])] = &[
    ("11:22:33:44:55:66", "Tag", &[0x02, 0x01, 0x06, 0x05, 0xff, 0x4c, 0x00, 0x02, 0x15]),
    ("C0:FF:EE:00:12:AB", "HRM-1234", &[0x02, 0x01, 0x06, 0x03, 0x03, 0x0d, 0x18, 0x02, 0x0a, 0xf4]),
    ("DE:AD:BE:EF:00:01", "Broken", &[0x09, 0x03, 0x0d]),
];

fn main() -> Result<(), Box<dyn Error>> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let mut filter = |event: &ScanEvent| {
        let wanted = event.advertised_services().contains(&services::HEART_RATE);
        let config = DeviceConfig::default().with_auto_reconnect(false);
        let please = Please::acknowledge_if_with(wanted, config);
        if wanted {
            please.then_stop_scan()
        } else {
            please
        }
    };

    let mut manager = ManagerState::On.bit() | ManagerState::Scanning.bit();
    info!("scan started");
    for &(addr, name, record) in RECORDS {
        let advertisement = match AdvertisementInfo::parse(record) {
            Ok(info) => Some(info),
            Err(err) => {
                warn!("{}: {}", addr, err);
                None
            }
        };
        let event = ScanEvent::new(NativeDevice::new(addr.parse()?), advertisement, name, name.to_lowercase(), -60);

        let please = filter.on_event(&event);
        info!("{} ack={} override={}", event, please.ack(), please.config().is_some());

        if please.stop_scan() {
            let old = manager;
            manager &= !ManagerState::Scanning.bit();
            let change = ChangeEvent::new(old, manager, ManagerState::Scanning.bit());
            info!(
                "scan stopped: {} (exited scanning: {}, {})",
                change,
                change.was_exited(ManagerState::Scanning),
                change.intent(ManagerState::Scanning)
            );
            break;
        }
    }

    Ok(())
}
