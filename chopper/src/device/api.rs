// THIRD PARTY CRATES
use nlradio::{Nl80211, WirelessInterface};
use tracing::info;

// LOCAL CRATE
use crate::context::HopContext;
use crate::device::{find_monitor_interface, HopReport, Hopper};
use crate::error::{Error, HopError};
use crate::shutdown::StopSignal;

/// Connect to nl80211 and validate the monitor interface called `name`.
pub fn open(name: &str) -> Result<(Nl80211, WirelessInterface), Error> {
    let mut radio = Nl80211::connect()?;
    let interfaces = radio.interfaces().map_err(Error::Enumerate)?;
    let iface = find_monitor_interface(&interfaces, name)?;
    info!("{} is in monitor mode (ifindex {})", iface.name, iface.index);

    Ok((radio, iface))
}

/// Run the hop loop on a dedicated blocking thread until it stops or fails.
pub async fn start(
    radio: Nl80211,
    iface: WirelessInterface,
    ctx: HopContext,
    stop: StopSignal,
) -> Result<HopReport, HopError> {
    let mut hopper = Hopper::new(radio, iface.index, ctx.cycle, ctx.timing.delay, stop);

    tokio::task::spawn_blocking(move || hopper.run())
        .await
        .map_err(|e| HopError::Panicked(e.to_string()))?
}
