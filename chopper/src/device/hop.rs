// Metrea LLC Intellectual Property
// Originally developed by Raw Socket Labs LLC

// STD LIB
use std::thread;
use std::time::Duration;

// THIRD PARTY CRATES
use nlradio::ChannelSetting;
use tracing::{debug, info};

// LOCAL CRATE
use crate::channel::{Hop, HopCycle};
use crate::device::RadioControl;
use crate::error::HopError;
use crate::shutdown::{StopReason, StopSignal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopState {
    Running,
    Stopped,
}

/// Summary returned once the hop loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopReport {
    pub hops: u64,
    pub cycles: u64,
    pub stop_reason: Option<StopReason>,
}

/// Drives the radio through the hop cycle, one channel per tick.
///
/// The stop signal is only checked between ticks. A channel change that is
/// already submitted always runs to its acknowledgment.
pub struct Hopper<R: RadioControl> {
    radio: R,
    ifindex: u32,
    cycle: HopCycle,
    delay: Duration,
    stop: StopSignal,
    state: HopState,
    hops: u64,
}

impl<R: RadioControl> Hopper<R> {
    pub fn new(radio: R, ifindex: u32, cycle: HopCycle, delay: Duration, stop: StopSignal) -> Self {
        Self {
            radio,
            ifindex,
            cycle,
            delay,
            stop,
            state: HopState::Running,
            hops: 0,
        }
    }

    pub fn state(&self) -> HopState {
        self.state
    }

    /// Hop until stopped. Blocks the calling thread.
    ///
    /// Returns on the first failed channel change; nothing is retried.
    pub fn run(&mut self) -> Result<HopReport, HopError> {
        info!(
            "Hopping over {} channels every {}ms",
            self.cycle.len(),
            self.delay.as_millis()
        );

        while self.state() == HopState::Running {
            if self.stop.is_stopped() {
                self.state = HopState::Stopped;
                continue;
            }

            self.tick()?;
            thread::sleep(self.delay);
        }

        Ok(self.report())
    }

    fn tick(&mut self) -> Result<Hop, HopError> {
        let hop = self.cycle.current();
        let setting = ChannelSetting::twenty_mhz(self.ifindex, hop.frequency.get());

        self.radio
            .set_channel(&setting)
            .map_err(|source| HopError::SetChannel {
                channel: hop.channel,
                frequency: setting.frequency,
                source,
            })?;
        debug!(
            channel = hop.channel,
            frequency = setting.frequency,
            position = self.cycle.position(),
            "hopped"
        );

        self.hops += 1;
        self.cycle.next();
        Ok(hop)
    }

    pub fn report(&self) -> HopReport {
        HopReport {
            hops: self.hops,
            cycles: self.cycle.cycles(),
            stop_reason: self.stop.reason(),
        }
    }
}
