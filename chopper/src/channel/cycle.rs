// Metrea LLC Intellectual Property
// Originally developed by Raw Socket Labs LLC

use std::num::NonZeroU32;

use tracing::{info, warn};

use crate::channel::{channel_to_frequency, DEFAULT_CHANNELS};

/// A channel together with its resolved center frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub channel: i32,
    pub frequency: NonZeroU32,
}

impl Hop {
    /// `None` when the channel has no supported frequency.
    pub fn resolve(channel: i32) -> Option<Self> {
        NonZeroU32::new(channel_to_frequency(channel)).map(|frequency| Self { channel, frequency })
    }
}

/// The fixed, cyclic sequence of hops and the cursor walking it.
///
/// Never empty: an empty or fully unsupported channel list is replaced by
/// [`DEFAULT_CHANNELS`].
#[derive(Debug, Clone)]
pub struct HopCycle {
    hops: Vec<Hop>,
    idx: usize,
    cycles_completed: u64,
}

impl HopCycle {
    pub fn new(channels: &[i32]) -> Self {
        let mut hops = resolve_all(channels);

        if hops.is_empty() {
            if channels.is_empty() {
                info!("no channels given, using default sequence {:?}", DEFAULT_CHANNELS);
            } else {
                warn!(
                    "none of the channels {:?} are supported, using default sequence {:?}",
                    channels, DEFAULT_CHANNELS
                );
            }
            hops = resolve_all(&DEFAULT_CHANNELS);
        }

        Self {
            hops,
            idx: 0,
            cycles_completed: 0,
        }
    }

    pub fn current(&self) -> Hop {
        self.hops[self.idx]
    }

    /// Move the cursor to the next hop, wrapping at the end of the cycle.
    pub fn next(&mut self) {
        self.idx = (self.idx + 1) % self.hops.len();
        if self.idx == 0 {
            self.cycles_completed += 1;
        }
    }

    pub fn position(&self) -> usize {
        self.idx
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn cycles(&self) -> u64 {
        self.cycles_completed
    }

    pub fn channels(&self) -> Vec<i32> {
        self.hops.iter().map(|hop| hop.channel).collect()
    }
}

fn resolve_all(channels: &[i32]) -> Vec<Hop> {
    channels
        .iter()
        .filter_map(|&channel| {
            let hop = Hop::resolve(channel);
            if hop.is_none() {
                warn!("channel {} is not a supported 2.4 GHz channel, skipping it", channel);
            }
            hop
        })
        .collect()
}
