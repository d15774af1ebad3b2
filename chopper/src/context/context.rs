// Metrea LLC Intellectual Property
// Originally developed by Raw Socket Labs LLC

// THIRD PARTY CRATES
use tracing::{error, info};

// LOCAL CRATE
use crate::channel::{parse_channels, HopCycle};
use crate::cli::Cli;
use crate::context::HopTiming;
use crate::error::Error;

/// Everything the hop loop needs, derived from the command line.
#[derive(Debug)]
pub(crate) struct HopContext {
    pub(crate) interface: String,
    pub(crate) timing: HopTiming,
    pub(crate) cycle: HopCycle,
}

impl HopContext {
    pub fn new(args: &Cli) -> Result<Self, Error> {
        let interface = args.interface().ok_or(Error::MissingInterface)?.to_owned();
        let timing = HopTiming::new(args.delay, args.timeout);

        let channels = parse_channels(&args.channels).unwrap_or_else(|e| {
            error!("cannot parse channel list {:?}: {}", args.channels, e);
            Vec::new()
        });
        let cycle = HopCycle::new(&channels);
        info!("Hopping {} over channels {:?}", interface, cycle.channels());

        Ok(Self {
            interface,
            timing,
            cycle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::DEFAULT_CHANNELS;
    use clap::Parser;
    use std::time::Duration;

    fn context(argv: &[&str]) -> Result<HopContext, Error> {
        HopContext::new(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn requires_interface() {
        assert!(matches!(context(&["chopper"]), Err(Error::MissingInterface)));
        assert!(matches!(context(&["chopper", "-i", ""]), Err(Error::MissingInterface)));
    }

    #[test]
    fn defaults() {
        let ctx = context(&["chopper", "-i", "mon0"]).unwrap();
        assert_eq!(ctx.interface, "mon0");
        assert_eq!(ctx.cycle.channels(), DEFAULT_CHANNELS.to_vec());
        assert_eq!(ctx.timing.delay, Duration::from_millis(200));
        assert_eq!(ctx.timing.timeout, None);
    }

    #[test]
    fn unparseable_channels_use_default() {
        let ctx = context(&["chopper", "-i", "mon0", "-c", "abc,,0"]).unwrap();
        assert_eq!(ctx.cycle.channels(), DEFAULT_CHANNELS.to_vec());
    }

    #[test]
    fn explicit_channels() {
        let ctx = context(&["chopper", "-i", "mon0", "-c", "1,6,11", "-d", "100"]).unwrap();
        assert_eq!(ctx.cycle.channels(), vec![1, 6, 11]);
        assert_eq!(ctx.timing.delay, Duration::from_millis(100));
    }
}
