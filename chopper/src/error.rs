use thiserror::Error;

/// Failures that stop chopper before the first hop.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no interface given")]
    MissingInterface,

    #[error("cannot find {0}")]
    InterfaceNotFound(String),

    #[error("{0} is not in monitor mode")]
    NotMonitor(String),

    #[error("cannot list wireless interfaces: {0}")]
    Enumerate(#[source] nlradio::Error),

    #[error(transparent)]
    Transport(#[from] nlradio::Error),
}

/// A failure while hopping. Always fatal.
#[derive(Debug, Error)]
pub enum HopError {
    #[error("cannot set channel {channel} ({frequency} MHz): {source}")]
    SetChannel {
        channel: i32,
        frequency: u32,
        #[source]
        source: nlradio::Error,
    },

    #[error("hop loop panicked: {0}")]
    Panicked(String),
}
