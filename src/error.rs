use thiserror::Error;

/// Errors raised while talking to nl80211.
///
/// `neli` errors are generic over the message types involved, so they are
/// flattened to their rendered text here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot connect to Netlink socket: {0}")]
    Connect(#[from] std::io::Error),

    #[error("{family} not available: {reason}")]
    FamilyUnavailable { family: &'static str, reason: String },

    #[error("netlink: {0}")]
    Netlink(String),

    #[error("kernel did not acknowledge the request")]
    MissingAck,

    #[error("kernel rejected the request: {0}")]
    Kernel(#[source] std::io::Error),
}

impl Error {
    pub(crate) fn netlink<E: std::fmt::Display>(err: E) -> Self {
        Error::Netlink(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
