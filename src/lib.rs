//! Minimal nl80211 client.
//!
//! Opens a generic netlink socket, resolves the `nl80211` family, lists
//! wireless interfaces with their operating mode and submits channel changes
//! as acknowledged requests.

mod channel;
pub mod consts;
mod error;
mod interface;
mod socket;

pub use channel::{ChannelSetting, ChannelType, ChannelWidth};
pub use error::{Error, Result};
pub use interface::{InterfaceType, WirelessInterface};
pub use socket::Nl80211;

#[cfg(test)]
mod tests {
    use crate::{Error, InterfaceType, WirelessInterface};

    #[test]
    fn interface_type_from_kernel_value() {
        assert_eq!(InterfaceType::from(2), InterfaceType::Station);
        assert_eq!(InterfaceType::from(6), InterfaceType::Monitor);
        assert_eq!(InterfaceType::from(12), InterfaceType::Nan);
        assert_eq!(InterfaceType::from(42), InterfaceType::Unknown(42));
    }

    #[test]
    fn monitor_detection() {
        let mon = WirelessInterface::new("wlan0mon", 5, InterfaceType::Monitor);
        let sta = WirelessInterface::new("wlan0", 4, InterfaceType::Station);
        assert!(mon.is_monitor());
        assert!(!sta.is_monitor());
    }

    #[test]
    fn error_messages() {
        let err = Error::FamilyUnavailable {
            family: "nl80211",
            reason: "no such family".into(),
        };
        assert_eq!(err.to_string(), "nl80211 not available: no such family");

        let err = Error::netlink("socket closed");
        assert_eq!(err.to_string(), "netlink: socket closed");
    }
}
