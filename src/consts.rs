//! nl80211 constants used by this crate.
//!
//! Only the subset of `include/uapi/linux/nl80211.h` needed for interface
//! enumeration and channel control is declared here.

/// The generic netlink family name for nl80211.
pub const NL80211_GENL_NAME: &str = "nl80211";

/// Generic netlink header version sent with every nl80211 request.
pub const NL80211_GENL_VERSION: u8 = 1;

/// nl80211 commands.
#[neli::neli_enum(serialized_type = "u8")]
pub enum Nl80211Command {
    Unspecified = 0,
    /// Dump or get network interfaces.
    GetInterface = 5,
    /// Set the operating channel of a monitor or mesh interface.
    SetChannel = 65,
}

impl neli::consts::genl::Cmd for Nl80211Command {}

/// nl80211 attributes.
#[neli::neli_enum(serialized_type = "u16")]
pub enum Nl80211Attribute {
    Unspecified = 0,
    Wiphy = 1,
    WiphyName = 2,
    Ifindex = 3,
    Ifname = 4,
    Iftype = 5,
    /// Center frequency of the control channel in MHz.
    WiphyFreq = 38,
    /// Legacy channel type, see [`ChannelType`](crate::ChannelType).
    WiphyChannelType = 39,
    /// Channel width, see [`ChannelWidth`](crate::ChannelWidth).
    ChannelWidth = 159,
}

impl neli::consts::genl::NlAttrType for Nl80211Attribute {}
