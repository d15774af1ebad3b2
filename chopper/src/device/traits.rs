// Metrea LLC Intellectual Property
// Originally developed by Raw Socket Labs LLC

use nlradio::{ChannelSetting, Nl80211};

/// Something that can retune a wireless interface and confirm it did.
pub trait RadioControl {
    fn set_channel(&mut self, setting: &ChannelSetting) -> nlradio::Result<()>;
}

impl RadioControl for Nl80211 {
    fn set_channel(&mut self, setting: &ChannelSetting) -> nlradio::Result<()> {
        Nl80211::set_channel(self, setting)
    }
}
