/// Channel width (`enum nl80211_chan_width`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ChannelWidth {
    /// 20 MHz, non-HT.
    Width20NoHt = 0,
    Width20 = 1,
    Width40 = 2,
}

/// Legacy channel type (`enum nl80211_channel_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ChannelType {
    NoHt = 0,
    Ht20 = 1,
    Ht40Minus = 2,
    Ht40Plus = 3,
}

/// Everything needed for one `NL80211_CMD_SET_CHANNEL` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSetting {
    pub ifindex: u32,
    /// Control channel center frequency in MHz.
    pub frequency: u32,
    pub width: ChannelWidth,
    pub channel_type: ChannelType,
}

impl ChannelSetting {
    /// 20 MHz setting used for plain 2.4 GHz hopping.
    pub fn twenty_mhz(ifindex: u32, frequency: u32) -> Self {
        Self {
            ifindex,
            frequency,
            width: ChannelWidth::Width20NoHt,
            channel_type: ChannelType::Ht20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_mhz_profile_matches_kernel_values() {
        let setting = ChannelSetting::twenty_mhz(4, 2412);
        assert_eq!(setting.ifindex, 4);
        assert_eq!(setting.frequency, 2412);
        assert_eq!(setting.width as u32, 0);
        assert_eq!(setting.channel_type as u32, 1);
    }
}
