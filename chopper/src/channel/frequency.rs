/// Map a 2.4 GHz 802.11 channel to its center frequency in MHz.
///
/// Returns `0` for anything outside channels 1 to 14.
// TODO: 5 GHz band (channels 36..=177, 5000 + 5 * channel).
pub fn channel_to_frequency(channel: i32) -> u32 {
    match channel {
        14 => 2484,
        1..=13 => 2407 + channel as u32 * 5,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_point_four_ghz_band() {
        let expected = [
            2412, 2417, 2422, 2427, 2432, 2437, 2442, 2447, 2452, 2457, 2462, 2467, 2472,
        ];
        for (channel, freq) in (1..=13).zip(expected) {
            assert_eq!(channel_to_frequency(channel), freq, "channel {}", channel);
        }
        assert_eq!(channel_to_frequency(14), 2484);
    }

    #[test]
    fn unsupported_channels_map_to_zero() {
        for channel in [0, -1, i32::MIN, 15, 36, 165, i32::MAX] {
            assert_eq!(channel_to_frequency(channel), 0, "channel {}", channel);
        }
    }
}
