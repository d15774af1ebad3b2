use regex::Regex;
use tracing::warn;

/// Interleaved order that visits the non-overlapping channels early.
pub const DEFAULT_CHANNELS: [i32; 13] = [1, 8, 2, 9, 3, 10, 4, 11, 5, 12, 6, 13, 7];

/// Parse a comma-separated channel list.
///
/// Everything except ASCII digits and commas is dropped before splitting, so
/// stray letters vanish and space-separated numbers run together (`"1 2 3"`
/// is channel `123`). Empty tokens and zero are skipped; tokens that do not
/// fit an `i32` are skipped with a warning. Order and duplicates are kept.
pub fn parse_channels(input: &str) -> Result<Vec<i32>, regex::Error> {
    let strip = Regex::new("[^0-9,]+")?;
    let cleaned = strip.replace_all(input, "");

    let mut channels = Vec::new();
    for token in cleaned.split(',') {
        if token.is_empty() {
            continue;
        }

        let channel = match token.parse::<i32>() {
            Ok(channel) => channel,
            Err(e) => {
                warn!("there was an error parsing channel {:?}: {}", token, e);
                continue;
            }
        };

        if channel != 0 {
            channels.push(channel);
        }
    }

    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<i32> {
        parse_channels(input).unwrap()
    }

    #[test]
    fn plain_list() {
        assert_eq!(parse("1,2,3"), vec![1, 2, 3]);
    }

    #[test]
    fn zero_is_not_a_channel() {
        assert!(parse("0").is_empty());
        assert_eq!(parse("0,6,00"), vec![6]);
    }

    #[test]
    fn empty_tokens() {
        assert_eq!(parse("1,,"), vec![1]);
        assert_eq!(parse(",,3"), vec![3]);
        assert!(parse(",,").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn letters_are_stripped() {
        assert_eq!(parse("asd1,2,3"), vec![1, 2, 3]);
        assert_eq!(parse("1asd,2,3"), vec![1, 2, 3]);
        assert_eq!(parse("1a,sd2,3"), vec![1, 2, 3]);
    }

    #[test]
    fn spaces_join_digits() {
        assert_eq!(parse("1 2 3"), vec![123]);
        assert_eq!(parse("1, 6, 11"), vec![1, 6, 11]);
    }

    #[test]
    fn minus_sign_is_stripped() {
        assert_eq!(parse("-1,2"), vec![1, 2]);
    }

    #[test]
    fn overflow_is_skipped() {
        assert_eq!(parse("99999999999,6"), vec![6]);
        assert_eq!(parse("2147483647"), vec![i32::MAX]);
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(parse("1,1,6,1"), vec![1, 1, 6, 1]);
    }
}
