use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "chopper",
    version,
    about = "Hop a monitor-mode wireless interface across 2.4 GHz channels"
)]
pub struct Cli {
    // ── Hopping ────────────────────────────────────────────────────
    /// Interface name (must be in monitor mode)
    #[arg(short, long, help_heading = "Hopping")]
    pub interface: Option<String>,

    /// Comma-separated list of channels (default: 1,8,2,9,3,10,4,11,5,12,6,13,7)
    #[arg(short, long, default_value = "", hide_default_value = true, help_heading = "Hopping")]
    pub channels: String,

    /// Delay between each hop in milliseconds [default: 200]
    #[arg(short, long, allow_negative_numbers = true, help_heading = "Hopping")]
    pub delay: Option<i64>,

    /// Exit the program after X seconds
    #[arg(short, long, allow_negative_numbers = true, help_heading = "Hopping")]
    pub timeout: Option<i64>,

    // ── Logging ────────────────────────────────────────────────────
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", help_heading = "Logging")]
    pub log_level: String,

    /// Directory for log files
    #[arg(long, default_value = "./logs", help_heading = "Logging")]
    pub log_dir: String,

    /// Enable file logging (console logging always enabled)
    #[arg(long, action, help_heading = "Logging")]
    pub log_to_file: bool,
}

impl Cli {
    /// The interface name, if one was given and is not blank.
    pub fn interface(&self) -> Option<&str> {
        self.interface.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from([
            "chopper", "-i", "wlan0mon", "-c", "1,6,11", "-d", "150", "-t", "30",
        ])
        .unwrap();
        assert_eq!(cli.interface(), Some("wlan0mon"));
        assert_eq!(cli.channels, "1,6,11");
        assert_eq!(cli.delay, Some(150));
        assert_eq!(cli.timeout, Some(30));
        assert!(!cli.log_to_file);
    }

    #[test]
    fn defaults_leave_optional_flags_unset() {
        let cli = Cli::try_parse_from(["chopper", "--interface", "mon0"]).unwrap();
        assert_eq!(cli.channels, "");
        assert_eq!(cli.delay, None);
        assert_eq!(cli.timeout, None);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn missing_or_blank_interface() {
        let cli = Cli::try_parse_from(["chopper"]).unwrap();
        assert_eq!(cli.interface(), None);

        let cli = Cli::try_parse_from(["chopper", "-i", ""]).unwrap();
        assert_eq!(cli.interface(), None);
    }

    #[test]
    fn negative_values_are_accepted() {
        let cli = Cli::try_parse_from(["chopper", "-i", "mon0", "-t", "-5", "-d", "-1"]).unwrap();
        assert_eq!(cli.timeout, Some(-5));
        assert_eq!(cli.delay, Some(-1));
    }

    #[test]
    fn help_and_version() {
        let err = Cli::try_parse_from(["chopper", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["chopper", "-V"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
