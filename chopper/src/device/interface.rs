use nlradio::WirelessInterface;

use crate::error::Error;

/// Pick `name` out of an interface dump and make sure it is in monitor mode.
pub fn find_monitor_interface(
    interfaces: &[WirelessInterface],
    name: &str,
) -> Result<WirelessInterface, Error> {
    let iface = interfaces
        .iter()
        .find(|iface| iface.name == name)
        .ok_or_else(|| Error::InterfaceNotFound(name.to_owned()))?;

    if !iface.is_monitor() {
        return Err(Error::NotMonitor(name.to_owned()));
    }

    Ok(iface.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nlradio::InterfaceType;

    fn dump() -> Vec<WirelessInterface> {
        vec![
            WirelessInterface::new("wlan0", 3, InterfaceType::Station),
            WirelessInterface::new("wlan1mon", 7, InterfaceType::Monitor),
        ]
    }

    #[test]
    fn finds_monitor_interface() {
        let iface = find_monitor_interface(&dump(), "wlan1mon").unwrap();
        assert_eq!(iface.index, 7);
    }

    #[test]
    fn missing_interface() {
        let err = find_monitor_interface(&dump(), "wlan9").unwrap_err();
        assert!(matches!(err, Error::InterfaceNotFound(ref name) if name == "wlan9"));
        assert_eq!(err.to_string(), "cannot find wlan9");
    }

    #[test]
    fn interface_not_in_monitor_mode() {
        let err = find_monitor_interface(&dump(), "wlan0").unwrap_err();
        assert_eq!(err.to_string(), "wlan0 is not in monitor mode");
    }

    #[test]
    fn empty_dump() {
        assert!(find_monitor_interface(&[], "wlan0").is_err());
    }
}
