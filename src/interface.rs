/// Operating mode of a wireless interface (`enum nl80211_iftype`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceType {
    Unspecified,
    Adhoc,
    Station,
    Ap,
    ApVlan,
    Wds,
    Monitor,
    MeshPoint,
    P2pClient,
    P2pGo,
    P2pDevice,
    Ocb,
    Nan,
    Unknown(u32),
}

impl From<u32> for InterfaceType {
    fn from(value: u32) -> Self {
        match value {
            0 => InterfaceType::Unspecified,
            1 => InterfaceType::Adhoc,
            2 => InterfaceType::Station,
            3 => InterfaceType::Ap,
            4 => InterfaceType::ApVlan,
            5 => InterfaceType::Wds,
            6 => InterfaceType::Monitor,
            7 => InterfaceType::MeshPoint,
            8 => InterfaceType::P2pClient,
            9 => InterfaceType::P2pGo,
            10 => InterfaceType::P2pDevice,
            11 => InterfaceType::Ocb,
            12 => InterfaceType::Nan,
            other => InterfaceType::Unknown(other),
        }
    }
}

/// A wireless interface as reported by an nl80211 interface dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirelessInterface {
    pub name: String,
    pub index: u32,
    pub iftype: InterfaceType,
}

impl WirelessInterface {
    pub fn new(name: impl Into<String>, index: u32, iftype: InterfaceType) -> Self {
        Self {
            name: name.into(),
            index,
            iftype,
        }
    }

    pub fn is_monitor(&self) -> bool {
        self.iftype == InterfaceType::Monitor
    }
}
