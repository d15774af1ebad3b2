// STD LIB
use std::io;

// THIRD PARTY CRATES
use neli::{
    consts::{
        nl::{NlmF, NlmFFlags, Nlmsg},
        socket::NlFamily,
    },
    genl::{Genlmsghdr, Nlattr},
    nl::{NlPayload, Nlmsghdr},
    socket::NlSocketHandle,
    types::{Buffer, GenlBuffer},
};
use tracing::{debug, trace};

// LOCAL CRATE
use crate::consts::{Nl80211Attribute, Nl80211Command, NL80211_GENL_NAME, NL80211_GENL_VERSION};
use crate::error::{Error, Result};
use crate::{ChannelSetting, InterfaceType, WirelessInterface};

type Nl80211Message = Genlmsghdr<Nl80211Command, Nl80211Attribute>;
type Nl80211Attrs = GenlBuffer<Nl80211Attribute, Buffer>;

/// An open generic netlink socket bound to the resolved nl80211 family.
///
/// The socket is closed when this value is dropped.
pub struct Nl80211 {
    socket: NlSocketHandle,
    family_id: u16,
}

impl Nl80211 {
    /// Open a generic netlink socket and resolve the nl80211 family on it.
    pub fn connect() -> Result<Self> {
        let mut socket = NlSocketHandle::connect(NlFamily::Generic, None, &[])?;
        let family_id = socket
            .resolve_genl_family(NL80211_GENL_NAME)
            .map_err(|e| Error::FamilyUnavailable {
                family: NL80211_GENL_NAME,
                reason: e.to_string(),
            })?;
        debug!(family_id, "resolved {} family", NL80211_GENL_NAME);

        Ok(Self { socket, family_id })
    }

    pub fn family_id(&self) -> u16 {
        self.family_id
    }

    /// Dump every wireless interface known to the kernel.
    ///
    /// Entries without a netdev (P2P device wdevs) are skipped.
    pub fn interfaces(&mut self) -> Result<Vec<WirelessInterface>> {
        let request = self.request(
            Nl80211Command::GetInterface,
            &[NlmF::Request, NlmF::Dump],
            Nl80211Attrs::new(),
        );
        self.socket.send(request).map_err(Error::netlink)?;

        let mut interfaces = Vec::new();
        for response in self.socket.iter::<Nlmsg, Nl80211Message>(false) {
            let response = response.map_err(Error::netlink)?;
            match response.nl_payload {
                NlPayload::Payload(msg) => match parse_interface(&msg) {
                    Some(iface) => interfaces.push(iface),
                    None => trace!("skipping interface entry without a netdev"),
                },
                NlPayload::Err(err) => return Err(kernel_error(err.error)),
                _ => {}
            }
        }

        debug!(count = interfaces.len(), "enumerated wireless interfaces");
        Ok(interfaces)
    }

    /// Submit an `NL80211_CMD_SET_CHANNEL` request and wait for the kernel's
    /// acknowledgment.
    pub fn set_channel(&mut self, setting: &ChannelSetting) -> Result<()> {
        let mut attrs = Nl80211Attrs::new();
        for (attr, value) in [
            (Nl80211Attribute::Ifindex, setting.ifindex),
            (Nl80211Attribute::WiphyFreq, setting.frequency),
            (Nl80211Attribute::ChannelWidth, setting.width as u32),
            (Nl80211Attribute::WiphyChannelType, setting.channel_type as u32),
        ] {
            attrs.push(Nlattr::new(false, false, attr, value).map_err(Error::netlink)?);
        }

        let request = self.request(
            Nl80211Command::SetChannel,
            &[NlmF::Request, NlmF::Ack],
            attrs,
        );
        self.socket.send(request).map_err(Error::netlink)?;

        let ack: Option<Nlmsghdr<Nlmsg, Nl80211Message>> =
            self.socket.recv().map_err(Error::netlink)?;
        match ack.map(|msg| msg.nl_payload) {
            Some(NlPayload::Ack(_)) => Ok(()),
            Some(NlPayload::Err(err)) => Err(kernel_error(err.error)),
            _ => Err(Error::MissingAck),
        }
    }

    fn request(
        &self,
        cmd: Nl80211Command,
        flags: &[NlmF],
        attrs: Nl80211Attrs,
    ) -> Nlmsghdr<u16, Nl80211Message> {
        Nlmsghdr::new(
            None,
            self.family_id,
            NlmFFlags::new(flags),
            None,
            None,
            NlPayload::Payload(Genlmsghdr::new(cmd, NL80211_GENL_VERSION, attrs)),
        )
    }
}

fn parse_interface(msg: &Nl80211Message) -> Option<WirelessInterface> {
    let attrs = msg.get_attr_handle();
    let name = attrs
        .get_attr_payload_as_with_len::<String>(Nl80211Attribute::Ifname)
        .ok()?;
    let index = attrs
        .get_attr_payload_as::<u32>(Nl80211Attribute::Ifindex)
        .ok()?;
    let iftype = attrs
        .get_attr_payload_as::<u32>(Nl80211Attribute::Iftype)
        .map(InterfaceType::from)
        .unwrap_or(InterfaceType::Unspecified);

    Some(WirelessInterface::new(name, index, iftype))
}

// Netlink error payloads carry a negated errno.
fn kernel_error(errno: i32) -> Error {
    Error::Kernel(io::Error::from_raw_os_error(errno.saturating_abs()))
}
