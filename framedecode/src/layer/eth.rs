use core::fmt;

use crate::diag::Diagnostics;
use crate::wire::{ethernet_frame, EthernetAddress, EthernetProtocol, Result, View};
use crate::wire::ETHERNET_HEADER_LEN;
use super::{dispatch_ethertype, Layer, Raw};

/// A decoded Ethernet II header, the root of every chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthernetII<'a> {
    raw: View<'a>,
    dst: EthernetAddress,
    src: EthernetAddress,
    type_field: u16,
    payload: Box<Layer<'a>>,
}

impl<'a> EthernetII<'a> {
    /// Decode the header and everything it encapsulates.
    ///
    /// Fails with `Error::Truncated` when the view is shorter than the 14 byte header. This is the
    /// only failure of a whole decode, any later layer falls back to raw bytes instead.
    pub(crate) fn decode(view: View<'a>, diag: &mut Diagnostics) -> Result<Self> {
        let frame = ethernet_frame::new_checked(view.as_bytes())?;
        let type_field = frame.type_field();
        let rest = view.slice_from(ETHERNET_HEADER_LEN);

        // Values up to 1500 are an IEEE 802.3 length, not an EtherType.
        let payload = if EthernetProtocol::is_length(type_field) {
            Layer::Raw(Raw::new(rest))
        } else {
            dispatch_ethertype(frame.ethertype(), rest, diag)
        };

        Ok(EthernetII {
            raw: view,
            dst: frame.dst_addr(),
            src: frame.src_addr(),
            type_field,
            payload: Box::new(payload),
        })
    }

    /// The whole frame.
    pub fn raw(&self) -> View<'a> {
        self.raw
    }

    /// The destination hardware address.
    pub fn dst(&self) -> EthernetAddress {
        self.dst
    }

    /// The source hardware address.
    pub fn src(&self) -> EthernetAddress {
        self.src
    }

    /// The type field as found on the wire, an EtherType or an 802.3 length.
    pub fn type_field(&self) -> u16 {
        self.type_field
    }

    /// The type field interpreted as an EtherType.
    pub fn ethertype(&self) -> EthernetProtocol {
        EthernetProtocol::from(self.type_field)
    }

    /// Query whether the type field holds an IEEE 802.3 payload length.
    pub fn is_length(&self) -> bool {
        EthernetProtocol::is_length(self.type_field)
    }

    /// The encapsulated layer.
    pub fn payload(&self) -> &Layer<'a> {
        &self.payload
    }

    /// The labels of this layer and all encapsulated layers.
    pub fn stack(&self) -> Vec<&'static str> {
        let mut stack = vec![super::Kind::EthernetII.name()];
        stack.extend(self.payload.stack());
        stack
    }
}

impl fmt::Display for EthernetII<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EthernetII src={} dst={} type=0x{:04x}", self.src, self.dst, self.type_field)
    }
}
