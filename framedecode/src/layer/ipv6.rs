use core::fmt;

use crate::diag::{Diagnostic, Diagnostics};
use crate::wire::{ipv6_packet, IpProtocol, Ipv6Address, Result, View};
use crate::wire::IPV6_HEADER_LEN;
use super::{declared_end, dispatch_protocol, Kind, Layer};

/// A decoded fixed IPv6 header.
///
/// Extension headers are not decoded. A next header naming one of them leaves the payload raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv6<'a> {
    raw: View<'a>,
    version: u8,
    traffic_class: u8,
    flow_label: u32,
    payload_length: u16,
    next_header: IpProtocol,
    hop_limit: u8,
    src: Ipv6Address,
    dst: Ipv6Address,
    payload: Box<Layer<'a>>,
}

impl<'a> Ipv6<'a> {
    /// Decode the header and dispatch its payload on the next header field.
    pub(crate) fn decode(view: View<'a>, diag: &mut Diagnostics) -> Result<Self> {
        let packet = ipv6_packet::new_checked(view.as_bytes())?;

        let version = packet.version();
        if version != 6 {
            diag.report(Diagnostic::InvalidVersion { layer: Kind::Ipv6, found: version });
        }

        let end = declared_end(Kind::Ipv6, IPV6_HEADER_LEN, packet.total_len(), view.len(), diag);
        let next_header = packet.next_header();
        let rest = view.slice(IPV6_HEADER_LEN..end);
        let payload = dispatch_protocol(Kind::Ipv6, next_header, rest, diag);

        Ok(Ipv6 {
            raw: view,
            version,
            traffic_class: packet.traffic_class(),
            flow_label: packet.flow_label(),
            payload_length: packet.payload_len(),
            next_header,
            hop_limit: packet.hop_limit(),
            src: packet.src_addr(),
            dst: packet.dst_addr(),
            payload: Box::new(payload),
        })
    }

    /// All bytes handed to this layer.
    pub fn raw(&self) -> View<'a> {
        self.raw
    }

    /// The version field, 6 unless a diagnostic was recorded.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The eight bit traffic class.
    pub fn traffic_class(&self) -> u8 {
        self.traffic_class
    }

    /// The differentiated services field, upper six bits of the traffic class.
    pub fn ds_field(&self) -> u8 {
        self.traffic_class >> 2
    }

    /// The explicit congestion notification, lower two bits of the traffic class.
    pub fn ecn(&self) -> u8 {
        self.traffic_class & 0x03
    }

    /// The 20-bit flow label.
    pub fn flow_label(&self) -> u32 {
        self.flow_label
    }

    /// The declared length of everything after the fixed header.
    pub fn payload_length(&self) -> u16 {
        self.payload_length
    }

    /// The protocol of the payload.
    pub fn next_header(&self) -> IpProtocol {
        self.next_header
    }

    /// The hop limit.
    pub fn hop_limit(&self) -> u8 {
        self.hop_limit
    }

    /// The source address.
    pub fn src(&self) -> Ipv6Address {
        self.src
    }

    /// The destination address.
    pub fn dst(&self) -> Ipv6Address {
        self.dst
    }

    /// The encapsulated layer.
    pub fn payload(&self) -> &Layer<'a> {
        &self.payload
    }

    /// The labels of this layer and all encapsulated layers.
    pub fn stack(&self) -> Vec<&'static str> {
        let mut stack = vec![Kind::Ipv6.name()];
        stack.extend(self.payload.stack());
        stack
    }
}

impl fmt::Display for Ipv6<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IPv6 src={} dst={} nxt_hdr={} hop_limit={}",
               self.src, self.dst, self.next_header, self.hop_limit)
    }
}
