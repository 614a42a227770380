use core::fmt;

use crate::diag::{Diagnostic, Diagnostics};
use crate::wire::{ipv4_packet, IpProtocol, Ipv4Address, Result, View};
use super::{declared_end, dispatch_protocol, Kind, Layer};

/// A decoded IPv4 header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4<'a> {
    raw: View<'a>,
    version: u8,
    ihl: u8,
    dscp: u8,
    ecn: u8,
    length: u16,
    identification: u16,
    flags: u8,
    fragment_offset: u16,
    ttl: u8,
    protocol: IpProtocol,
    header_checksum: u16,
    src: Ipv4Address,
    dst: Ipv4Address,
    options: View<'a>,
    payload: Box<Layer<'a>>,
}

impl<'a> Ipv4<'a> {
    /// Decode the header and dispatch its payload on the protocol field.
    ///
    /// Fails when the view can not hold the header announced by `ihl`, or when `ihl` is below 5.
    pub(crate) fn decode(view: View<'a>, diag: &mut Diagnostics) -> Result<Self> {
        let packet = ipv4_packet::new_checked(view.as_bytes())?;

        let version = packet.version();
        if version != 4 {
            diag.report(Diagnostic::InvalidVersion { layer: Kind::Ipv4, found: version });
        }

        let header_len = packet.header_len();
        let length = packet.total_len();
        let end = declared_end(Kind::Ipv4, header_len, length.into(), view.len(), diag);

        let protocol = packet.protocol();
        let payload = dispatch_protocol(Kind::Ipv4, protocol, view.slice(header_len..end), diag);

        Ok(Ipv4 {
            raw: view,
            version,
            ihl: packet.ihl(),
            dscp: packet.dscp(),
            ecn: packet.ecn(),
            length,
            identification: packet.ident(),
            flags: packet.flags(),
            fragment_offset: packet.frag_offset(),
            ttl: packet.hop_limit(),
            protocol,
            header_checksum: packet.checksum(),
            src: packet.src_addr(),
            dst: packet.dst_addr(),
            options: view.slice(packet.options_range()),
            payload: Box::new(payload),
        })
    }

    /// All bytes handed to this layer, including any trailer past the declared length.
    pub fn raw(&self) -> View<'a> {
        self.raw
    }

    /// The version field, 4 unless a diagnostic was recorded.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The header length in 32-bit words.
    pub fn ihl(&self) -> u8 {
        self.ihl
    }

    /// The header length in octets.
    pub fn header_len(&self) -> usize {
        usize::from(self.ihl) * 4
    }

    /// The differentiated services code point.
    pub fn dscp(&self) -> u8 {
        self.dscp
    }

    /// The explicit congestion notification.
    pub fn ecn(&self) -> u8 {
        self.ecn
    }

    /// The declared total length, header included.
    pub fn length(&self) -> u16 {
        self.length
    }

    /// The identification field.
    pub fn identification(&self) -> u16 {
        self.identification
    }

    /// The three flag bits: reserved, don't fragment, more fragments.
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Query the don't fragment flag.
    pub fn dont_frag(&self) -> bool {
        self.flags & 0b010 != 0
    }

    /// Query the more fragments flag.
    pub fn more_frags(&self) -> bool {
        self.flags & 0b001 != 0
    }

    /// The fragment offset in units of 8 octets.
    pub fn fragment_offset(&self) -> u16 {
        self.fragment_offset
    }

    /// The time to live.
    pub fn ttl(&self) -> u8 {
        self.ttl
    }

    /// The protocol of the payload.
    pub fn protocol(&self) -> IpProtocol {
        self.protocol
    }

    /// The header checksum as found, it is not verified.
    pub fn header_checksum(&self) -> u16 {
        self.header_checksum
    }

    /// The source address.
    pub fn src(&self) -> Ipv4Address {
        self.src
    }

    /// The destination address.
    pub fn dst(&self) -> Ipv4Address {
        self.dst
    }

    /// The option bytes, empty when `ihl` is 5.
    pub fn options(&self) -> View<'a> {
        self.options
    }

    /// The encapsulated layer.
    pub fn payload(&self) -> &Layer<'a> {
        &self.payload
    }

    /// The labels of this layer and all encapsulated layers.
    pub fn stack(&self) -> Vec<&'static str> {
        let mut stack = vec![Kind::Ipv4.name()];
        stack.extend(self.payload.stack());
        stack
    }
}

impl fmt::Display for Ipv4<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IPv4 src={} dst={} proto={} ttl={} len={}",
               self.src, self.dst, self.protocol, self.ttl, self.length)
    }
}
