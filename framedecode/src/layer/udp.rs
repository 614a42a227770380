use core::fmt;

use crate::diag::Diagnostics;
use crate::wire::{udp_packet, Result, View, UDP_HEADER_LEN};
use super::{declared_end, Kind};

/// A decoded UDP header, the datagram data is left undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Udp<'a> {
    raw: View<'a>,
    sport: u16,
    dport: u16,
    length: u16,
    checksum: u16,
    payload: View<'a>,
}

impl<'a> Udp<'a> {
    /// Decode the header and bound the payload by the declared length.
    pub(crate) fn decode(view: View<'a>, diag: &mut Diagnostics) -> Result<Self> {
        let packet = udp_packet::new_checked(view.as_bytes())?;
        let length = packet.len();
        let end = declared_end(Kind::Udp, UDP_HEADER_LEN, length.into(), view.len(), diag);

        Ok(Udp {
            raw: view,
            sport: packet.src_port(),
            dport: packet.dst_port(),
            length,
            checksum: packet.checksum(),
            payload: view.slice(UDP_HEADER_LEN..end),
        })
    }

    /// All bytes handed to this layer.
    pub fn raw(&self) -> View<'a> {
        self.raw
    }

    /// The source port.
    pub fn sport(&self) -> u16 {
        self.sport
    }

    /// The destination port.
    pub fn dport(&self) -> u16 {
        self.dport
    }

    /// The declared length, header included.
    pub fn length(&self) -> u16 {
        self.length
    }

    /// The checksum as found, it is not verified.
    pub fn checksum(&self) -> u16 {
        self.checksum
    }

    /// The datagram data.
    pub fn payload(&self) -> View<'a> {
        self.payload
    }

    /// The label of this layer, the payload is not decoded.
    pub fn stack(&self) -> Vec<&'static str> {
        vec![Kind::Udp.name()]
    }
}

impl fmt::Display for Udp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UDP src={} dst={} len={}", self.sport, self.dport, self.length)
    }
}
