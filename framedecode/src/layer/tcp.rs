use core::fmt;

use crate::wire::{tcp_packet, Result, TcpFlags, View};
use super::Kind;

/// A decoded TCP header, the segment data is left undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tcp<'a> {
    raw: View<'a>,
    sport: u16,
    dport: u16,
    sequence_number: u32,
    acknowledgment_number: u32,
    data_offset: u8,
    reserved: u8,
    flags: TcpFlags,
    window_size: u16,
    checksum: u16,
    urgent_pointer: u16,
    options: View<'a>,
    payload: View<'a>,
}

impl<'a> Tcp<'a> {
    /// Decode the header, fails when the data offset is below 5 or beyond the view.
    pub(crate) fn decode(view: View<'a>) -> Result<Self> {
        let packet = tcp_packet::new_checked(view.as_bytes())?;

        Ok(Tcp {
            raw: view,
            sport: packet.src_port(),
            dport: packet.dst_port(),
            sequence_number: packet.seq_number(),
            acknowledgment_number: packet.ack_number(),
            data_offset: packet.data_offset(),
            reserved: packet.reserved(),
            flags: packet.flags(),
            window_size: packet.window_len(),
            checksum: packet.checksum(),
            urgent_pointer: packet.urgent_at(),
            options: view.slice(packet.options_range()),
            payload: view.slice_from(packet.header_len()),
        })
    }

    /// The whole segment.
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

    /// The sequence number.
    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    /// The acknowledgment number.
    pub fn acknowledgment_number(&self) -> u32 {
        self.acknowledgment_number
    }

    /// The header length in 32-bit words.
    pub fn data_offset(&self) -> u8 {
        self.data_offset
    }

    /// The header length in octets.
    pub fn header_len(&self) -> usize {
        usize::from(self.data_offset) * 4
    }

    /// The three reserved bits.
    pub fn reserved(&self) -> u8 {
        self.reserved
    }

    /// All nine control bits.
    pub fn flags(&self) -> TcpFlags {
        self.flags
    }

    /// The NS flag.
    pub fn flag_ns(&self) -> bool {
        self.flags.ns()
    }

    /// The CWR flag.
    pub fn flag_cwr(&self) -> bool {
        self.flags.cwr()
    }

    /// The ECE flag.
    pub fn flag_ece(&self) -> bool {
        self.flags.ece()
    }

    /// The URG flag.
    pub fn flag_urg(&self) -> bool {
        self.flags.urg()
    }

    /// The ACK flag.
    pub fn flag_ack(&self) -> bool {
        self.flags.ack()
    }

    /// The PSH flag.
    pub fn flag_psh(&self) -> bool {
        self.flags.psh()
    }

    /// The RST flag.
    pub fn flag_rst(&self) -> bool {
        self.flags.rst()
    }

    /// The SYN flag.
    pub fn flag_syn(&self) -> bool {
        self.flags.syn()
    }

    /// The FIN flag.
    pub fn flag_fin(&self) -> bool {
        self.flags.fin()
    }

    /// The window size.
    pub fn window_size(&self) -> u16 {
        self.window_size
    }

    /// The checksum as found, it is not verified.
    pub fn checksum(&self) -> u16 {
        self.checksum
    }

    /// The urgent pointer.
    pub fn urgent_pointer(&self) -> u16 {
        self.urgent_pointer
    }

    /// The option bytes, empty when the data offset is 5.
    pub fn options(&self) -> View<'a> {
        self.options
    }

    /// The segment data following the header.
    pub fn payload(&self) -> View<'a> {
        self.payload
    }

    /// The label of this layer, the payload is not decoded.
    pub fn stack(&self) -> Vec<&'static str> {
        vec![Kind::Tcp.name()]
    }
}

impl fmt::Display for Tcp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TCP src={} dst={}{:?} seq={} ack={} win={} len={}",
               self.sport, self.dport, self.flags,
               self.sequence_number, self.acknowledgment_number, self.window_size,
               self.payload.len())
    }
}
