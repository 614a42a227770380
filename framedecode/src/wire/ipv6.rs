use core::fmt;
use byteorder::{ByteOrder, NetworkEndian};

use super::{Error, Result};

pub(crate) use super::IpProtocol as Protocol;

/// Length of the fixed IPv6 header.
pub const HEADER_LEN: usize = field::DST_ADDR.end;

/// A sixteen-octet IPv6 address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct Address(pub [u8; 16]);

impl Address {
    /// Construct an IPv6 address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not sixteen octets long.
    pub fn from_bytes(data: &[u8]) -> Address {
        let mut bytes = [0; 16];
        bytes.copy_from_slice(data);
        Address(bytes)
    }

    /// Return an IPv6 address as a sequence of octets, in big-endian.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Write the address as a sequence of 8 16-bit words.
    pub fn write_parts(&self, data: &mut [u16; 8]) {
        for (word, chunk) in data.iter_mut().zip(self.0.chunks(2)) {
            *word = NetworkEndian::read_u16(chunk);
        }
    }
}

/// All eight groups, four hex digits each, no zero compression.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut words = [0u16; 8];
        self.write_parts(&mut words);
        for (idx, word) in words.iter().enumerate() {
            if idx > 0 {
                write!(f, ":")?;
            }
            write!(f, "{:04x}", word)?;
        }
        Ok(())
    }
}

byte_wrapper! {
    /// A byte sequence representing an IPv6 packet.
    #[derive(Debug, PartialEq, Eq)]
    pub struct ipv6([u8]);
}

mod field {
    use crate::wire::field::Field;
    // 4-bit version number, 8-bit traffic class, and the
    // 20-bit flow label.
    pub(crate) const VER_TC_FLOW: Field = 0..4;
    // 16-bit value representing the length of the payload.
    // Note: Extension headers would be included in this length.
    pub(crate) const LENGTH:      Field = 4..6;
    // 8-bit value identifying the type of header following this
    // one. Note: The same numbers are used in IPv4.
    pub(crate) const NXT_HDR:     usize = 6;
    // 8-bit value decremented by each node that forwards this
    // packet. The packet is discarded when the value is 0.
    pub(crate) const HOP_LIMIT:   usize = 7;
    // IPv6 address of the source node.
    pub(crate) const SRC_ADDR:    Field = 8..24;
    // IPv6 address of the destination node.
    pub(crate) const DST_ADDR:    Field = 24..40;
}

impl ipv6 {
    /// Imbue a raw octet buffer with IPv6 packet structure, after checking its length.
    #[inline]
    pub fn new_checked(buffer: &[u8]) -> Result<&Self> {
        let packet = Self::__from_macro_new_unchecked(buffer);
        packet.check_len()?;
        Ok(packet)
    }

    /// View the packet as a raw byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Ensure that no accessor method will panic if called.
    /// Returns `Err(Error::Truncated)` if the buffer is too short for the fixed header.
    ///
    /// The payload length field is not checked against the buffer.
    #[inline]
    pub fn check_len(&self) -> Result<()> {
        if self.0.len() < field::DST_ADDR.end {
            Err(Error::Truncated)
        } else {
            Ok(())
        }
    }

    /// Return the header length.
    #[inline]
    pub fn header_len(&self) -> usize {
        field::DST_ADDR.end
    }

    /// Return the version field.
    #[inline]
    pub fn version(&self) -> u8 {
        self.0[field::VER_TC_FLOW.start] >> 4
    }

    /// Return the traffic class.
    ///
    /// Its high nibble is the low nibble of the first byte, its low nibble the high nibble of the
    /// second byte.
    #[inline]
    pub fn traffic_class(&self) -> u8 {
        ((NetworkEndian::read_u16(&self.0[0..2]) & 0x0ff0) >> 4) as u8
    }

    /// Return the differentiated services field, the upper six bits of the traffic class.
    #[inline]
    pub fn ds_field(&self) -> u8 {
        self.traffic_class() >> 2
    }

    /// Return the explicit congestion notification, the lower two bits of the traffic class.
    #[inline]
    pub fn ecn(&self) -> u8 {
        self.traffic_class() & 0x03
    }

    /// Return the flow label field.
    #[inline]
    pub fn flow_label(&self) -> u32 {
        NetworkEndian::read_u24(&self.0[1..4]) & 0x000fffff
    }

    /// Return the payload length field.
    #[inline]
    pub fn payload_len(&self) -> u16 {
        NetworkEndian::read_u16(&self.0[field::LENGTH])
    }

    /// Return the payload length added to the known header length.
    #[inline]
    pub fn total_len(&self) -> usize {
        self.header_len() + self.payload_len() as usize
    }

    /// Return the next header field.
    #[inline]
    pub fn next_header(&self) -> Protocol {
        Protocol::from(self.0[field::NXT_HDR])
    }

    /// Return the hop limit field.
    #[inline]
    pub fn hop_limit(&self) -> u8 {
        self.0[field::HOP_LIMIT]
    }

    /// Return the source address field.
    #[inline]
    pub fn src_addr(&self) -> Address {
        Address::from_bytes(&self.0[field::SRC_ADDR])
    }

    /// Return the destination address field.
    #[inline]
    pub fn dst_addr(&self) -> Address {
        Address::from_bytes(&self.0[field::DST_ADDR])
    }
}
