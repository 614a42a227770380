use byteorder::{ByteOrder, NetworkEndian};

use super::{Error, Result};

/// Length of the UDP header.
pub const HEADER_LEN: usize = field::CHECKSUM.end;

byte_wrapper! {
    /// A byte sequence representing a UDP datagram.
    #[derive(Debug, PartialEq, Eq)]
    pub struct udp([u8]);
}

mod field {
    use crate::wire::field::Field;

    pub(crate) const SRC_PORT: Field = 0..2;
    pub(crate) const DST_PORT: Field = 2..4;
    pub(crate) const LENGTH:   Field = 4..6;
    pub(crate) const CHECKSUM: Field = 6..8;
}

impl udp {
    /// Imbue a raw octet buffer with UDP datagram structure, after checking its length.
    pub fn new_checked(data: &[u8]) -> Result<&Self> {
        let packet = Self::__from_macro_new_unchecked(data);
        packet.check_len()?;
        Ok(packet)
    }

    /// View the datagram as a raw byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Ensure that no accessor method will panic if called.
    /// Returns `Err(Error::Truncated)` if the buffer is shorter than the header.
    ///
    /// The length field is not checked against the buffer.
    pub fn check_len(&self) -> Result<()> {
        if self.0.len() < field::CHECKSUM.end {
            Err(Error::Truncated)
        } else {
            Ok(())
        }
    }

    /// Return the source port field.
    #[inline]
    pub fn src_port(&self) -> u16 {
        NetworkEndian::read_u16(&self.0[field::SRC_PORT])
    }

    /// Return the destination port field.
    #[inline]
    pub fn dst_port(&self) -> u16 {
        NetworkEndian::read_u16(&self.0[field::DST_PORT])
    }

    /// Return the length field, header included.
    #[inline]
    pub fn len(&self) -> u16 {
        NetworkEndian::read_u16(&self.0[field::LENGTH])
    }

    /// Return the checksum field.
    #[inline]
    pub fn checksum(&self) -> u16 {
        NetworkEndian::read_u16(&self.0[field::CHECKSUM])
    }
}
