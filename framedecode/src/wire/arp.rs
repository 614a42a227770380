use byteorder::{ByteOrder, NetworkEndian};

use super::{Error, Result};

use super::EthernetProtocol as Protocol;
use super::EthernetAddress as Address;
use super::Ipv4Address as IpAddress;

enum_with_unknown! {
    /// ARP hardware type.
    pub enum Hardware(u16) {
        /// Ethernet (10Mb).
        Ethernet = 1
    }
}

enum_with_unknown! {
    /// ARP operation type.
    pub enum Operation(u16) {
        /// A request for the hardware address of the target.
        Request = 1,
        /// The answer to a request.
        Reply = 2
    }
}

/// Length of an ARP packet for Ethernet hardware and IPv4 protocol addresses.
pub const PACKET_LEN: usize = field::TPA.end;

byte_wrapper!{
    /// A byte sequence representing an ARP packet for Ethernet and IPv4.
    #[derive(Debug, PartialEq, Eq)]
    pub struct arp([u8]);
}

mod field {
    use crate::wire::field::*;

    pub(crate) const HTYPE: Field = 0..2;
    pub(crate) const PTYPE: Field = 2..4;
    pub(crate) const HLEN: usize = 4;
    pub(crate) const PLEN: usize = 5;
    pub(crate) const OPER: Field = 6..8;

    // The address offsets assume six octet hardware and four octet protocol addresses.
    pub(crate) const SHA: Field =  8..14;
    pub(crate) const SPA: Field = 14..18;
    pub(crate) const THA: Field = 18..24;
    pub(crate) const TPA: Field = 24..28;
}

impl arp {
    /// Imbue a raw octet buffer with ARP packet structure, after checking its length.
    pub fn new_checked(data: &[u8]) -> Result<&arp> {
        let packet = Self::__from_macro_new_unchecked(data);
        packet.check_len()?;
        Ok(packet)
    }

    /// Unwrap the packet as a raw byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Ensure that no accessor method will panic if called.
    /// Returns `Err(Error::Truncated)` if the buffer is shorter than the 28 octets of an
    /// Ethernet/IPv4 packet.
    pub fn check_len(&self) -> Result<()> {
        if self.0.len() < field::TPA.end {
            Err(Error::Truncated)
        } else {
            Ok(())
        }
    }

    /// Return the hardware type field.
    #[inline]
    pub fn hardware_type(&self) -> Hardware {
        let raw = NetworkEndian::read_u16(&self.0[field::HTYPE]);
        Hardware::from(raw)
    }

    /// Return the protocol type field.
    #[inline]
    pub fn protocol_type(&self) -> Protocol {
        let raw = NetworkEndian::read_u16(&self.0[field::PTYPE]);
        Protocol::from(raw)
    }

    /// Return the hardware length field.
    #[inline]
    pub fn hardware_len(&self) -> u8 {
        self.0[field::HLEN]
    }

    /// Return the protocol length field.
    #[inline]
    pub fn protocol_len(&self) -> u8 {
        self.0[field::PLEN]
    }

    /// Return the operation field.
    #[inline]
    pub fn operation(&self) -> Operation {
        let raw = NetworkEndian::read_u16(&self.0[field::OPER]);
        Operation::from(raw)
    }

    /// Return the source hardware address field.
    pub fn source_hardware_addr(&self) -> Address {
        Address::from_bytes(&self.0[field::SHA])
    }

    /// Return the source protocol address field.
    pub fn source_protocol_addr(&self) -> IpAddress {
        IpAddress::from_bytes(&self.0[field::SPA])
    }

    /// Return the target hardware address field.
    pub fn target_hardware_addr(&self) -> Address {
        Address::from_bytes(&self.0[field::THA])
    }

    /// Return the target protocol address field.
    pub fn target_protocol_addr(&self) -> IpAddress {
        IpAddress::from_bytes(&self.0[field::TPA])
    }

    /// Query whether the address length fields match the fixed Ethernet/IPv4 layout.
    pub fn is_ethernet_ipv4(&self) -> bool {
        self.hardware_len() == 6 && self.protocol_len() == 4
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static PACKET_BYTES: [u8; 28] =
        [0x00, 0x01,
         0x08, 0x00,
         0x06,
         0x04,
         0x00, 0x01,
         0x11, 0x12, 0x13, 0x14, 0x15, 0x16,
         0x21, 0x22, 0x23, 0x24,
         0x31, 0x32, 0x33, 0x34, 0x35, 0x36,
         0x41, 0x42, 0x43, 0x44];

    #[test]
    fn test_deconstruct() {
        let packet = arp::new_checked(&PACKET_BYTES[..]).unwrap();
        assert_eq!(packet.hardware_type(), Hardware::Ethernet);
        assert_eq!(packet.protocol_type(), Protocol::Ipv4);
        assert_eq!(packet.hardware_len(), 6);
        assert_eq!(packet.protocol_len(), 4);
        assert_eq!(packet.operation(), Operation::Request);
        assert_eq!(packet.source_hardware_addr(),
                   Address([0x11, 0x12, 0x13, 0x14, 0x15, 0x16]));
        assert_eq!(packet.source_protocol_addr(), IpAddress([0x21, 0x22, 0x23, 0x24]));
        assert_eq!(packet.target_hardware_addr(),
                   Address([0x31, 0x32, 0x33, 0x34, 0x35, 0x36]));
        assert_eq!(packet.target_protocol_addr(), IpAddress([0x41, 0x42, 0x43, 0x44]));
        assert!(packet.is_ethernet_ipv4());
    }

    #[test]
    fn test_truncated() {
        assert_eq!(arp::new_checked(&PACKET_BYTES[..27]), Err(Error::Truncated));
        assert_eq!(arp::new_checked(&[]), Err(Error::Truncated));
    }

    #[test]
    fn test_unknown_operation() {
        let mut bytes = PACKET_BYTES;
        bytes[7] = 9;
        let packet = arp::new_checked(&bytes[..]).unwrap();
        assert_eq!(packet.operation(), Operation::Unknown(9));
    }
}
