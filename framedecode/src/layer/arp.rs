use core::fmt;

use crate::diag::{Diagnostic, Diagnostics};
use crate::wire::{arp_packet, ArpHardware, ArpOperation, EthernetAddress, EthernetProtocol};
use crate::wire::{Ipv4Address, Result, View, ARP_PACKET_LEN};
use super::Kind;

/// A decoded ARP packet for Ethernet and IPv4 addresses.
///
/// The addresses are read from the fixed offsets of that combination even if the length fields
/// announce something else, which is recorded as a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arp<'a> {
    raw: View<'a>,
    htype: ArpHardware,
    ptype: EthernetProtocol,
    hlen: u8,
    plen: u8,
    operation: ArpOperation,
    sha: EthernetAddress,
    spa: Ipv4Address,
    tha: EthernetAddress,
    tpa: Ipv4Address,
}

impl<'a> Arp<'a> {
    /// Decode a packet of at least 28 bytes.
    pub(crate) fn decode(view: View<'a>, diag: &mut Diagnostics) -> Result<Self> {
        let packet = arp_packet::new_checked(view.as_bytes())?;

        if !packet.is_ethernet_ipv4() {
            diag.report(Diagnostic::UnexpectedAddressLength {
                hlen: packet.hardware_len(),
                plen: packet.protocol_len(),
            });
        }

        if view.len() > ARP_PACKET_LEN {
            diag.report(Diagnostic::ExtraBytes {
                layer: Kind::Arp,
                count: view.len() - ARP_PACKET_LEN,
            });
        }

        Ok(Arp {
            raw: view,
            htype: packet.hardware_type(),
            ptype: packet.protocol_type(),
            hlen: packet.hardware_len(),
            plen: packet.protocol_len(),
            operation: packet.operation(),
            sha: packet.source_hardware_addr(),
            spa: packet.source_protocol_addr(),
            tha: packet.target_hardware_addr(),
            tpa: packet.target_protocol_addr(),
        })
    }

    /// All bytes handed to this layer, including any padding.
    pub fn raw(&self) -> View<'a> {
        self.raw
    }

    /// The bytes following the 28 byte packet, usually Ethernet padding.
    pub fn padding(&self) -> View<'a> {
        self.raw.slice_from(ARP_PACKET_LEN)
    }

    /// The hardware type.
    pub fn htype(&self) -> ArpHardware {
        self.htype
    }

    /// The protocol type.
    pub fn ptype(&self) -> EthernetProtocol {
        self.ptype
    }

    /// The hardware address length field.
    pub fn hlen(&self) -> u8 {
        self.hlen
    }

    /// The protocol address length field.
    pub fn plen(&self) -> u8 {
        self.plen
    }

    /// The operation.
    pub fn operation(&self) -> ArpOperation {
        self.operation
    }

    /// The sender hardware address.
    pub fn sha(&self) -> EthernetAddress {
        self.sha
    }

    /// The sender protocol address.
    pub fn spa(&self) -> Ipv4Address {
        self.spa
    }

    /// The target hardware address.
    pub fn tha(&self) -> EthernetAddress {
        self.tha
    }

    /// The target protocol address.
    pub fn tpa(&self) -> Ipv4Address {
        self.tpa
    }

    /// The label of this layer, it never has a payload.
    pub fn stack(&self) -> Vec<&'static str> {
        vec![Kind::Arp.name()]
    }
}

impl fmt::Display for Arp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ARP op={:?} src={}/{} tgt={}/{}",
               self.operation, self.sha, self.spa, self.tha, self.tpa)
    }
}
