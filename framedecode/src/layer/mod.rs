//! The chain of decoded protocol layers.
//!
//! A decoded frame is a singly linked chain rooted at an [`EthernetII`] layer. Every non-terminal
//! layer owns exactly one child, selected by a single discriminant of its own header: the
//! EtherType for Ethernet, the protocol number for IPv4 and the next header for IPv6. ARP and
//! `Raw` are terminal, TCP and UDP keep their payload as an undecoded [`View`].
//!
//! All layers are immutable after construction and only hold views into the capture buffer.
//!
//! ```
//! use framedecode::{decode, Layer};
//!
//! let mut bytes = vec![0u8; 60];
//! bytes[12..14].copy_from_slice(&[0x08, 0x00]);
//! bytes[14] = 0x45;
//! bytes[16..18].copy_from_slice(&[0x00, 0x1c]);
//! bytes[23] = 17;
//! bytes[38..40].copy_from_slice(&[0x00, 0x08]);
//!
//! let frame = decode(&bytes).unwrap();
//! assert_eq!(frame.stack(), ["EthernetII", "IPv4", "UDP"]);
//! match frame.layers().last() {
//!     Some(Layer::Udp(udp)) => assert!(udp.payload().is_empty()),
//!     other => panic!("unexpected layer {:?}", other),
//! }
//! ```
//!
//! [`EthernetII`]: struct.EthernetII.html
//! [`View`]: ../wire/struct.View.html
use core::fmt;

use crate::diag::{Diagnostic, Diagnostics};
use crate::wire::{EthernetProtocol, IpProtocol, Result, View};

mod arp;
mod eth;
mod ipv4;
mod ipv6;
mod raw;
mod tcp;
mod udp;

#[cfg(test)]
mod tests;

pub use self::arp::Arp;
pub use self::eth::EthernetII;
pub use self::ipv4::Ipv4;
pub use self::ipv6::Ipv6;
pub use self::raw::Raw;
pub use self::tcp::Tcp;
pub use self::udp::Udp;

/// The protocol of a layer, without any of its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// An Ethernet II frame.
    EthernetII,
    /// An IPv4 packet.
    Ipv4,
    /// An IPv6 packet.
    Ipv6,
    /// An ARP packet.
    Arp,
    /// A TCP segment.
    Tcp,
    /// A UDP datagram.
    Udp,
    /// Undecoded bytes.
    Raw,
}

impl Kind {
    /// The label used in the stack of a chain.
    pub fn name(self) -> &'static str {
        match self {
            Kind::EthernetII => "EthernetII",
            Kind::Ipv4 => "IPv4",
            Kind::Ipv6 => "IPv6",
            Kind::Arp => "ARP",
            Kind::Tcp => "TCP",
            Kind::Udp => "UDP",
            Kind::Raw => "RAW",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded protocol layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer<'a> {
    /// The link layer, root of every chain.
    EthernetII(EthernetII<'a>),
    /// An IPv4 packet.
    Ipv4(Ipv4<'a>),
    /// An IPv6 packet.
    Ipv6(Ipv6<'a>),
    /// An ARP packet, terminal.
    Arp(Arp<'a>),
    /// A TCP segment, its payload is not decoded further.
    Tcp(Tcp<'a>),
    /// A UDP datagram, its payload is not decoded further.
    Udp(Udp<'a>),
    /// Bytes that were not decoded, terminal.
    Raw(Raw<'a>),
}

impl<'a> Layer<'a> {
    /// The protocol of this layer.
    pub fn kind(&self) -> Kind {
        match self {
            Layer::EthernetII(_) => Kind::EthernetII,
            Layer::Ipv4(_) => Kind::Ipv4,
            Layer::Ipv6(_) => Kind::Ipv6,
            Layer::Arp(_) => Kind::Arp,
            Layer::Tcp(_) => Kind::Tcp,
            Layer::Udp(_) => Kind::Udp,
            Layer::Raw(_) => Kind::Raw,
        }
    }

    /// The label of this layer alone.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// All bytes this layer was decoded from, header and payload.
    pub fn raw(&self) -> View<'a> {
        match self {
            Layer::EthernetII(layer) => layer.raw(),
            Layer::Ipv4(layer) => layer.raw(),
            Layer::Ipv6(layer) => layer.raw(),
            Layer::Arp(layer) => layer.raw(),
            Layer::Tcp(layer) => layer.raw(),
            Layer::Udp(layer) => layer.raw(),
            Layer::Raw(layer) => layer.raw(),
        }
    }

    /// The child layer, `None` for terminal layers.
    pub fn payload(&self) -> Option<&Layer<'a>> {
        match self {
            Layer::EthernetII(layer) => Some(layer.payload()),
            Layer::Ipv4(layer) => Some(layer.payload()),
            Layer::Ipv6(layer) => Some(layer.payload()),
            Layer::Arp(_) | Layer::Tcp(_) | Layer::Udp(_) | Layer::Raw(_) => None,
        }
    }

    /// Iterate over this layer and all of its descendants.
    pub fn iter(&self) -> Layers<'_, 'a> {
        Layers { next: Some(self) }
    }

    /// The labels of this layer and all of its descendants, outermost first.
    pub fn stack(&self) -> Vec<&'static str> {
        self.iter().map(Layer::name).collect()
    }
}

impl fmt::Display for Layer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Layer::EthernetII(layer) => fmt::Display::fmt(layer, f),
            Layer::Ipv4(layer) => fmt::Display::fmt(layer, f),
            Layer::Ipv6(layer) => fmt::Display::fmt(layer, f),
            Layer::Arp(layer) => fmt::Display::fmt(layer, f),
            Layer::Tcp(layer) => fmt::Display::fmt(layer, f),
            Layer::Udp(layer) => fmt::Display::fmt(layer, f),
            Layer::Raw(layer) => fmt::Display::fmt(layer, f),
        }
    }
}

/// An iterator over a layer chain, outermost layer first.
#[derive(Debug, Clone)]
pub struct Layers<'l, 'a> {
    next: Option<&'l Layer<'a>>,
}

impl<'l, 'a> Iterator for Layers<'l, 'a> {
    type Item = &'l Layer<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.payload();
        Some(current)
    }
}

impl<'l, 'a> IntoIterator for &'l Layer<'a> {
    type Item = &'l Layer<'a>;
    type IntoIter = Layers<'l, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Use a decoded layer, or keep its bytes raw if the header did not fit.
fn or_raw<'a>(
    kind: Kind,
    view: View<'a>,
    diag: &mut Diagnostics,
    decoded: Result<Layer<'a>>,
) -> Layer<'a> {
    decoded.unwrap_or_else(|err| {
        diag.report(Diagnostic::from_error(kind, err));
        Layer::Raw(Raw::new(view))
    })
}

/// Select the layer following an Ethernet header.
pub(crate) fn dispatch_ethertype<'a>(
    ethertype: EthernetProtocol,
    view: View<'a>,
    diag: &mut Diagnostics,
) -> Layer<'a> {
    match ethertype {
        EthernetProtocol::Ipv4 => {
            let decoded = Ipv4::decode(view, diag).map(Layer::Ipv4);
            or_raw(Kind::Ipv4, view, diag, decoded)
        },
        EthernetProtocol::Arp => {
            let decoded = Arp::decode(view, diag).map(Layer::Arp);
            or_raw(Kind::Arp, view, diag, decoded)
        },
        EthernetProtocol::Ipv6 => {
            let decoded = Ipv6::decode(view, diag).map(Layer::Ipv6);
            or_raw(Kind::Ipv6, view, diag, decoded)
        },
        EthernetProtocol::Unknown(value) => {
            diag.report(Diagnostic::UnsupportedType { layer: Kind::EthernetII, value });
            Layer::Raw(Raw::new(view))
        },
    }
}

/// Select the layer following an IP header.
///
/// IPv6 extension headers have no decoder and are treated like any other unknown protocol.
pub(crate) fn dispatch_protocol<'a>(
    parent: Kind,
    protocol: IpProtocol,
    view: View<'a>,
    diag: &mut Diagnostics,
) -> Layer<'a> {
    match protocol {
        IpProtocol::Tcp => {
            let decoded = Tcp::decode(view).map(Layer::Tcp);
            or_raw(Kind::Tcp, view, diag, decoded)
        },
        IpProtocol::Udp => {
            let decoded = Udp::decode(view, diag).map(Layer::Udp);
            or_raw(Kind::Udp, view, diag, decoded)
        },
        other => {
            let value = u16::from(u8::from(other));
            diag.report(Diagnostic::UnsupportedType { layer: parent, value });
            Layer::Raw(Raw::new(view))
        },
    }
}

/// The end of a payload with a declared length, clamped to the available bytes.
///
/// `declared` and `available` both count from the start of the layer, `min` is the length of its
/// header. A declared length shorter than the header is ignored in favour of all available bytes.
pub(crate) fn declared_end(
    layer: Kind,
    min: usize,
    declared: usize,
    available: usize,
    diag: &mut Diagnostics,
) -> usize {
    if declared < min {
        diag.report(Diagnostic::BadLength { layer, value: declared as u16 });
        available
    } else if declared > available {
        diag.report(Diagnostic::MissingBytes { layer, count: declared - available });
        available
    } else {
        if declared < available {
            diag.report(Diagnostic::ExtraBytes { layer, count: available - declared });
        }
        declared
    }
}
