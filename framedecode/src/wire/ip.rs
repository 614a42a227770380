use core::fmt;

enum_with_unknown! {
    /// IP datagram encapsulated protocol.
    ///
    /// Shared between the IPv4 `protocol` field and the IPv6 `next_header` field. Only `Tcp` and
    /// `Udp` are decoded further, the IPv6 extension headers are named here so that diagnostics
    /// can print them but they are not followed.
    pub enum Protocol(u8) {
        /// IPv6 Hop-by-Hop options.
        HopByHop  = 0x00,
        /// Internet Control Message Protocol.
        Icmp      = 0x01,
        /// Internet Group Management Protocol.
        Igmp      = 0x02,
        /// Transmission Control Protocol.
        Tcp       = 0x06,
        /// User Datagram Protocol.
        Udp       = 0x11,
        /// IPv6 routing header.
        Ipv6Route = 0x2b,
        /// IPv6 fragment header.
        Ipv6Frag  = 0x2c,
        /// ICMP for IPv6.
        Icmpv6    = 0x3a,
        /// No next header for IPv6.
        Ipv6NoNxt = 0x3b,
        /// IPv6 destination options.
        Ipv6Opts  = 0x3c,
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Protocol::HopByHop    => write!(f, "Hop-by-Hop"),
            Protocol::Icmp        => write!(f, "ICMP"),
            Protocol::Igmp        => write!(f, "IGMP"),
            Protocol::Tcp         => write!(f, "TCP"),
            Protocol::Udp         => write!(f, "UDP"),
            Protocol::Ipv6Route   => write!(f, "IPv6-Route"),
            Protocol::Ipv6Frag    => write!(f, "IPv6-Frag"),
            Protocol::Icmpv6      => write!(f, "ICMPv6"),
            Protocol::Ipv6NoNxt   => write!(f, "IPv6-NoNxt"),
            Protocol::Ipv6Opts    => write!(f, "IPv6-Opts"),
            Protocol::Unknown(id) => write!(f, "0x{:02x}", id)
        }
    }
}
