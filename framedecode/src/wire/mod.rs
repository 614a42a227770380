/*! Low-level, bounds-checked header access.

# Header views

The `wire` module deals with the packet *representation*. For every protocol it defines a
lowercase, dynamically sized wrapper around `[u8]`, e.g. [`ethernet_frame`] or [`udp_packet`],
that extracts header fields from fixed offsets. The offsets themselves are collected in a private
`field` module next to each wrapper.

Such a wrapper is only ever obtained through its `new_checked` constructor, which calls
`check_len` first. If `check_len` returned `Ok(())` then no field accessor will panic. When the
buffer is too short for the fixed header, or for the variable length region announced by a length
subfield of the header itself, the result is `Err(Error::Truncated)`. A length subfield below the
minimum the protocol allows is `Err(Error::Malformed)`.

There is intentionally no way to mutate a header through these types. Emission is not something
this crate does.

# Discriminants and addresses

The values that select the next decoder, [`EthernetProtocol`] and [`IpProtocol`], are enums with
an `Unknown` variant so that converting a wire value never fails. The address types are plain
newtypes of their octets with a `Display` matching the [`format`] helpers.

# Views into the capture

A [`View`] is the (offset, length) pair of a byte region within the one capture buffer a frame was
decoded from. Layers store views instead of copies.

[`ethernet_frame`]: struct.ethernet_frame.html
[`udp_packet`]: struct.udp_packet.html
[`EthernetProtocol`]: enum.EthernetProtocol.html
[`IpProtocol`]: enum.IpProtocol.html
[`View`]: struct.View.html
[`format`]: ../format/index.html

# Examples

```rust
use framedecode::wire::*;

let bytes = [
    0x45, 0x00, 0x00, 0x14,
    0x00, 0x01, 0x40, 0x00,
    0x40, 0x06, 0x00, 0x00,
    0x0a, 0x00, 0x00, 0x01,
    0x0a, 0x00, 0x00, 0x02,
];
let packet = ipv4_packet::new_checked(&bytes)
    .expect("a complete header");
assert_eq!(packet.protocol(), IpProtocol::Tcp);
assert_eq!(packet.src_addr(), Ipv4Address::new(10, 0, 0, 1));
assert_eq!(ipv4_packet::new_checked(&bytes[..12]), Err(Error::Truncated));
```
*/
// Copyright (C) 2016 whitequark@whitequark.org
// Copyright (C) 2019 Andreas Molzer <andreas.molzer@tum.de>
//
// in large parts from `smoltcp` originally distributed under 0-clause BSD

mod field {
    pub(crate) type Field = ::core::ops::Range<usize>;
    pub(crate) type Rest  = ::core::ops::RangeFrom<usize>;
}

mod arp;
mod error;
mod ethernet;
mod ip;
mod ipv4;
mod ipv6;
mod tcp;
mod udp;
mod view;

pub use self::error::{
    Error,
    Result};

pub use self::view::View;

pub use self::ethernet::{
    ethernet as ethernet_frame,
    EtherType as EthernetProtocol,
    Address as EthernetAddress,
    HEADER_LEN as ETHERNET_HEADER_LEN,
    MAX_LENGTH_FIELD as ETHERNET_MAX_LENGTH_FIELD};

pub use self::arp::{
    arp as arp_packet,
    Hardware as ArpHardware,
    Operation as ArpOperation,
    PACKET_LEN as ARP_PACKET_LEN};

pub use self::ip::Protocol as IpProtocol;

pub use self::ipv4::{
    ipv4 as ipv4_packet,
    Address as Ipv4Address,
    MIN_HEADER_LEN as IPV4_MIN_HEADER_LEN};

pub use self::ipv6::{
    ipv6 as ipv6_packet,
    Address as Ipv6Address,
    HEADER_LEN as IPV6_HEADER_LEN};

pub use self::tcp::{
    tcp as tcp_packet,
    Flags as TcpFlags,
    MIN_HEADER_LEN as TCP_MIN_HEADER_LEN};

pub use self::udp::{
    udp as udp_packet,
    HEADER_LEN as UDP_HEADER_LEN};
