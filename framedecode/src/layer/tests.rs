use crate::decoder::{decode, Frame};
use crate::diag::{Class, Diagnostic};
use crate::wire::{EthernetAddress, IpProtocol, Ipv4Address};
use super::{Kind, Layer};

const MAC_ADDR_DST: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x02];
const MAC_ADDR_SRC: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];

static SEGMENT_DATA: [u8; 4] = [0xaa, 0x00, 0x00, 0xff];

fn ethernet(ethertype: u16, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&MAC_ADDR_DST);
    bytes.extend_from_slice(&MAC_ADDR_SRC);
    bytes.extend_from_slice(&ethertype.to_be_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

/// An IPv4 header of `ihl` words with zeroed options, followed by `payload`.
fn ipv4(ihl: u8, total_len: u16, protocol: u8, payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![
        0x40 | ihl, 0x00, 0x00, 0x00,
        0x12, 0x34, 0x40, 0x00,
        0x40, protocol, 0xd5, 0x6e,
        0x0a, 0x00, 0x00, 0x01,
        0x0a, 0x00, 0x00, 0x02,
    ];
    bytes[2..4].copy_from_slice(&total_len.to_be_bytes());
    bytes.resize(usize::from(ihl) * 4, 0);
    bytes.extend_from_slice(payload);
    bytes
}

fn ipv4_auto(protocol: u8, payload: &[u8]) -> Vec<u8> {
    ipv4(5, 20 + payload.len() as u16, protocol, payload)
}

fn ipv6(next_header: u8, payload_len: u16, payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![
        0x60, 0x00, 0x00, 0x00,
        0x00, 0x00, next_header, 0x40,
    ];
    bytes[4..6].copy_from_slice(&payload_len.to_be_bytes());
    // fe80::1 to ff02::1
    bytes.extend_from_slice(&[0xfe, 0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01]);
    bytes.extend_from_slice(&[0xff, 0x02, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01]);
    bytes.extend_from_slice(payload);
    bytes
}

fn tcp(flags: u8, payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![
        0xbf, 0x00, 0x00, 0x50,
        0x01, 0x23, 0x45, 0x67,
        0x89, 0xab, 0xcd, 0xef,
        0x50, flags, 0x01, 0x23,
        0x01, 0xb6, 0x00, 0x00,
    ];
    bytes.extend_from_slice(payload);
    bytes
}

fn udp(len: u16, payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![
        0xbf, 0x00, 0x00, 0x35,
        0x00, 0x00, 0x12, 0x4d,
    ];
    bytes[4..6].copy_from_slice(&len.to_be_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

fn udp_auto(payload: &[u8]) -> Vec<u8> {
    udp(8 + payload.len() as u16, payload)
}

fn arp(hlen: u8, plen: u8) -> Vec<u8> {
    let mut bytes = vec![0x00, 0x01, 0x08, 0x00, hlen, plen, 0x00, 0x01];
    bytes.extend_from_slice(&MAC_ADDR_SRC);
    bytes.extend_from_slice(&[10, 0, 0, 1]);
    bytes.extend_from_slice(&[0; 6]);
    bytes.extend_from_slice(&[10, 0, 0, 2]);
    bytes
}

fn nth<'l, 'a>(frame: &'l Frame<'a>, n: usize) -> &'l Layer<'a> {
    frame.layers().nth(n).expect("chain is long enough")
}

#[test]
fn ethertype_dispatch() {
    let table = [
        (0x0800, ethernet(0x0800, &ipv4_auto(6, &tcp(0x02, &[]))), Kind::Ipv4),
        (0x0806, ethernet(0x0806, &arp(6, 4)), Kind::Arp),
        (0x86dd, ethernet(0x86dd, &ipv6(17, 8, &udp_auto(&[]))), Kind::Ipv6),
        (0x0500, ethernet(0x0500, &[0; 32]), Kind::Raw),
    ];

    for (ethertype, bytes, kind) in table.iter() {
        let frame = decode(bytes).unwrap();
        assert_eq!(frame.ethernet().type_field(), *ethertype);
        assert_eq!(nth(&frame, 1).kind(), *kind);
        assert!(frame.diagnostics().is_empty(), "for ethertype {:04x}", ethertype);
    }
}

#[test]
fn ieee_802_3_length_is_raw() {
    let bytes = ethernet(0x0500, &[0x42; 32]);
    let frame = decode(&bytes).unwrap();
    assert!(frame.ethernet().is_length());
    match nth(&frame, 1) {
        Layer::Raw(raw) => {
            assert_eq!(raw.as_bytes(), &[0x42; 32][..]);
            assert_eq!(raw.raw().offset(), 14);
        },
        other => panic!("unexpected layer {}", other),
    }
}

#[test]
fn unsupported_ethertype() {
    let bytes = ethernet(0x9999, &[0; 32]);
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "RAW"]);
    assert_eq!(frame.diagnostics(),
               &[Diagnostic::UnsupportedType { layer: Kind::EthernetII, value: 0x9999 }]);
    assert_eq!(frame.diagnostics()[0].class(), Class::UnsupportedDiscriminant);
}

#[test]
fn stack_ordering() {
    let bytes = ethernet(0x0800, &ipv4_auto(6, &tcp(0x18, &SEGMENT_DATA)));
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "IPv4", "TCP"]);
    assert_eq!(frame.ethernet().stack(), frame.stack());
    assert!(frame.diagnostics().is_empty());

    let bytes = ethernet(0x86dd, &ipv6(17, 12, &udp_auto(&SEGMENT_DATA)));
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "IPv6", "UDP"]);
    assert!(frame.diagnostics().is_empty());

    let bytes = ethernet(0x0806, &arp(6, 4));
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "ARP"]);
    assert!(frame.diagnostics().is_empty());
}

#[test]
fn layer_iteration() {
    let bytes = ethernet(0x0800, &ipv4_auto(17, &udp_auto(&SEGMENT_DATA)));
    let frame = decode(&bytes).unwrap();
    let names: Vec<_> = frame.layers().map(Layer::name).collect();
    assert_eq!(names, frame.stack());

    let ip = nth(&frame, 1);
    assert_eq!(ip.stack(), ["IPv4", "UDP"]);
    assert_eq!(ip.payload().map(Layer::kind), Some(Kind::Udp));
    assert!(nth(&frame, 2).payload().is_none());
    assert_eq!(frame.root().into_iter().count(), 3);
}

#[test]
fn ipv4_fields() {
    let bytes = ethernet(0x0800, &ipv4_auto(6, &tcp(0x02, &[])));
    let frame = decode(&bytes).unwrap();
    let ip = match nth(&frame, 1) {
        Layer::Ipv4(ip) => ip,
        other => panic!("unexpected layer {}", other),
    };
    assert_eq!(ip.version(), 4);
    assert_eq!(ip.ihl(), 5);
    assert_eq!(ip.length(), 40);
    assert_eq!(ip.identification(), 0x1234);
    assert!(ip.dont_frag());
    assert!(!ip.more_frags());
    assert_eq!(ip.fragment_offset(), 0);
    assert_eq!(ip.ttl(), 64);
    assert_eq!(ip.protocol(), IpProtocol::Tcp);
    assert_eq!(ip.header_checksum(), 0xd56e);
    assert_eq!(ip.src(), Ipv4Address::new(10, 0, 0, 1));
    assert_eq!(ip.dst(), Ipv4Address::new(10, 0, 0, 2));
    assert!(ip.options().is_empty());
    assert_eq!(frame.ethernet().src(), EthernetAddress(MAC_ADDR_SRC));
    assert_eq!(frame.ethernet().dst(), EthernetAddress(MAC_ADDR_DST));
}

#[test]
fn ipv4_options_length() {
    let segment = tcp(0x02, &SEGMENT_DATA);
    let bytes = ethernet(0x0800, &ipv4(8, 32 + segment.len() as u16, 6, &segment));
    let frame = decode(&bytes).unwrap();
    let ip = match nth(&frame, 1) {
        Layer::Ipv4(ip) => ip,
        other => panic!("unexpected layer {}", other),
    };
    assert_eq!(ip.header_len(), 32);
    assert_eq!(ip.options().len(), 12);
    assert_eq!(ip.options().offset(), 14 + 20);

    let tcp = nth(&frame, 2);
    assert_eq!(tcp.kind(), Kind::Tcp);
    assert_eq!(tcp.raw().offset(), 14 + 32);
    assert!(frame.diagnostics().is_empty());
}

#[test]
fn ipv4_clamped_to_available() {
    // Declares 100 bytes but only 60 follow the header.
    let datagram = udp_auto(&[0x55; 52]);
    let bytes = ethernet(0x0800, &ipv4(5, 100, 17, &datagram));
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "IPv4", "UDP"]);
    let udp = match nth(&frame, 2) {
        Layer::Udp(udp) => udp,
        other => panic!("unexpected layer {}", other),
    };
    assert_eq!(udp.raw().len(), 60);
    assert_eq!(udp.payload().as_bytes(), &[0x55; 52][..]);
    assert_eq!(frame.diagnostics(),
               &[Diagnostic::MissingBytes { layer: Kind::Ipv4, count: 20 }]);
    assert_eq!(frame.diagnostics()[0].class(), Class::StructuralAnomaly);
}

#[test]
fn ipv4_ethernet_padding() {
    let mut packet = ipv4_auto(17, &udp_auto(&[]));
    packet.resize(46, 0);
    let bytes = ethernet(0x0800, &packet);
    let frame = decode(&bytes).unwrap();
    assert_eq!(nth(&frame, 1).raw().len(), 46);
    assert_eq!(nth(&frame, 2).raw().len(), 8);
    assert_eq!(frame.diagnostics(),
               &[Diagnostic::ExtraBytes { layer: Kind::Ipv4, count: 18 }]);
}

#[test]
fn ipv4_length_below_header() {
    let bytes = ethernet(0x0800, &ipv4(5, 4, 17, &udp_auto(&SEGMENT_DATA)));
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "IPv4", "UDP"]);
    assert_eq!(nth(&frame, 2).raw().len(), 12);
    assert_eq!(frame.diagnostics(),
               &[Diagnostic::BadLength { layer: Kind::Ipv4, value: 4 }]);
}

#[test]
fn ipv4_wrong_version() {
    let mut packet = ipv4_auto(17, &udp_auto(&[]));
    packet[0] = 0x65;
    let bytes = ethernet(0x0800, &packet);
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "IPv4", "UDP"]);
    assert_eq!(frame.diagnostics(),
               &[Diagnostic::InvalidVersion { layer: Kind::Ipv4, found: 6 }]);
}

#[test]
fn ipv4_header_length_too_small() {
    let mut packet = ipv4_auto(17, &udp_auto(&[]));
    packet[0] = 0x44;
    let bytes = ethernet(0x0800, &packet);
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "RAW"]);
    assert_eq!(nth(&frame, 1).raw().len(), packet.len());
    assert_eq!(frame.diagnostics(), &[Diagnostic::Malformed { layer: Kind::Ipv4 }]);
    assert_eq!(frame.diagnostics()[0].class(), Class::InsufficientData);
}

#[test]
fn ipv4_unsupported_protocol() {
    let bytes = ethernet(0x0800, &ipv4_auto(1, &[8, 0, 0, 0]));
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "IPv4", "RAW"]);
    assert_eq!(frame.diagnostics(),
               &[Diagnostic::UnsupportedType { layer: Kind::Ipv4, value: 1 }]);
}

#[test]
fn ipv4_truncated_header() {
    let packet = ipv4_auto(6, &[]);
    let bytes = ethernet(0x0800, &packet[..12]);
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "RAW"]);
    assert_eq!(frame.diagnostics(), &[Diagnostic::Truncated { layer: Kind::Ipv4 }]);
}

#[test]
fn tcp_syn_only() {
    let bytes = ethernet(0x0800, &ipv4_auto(6, &tcp(0b0000_0010, &[])));
    let frame = decode(&bytes).unwrap();
    let tcp = match nth(&frame, 2) {
        Layer::Tcp(tcp) => tcp,
        other => panic!("unexpected layer {}", other),
    };
    assert!(tcp.flag_syn());
    assert!(!tcp.flag_cwr());
    assert!(!tcp.flag_ece());
    assert!(!tcp.flag_urg());
    assert!(!tcp.flag_ack());
    assert!(!tcp.flag_psh());
    assert!(!tcp.flag_rst());
    assert!(!tcp.flag_fin());
    assert!(!tcp.flag_ns());
}

#[test]
fn tcp_fields() {
    let bytes = ethernet(0x0800, &ipv4_auto(6, &tcp(0x12, &SEGMENT_DATA)));
    let frame = decode(&bytes).unwrap();
    let tcp = match nth(&frame, 2) {
        Layer::Tcp(tcp) => tcp,
        other => panic!("unexpected layer {}", other),
    };
    assert_eq!(tcp.sport(), 48896);
    assert_eq!(tcp.dport(), 80);
    assert_eq!(tcp.sequence_number(), 0x01234567);
    assert_eq!(tcp.acknowledgment_number(), 0x89abcdef);
    assert_eq!(tcp.data_offset(), 5);
    assert_eq!(tcp.header_len(), 20);
    assert_eq!(tcp.window_size(), 0x0123);
    assert_eq!(tcp.checksum(), 0x01b6);
    assert_eq!(tcp.urgent_pointer(), 0);
    assert!(tcp.flag_syn() && tcp.flag_ack());
    assert!(tcp.options().is_empty());
    assert_eq!(tcp.payload().as_bytes(), &SEGMENT_DATA[..]);
    assert_eq!(tcp.payload().offset(), 14 + 20 + 20);
    assert_eq!(tcp.to_string(), "TCP src=48896 dst=80 ack syn seq=19088743 ack=2309737967 win=291 len=4");
}

#[test]
fn tcp_truncated_is_raw() {
    let bytes = ethernet(0x0800, &ipv4_auto(6, &tcp(0x02, &[])[..12]));
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "IPv4", "RAW"]);
    assert_eq!(nth(&frame, 2).raw().len(), 12);
    assert_eq!(frame.diagnostics(), &[Diagnostic::Truncated { layer: Kind::Tcp }]);
}

#[test]
fn tcp_options_beyond_buffer() {
    let mut segment = tcp(0x02, &[]);
    segment[12] = 0xf0;
    let bytes = ethernet(0x0800, &ipv4_auto(6, &segment));
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "IPv4", "RAW"]);
    assert_eq!(frame.diagnostics(), &[Diagnostic::Truncated { layer: Kind::Tcp }]);
}

#[test]
fn ipv6_fields() {
    let mut packet = ipv6(17, 8, &udp_auto(&[]));
    // traffic class 0xb9, flow label 0x12345
    packet[0..4].copy_from_slice(&[0x6b, 0x91, 0x23, 0x45]);
    let bytes = ethernet(0x86dd, &packet);
    let frame = decode(&bytes).unwrap();
    let ip = match nth(&frame, 1) {
        Layer::Ipv6(ip) => ip,
        other => panic!("unexpected layer {}", other),
    };
    assert_eq!(ip.version(), 6);
    assert_eq!(ip.traffic_class(), 0xb9);
    assert_eq!(ip.ds_field(), 0x2e);
    assert_eq!(ip.ecn(), 0x01);
    assert_eq!(ip.flow_label(), 0x12345);
    assert_eq!(ip.payload_length(), 8);
    assert_eq!(ip.next_header(), IpProtocol::Udp);
    assert_eq!(ip.hop_limit(), 0x40);
    assert_eq!(ip.src().to_string(), "fe80:0000:0000:0000:0000:0000:0000:0001");
    assert_eq!(ip.dst().to_string(), "ff02:0000:0000:0000:0000:0000:0000:0001");
    assert!(frame.diagnostics().is_empty());
}

#[test]
fn ipv6_payload_length_mismatch() {
    let bytes = ethernet(0x86dd, &ipv6(17, 8, &udp_auto(&SEGMENT_DATA)));
    let frame = decode(&bytes).unwrap();
    assert_eq!(nth(&frame, 2).raw().len(), 8);
    assert_eq!(frame.diagnostics(), &[
        Diagnostic::ExtraBytes { layer: Kind::Ipv6, count: 4 },
        Diagnostic::MissingBytes { layer: Kind::Udp, count: 4 },
    ]);

    let bytes = ethernet(0x86dd, &ipv6(17, 30, &udp_auto(&SEGMENT_DATA)));
    let frame = decode(&bytes).unwrap();
    assert_eq!(nth(&frame, 2).raw().len(), 12);
    assert_eq!(frame.diagnostics(),
               &[Diagnostic::MissingBytes { layer: Kind::Ipv6, count: 18 }]);
}

#[test]
fn ipv6_extension_header_is_raw() {
    let bytes = ethernet(0x86dd, &ipv6(0, 8, &[17, 0, 0, 0, 0, 0, 0, 0]));
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "IPv6", "RAW"]);
    assert_eq!(frame.diagnostics(),
               &[Diagnostic::UnsupportedType { layer: Kind::Ipv6, value: 0 }]);
}

#[test]
fn ipv6_wrong_version() {
    let mut packet = ipv6(17, 8, &udp_auto(&[]));
    packet[0] = 0x40;
    let bytes = ethernet(0x86dd, &packet);
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "IPv6", "UDP"]);
    assert_eq!(frame.diagnostics(),
               &[Diagnostic::InvalidVersion { layer: Kind::Ipv6, found: 4 }]);
}

#[test]
fn udp_fields() {
    let bytes = ethernet(0x0800, &ipv4_auto(17, &udp_auto(&SEGMENT_DATA)));
    let frame = decode(&bytes).unwrap();
    let udp = match nth(&frame, 2) {
        Layer::Udp(udp) => udp,
        other => panic!("unexpected layer {}", other),
    };
    assert_eq!(udp.sport(), 48896);
    assert_eq!(udp.dport(), 53);
    assert_eq!(udp.length(), 12);
    assert_eq!(udp.checksum(), 0x124d);
    assert_eq!(udp.payload().as_bytes(), &SEGMENT_DATA[..]);
    assert_eq!(udp.to_string(), "UDP src=48896 dst=53 len=12");
}

#[test]
fn udp_length_below_header() {
    let bytes = ethernet(0x0800, &ipv4_auto(17, &udp(3, &SEGMENT_DATA)));
    let frame = decode(&bytes).unwrap();
    let udp = match nth(&frame, 2) {
        Layer::Udp(udp) => udp,
        other => panic!("unexpected layer {}", other),
    };
    assert_eq!(udp.payload().as_bytes(), &SEGMENT_DATA[..]);
    assert_eq!(frame.diagnostics(), &[Diagnostic::BadLength { layer: Kind::Udp, value: 3 }]);
}

#[test]
fn udp_shorter_than_declared() {
    let bytes = ethernet(0x0800, &ipv4_auto(17, &udp(6, &[])[..6]));
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "IPv4", "RAW"]);
    assert_eq!(frame.diagnostics(), &[Diagnostic::Truncated { layer: Kind::Udp }]);
}

#[test]
fn arp_fields() {
    let bytes = ethernet(0x0806, &arp(6, 4));
    let frame = decode(&bytes).unwrap();
    let arp = match nth(&frame, 1) {
        Layer::Arp(arp) => arp,
        other => panic!("unexpected layer {}", other),
    };
    assert_eq!(u16::from(arp.htype()), 1);
    assert_eq!(u16::from(arp.ptype()), 0x0800);
    assert_eq!(arp.hlen(), 6);
    assert_eq!(arp.plen(), 4);
    assert_eq!(u16::from(arp.operation()), 1);
    assert_eq!(arp.sha(), EthernetAddress(MAC_ADDR_SRC));
    assert_eq!(arp.spa(), Ipv4Address::new(10, 0, 0, 1));
    assert_eq!(arp.tha(), EthernetAddress([0; 6]));
    assert_eq!(arp.tpa(), Ipv4Address::new(10, 0, 0, 2));
    assert!(arp.padding().is_empty());
}

#[test]
fn arp_padding() {
    let mut packet = arp(6, 4);
    packet.resize(46, 0);
    let bytes = ethernet(0x0806, &packet);
    let frame = decode(&bytes).unwrap();
    let arp = match nth(&frame, 1) {
        Layer::Arp(arp) => arp,
        other => panic!("unexpected layer {}", other),
    };
    assert_eq!(arp.raw().len(), 46);
    assert_eq!(arp.padding().len(), 18);
    assert_eq!(arp.padding().offset(), 14 + 28);
    assert_eq!(frame.diagnostics(), &[Diagnostic::ExtraBytes { layer: Kind::Arp, count: 18 }]);
}

#[test]
fn arp_unexpected_lengths() {
    let bytes = ethernet(0x0806, &arp(8, 4));
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "ARP"]);
    assert_eq!(frame.diagnostics(), &[Diagnostic::UnexpectedAddressLength { hlen: 8, plen: 4 }]);
}

#[test]
fn arp_truncated_is_raw() {
    let bytes = ethernet(0x0806, &arp(6, 4)[..20]);
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "RAW"]);
    assert_eq!(frame.diagnostics(), &[Diagnostic::Truncated { layer: Kind::Arp }]);
}

#[test]
fn bare_ethernet_header() {
    let bytes = ethernet(0x0800, &[]);
    let frame = decode(&bytes).unwrap();
    assert_eq!(frame.stack(), ["EthernetII", "RAW"]);
    assert!(nth(&frame, 1).raw().is_empty());
    assert_eq!(frame.diagnostics(), &[Diagnostic::Truncated { layer: Kind::Ipv4 }]);
}

#[test]
fn deterministic() {
    let bytes = ethernet(0x0800, &ipv4(5, 100, 6, &tcp(0x02, &SEGMENT_DATA)));
    assert_eq!(decode(&bytes), decode(&bytes));
}
