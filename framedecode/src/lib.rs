//! A read-only decoder of captured Ethernet frames.
//!
//! ## Table of contents
//!
//! 1. [Design](#design)
//! 2. [The wire module](wire/index.html)
//! 3. [The layer chain](layer/index.html)
//! 4. [Diagnostics](diag/index.html)
//! 5. [Formatting helpers](format/index.html)
//!
//! ## Design
//!
//! A captured frame is decoded in a single pass into a chain of typed protocol layers, following
//! the usual encapsulation: Ethernet II, then IPv4, IPv6 or ARP, then TCP or UDP. Whatever can not
//! be decoded further ends in a `Raw` layer holding the remaining bytes. Nothing here ever sends,
//! reassembles, verifies checksums or keeps state between frames.
//!
//! No layer copies bytes. Every byte region, be it the whole header, the options or the payload,
//! is a [`View`] into the caller's capture buffer and the lifetime of the chain is bound to that
//! buffer.
//!
//! Decoding is total. Only a buffer too short to hold an Ethernet header is rejected, any other
//! byte sequence decodes to *some* chain. A layer whose header does not fit into the bytes handed
//! to it is replaced by a `Raw` layer, unknown discriminants fall back to `Raw` as well, and
//! inconsistencies such as a declared length disagreeing with the buffer are recorded as
//! [`Diagnostic`]s next to the chain.
//!
//! ```
//! use framedecode::{decode, wire::EthernetProtocol};
//!
//! let mut bytes = vec![0u8; 42];
//! bytes[12..14].copy_from_slice(&[0x08, 0x06]);
//! bytes[14..22].copy_from_slice(&[0x00, 0x01, 0x08, 0x00, 0x06, 0x04, 0x00, 0x01]);
//!
//! let frame = decode(&bytes).expect("at least an ethernet header");
//! assert_eq!(frame.ethernet().ethertype(), EthernetProtocol::Arp);
//! assert_eq!(frame.stack(), ["EthernetII", "ARP"]);
//! assert!(frame.diagnostics().is_empty());
//! ```
//!
//! [`View`]: wire/struct.View.html
//! [`Diagnostic`]: diag/enum.Diagnostic.html
#![warn(missing_docs)]
#![warn(unreachable_pub)]

#[macro_use] mod macros;
pub mod diag;
pub mod format;
pub mod layer;
pub mod wire;

mod decoder;

pub use self::decoder::{decode, Config, Decoder, Frame};
pub use self::diag::{Diagnostic, Level};
pub use self::layer::Layer;
pub use self::wire::{Error, Result, View};
