//! Diagnostics recorded while decoding.
//!
//! Decoding never stops on a structural anomaly. A wrong version number, a length field that
//! disagrees with the bytes actually captured, or a discriminant without a decoder are reported as
//! a [`Diagnostic`] and decoding continues with the best available interpretation. The diagnostics
//! of one decode call are returned next to the layer chain, and each of them is also passed to the
//! `log` facade when its [`Level`] reaches the configured threshold. Neither affects the chain.
//!
//! [`Diagnostic`]: enum.Diagnostic.html
//! [`Level`]: enum.Level.html
use core::{fmt, str::FromStr};

use crate::layer::Kind;
use crate::wire::Error;

/// Severity of a diagnostic, also used as the minimum threshold for emitting them.
///
/// Ordered from the most verbose to `None`, which is above every diagnostic and silences all of
/// them. The default threshold is `Fatal`: no decoder reports anything that severe, so decoding is
/// silent unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Step by step tracing.
    Trace = 1,
    /// Debugging information.
    Debug = 2,
    /// Informational messages.
    Info = 3,
    /// Anomalies that were recovered from.
    Warn = 4,
    /// Missing data, a layer could not be decoded completely.
    Error = 5,
    /// Unrecoverable conditions.
    Fatal = 6,
    /// Above everything, only meaningful as a threshold.
    None = 7,
}

impl Default for Level {
    fn default() -> Self {
        Level::Fatal
    }
}

impl Level {
    /// The corresponding level of the `log` facade.
    ///
    /// `Fatal` has no counterpart and maps to `Error`. `None` is never emitted.
    #[cfg(feature = "log")]
    pub fn as_log(self) -> Option<log::Level> {
        match self {
            Level::Trace => Some(log::Level::Trace),
            Level::Debug => Some(log::Level::Debug),
            Level::Info => Some(log::Level::Info),
            Level::Warn => Some(log::Level::Warn),
            Level::Error | Level::Fatal => Some(log::Level::Error),
            Level::None => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::None => "NONE",
        })
    }
}

impl FromStr for Level {
    type Err = Error;

    /// Parse a level name, ignoring case.
    fn from_str(src: &str) -> Result<Self, Error> {
        let level = match src.to_ascii_uppercase().as_str() {
            "TRACE" => Level::Trace,
            "DEBUG" => Level::Debug,
            "INFO" => Level::Info,
            "WARN" | "WARNING" => Level::Warn,
            "ERROR" => Level::Error,
            "FATAL" => Level::Fatal,
            "NONE" | "OFF" => Level::None,
            _ => return Err(Error::Unrecognized),
        };
        Ok(level)
    }
}

/// The broad class of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// A sanity field disagrees with expectation, the layer was still decoded.
    StructuralAnomaly,
    /// No decoder for a discriminant value, the remaining bytes were kept raw.
    UnsupportedDiscriminant,
    /// A header did not fit into its bytes, the layer was replaced by raw bytes.
    InsufficientData,
}

/// An anomaly observed while decoding one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// A discriminant value has no decoder and the payload was kept raw.
    UnsupportedType {
        /// The layer holding the discriminant.
        layer: Kind,
        /// The EtherType, protocol or next header value.
        value: u16,
    },
    /// The version field of an IP header does not match the header it was dispatched as.
    InvalidVersion {
        /// The decoded layer.
        layer: Kind,
        /// The version found in the header.
        found: u8,
    },
    /// A length field declares more bytes than were captured.
    MissingBytes {
        /// The decoded layer.
        layer: Kind,
        /// How many declared bytes are absent.
        count: usize,
    },
    /// More bytes were captured than a length field declares.
    ExtraBytes {
        /// The decoded layer.
        layer: Kind,
        /// How many bytes trail the declared end.
        count: usize,
    },
    /// A length field is smaller than the header it is part of and was ignored.
    BadLength {
        /// The decoded layer.
        layer: Kind,
        /// The value of the length field.
        value: u16,
    },
    /// The bytes were too short for the header of a layer, they were kept raw instead.
    Truncated {
        /// The layer that could not be decoded.
        layer: Kind,
    },
    /// A header length subfield is below its minimum, the bytes were kept raw instead.
    Malformed {
        /// The layer that could not be decoded.
        layer: Kind,
    },
    /// An ARP packet announces address lengths other than Ethernet and IPv4.
    UnexpectedAddressLength {
        /// The hardware address length field.
        hlen: u8,
        /// The protocol address length field.
        plen: u8,
    },
}

impl Diagnostic {
    /// The diagnostic for a layer whose header check failed.
    pub fn from_error(layer: Kind, err: Error) -> Self {
        match err {
            Error::Malformed => Diagnostic::Malformed { layer },
            Error::Truncated | Error::Unrecognized => Diagnostic::Truncated { layer },
        }
    }

    /// The layer this diagnostic was raised for.
    pub fn layer(&self) -> Kind {
        match *self {
            Diagnostic::UnsupportedType { layer, .. }
            | Diagnostic::InvalidVersion { layer, .. }
            | Diagnostic::MissingBytes { layer, .. }
            | Diagnostic::ExtraBytes { layer, .. }
            | Diagnostic::BadLength { layer, .. }
            | Diagnostic::Truncated { layer }
            | Diagnostic::Malformed { layer } => layer,
            Diagnostic::UnexpectedAddressLength { .. } => Kind::Arp,
        }
    }

    /// The severity.
    pub fn level(&self) -> Level {
        match self {
            Diagnostic::MissingBytes { .. }
            | Diagnostic::Truncated { .. }
            | Diagnostic::Malformed { .. } => Level::Error,
            _ => Level::Warn,
        }
    }

    /// The class this diagnostic belongs to.
    pub fn class(&self) -> Class {
        match self {
            Diagnostic::UnsupportedType { .. } => Class::UnsupportedDiscriminant,
            Diagnostic::Truncated { .. }
            | Diagnostic::Malformed { .. } => Class::InsufficientData,
            _ => Class::StructuralAnomaly,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Diagnostic::UnsupportedType { layer: Kind::EthernetII, value } =>
                write!(f, "Unsupported EthernetII Type 0x{:04x}.", value),
            Diagnostic::UnsupportedType { value, .. } =>
                write!(f, "Unsupported IP Protocol {}.", value),
            Diagnostic::InvalidVersion { layer, found } =>
                write!(f, "Invalid version {} on {} packet.", found, layer),
            Diagnostic::MissingBytes { layer, count } =>
                write!(f, "Missing {} bytes from {} packet.", count, layer),
            Diagnostic::ExtraBytes { layer, count } =>
                write!(f, "Extra {} bytes on {} packet.", count, layer),
            Diagnostic::BadLength { layer, value } =>
                write!(f, "Length field {} of {} packet is shorter than its header.", value, layer),
            Diagnostic::Truncated { layer } =>
                write!(f, "Truncated {} header, kept as raw bytes.", layer),
            Diagnostic::Malformed { layer } =>
                write!(f, "Malformed {} header length, kept as raw bytes.", layer),
            Diagnostic::UnexpectedAddressLength { hlen, plen } =>
                write!(f, "Unexpected ARP address lengths {}/{}, expected 6/4.", hlen, plen),
        }
    }
}

/// Records the diagnostics of one decode call and forwards them to the log.
#[derive(Debug)]
pub(crate) struct Diagnostics {
    threshold: Level,
    collect: bool,
    recorded: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn new(threshold: Level, collect: bool) -> Self {
        Diagnostics {
            threshold,
            collect,
            recorded: Vec::new(),
        }
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        let level = diagnostic.level();
        if level >= self.threshold {
            net_log!(level, "[framedecode] {}", diagnostic);
        }
        if self.collect {
            self.recorded.push(diagnostic);
        }
    }

    pub(crate) fn into_inner(self) -> Vec<Diagnostic> {
        self.recorded
    }
}
