use core::fmt;

/// The error type for decoding a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A header could not be decoded because the bytes handed to it were shorter than required.
    ///
    /// The buffer may be shorter than the minimum fixed header of the protocol or shorter than the
    /// variable length header announced by one of its own length fields, e.g. the IPv4 `ihl` or
    /// the TCP data offset. No field is read in this case.
    Truncated,

    /// A header was recognized but a length subfield is self-contradictory.
    ///
    /// Examples: an IPv4 header with an `ihl` below 5; a TCP header whose data offset claims less
    /// than the 20 bytes of its fixed part.
    Malformed,

    /// A value could not be interpreted.
    ///
    /// Used when parsing textual representations, decoding itself falls back to a raw layer for
    /// unknown discriminants instead.
    Unrecognized,
}

/// The result type for decoding.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Truncated    => write!(f, "truncated packet"),
            Error::Malformed    => write!(f, "malformed packet"),
            Error::Unrecognized => write!(f, "unrecognized value"),
        }
    }
}

impl std::error::Error for Error {}
