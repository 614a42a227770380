use core::fmt;

use crate::wire::View;

/// Bytes kept without decoding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raw<'a> {
    raw: View<'a>,
}

impl<'a> Raw<'a> {
    /// Keep a view as it is.
    pub fn new(raw: View<'a>) -> Self {
        Raw { raw }
    }

    /// The undecoded bytes.
    pub fn raw(&self) -> View<'a> {
        self.raw
    }

    /// The undecoded bytes as a slice of the capture buffer.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw.as_bytes()
    }

    /// The label of this layer, it never has a payload.
    pub fn stack(&self) -> Vec<&'static str> {
        vec![super::Kind::Raw.name()]
    }
}

impl fmt::Display for Raw<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RAW len={}", self.raw.len())
    }
}
