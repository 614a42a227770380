//! Zero-copy regions of a capture buffer.
use core::{fmt, ops};

/// A byte region of the capture buffer a frame was decoded from.
///
/// The view is an explicit `(offset, length)` pair together with a borrow of the *whole* capture
/// buffer. The lifetime `'a` is that of the buffer: it outlives every view and every layer derived
/// from it, and nothing here ever owns or copies the bytes. Keeping the whole buffer, not only the
/// sub-slice, means the position of any header or payload within the original capture stays
/// available to the caller through [`offset`].
///
/// Two views compare equal when they refer to the same region and the same bytes.
///
/// [`offset`]: #method.offset
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct View<'a> {
    buffer: &'a [u8],
    offset: usize,
    len: usize,
}

impl<'a> View<'a> {
    /// A view of the entire capture buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        View {
            buffer,
            offset: 0,
            len: buffer.len(),
        }
    }

    /// Offset of the first byte within the capture buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes in the view.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the view holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The covered range of the capture buffer.
    pub fn range(&self) -> ops::Range<usize> {
        self.offset..self.offset + self.len
    }

    /// The viewed bytes.
    ///
    /// The returned slice borrows from the capture buffer, not from the view.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buffer[self.range()]
    }

    /// The whole capture buffer this view points into.
    pub fn capture(&self) -> &'a [u8] {
        self.buffer
    }

    /// A sub-view, with `range` relative to the start of this view.
    ///
    /// Both ends are clamped to the length of this view so the result never reaches past it.
    pub fn slice(&self, range: ops::Range<usize>) -> Self {
        let end = range.end.min(self.len);
        let start = range.start.min(end);
        View {
            buffer: self.buffer,
            offset: self.offset + start,
            len: end - start,
        }
    }

    /// The sub-view from `start` to the end of this view, clamped like [`slice`].
    ///
    /// [`slice`]: #method.slice
    pub fn slice_from(&self, start: usize) -> Self {
        self.slice(start..self.len)
    }
}

impl AsRef<[u8]> for View<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let range = self.range();
        write!(f, "View({}..{}: {})", range.start, range.end, hex::encode(self.as_bytes()))
    }
}
