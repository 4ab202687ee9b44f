use std::fmt;
use std::marker::PhantomData;

use crate::buffer::order::{Alpha, Bgra, ChannelOrder, Rgba};
use crate::foundation::color::{Color, Rgba8};
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{BgraError, BgraResult};

/// Strided pixel arena presenting the coordinates in `rect`.
///
/// The pixel at `(x, y)` starts at
/// `(y - rect.min.y) * stride + (x - rect.min.x) * O::BYTES_PER_PIXEL`.
/// `C` is the storage: `Vec<u8>` for an owned buffer, `&[u8]` or
/// `&mut [u8]` for a sub-view borrowing its parent's arena.
#[derive(Clone, Copy)]
pub struct Buffer<O: ChannelOrder, C = Vec<u8>> {
    pix: C,
    stride: usize,
    rect: Rect,
    order: PhantomData<O>,
}

/// Owned B,G,R,A buffer.
pub type BgraBuffer = Buffer<Bgra>;
/// Read-only B,G,R,A view.
pub type BgraView<'a> = Buffer<Bgra, &'a [u8]>;
/// Mutable B,G,R,A view.
pub type BgraViewMut<'a> = Buffer<Bgra, &'a mut [u8]>;
/// Owned R,G,B,A buffer.
pub type RgbaBuffer = Buffer<Rgba>;
/// Read-only R,G,B,A view.
pub type RgbaView<'a> = Buffer<Rgba, &'a [u8]>;
/// Mutable R,G,B,A view.
pub type RgbaViewMut<'a> = Buffer<Rgba, &'a mut [u8]>;
/// Owned alpha mask.
pub type AlphaBuffer = Buffer<Alpha>;
/// Read-only alpha mask view.
pub type AlphaView<'a> = Buffer<Alpha, &'a [u8]>;
/// Mutable alpha mask view.
pub type AlphaViewMut<'a> = Buffer<Alpha, &'a mut [u8]>;

/// Exact width and height of a non-empty `rect`. Spans past `i32::MAX`
/// would overflow coordinate offsets and are rejected.
fn span(rect: Rect) -> BgraResult<(usize, usize)> {
    let w = i64::from(rect.max.x) - i64::from(rect.min.x);
    let h = i64::from(rect.max.y) - i64::from(rect.min.y);
    let limit = i64::from(i32::MAX);
    if w > limit || h > limit {
        tracing::debug!(w, h, "rejecting oversized rectangle");
        return Err(BgraError::dimensions(format!(
            "{w}x{h} rectangle exceeds i32::MAX on an axis"
        )));
    }
    Ok((w as usize, h as usize))
}

impl<O: ChannelOrder> Buffer<O, Vec<u8>> {
    /// Allocate a zero-filled (transparent) buffer covering `rect`.
    ///
    /// # Panics
    ///
    /// Panics if `rect` is wider or taller than `i32::MAX` or the arena size
    /// overflows `usize`.
    pub fn new(rect: Rect) -> Self {
        Self::try_new(rect).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Fallible form of [`Buffer::new`].
    pub fn try_new(rect: Rect) -> BgraResult<Self> {
        if rect.is_empty() {
            return Ok(Self::empty_with(Vec::new()));
        }
        let (w, h) = span(rect)?;
        let stride = w
            .checked_mul(O::BYTES_PER_PIXEL)
            .ok_or_else(|| BgraError::dimensions("row width overflows usize"))?;
        let len = stride
            .checked_mul(h)
            .ok_or_else(|| BgraError::dimensions("buffer size overflows usize"))?;
        Ok(Self {
            pix: vec![0; len],
            stride,
            rect,
            order: PhantomData,
        })
    }

    /// Give up the arena.
    pub fn into_pix(self) -> Vec<u8> {
        self.pix
    }
}

impl<O: ChannelOrder, C> Buffer<O, C> {
    fn empty_with(pix: C) -> Self {
        Self {
            pix,
            stride: 0,
            rect: Rect::ZERO,
            order: PhantomData,
        }
    }

    /// Rectangle of valid coordinates.
    pub fn bounds(&self) -> Rect {
        self.rect
    }

    /// Byte distance between vertically adjacent pixels.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Index of the first byte of the pixel at `(x, y)`.
    ///
    /// Only meaningful for coordinates inside [`bounds`](Self::bounds).
    pub fn pix_offset(&self, x: i32, y: i32) -> usize {
        (y - self.rect.min.y) as usize * self.stride
            + (x - self.rect.min.x) as usize * O::BYTES_PER_PIXEL
    }
}

impl<O: ChannelOrder, C: AsRef<[u8]>> Buffer<O, C> {
    /// Wrap an existing arena, checking that every coordinate in `rect`
    /// maps to bytes inside `pix`.
    pub fn from_raw(pix: C, stride: usize, rect: Rect) -> BgraResult<Self> {
        if rect.is_empty() {
            return Ok(Self::empty_with(pix));
        }
        let (w, h) = span(rect)?;
        let row = w
            .checked_mul(O::BYTES_PER_PIXEL)
            .ok_or_else(|| BgraError::dimensions("row width overflows usize"))?;
        if stride < row {
            tracing::debug!(stride, row, "rejecting raw buffer");
            return Err(BgraError::validation(format!(
                "stride {stride} is smaller than row width {row}"
            )));
        }
        let needed = (h - 1)
            .checked_mul(stride)
            .and_then(|v| v.checked_add(row))
            .ok_or_else(|| BgraError::dimensions("buffer size overflows usize"))?;
        let len = pix.as_ref().len();
        if len < needed {
            tracing::debug!(len, needed, "rejecting raw buffer");
            return Err(BgraError::validation(format!(
                "arena of {len} bytes cannot hold {w}x{h} pixels at stride {stride} ({needed} bytes needed)"
            )));
        }
        Ok(Self {
            pix,
            stride,
            rect,
            order: PhantomData,
        })
    }

    /// The raw arena, starting at the top-left pixel.
    pub fn pix(&self) -> &[u8] {
        self.pix.as_ref()
    }

    /// Color at `(x, y)`; transparent black outside the bounds.
    pub fn at(&self, x: i32, y: i32) -> Rgba8 {
        if !Point::new(x, y).in_rect(self.rect) {
            return Rgba8::TRANSPARENT;
        }
        let i = self.pix_offset(x, y);
        O::read(&self.pix.as_ref()[i..i + O::BYTES_PER_PIXEL])
    }

    /// Whether every pixel in the bounds has full alpha. Vacuously true for
    /// an empty buffer.
    pub fn is_opaque(&self) -> bool {
        if self.rect.is_empty() {
            return true;
        }
        let pix = self.pix.as_ref();
        let row = self.rect.dx() as usize * O::BYTES_PER_PIXEL;
        (0..self.rect.dy() as usize).all(|y| {
            let start = y * self.stride;
            pix[start..start + row]
                .chunks_exact(O::BYTES_PER_PIXEL)
                .all(|px| px[O::A] == 0xff)
        })
    }

    /// Borrow the part of the buffer visible through `r`.
    ///
    /// The view shares this buffer's arena. An `r` that misses the bounds
    /// yields an empty view.
    pub fn sub_view(&self, r: Rect) -> Buffer<O, &[u8]> {
        let r = r.intersect(self.rect);
        if r.is_empty() {
            return Buffer::empty_with(Default::default());
        }
        let i = self.pix_offset(r.min.x, r.min.y);
        Buffer {
            pix: &self.pix.as_ref()[i..],
            stride: self.stride,
            rect: r,
            order: PhantomData,
        }
    }

    /// Borrow the whole buffer read-only.
    pub fn as_view(&self) -> Buffer<O, &[u8]> {
        Buffer {
            pix: self.pix.as_ref(),
            stride: self.stride,
            rect: self.rect,
            order: PhantomData,
        }
    }

    /// Copy the visible pixels into a tightly packed owned buffer with the
    /// same bounds.
    pub fn to_owned_buffer(&self) -> Buffer<O> {
        let mut out = Buffer::<O>::new(self.rect);
        if self.rect.is_empty() {
            return out;
        }
        let row = out.stride;
        let src = self.pix.as_ref();
        for (y, dst_row) in out.pix.chunks_exact_mut(row).enumerate() {
            let start = y * self.stride;
            dst_row.copy_from_slice(&src[start..start + row]);
        }
        out
    }
}

impl<O: ChannelOrder, C: AsRef<[u8]> + AsMut<[u8]>> Buffer<O, C> {
    /// The raw arena, mutably.
    pub fn pix_mut(&mut self) -> &mut [u8] {
        self.pix.as_mut()
    }

    /// Store `c` at `(x, y)`, converting it to 8 bits per channel. No-op
    /// outside the bounds.
    pub fn set(&mut self, x: i32, y: i32, c: impl Color) {
        self.set_direct(x, y, Rgba8::from_color(c));
    }

    /// Store an already 8-bit color at `(x, y)` without model conversion.
    /// No-op outside the bounds.
    pub fn set_direct(&mut self, x: i32, y: i32, c: Rgba8) {
        if !Point::new(x, y).in_rect(self.rect) {
            return;
        }
        let i = self.pix_offset(x, y);
        O::write(&mut self.pix.as_mut()[i..i + O::BYTES_PER_PIXEL], c);
    }

    /// Mutably borrow the part of the buffer visible through `r`.
    pub fn sub_view_mut(&mut self, r: Rect) -> Buffer<O, &mut [u8]> {
        let r = r.intersect(self.rect);
        if r.is_empty() {
            return Buffer::empty_with(Default::default());
        }
        let i = self.pix_offset(r.min.x, r.min.y);
        Buffer {
            pix: &mut self.pix.as_mut()[i..],
            stride: self.stride,
            rect: r,
            order: PhantomData,
        }
    }

    /// Borrow the whole buffer mutably.
    pub fn as_view_mut(&mut self) -> Buffer<O, &mut [u8]> {
        Buffer {
            pix: self.pix.as_mut(),
            stride: self.stride,
            rect: self.rect,
            order: PhantomData,
        }
    }
}

impl<O: ChannelOrder, C: AsRef<[u8]>> fmt::Debug for Buffer<O, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("layout", &O::LAYOUT)
            .field("rect", &self.rect)
            .field("stride", &self.stride)
            .field("len", &self.pix.as_ref().len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/pixel.rs"]
mod tests;
