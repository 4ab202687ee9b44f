//! Specialized compositing loops.
//!
//! Each loop computes exactly what [`fallback::draw`](super::fallback::draw)
//! would for the same inputs; they only skip the per-pixel color model
//! round trip. All rectangles passed in are already clipped.

use crate::buffer::order::ChannelOrder;
use crate::buffer::pixel::{AlphaView, Buffer};
use crate::draw::clip::Traversal;
use crate::foundation::color::{Rgba8, Rgba16};
use crate::foundation::core::{Point, Rect};
use crate::foundation::math::{expand, inv_alpha, inv_alpha_masked, over, over_masked};

/// Where buffer-to-buffer loops read source pixels from.
#[derive(Clone, Copy, Debug)]
pub(crate) enum SrcPix<'a> {
    /// Another arena. `start` is the offset of the source origin.
    Detached {
        pix: &'a [u8],
        stride: usize,
        start: usize,
    },
    /// The destination arena itself.
    Aliased { start: usize },
}

impl<'a> SrcPix<'a> {
    pub(crate) fn detached<S: ChannelOrder>(src: &'a Buffer<S, &'_ [u8]>, sp: Point) -> Self {
        Self::Detached {
            pix: src.pix(),
            stride: src.stride(),
            start: src.pix_offset(sp.x, sp.y),
        }
    }

    fn start(&self) -> usize {
        match *self {
            Self::Detached { start, .. } | Self::Aliased { start } => start,
        }
    }

    fn stride(&self, dst_stride: usize) -> usize {
        match *self {
            Self::Detached { stride, .. } => stride,
            Self::Aliased { .. } => dst_stride,
        }
    }

    #[inline]
    fn load(&self, dpix: &[u8], i: usize) -> [u8; 4] {
        let p = match *self {
            Self::Detached { pix, .. } => pix,
            Self::Aliased { .. } => dpix,
        };
        [p[i], p[i + 1], p[i + 2], p[i + 3]]
    }
}

/// Index of the `n`th of `len` steps in visiting order.
#[inline]
fn step(trav: Traversal, n: usize, len: usize) -> usize {
    match trav {
        Traversal::Forward => n,
        Traversal::Reverse => len - 1 - n,
    }
}

/// Over with a uniform source, no mask.
pub(crate) fn fill_over<D, C>(dst: &mut Buffer<D, C>, r: Rect, src: Rgba16)
where
    D: ChannelOrder,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    let [sr, sg, sb, sa] = src.channels();
    let inv = inv_alpha(sa);
    let stride = dst.stride();
    let n = r.dx() as usize * 4;
    let mut i0 = dst.pix_offset(r.min.x, r.min.y);
    let pix = dst.pix_mut();
    for _ in 0..r.dy() {
        for px in pix[i0..i0 + n].chunks_exact_mut(4) {
            px[D::R] = over(px[D::R], sr, inv);
            px[D::G] = over(px[D::G], sg, inv);
            px[D::B] = over(px[D::B], sb, inv);
            px[D::A] = over(px[D::A], sa, inv);
        }
        i0 += stride;
    }
}

/// Src with a uniform source, no mask: fill the first row, then duplicate it.
pub(crate) fn fill_src<D, C>(dst: &mut Buffer<D, C>, r: Rect, src: Rgba16)
where
    D: ChannelOrder,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    let mut cell = [0u8; 4];
    D::write(&mut cell, Rgba8::from_color(src));
    let stride = dst.stride();
    let n = r.dx() as usize * 4;
    let i0 = dst.pix_offset(r.min.x, r.min.y);
    let pix = dst.pix_mut();
    for px in pix[i0..i0 + n].chunks_exact_mut(4) {
        px.copy_from_slice(&cell);
    }
    for y in 1..r.dy() as usize {
        pix.copy_within(i0..i0 + n, i0 + y * stride);
    }
}

/// Over from a four-byte buffer in order `S`, no mask.
///
/// `trav` must come from [`traversal`](super::clip::traversal) when the
/// source is aliased: every pixel is read and written in the same step.
pub(crate) fn blend_over<D, S, C>(
    dst: &mut Buffer<D, C>,
    r: Rect,
    src: SrcPix<'_>,
    trav: Traversal,
) where
    D: ChannelOrder,
    S: ChannelOrder,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    let (dx, dy) = (r.dx() as usize, r.dy() as usize);
    let dstride = dst.stride();
    let sstride = src.stride(dstride);
    let (d0, s0) = (dst.pix_offset(r.min.x, r.min.y), src.start());
    let pix = dst.pix_mut();
    for row in 0..dy {
        let y = step(trav, row, dy);
        let (drow, srow) = (d0 + y * dstride, s0 + y * sstride);
        for col in 0..dx {
            let x = step(trav, col, dx);
            let i = drow + x * 4;
            let s = src.load(pix, srow + x * 4);
            let sa = expand(s[S::A]);
            let inv = inv_alpha(sa);
            pix[i + D::R] = over(pix[i + D::R], expand(s[S::R]), inv);
            pix[i + D::G] = over(pix[i + D::G], expand(s[S::G]), inv);
            pix[i + D::B] = over(pix[i + D::B], expand(s[S::B]), inv);
            pix[i + D::A] = over(pix[i + D::A], sa, inv);
        }
    }
}

/// Src from a four-byte buffer in a different order, no mask. Row by row
/// overwrite with a channel reorder.
pub(crate) fn convert_src<D, S, C>(
    dst: &mut Buffer<D, C>,
    r: Rect,
    src: &Buffer<S, &[u8]>,
    sp: Point,
) where
    D: ChannelOrder,
    S: ChannelOrder,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    let n = r.dx() as usize * 4;
    let (dstride, sstride) = (dst.stride(), src.stride());
    let mut d0 = dst.pix_offset(r.min.x, r.min.y);
    let mut s0 = src.pix_offset(sp.x, sp.y);
    let spix = src.pix();
    let pix = dst.pix_mut();
    for _ in 0..r.dy() {
        let cells = pix[d0..d0 + n].chunks_exact_mut(4);
        for (d, s) in cells.zip(spix[s0..s0 + n].chunks_exact(4)) {
            D::write(d, S::read(s));
        }
        d0 += dstride;
        s0 += sstride;
    }
}

/// Src from a buffer with the destination's own layout: a byte-range copy
/// per row. `copy_within` handles overlap inside a row, so `trav` only
/// decides the row order.
pub(crate) fn copy_src<D, C>(dst: &mut Buffer<D, C>, r: Rect, src: SrcPix<'_>, trav: Traversal)
where
    D: ChannelOrder,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    let (n, dy) = (r.dx() as usize * D::BYTES_PER_PIXEL, r.dy() as usize);
    let dstride = dst.stride();
    let sstride = src.stride(dstride);
    let (d0, s0) = (dst.pix_offset(r.min.x, r.min.y), src.start());
    let pix = dst.pix_mut();
    for row in 0..dy {
        let y = step(trav, row, dy);
        let (d, s) = (d0 + y * dstride, s0 + y * sstride);
        match src {
            SrcPix::Detached { pix: spix, .. } => pix[d..d + n].copy_from_slice(&spix[s..s + n]),
            SrcPix::Aliased { .. } => pix.copy_within(s..s + n, d),
        }
    }
}

/// Over with a uniform source through an alpha mask. Pixels with zero
/// coverage are left untouched.
pub(crate) fn glyph_over<D, C>(
    dst: &mut Buffer<D, C>,
    r: Rect,
    src: Rgba16,
    mask: &AlphaView<'_>,
    mp: Point,
) where
    D: ChannelOrder,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    let [sr, sg, sb, sa] = src.channels();
    let n = r.dx() as usize;
    let (dstride, mstride) = (dst.stride(), mask.stride());
    let mut i0 = dst.pix_offset(r.min.x, r.min.y);
    let mut mi0 = mask.pix_offset(mp.x, mp.y);
    let mpix = mask.pix();
    let pix = dst.pix_mut();
    for _ in 0..r.dy() {
        let cells = pix[i0..i0 + n * 4].chunks_exact_mut(4);
        for (px, &m) in cells.zip(&mpix[mi0..mi0 + n]) {
            if m == 0 {
                continue;
            }
            let ma = expand(m);
            let inv = inv_alpha_masked(sa, ma);
            px[D::R] = over_masked(px[D::R], sr, ma, inv);
            px[D::G] = over_masked(px[D::G], sg, ma, inv);
            px[D::B] = over_masked(px[D::B], sb, ma, inv);
            px[D::A] = over_masked(px[D::A], sa, ma, inv);
        }
        i0 += dstride;
        mi0 += mstride;
    }
}
