use crate::buffer::order::{Bgra, ChannelOrder, Layout, Rgba};
use crate::buffer::pixel::Buffer;
use crate::draw::clip::{Traversal, clip, traversal};
use crate::draw::fallback::{self, Source};
use crate::draw::fast::{self, SrcPix};
use crate::draw::image::{ColorAt, Image, ImageKind};
use crate::foundation::core::{Point, Rect};

/// Porter-Duff operator.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// Source (scaled by mask coverage) blended atop the destination.
    #[default]
    Over,
    /// Source (scaled by mask coverage) replaces the destination.
    Src,
}

/// Compositor configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    /// Use the specialized loops when the inputs allow it. When false every
    /// draw goes through the generic per-pixel path.
    pub fast_paths: bool,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self { fast_paths: true }
    }
}

/// Loop chosen for a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Path {
    /// Over, uniform source, no mask.
    FillOver,
    /// Over, four-byte buffer source, no mask.
    BlendOver,
    /// Over, uniform source, alpha mask.
    GlyphOver,
    /// Src, uniform source, no mask.
    FillSrc,
    /// Src, buffer in the other four-byte order, no mask.
    ConvertSrc,
    /// Src, buffer in the destination's order, no mask.
    CopySrc,
    /// Generic per-pixel path.
    Fallback,
}

/// Dispatch table from `(destination layout, operator, source kind, mask
/// kind)` to a loop.
///
/// Src with any mask has no specialized loop.
pub fn route(dst: Layout, op: Op, src: ImageKind, mask: Option<ImageKind>) -> Path {
    use ImageKind as K;
    match (dst, op, src, mask) {
        (Layout::Bgra, Op::Over, K::Uniform, None) => Path::FillOver,
        (Layout::Bgra, Op::Over, K::Rgba | K::Bgra, None) => Path::BlendOver,
        (Layout::Bgra, Op::Over, K::Uniform, Some(K::Alpha)) => Path::GlyphOver,
        (Layout::Bgra, Op::Src, K::Uniform, None) => Path::FillSrc,
        (Layout::Bgra, Op::Src, K::Rgba, None) => Path::ConvertSrc,
        (Layout::Bgra, Op::Src, K::Bgra, None) => Path::CopySrc,
        (Layout::Rgba, Op::Over, K::Bgra, None) => Path::BlendOver,
        (Layout::Rgba, Op::Src, K::Bgra, None) => Path::ConvertSrc,
        _ => Path::Fallback,
    }
}

fn native_kind(layout: Layout) -> ImageKind {
    match layout {
        Layout::Bgra => ImageKind::Bgra,
        Layout::Rgba => ImageKind::Rgba,
        Layout::Alpha => ImageKind::Alpha,
    }
}

/// Draws sources onto destination buffers.
///
/// Every draw clips to the destination, source and mask bounds first; a
/// draw that clips to nothing leaves the destination untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compositor {
    settings: DrawSettings,
}

impl Compositor {
    /// Build a compositor with explicit settings.
    pub fn new(settings: DrawSettings) -> Self {
        Self { settings }
    }

    /// Active settings.
    pub fn settings(&self) -> DrawSettings {
        self.settings
    }

    /// Loop this compositor would run for the given kinds.
    pub fn path_for(&self, dst: Layout, op: Op, src: ImageKind, mask: Option<ImageKind>) -> Path {
        if !self.settings.fast_paths {
            return Path::Fallback;
        }
        route(dst, op, src, mask)
    }

    /// Composite `src` onto `r` of `dst`, aligning `r.min` with `sp`.
    pub fn draw<D, C>(&self, dst: &mut Buffer<D, C>, r: Rect, src: Image<'_>, sp: Point, op: Op)
    where
        D: ChannelOrder,
        C: AsRef<[u8]> + AsMut<[u8]>,
    {
        self.draw_mask(dst, r, src, sp, None, Point::ZERO, op);
    }

    /// Composite `src` through `mask` onto `r` of `dst`, aligning `r.min`
    /// with `sp` in the source and `mp` in the mask.
    #[allow(clippy::too_many_arguments)]
    #[tracing::instrument(level = "trace", skip_all, fields(op = ?op, dst = ?D::LAYOUT))]
    pub fn draw_mask<D, C>(
        &self,
        dst: &mut Buffer<D, C>,
        r: Rect,
        src: Image<'_>,
        sp: Point,
        mask: Option<Image<'_>>,
        mp: Point,
        op: Op,
    ) where
        D: ChannelOrder,
        C: AsRef<[u8]> + AsMut<[u8]>,
    {
        let c = clip(
            dst.bounds(),
            r,
            src.bounds(),
            sp,
            mask.as_ref().map(ColorAt::bounds),
            mp,
        );
        if c.rect.is_empty() {
            return;
        }
        let path = self.path_for(D::LAYOUT, op, src.kind(), mask.map(|m| m.kind()));
        tracing::trace!(?path, rect = ?c.rect, "compositing");

        let fwd = Traversal::Forward;
        match (path, src, mask) {
            (Path::FillOver, Image::Uniform(s), None) => fast::fill_over(dst, c.rect, s),
            (Path::FillSrc, Image::Uniform(s), None) => fast::fill_src(dst, c.rect, s),
            (Path::GlyphOver, Image::Uniform(s), Some(Image::Alpha(m))) => {
                fast::glyph_over(dst, c.rect, s, &m, c.mp)
            }
            (Path::BlendOver, Image::Rgba(s), None) => {
                fast::blend_over::<D, Rgba, C>(dst, c.rect, SrcPix::detached(&s, c.sp), fwd)
            }
            (Path::BlendOver, Image::Bgra(s), None) => {
                fast::blend_over::<D, Bgra, C>(dst, c.rect, SrcPix::detached(&s, c.sp), fwd)
            }
            (Path::ConvertSrc, Image::Rgba(s), None) => fast::convert_src(dst, c.rect, &s, c.sp),
            (Path::ConvertSrc, Image::Bgra(s), None) => fast::convert_src(dst, c.rect, &s, c.sp),
            (Path::CopySrc, Image::Bgra(s), None) if D::LAYOUT == Layout::Bgra => {
                fast::copy_src(dst, c.rect, SrcPix::detached(&s, c.sp), fwd)
            }
            _ => fallback::draw(
                dst,
                c.rect,
                Source::Image(&src),
                c.sp,
                mask.as_ref(),
                c.mp,
                op,
                fwd,
            ),
        }
    }

    /// Composite a region of `dst` onto another region of itself, aligning
    /// `r.min` with `sp`. Overlapping regions are handled as if the source
    /// had been copied out first.
    #[tracing::instrument(level = "trace", skip_all, fields(op = ?op, dst = ?D::LAYOUT))]
    pub fn draw_within<D, C>(
        &self,
        dst: &mut Buffer<D, C>,
        r: Rect,
        sp: Point,
        mask: Option<Image<'_>>,
        mp: Point,
        op: Op,
    ) where
        D: ChannelOrder,
        C: AsRef<[u8]> + AsMut<[u8]>,
    {
        let bounds = dst.bounds();
        let c = clip(bounds, r, bounds, sp, mask.as_ref().map(ColorAt::bounds), mp);
        if c.rect.is_empty() {
            return;
        }
        let path = self.path_for(
            D::LAYOUT,
            op,
            native_kind(D::LAYOUT),
            mask.map(|m| m.kind()),
        );
        let trav = traversal(c.rect, c.sp, true);
        tracing::trace!(?path, ?trav, rect = ?c.rect, "compositing within");

        let src = SrcPix::Aliased {
            start: dst.pix_offset(c.sp.x, c.sp.y),
        };
        match path {
            Path::BlendOver => fast::blend_over::<D, D, C>(dst, c.rect, src, trav),
            Path::CopySrc => fast::copy_src(dst, c.rect, src, trav),
            _ => fallback::draw(
                dst,
                c.rect,
                Source::Aliased,
                c.sp,
                mask.as_ref(),
                c.mp,
                op,
                trav,
            ),
        }
    }
}

/// [`Compositor::draw`] with default settings.
pub fn draw<D, C>(dst: &mut Buffer<D, C>, r: Rect, src: Image<'_>, sp: Point, op: Op)
where
    D: ChannelOrder,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    Compositor::default().draw(dst, r, src, sp, op);
}

/// [`Compositor::draw_mask`] with default settings.
#[allow(clippy::too_many_arguments)]
pub fn draw_mask<D, C>(
    dst: &mut Buffer<D, C>,
    r: Rect,
    src: Image<'_>,
    sp: Point,
    mask: Option<Image<'_>>,
    mp: Point,
    op: Op,
) where
    D: ChannelOrder,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    Compositor::default().draw_mask(dst, r, src, sp, mask, mp, op);
}

/// [`Compositor::draw_within`] with default settings.
pub fn draw_within<D, C>(
    dst: &mut Buffer<D, C>,
    r: Rect,
    sp: Point,
    mask: Option<Image<'_>>,
    mp: Point,
    op: Op,
) where
    D: ChannelOrder,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    Compositor::default().draw_within(dst, r, sp, mask, mp, op);
}

#[cfg(test)]
#[path = "../../tests/unit/draw/compositor.rs"]
mod tests;
