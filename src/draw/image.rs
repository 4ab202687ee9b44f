use crate::buffer::order::{Alpha, Bgra, ChannelOrder, Rgba};
use crate::buffer::pixel::{AlphaView, BgraView, Buffer, RgbaView};
use crate::foundation::color::{Color, Rgba16};
use crate::foundation::core::{Point, Rect};

/// Read-only access to colors by coordinate.
///
/// This is the only capability the generic compositing path needs, so any
/// image type implementing it can be drawn.
pub trait ColorAt {
    /// Coordinates with defined colors.
    fn bounds(&self) -> Rect;
    /// Premultiplied 16-bit color at `(x, y)`; transparent outside
    /// [`bounds`](Self::bounds).
    fn rgba16_at(&self, x: i32, y: i32) -> Rgba16;
}

impl<O: ChannelOrder, C: AsRef<[u8]>> ColorAt for Buffer<O, C> {
    fn bounds(&self) -> Rect {
        Buffer::bounds(self)
    }

    fn rgba16_at(&self, x: i32, y: i32) -> Rgba16 {
        self.at(x, y).rgba16()
    }
}

/// Bounds reported by a uniform source.
pub const UNIFORM_BOUNDS: Rect = Rect {
    min: Point::new(-1_000_000_000, -1_000_000_000),
    max: Point::new(1_000_000_000, 1_000_000_000),
};

/// A source or mask for the compositor.
///
/// The variants are the closed set of kinds the compositor knows how to
/// specialize; [`Image::Dyn`] wraps anything else.
#[derive(Clone, Copy)]
pub enum Image<'a> {
    /// A single color covering the whole plane.
    Uniform(Rgba16),
    /// Conventional R,G,B,A pixels.
    Rgba(RgbaView<'a>),
    /// Native B,G,R,A pixels.
    Bgra(BgraView<'a>),
    /// One coverage byte per pixel.
    Alpha(AlphaView<'a>),
    /// Any other image, read through [`ColorAt`].
    Dyn(&'a dyn ColorAt),
}

/// Kind tag of an [`Image`], used as a dispatch key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// [`Image::Uniform`].
    Uniform,
    /// [`Image::Rgba`].
    Rgba,
    /// [`Image::Bgra`].
    Bgra,
    /// [`Image::Alpha`].
    Alpha,
    /// [`Image::Dyn`].
    Dyn,
}

impl<'a> Image<'a> {
    /// Uniform source of any color model.
    pub fn uniform(c: impl Color) -> Self {
        Self::Uniform(c.rgba16())
    }

    /// Wrap an arbitrary [`ColorAt`] implementation. Always composited with
    /// the generic path.
    pub fn from_dyn(img: &'a dyn ColorAt) -> Self {
        Self::Dyn(img)
    }

    /// Dispatch key.
    pub fn kind(&self) -> ImageKind {
        match self {
            Self::Uniform(_) => ImageKind::Uniform,
            Self::Rgba(_) => ImageKind::Rgba,
            Self::Bgra(_) => ImageKind::Bgra,
            Self::Alpha(_) => ImageKind::Alpha,
            Self::Dyn(_) => ImageKind::Dyn,
        }
    }
}

impl ColorAt for Image<'_> {
    fn bounds(&self) -> Rect {
        match self {
            Self::Uniform(_) => UNIFORM_BOUNDS,
            Self::Rgba(b) => b.bounds(),
            Self::Bgra(b) => b.bounds(),
            Self::Alpha(b) => b.bounds(),
            Self::Dyn(d) => d.bounds(),
        }
    }

    fn rgba16_at(&self, x: i32, y: i32) -> Rgba16 {
        match self {
            Self::Uniform(c) => *c,
            Self::Rgba(b) => b.rgba16_at(x, y),
            Self::Bgra(b) => b.rgba16_at(x, y),
            Self::Alpha(b) => b.rgba16_at(x, y),
            Self::Dyn(d) => d.rgba16_at(x, y),
        }
    }
}

impl<'a, C: AsRef<[u8]>> From<&'a Buffer<Bgra, C>> for Image<'a> {
    fn from(b: &'a Buffer<Bgra, C>) -> Self {
        Self::Bgra(b.as_view())
    }
}

impl<'a, C: AsRef<[u8]>> From<&'a Buffer<Rgba, C>> for Image<'a> {
    fn from(b: &'a Buffer<Rgba, C>) -> Self {
        Self::Rgba(b.as_view())
    }
}

impl<'a, C: AsRef<[u8]>> From<&'a Buffer<Alpha, C>> for Image<'a> {
    fn from(b: &'a Buffer<Alpha, C>) -> Self {
        Self::Alpha(b.as_view())
    }
}

impl std::fmt::Debug for Image<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uniform(c) => f.debug_tuple("Uniform").field(c).finish(),
            Self::Rgba(b) => f.debug_tuple("Rgba").field(b).finish(),
            Self::Bgra(b) => f.debug_tuple("Bgra").field(b).finish(),
            Self::Alpha(b) => f.debug_tuple("Alpha").field(b).finish(),
            Self::Dyn(d) => f.debug_tuple("Dyn").field(&d.bounds()).finish(),
        }
    }
}
