use crate::foundation::color::Rgba8;

/// Storage layout family, used by the compositor's dispatch table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Four bytes per pixel in B, G, R, A order.
    Bgra,
    /// Four bytes per pixel in R, G, B, A order.
    Rgba,
    /// One alpha byte per pixel.
    Alpha,
}

/// Byte layout of one pixel cell.
///
/// The `R`, `G`, `B` and `A` constants are byte indices inside a cell of
/// [`BYTES_PER_PIXEL`](Self::BYTES_PER_PIXEL) bytes.
pub trait ChannelOrder: Copy + Default + Send + Sync + 'static {
    /// Dispatch tag.
    const LAYOUT: Layout;
    /// Bytes per pixel cell.
    const BYTES_PER_PIXEL: usize;
    /// Index of the red byte.
    const R: usize;
    /// Index of the green byte.
    const G: usize;
    /// Index of the blue byte.
    const B: usize;
    /// Index of the alpha byte.
    const A: usize;

    /// Decode one cell.
    #[inline]
    fn read(px: &[u8]) -> Rgba8 {
        Rgba8::new(px[Self::R], px[Self::G], px[Self::B], px[Self::A])
    }

    /// Encode one cell.
    #[inline]
    fn write(px: &mut [u8], c: Rgba8) {
        px[Self::R] = c.r;
        px[Self::G] = c.g;
        px[Self::B] = c.b;
        px[Self::A] = c.a;
    }
}

/// Blue, green, red, alpha: the crate's native layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bgra;

impl ChannelOrder for Bgra {
    const LAYOUT: Layout = Layout::Bgra;
    const BYTES_PER_PIXEL: usize = 4;
    const R: usize = 2;
    const G: usize = 1;
    const B: usize = 0;
    const A: usize = 3;
}

/// Red, green, blue, alpha: the conventional byte order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba;

impl ChannelOrder for Rgba {
    const LAYOUT: Layout = Layout::Rgba;
    const BYTES_PER_PIXEL: usize = 4;
    const R: usize = 0;
    const G: usize = 1;
    const B: usize = 2;
    const A: usize = 3;
}

/// Alpha-only coverage, one byte per pixel.
///
/// Reads report the coverage on every channel; writes keep only alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Alpha;

impl ChannelOrder for Alpha {
    const LAYOUT: Layout = Layout::Alpha;
    const BYTES_PER_PIXEL: usize = 1;
    const R: usize = 0;
    const G: usize = 0;
    const B: usize = 0;
    const A: usize = 0;

    #[inline]
    fn read(px: &[u8]) -> Rgba8 {
        let a = px[0];
        Rgba8::new(a, a, a, a)
    }

    #[inline]
    fn write(px: &mut [u8], c: Rgba8) {
        px[0] = c.a;
    }
}
