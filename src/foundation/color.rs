use crate::foundation::math::{MAX16, expand, narrow};

/// Anything that can report itself as 16-bit premultiplied RGBA.
///
/// This is the conversion seam used by [`Buffer::set`](crate::Buffer::set)
/// and by the generic compositing fallback.
pub trait Color {
    /// Premultiplied channels in `0..=65535`.
    fn rgba16(&self) -> Rgba16;
}

impl<C: Color + ?Sized> Color for &C {
    fn rgba16(&self) -> Rgba16 {
        (**self).rgba16()
    }
}

/// Premultiplied 8-bit RGBA, the canonical color returned by pixel reads.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 0xff);
    /// Opaque white.
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff, 0xff);

    /// Build a color from premultiplied channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert any color, truncating each 16-bit channel to 8 bits.
    pub fn from_color(c: impl Color) -> Self {
        let c = c.rgba16();
        Self {
            r: narrow(u32::from(c.r)),
            g: narrow(u32::from(c.g)),
            b: narrow(u32::from(c.b)),
            a: narrow(u32::from(c.a)),
        }
    }
}

impl Color for Rgba8 {
    fn rgba16(&self) -> Rgba16 {
        Rgba16 {
            r: expand(self.r) as u16,
            g: expand(self.g) as u16,
            b: expand(self.b) as u16,
            a: expand(self.a) as u16,
        }
    }
}

/// Premultiplied 16-bit RGBA.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba16 {
    /// Red channel.
    pub r: u16,
    /// Green channel.
    pub g: u16,
    /// Blue channel.
    pub b: u16,
    /// Alpha channel.
    pub a: u16,
}

impl Rgba16 {
    /// Build a color from premultiplied 16-bit channels.
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    pub(crate) fn channels(self) -> [u32; 4] {
        [
            u32::from(self.r),
            u32::from(self.g),
            u32::from(self.b),
            u32::from(self.a),
        ]
    }
}

impl Color for Rgba16 {
    fn rgba16(&self) -> Rgba16 {
        *self
    }
}

/// Straight (non-premultiplied) 8-bit RGBA.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl NRgba8 {
    /// Build a color from straight channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Color for NRgba8 {
    fn rgba16(&self) -> Rgba16 {
        let a = expand(self.a);
        let premul = |c: u8| (expand(c) * a / MAX16) as u16;
        Rgba16 {
            r: premul(self.r),
            g: premul(self.g),
            b: premul(self.b),
            a: a as u16,
        }
    }
}

/// 8-bit coverage; every channel reports the alpha value.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Alpha8(pub u8);

impl Color for Alpha8 {
    fn rgba16(&self) -> Rgba16 {
        let a = expand(self.0) as u16;
        Rgba16::new(a, a, a, a)
    }
}

/// Opaque 8-bit gray.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Gray8(pub u8);

impl Color for Gray8 {
    fn rgba16(&self) -> Rgba16 {
        let y = expand(self.0) as u16;
        Rgba16::new(y, y, y, MAX16 as u16)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
