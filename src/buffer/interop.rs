//! In-memory conversions to and from the `image` crate's buffer types.
//!
//! Pixel bytes are carried over unchanged apart from the channel reorder,
//! so an `RgbaImage` is read as premultiplied RGBA.

use crate::buffer::order::{Alpha, ChannelOrder, Rgba};
use crate::buffer::pixel::{AlphaBuffer, Buffer};
use crate::foundation::color::Rgba8;
use crate::foundation::core::Rect;
use crate::foundation::error::{BgraError, BgraResult};

fn image_rect(width: u32, height: u32) -> BgraResult<Rect> {
    let w = i32::try_from(width)
        .map_err(|_| BgraError::dimensions(format!("width {width} exceeds i32::MAX")))?;
    let h = i32::try_from(height)
        .map_err(|_| BgraError::dimensions(format!("height {height} exceeds i32::MAX")))?;
    Ok(Rect::from_size(w, h))
}

impl<O: ChannelOrder> TryFrom<&image::RgbaImage> for Buffer<O> {
    type Error = BgraError;

    fn try_from(img: &image::RgbaImage) -> BgraResult<Self> {
        let mut out = Buffer::<O>::try_new(image_rect(img.width(), img.height())?)?;
        let cells = out.pix_mut().chunks_exact_mut(O::BYTES_PER_PIXEL);
        for (dst, src) in cells.zip(img.as_raw().chunks_exact(4)) {
            O::write(dst, Rgba::read(src));
        }
        Ok(out)
    }
}

impl TryFrom<&image::GrayImage> for AlphaBuffer {
    type Error = BgraError;

    fn try_from(img: &image::GrayImage) -> BgraResult<Self> {
        let mut out = Buffer::<Alpha>::try_new(image_rect(img.width(), img.height())?)?;
        out.pix_mut().copy_from_slice(img.as_raw());
        Ok(out)
    }
}

impl<O: ChannelOrder, C: AsRef<[u8]>> Buffer<O, C> {
    /// Copy the visible pixels into an `image::RgbaImage` whose `(0, 0)` is
    /// this buffer's `bounds().min`.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let r = self.bounds();
        if r.is_empty() {
            return image::RgbaImage::new(0, 0);
        }
        image::RgbaImage::from_fn(r.dx() as u32, r.dy() as u32, |x, y| {
            let Rgba8 { r: cr, g, b, a } = self.at(r.min.x + x as i32, r.min.y + y as i32);
            image::Rgba([cr, g, b, a])
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/interop.rs"]
mod tests;
