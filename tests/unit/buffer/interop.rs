use super::*;
use crate::buffer::pixel::{BgraBuffer, RgbaBuffer};

#[test]
fn rgba_image_converts_into_bgra_layout() {
    let img = image::RgbaImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            image::Rgba([10, 20, 30, 255])
        } else {
            image::Rgba([1, 2, 3, 4])
        }
    });
    let b = BgraBuffer::try_from(&img).unwrap();
    assert_eq!(b.bounds(), Rect::from_size(2, 1));
    assert_eq!(b.pix(), &[30, 20, 10, 255, 3, 2, 1, 4]);

    let r = RgbaBuffer::try_from(&img).unwrap();
    assert_eq!(r.pix(), img.as_raw().as_slice());
}

#[test]
fn to_rgba_image_starts_at_view_origin() {
    let mut b = BgraBuffer::new(Rect::new(5, 5, 9, 9));
    b.set(6, 7, Rgba8::new(100, 50, 25, 255));
    let img = b.sub_view(Rect::new(6, 6, 8, 8)).to_rgba_image();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(0, 1), &image::Rgba([100, 50, 25, 255]));
    assert_eq!(img.get_pixel(1, 1), &image::Rgba([0, 0, 0, 0]));
}

#[test]
fn gray_image_becomes_alpha_mask() {
    let img = image::GrayImage::from_raw(3, 1, vec![0, 128, 255]).unwrap();
    let m = AlphaBuffer::try_from(&img).unwrap();
    assert_eq!(m.at(1, 0).a, 128);
    assert_eq!(m.at(2, 0), Rgba8::new(255, 255, 255, 255));
}

#[test]
fn empty_buffer_converts_to_empty_image() {
    let b = BgraBuffer::new(Rect::ZERO);
    assert_eq!(b.to_rgba_image().dimensions(), (0, 0));
}
