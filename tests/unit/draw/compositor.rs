use super::*;
use crate::buffer::pixel::{AlphaBuffer, BgraBuffer, RgbaBuffer};
use crate::foundation::color::Rgba8;

#[test]
fn route_table_for_bgra_destination() {
    use ImageKind as K;
    let t = |op, src, mask| route(Layout::Bgra, op, src, mask);
    assert_eq!(t(Op::Over, K::Uniform, None), Path::FillOver);
    assert_eq!(t(Op::Over, K::Rgba, None), Path::BlendOver);
    assert_eq!(t(Op::Over, K::Bgra, None), Path::BlendOver);
    assert_eq!(t(Op::Over, K::Uniform, Some(K::Alpha)), Path::GlyphOver);
    assert_eq!(t(Op::Src, K::Uniform, None), Path::FillSrc);
    assert_eq!(t(Op::Src, K::Rgba, None), Path::ConvertSrc);
    assert_eq!(t(Op::Src, K::Bgra, None), Path::CopySrc);
}

#[test]
fn route_table_for_rgba_destination() {
    use ImageKind as K;
    assert_eq!(route(Layout::Rgba, Op::Over, K::Bgra, None), Path::BlendOver);
    assert_eq!(route(Layout::Rgba, Op::Src, K::Bgra, None), Path::ConvertSrc);
    assert_eq!(route(Layout::Rgba, Op::Over, K::Uniform, None), Path::Fallback);
    assert_eq!(route(Layout::Rgba, Op::Src, K::Rgba, None), Path::Fallback);
}

#[test]
fn src_with_mask_and_dyn_inputs_fall_back() {
    use ImageKind as K;
    for mask in [K::Uniform, K::Rgba, K::Bgra, K::Alpha, K::Dyn] {
        assert_eq!(
            route(Layout::Bgra, Op::Src, K::Uniform, Some(mask)),
            Path::Fallback
        );
    }
    assert_eq!(route(Layout::Bgra, Op::Over, K::Dyn, None), Path::Fallback);
    assert_eq!(
        route(Layout::Bgra, Op::Over, K::Uniform, Some(K::Dyn)),
        Path::Fallback
    );
    assert_eq!(
        route(Layout::Bgra, Op::Over, K::Bgra, Some(K::Alpha)),
        Path::Fallback
    );
    assert_eq!(route(Layout::Alpha, Op::Over, K::Uniform, None), Path::Fallback);
}

#[test]
fn disabled_fast_paths_always_fall_back() {
    let c = Compositor::new(DrawSettings { fast_paths: false });
    assert_eq!(
        c.path_for(Layout::Bgra, Op::Over, ImageKind::Uniform, None),
        Path::Fallback
    );
    assert!(Compositor::default().settings().fast_paths);
}

#[test]
fn settings_parse_with_defaults() {
    let s: DrawSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(s, DrawSettings::default());
    let s: DrawSettings = serde_json::from_str(r#"{"fast_paths": false}"#).unwrap();
    assert!(!s.fast_paths);
    let op: Op = serde_json::from_str(r#""src""#).unwrap();
    assert_eq!(op, Op::Src);
}

#[test]
fn fully_clipped_draw_is_noop() {
    let mut dst = BgraBuffer::new(Rect::from_size(4, 4));
    draw(
        &mut dst,
        Rect::new(10, 10, 20, 20),
        Image::uniform(Rgba8::WHITE),
        Point::ZERO,
        Op::Src,
    );
    assert!(dst.pix().iter().all(|&v| v == 0));

    let mut src = BgraBuffer::new(Rect::from_size(2, 2));
    src.set(0, 0, Rgba8::WHITE);
    draw(
        &mut dst,
        Rect::from_size(4, 4),
        Image::from(&src),
        Point::new(5, 5),
        Op::Src,
    );
    assert!(dst.pix().iter().all(|&v| v == 0));
}

#[test]
fn glyph_path_skips_uncovered_pixels() {
    let mut dst = BgraBuffer::new(Rect::from_size(3, 1));
    for x in 0..3 {
        dst.set(x, 0, Rgba8::new(10, 20, 30, 40));
    }
    let mut mask = AlphaBuffer::new(Rect::from_size(3, 1));
    mask.set(1, 0, Rgba8::new(0, 0, 0, 255));
    draw_mask(
        &mut dst,
        Rect::from_size(3, 1),
        Image::uniform(Rgba8::WHITE),
        Point::ZERO,
        Some(Image::from(&mask)),
        Point::ZERO,
        Op::Over,
    );
    assert_eq!(dst.at(0, 0), Rgba8::new(10, 20, 30, 40));
    assert_eq!(dst.at(1, 0), Rgba8::WHITE);
    assert_eq!(dst.at(2, 0), Rgba8::new(10, 20, 30, 40));
}

#[test]
fn rgba_destination_receives_bgra_source() {
    let mut src = BgraBuffer::new(Rect::from_size(1, 1));
    src.set(0, 0, Rgba8::new(1, 2, 3, 255));
    let mut dst = RgbaBuffer::new(Rect::from_size(1, 1));
    draw(&mut dst, Rect::from_size(1, 1), Image::from(&src), Point::ZERO, Op::Src);
    assert_eq!(dst.pix(), &[1, 2, 3, 255]);
}
