use super::*;

#[test]
fn rgba8_expands_with_exact_scale() {
    let c = Rgba8::new(0, 1, 128, 255).rgba16();
    assert_eq!(c, Rgba16::new(0, 0x0101, 0x8080, 0xffff));
}

#[test]
fn from_color_truncates_16_bit_channels() {
    let c = Rgba8::from_color(Rgba16::new(0x01ff, 0xff00, 0x00ff, 0xffff));
    assert_eq!(c, Rgba8::new(0x01, 0xff, 0x00, 0xff));
}

#[test]
fn rgba8_round_trips_through_16_bit() {
    for v in [0u8, 1, 77, 128, 254, 255] {
        let c = Rgba8::new(v, v / 2, v / 3, v);
        assert_eq!(Rgba8::from_color(c), c);
    }
}

#[test]
fn straight_alpha_is_premultiplied_on_conversion() {
    assert_eq!(
        Rgba8::from_color(NRgba8::new(255, 128, 0, 255)),
        Rgba8::new(255, 128, 0, 255)
    );
    assert_eq!(
        Rgba8::from_color(NRgba8::new(255, 255, 255, 0)),
        Rgba8::TRANSPARENT
    );
    let half = Rgba8::from_color(NRgba8::new(255, 0, 0, 128));
    assert_eq!(half, Rgba8::new(128, 0, 0, 128));
}

#[test]
fn alpha_and_gray_models() {
    assert_eq!(Alpha8(0x40).rgba16(), Rgba16::new(0x4040, 0x4040, 0x4040, 0x4040));
    assert_eq!(Rgba8::from_color(Gray8(9)), Rgba8::new(9, 9, 9, 255));
}

#[test]
fn references_are_colors_too() {
    let c = Rgba8::WHITE;
    let r: &dyn Color = &c;
    assert_eq!(r.rgba16(), c.rgba16());
    assert_eq!(Rgba8::from_color(&c), c);
}
