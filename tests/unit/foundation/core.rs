use super::*;

#[test]
fn rect_new_canonicalizes_corners() {
    let r = Rect::new(5, 7, 1, 2);
    assert_eq!(r.min, Point::new(1, 2));
    assert_eq!(r.max, Point::new(5, 7));
    assert_eq!((r.dx(), r.dy()), (4, 5));
}

#[test]
fn empty_rects() {
    assert!(Rect::ZERO.is_empty());
    assert!(Rect::new(0, 0, 3, 0).is_empty());
    assert!(!Rect::from_size(1, 1).is_empty());
    assert_eq!(Rect::new(2, 2, 2, 9).area(), 0);
}

#[test]
fn intersect_of_disjoint_rects_is_zero() {
    let a = Rect::new(0, 0, 2, 2);
    let b = Rect::new(5, 5, 8, 8);
    assert_eq!(a.intersect(b), Rect::ZERO);
    assert!(!a.overlaps(b));
}

#[test]
fn intersect_keeps_common_area() {
    let a = Rect::new(0, 0, 4, 4);
    let b = Rect::new(2, -1, 6, 3);
    assert_eq!(a.intersect(b), Rect::new(2, 0, 4, 3));
    assert!(a.overlaps(b));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = Rect::new(0, 0, 2, 2);
    let b = Rect::new(2, 0, 4, 2);
    assert!(!a.overlaps(b));
    assert!(a.intersect(b).is_empty());
}

#[test]
fn translation_moves_both_corners() {
    let r = Rect::new(1, 1, 3, 4).translate(Point::new(10, -1));
    assert_eq!(r, Rect::new(11, 0, 13, 3));
    assert_eq!(
        r.translate(Point::ZERO - Point::new(10, -1)),
        Rect::new(1, 1, 3, 4)
    );
}

#[test]
fn translation_saturates_instead_of_wrapping() {
    let r = Rect::new(0, 0, i32::MAX - 1, 1).translate(Point::new(10, 0));
    assert_eq!(r.max.x, i32::MAX);
}

#[test]
fn point_in_rect_uses_half_open_bounds() {
    let r = Rect::new(0, 0, 2, 2);
    assert!(Point::new(0, 0).in_rect(r));
    assert!(Point::new(1, 1).in_rect(r));
    assert!(!Point::new(2, 1).in_rect(r));
    assert!(!Point::new(-1, 0).in_rect(r));
}

#[test]
fn within_checks_containment() {
    let outer = Rect::new(0, 0, 10, 10);
    assert!(Rect::new(2, 2, 4, 4).within(outer));
    assert!(!Rect::new(8, 8, 12, 9).within(outer));
    assert!(Rect::ZERO.within(Rect::ZERO));
}

#[test]
fn spans_wider_than_i32_saturate() {
    let r = Rect::new(i32::MIN, -1, i32::MAX, 1);
    assert_eq!(r.dx(), i32::MAX);
    assert_eq!(r.dy(), 2);
    assert_eq!(Point::new(i32::MAX, 0) + Point::new(1, 0), Point::new(i32::MAX, 0));
    assert_eq!(Point::new(i32::MIN, 0) - Point::new(1, 0), Point::new(i32::MIN, 0));
}
