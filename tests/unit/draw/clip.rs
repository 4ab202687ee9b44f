use super::*;

#[test]
fn clip_to_destination_shifts_origins() {
    let c = clip(
        Rect::from_size(10, 10),
        Rect::new(-2, -3, 4, 4),
        Rect::new(0, 0, 100, 100),
        Point::new(5, 5),
        None,
        Point::new(1, 1),
    );
    assert_eq!(c.rect, Rect::new(0, 0, 4, 4));
    assert_eq!(c.sp, Point::new(7, 8));
    assert_eq!(c.mp, Point::new(3, 4));
}

#[test]
fn clip_to_source_bounds() {
    // Source covers (0,0)-(3,3); drawing it at dst (5,5) from sp (1,1)
    // leaves only a 2x2 region.
    let c = clip(
        Rect::from_size(20, 20),
        Rect::new(5, 5, 15, 15),
        Rect::from_size(3, 3),
        Point::new(1, 1),
        None,
        Point::ZERO,
    );
    assert_eq!(c.rect, Rect::new(5, 5, 7, 7));
    assert_eq!(c.sp, Point::new(1, 1));
}

#[test]
fn clip_to_mask_bounds_moves_all_origins() {
    let c = clip(
        Rect::from_size(20, 20),
        Rect::new(0, 0, 10, 10),
        Rect::from_size(20, 20),
        Point::ZERO,
        Some(Rect::new(3, 2, 5, 4)),
        Point::ZERO,
    );
    assert_eq!(c.rect, Rect::new(3, 2, 5, 4));
    assert_eq!(c.sp, Point::new(3, 2));
    assert_eq!(c.mp, Point::new(3, 2));
}

#[test]
fn disjoint_regions_clip_to_empty() {
    let c = clip(
        Rect::from_size(4, 4),
        Rect::new(10, 10, 12, 12),
        Rect::from_size(4, 4),
        Point::ZERO,
        None,
        Point::ZERO,
    );
    assert!(c.rect.is_empty());
}

#[test]
fn traversal_only_reverses_for_aliased_overlap() {
    let r = Rect::new(2, 2, 6, 6);
    assert_eq!(traversal(r, Point::new(1, 1), false), Traversal::Forward);
    assert_eq!(traversal(r, Point::new(1, 1), true), Traversal::Reverse);
    assert_eq!(traversal(r, Point::new(3, 3), true), Traversal::Forward);
    assert_eq!(traversal(r, Point::new(1, 2), true), Traversal::Reverse);
    assert_eq!(traversal(r, Point::new(3, 2), true), Traversal::Forward);
    assert_eq!(traversal(r, Point::new(5, 1), true), Traversal::Reverse);
    // Far away: no overlap, no reversal.
    assert_eq!(traversal(r, Point::new(-20, -20), true), Traversal::Forward);
}
