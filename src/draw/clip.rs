use crate::foundation::core::{Point, Rect};

/// Draw region after clipping, with source and mask origins kept in
/// registration with `rect.min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Clipped {
    pub(crate) rect: Rect,
    pub(crate) sp: Point,
    pub(crate) mp: Point,
}

/// Intersect `r` with the destination, the shifted source and (if present)
/// the shifted mask bounds.
pub(crate) fn clip(
    dst: Rect,
    r: Rect,
    src: Rect,
    sp: Point,
    mask: Option<Rect>,
    mp: Point,
) -> Clipped {
    let orig = r.min;
    let mut rect = r.intersect(dst);
    rect = rect.intersect(src.translate(orig - sp));
    if let Some(mask) = mask {
        rect = rect.intersect(mask.translate(orig - mp));
    }
    let shift = rect.min - orig;
    Clipped {
        rect,
        sp: sp + shift,
        mp: mp + shift,
    }
}

/// Pixel visiting order for a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Traversal {
    /// Top-to-bottom, left-to-right.
    Forward,
    /// Bottom-to-top, right-to-left.
    Reverse,
}

/// Order that never reads a source pixel after it has been overwritten.
///
/// Only matters when source and destination share an arena (`aliased`) and
/// the source rectangle overlaps `r`. Reverse when the source starts above
/// the destination, or on the same row to its left.
pub(crate) fn traversal(r: Rect, sp: Point, aliased: bool) -> Traversal {
    if !aliased || !r.overlaps(r.translate(sp - r.min)) {
        return Traversal::Forward;
    }
    if sp.y < r.min.y || (sp.y == r.min.y && sp.x < r.min.x) {
        Traversal::Reverse
    } else {
        Traversal::Forward
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/clip.rs"]
mod tests;
