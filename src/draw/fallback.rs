use crate::buffer::order::ChannelOrder;
use crate::buffer::pixel::Buffer;
use crate::draw::clip::Traversal;
use crate::draw::compositor::Op;
use crate::draw::image::{ColorAt, Image};
use crate::foundation::color::{Color, Rgba8};
use crate::foundation::core::{Point, Rect};
use crate::foundation::math::{MAX16, inv_alpha_masked, over_masked, src_masked};

/// Source read by the generic path.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Source<'s, 'a> {
    /// A separate image, queried by coordinate.
    Image(&'s Image<'a>),
    /// The destination itself.
    Aliased,
}

/// Composite pixel by pixel, reading source and mask only through
/// [`ColorAt`]. This is the reference every fast path must match.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw<D, C>(
    dst: &mut Buffer<D, C>,
    r: Rect,
    src: Source<'_, '_>,
    sp: Point,
    mask: Option<&Image<'_>>,
    mp: Point,
    op: Op,
    trav: Traversal,
) where
    D: ChannelOrder,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    let (dx, dy) = (r.dx(), r.dy());
    for row in 0..dy {
        let oy = match trav {
            Traversal::Forward => row,
            Traversal::Reverse => dy - 1 - row,
        };
        for col in 0..dx {
            let ox = match trav {
                Traversal::Forward => col,
                Traversal::Reverse => dx - 1 - col,
            };
            let ma = match mask {
                Some(m) => u32::from(m.rgba16_at(mp.x + ox, mp.y + oy).a),
                None => MAX16,
            };
            let (sx, sy) = (sp.x + ox, sp.y + oy);
            let [sr, sg, sb, sa] = match src {
                Source::Image(img) => img.rgba16_at(sx, sy),
                Source::Aliased => dst.at(sx, sy).rgba16(),
            }
            .channels();

            let i = dst.pix_offset(r.min.x + ox, r.min.y + oy);
            let cell = &mut dst.pix_mut()[i..i + D::BYTES_PER_PIXEL];
            let out = match op {
                Op::Over => {
                    let d = D::read(cell);
                    let inv = inv_alpha_masked(sa, ma);
                    Rgba8::new(
                        over_masked(d.r, sr, ma, inv),
                        over_masked(d.g, sg, ma, inv),
                        over_masked(d.b, sb, ma, inv),
                        over_masked(d.a, sa, ma, inv),
                    )
                }
                Op::Src => Rgba8::new(
                    src_masked(sr, ma),
                    src_masked(sg, ma),
                    src_masked(sb, ma),
                    src_masked(sa, ma),
                ),
            };
            D::write(cell, out);
        }
    }
}
