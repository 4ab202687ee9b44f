//! In-memory B,G,R,A pixel buffers and a Porter-Duff compositor specialized
//! for that layout.
//!
//! # Overview
//!
//! - [`Buffer`] stores pixels in a strided byte arena. [`BgraBuffer`] is the
//!   native layout; [`RgbaBuffer`] and [`AlphaBuffer`] exist so they can be
//!   composited to and from it. Sub-views borrow the parent's arena.
//! - [`Compositor`] (and the [`draw`], [`draw_mask`] and [`draw_within`]
//!   shorthands) clips a draw, picks a loop from a closed dispatch table and
//!   mutates the destination in place.
//! - Sources and masks are [`Image`] values. Anything implementing
//!   [`ColorAt`] can be wrapped in [`Image::Dyn`] and is composited with the
//!   generic per-pixel path, which every specialized loop matches bit for bit.
//!
//! Blending runs in 16-bit fixed point: 8-bit channels are widened with
//! [`EXPAND_8_TO_16`] and all divisions truncate.
//!
//! ```
//! use bgra::{BgraBuffer, Image, Op, Point, Rect, Rgba8, draw};
//!
//! let bounds = Rect::from_size(4, 4);
//! let mut dst = BgraBuffer::new(bounds);
//! draw(&mut dst, bounds, Image::uniform(Rgba8::BLACK), Point::ZERO, Op::Src);
//! draw(
//!     &mut dst,
//!     Rect::new(1, 1, 3, 3),
//!     Image::uniform(Rgba8::new(255, 0, 0, 255)),
//!     Point::ZERO,
//!     Op::Over,
//! );
//! assert_eq!(dst.at(1, 1), Rgba8::new(255, 0, 0, 255));
//! assert_eq!(dst.at(0, 0), Rgba8::BLACK);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod buffer;
mod draw;
mod foundation;

pub use buffer::order::{Alpha, Bgra, ChannelOrder, Layout, Rgba};
pub use buffer::pixel::{
    AlphaBuffer, AlphaView, AlphaViewMut, BgraBuffer, BgraView, BgraViewMut, Buffer, RgbaBuffer,
    RgbaView, RgbaViewMut,
};
pub use draw::compositor::{
    Compositor, DrawSettings, Op, Path, draw, draw_mask, draw_within, route,
};
pub use draw::image::{ColorAt, Image, ImageKind, UNIFORM_BOUNDS};
pub use foundation::color::{Alpha8, Color, Gray8, NRgba8, Rgba8, Rgba16};
pub use foundation::core::{Point, Rect};
pub use foundation::error::{BgraError, BgraResult};
pub use foundation::math::{EXPAND_8_TO_16, MAX16};
