//! Fixed-point channel arithmetic shared by every compositing loop.
//!
//! Channels are blended in 16-bit range with a `u64` accumulator and
//! truncating division, so fast paths and the generic fallback agree to the
//! last bit.

/// Maximum 16-bit channel value.
pub const MAX16: u32 = 0xffff;

/// Bias-free 8-to-16-bit channel expansion factor (`65535 / 255`, i.e.
/// `0x101`). Multiplying maps `0..=255` exactly onto `0..=65535`.
pub const EXPAND_8_TO_16: u32 = 0x101;

const M: u64 = MAX16 as u64;
const K: u64 = EXPAND_8_TO_16 as u64;

/// Widen an 8-bit channel to 16-bit range.
#[inline]
pub(crate) fn expand(c: u8) -> u32 {
    u32::from(c) * EXPAND_8_TO_16
}

/// Destination weight for an unmasked Over with source alpha `sa` (16-bit).
///
/// The extra factor of 257 lets the destination channel stay 8-bit.
#[inline]
pub(crate) fn inv_alpha(sa: u32) -> u64 {
    (M - u64::from(sa)) * K
}

/// Destination weight for a masked Over.
#[inline]
pub(crate) fn inv_alpha_masked(sa: u32, ma: u32) -> u64 {
    (M - u64::from(sa) * u64::from(ma) / M) * K
}

/// Unmasked Over: `d` is the 8-bit destination, `s` the 16-bit source.
#[inline]
pub(crate) fn over(d: u8, s: u32, inv: u64) -> u8 {
    ((u64::from(d) * inv / M + u64::from(s)) >> 8) as u8
}

/// Masked Over with 16-bit mask alpha `ma`.
#[inline]
pub(crate) fn over_masked(d: u8, s: u32, ma: u32, inv: u64) -> u8 {
    (((u64::from(d) * inv + u64::from(s) * u64::from(ma)) / M) >> 8) as u8
}

/// Src with 16-bit mask alpha `ma`; the destination does not contribute.
#[inline]
pub(crate) fn src_masked(s: u32, ma: u32) -> u8 {
    ((u64::from(s) * u64::from(ma) / M) >> 8) as u8
}

/// Narrow a 16-bit channel to 8 bits.
#[inline]
pub(crate) fn narrow(c: u32) -> u8 {
    (c >> 8) as u8
}
