pub(crate) mod interop;
pub(crate) mod order;
pub(crate) mod pixel;
