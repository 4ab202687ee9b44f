pub(crate) mod clip;
pub(crate) mod compositor;
pub(crate) mod fallback;
pub(crate) mod fast;
pub(crate) mod image;
