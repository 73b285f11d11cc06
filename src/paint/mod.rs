pub(crate) mod painter;
pub(crate) mod surface;
