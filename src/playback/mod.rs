pub(crate) mod clock;
pub(crate) mod config;
pub(crate) mod controls;
pub(crate) mod driver;
pub(crate) mod engine;
pub(crate) mod state;
