//! The ten drawing stages and the pipeline that runs them.

pub(crate) mod figure;
pub(crate) mod forest;
pub(crate) mod glow;
pub(crate) mod halo;
pub(crate) mod haze;
pub mod layout;
pub(crate) mod light;
pub(crate) mod mount;
pub mod pipeline;
pub(crate) mod sky;
