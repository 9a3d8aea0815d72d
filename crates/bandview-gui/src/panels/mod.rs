pub mod acquisition;
mod helpers;
pub mod menu_bar;
pub mod raster;
pub mod script;
pub mod status;
pub mod tabs;
pub mod viewport;

pub(crate) use helpers::{enum_combo, section_header, worker_output};
