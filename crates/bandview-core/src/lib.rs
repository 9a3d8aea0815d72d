pub mod band;
pub mod consts;
pub mod error;
pub mod io;
pub mod raster;
pub mod remote;
pub mod render;
pub mod session;
pub mod settings;
pub mod worker;
