pub mod consts;
pub mod error;
pub mod geometry;
pub mod io;
pub mod view;
