//! Utility modules

pub mod debug;
pub mod image;

pub use debug::{DirectorySink, NoDebug};
pub use self::image::ImageUtils;
