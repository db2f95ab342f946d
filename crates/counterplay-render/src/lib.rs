//! 2D rendering of playback frames.
//!
//! [`render`] draws a fully-resolved entity snapshot onto any
//! [`DrawSurface`]; the raster [`Pixmap`] implementation is provided for
//! headless output.

pub mod pixmap;
pub mod renderer;
pub mod style;
pub mod surface;

pub use pixmap::Pixmap;
pub use renderer::render;
pub use style::Color;
pub use surface::DrawSurface;
