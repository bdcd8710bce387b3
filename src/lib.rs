//! Interactive canvas engine for annotating screenshots with labeled
//! rectangular event regions: draw, drag, resize, select, and render via
//! host-replayed draw commands. Geometry is stored as percentages of the
//! image dimensions so annotations survive viewport changes.

pub mod annotation;
mod config;
pub mod coords;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod interaction;
pub mod label;
pub mod logging;
pub mod render;
pub mod surface;
pub mod theme;

pub use error::{CoreError, CoreResult};
pub use surface::AnnotationSurface;
