//! # escmap Colormap
//!
//! Palette generation and count-map rendering for escmap.
//!
//! Provides the rainbow palette of the original converter plus a few
//! multi-stop alternatives, and the lookup step that turns a
//! [`CountMap`](escmap_core::CountMap) into an RGB image. The main entry
//! point is [`map_to_image`].
//!
//! ## Usage
//!
//! ```ignore
//! use escmap_colormap::{map_to_image, ColorScheme, Palette, RenderParams};
//!
//! let palette = Palette::build(ColorScheme::rainbow(), map.palette_size())?;
//! let image = map_to_image(&map, &palette, &RenderParams::default())?;
//! image.save("out.png")?;
//! ```

mod palette;
mod render;
mod scheme;

pub use palette::Palette;
pub use render::{map_to_image, map_to_pixels, RenderParams};
pub use scheme::{evaluate, ColorScheme, ColorStop, Rgb};
