//! Count-map to RGB rendering by palette lookup.

use crate::palette::Palette;
use escmap_core::{CountMap, Error, Result};
use image::RgbImage;
use rayon::prelude::*;

/// Parameters for rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderParams {
    /// Flip the image vertically. Count-map files are top-down; enable this
    /// for maps produced by generators that write bottom-up.
    pub flip_y: bool,
}

/// Convert a count map to an RGB pixel buffer.
///
/// Returns a `Vec<u8>` of length `rows * cols * 3` in row-major order,
/// where pixel (x, y) takes the palette color of the count at (row y,
/// col x).
///
/// Fails with [`Error::PaletteIndexOutOfRange`] if any count in the map
/// has no palette entry; nothing is ever clamped.
pub fn map_to_pixels(map: &CountMap, palette: &Palette) -> Result<Vec<u8>> {
    if let Some(max) = map.max_count() {
        if max as usize >= palette.len() {
            return Err(Error::PaletteIndexOutOfRange {
                count: max as usize,
                len: palette.len(),
            });
        }
    }

    let (rows, cols) = map.shape();
    let colors = palette.colors();

    let pixels: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_pixels = Vec::with_capacity(cols * 3);
            for col in 0..cols {
                let count = unsafe { map.get_unchecked(row, col) };
                let color = colors[count as usize];
                row_pixels.extend_from_slice(&[color.r, color.g, color.b]);
            }
            row_pixels
        })
        .collect();

    Ok(pixels)
}

/// Convert a count map to an [`RgbImage`] ready to save.
pub fn map_to_image(map: &CountMap, palette: &Palette, params: &RenderParams) -> Result<RgbImage> {
    let (rows, cols) = map.shape();
    let mut pixels = map_to_pixels(map, palette)?;

    if params.flip_y {
        let stride = cols * 3;
        let mut flipped = Vec::with_capacity(pixels.len());
        for row in pixels.chunks_exact(stride).rev() {
            flipped.extend_from_slice(row);
        }
        pixels = flipped;
    }

    RgbImage::from_raw(cols as u32, rows as u32, pixels)
        .ok_or_else(|| Error::Other("pixel buffer does not match image dimensions".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::ColorScheme;

    #[test]
    fn pixels_from_known_grid() {
        let map = CountMap::from_vec(vec![0, 1, 2, 3], 2, 2).unwrap();
        let palette = Palette::build(ColorScheme::Grayscale, 4).unwrap();

        let pixels = map_to_pixels(&map, &palette).unwrap();
        assert_eq!(pixels.len(), 12); // 4 pixels * 3 bytes

        // t = 0, 0.25, 0.5, 0.75 -> 0, 64, 128, 191
        assert_eq!(
            pixels,
            vec![0, 0, 0, 64, 64, 64, 128, 128, 128, 191, 191, 191]
        );
    }

    #[test]
    fn count_without_palette_entry_fails() {
        let map = CountMap::from_vec(vec![0, 5], 1, 2).unwrap();
        let palette = Palette::build(ColorScheme::Grayscale, 4).unwrap();

        let err = map_to_pixels(&map, &palette).unwrap_err();
        assert!(matches!(
            err,
            Error::PaletteIndexOutOfRange { count: 5, len: 4 }
        ));
    }

    #[test]
    fn image_dimensions_follow_map() {
        let map = CountMap::from_vec(vec![0, 1, 2, 0, 1, 2], 2, 3).unwrap();
        let palette = Palette::build(ColorScheme::Fire, 3).unwrap();

        let img = map_to_image(&map, &palette, &RenderParams::default()).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
    }

    #[test]
    fn flip_y_reverses_rows() {
        let map = CountMap::from_vec(vec![0, 0, 1, 1], 2, 2).unwrap();
        let palette = Palette::build(ColorScheme::Grayscale, 2).unwrap();

        let plain = map_to_image(&map, &palette, &RenderParams::default()).unwrap();
        let flipped = map_to_image(&map, &palette, &RenderParams { flip_y: true }).unwrap();

        assert_eq!(plain.get_pixel(0, 0), flipped.get_pixel(0, 1));
        assert_eq!(plain.get_pixel(1, 1), flipped.get_pixel(1, 0));
    }

    #[test]
    fn constant_map_renders_first_entry() {
        let map = CountMap::new(3, 3);
        let palette = Palette::build(ColorScheme::rainbow(), 8).unwrap();

        let pixels = map_to_pixels(&map, &palette).unwrap();
        for px in pixels.chunks_exact(3) {
            assert_eq!(px, &[255, 0, 0]); // hue 0 = red
        }
    }
}
