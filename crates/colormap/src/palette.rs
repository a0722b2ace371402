//! Palette construction: a finite ordered color table indexed by escape
//! count.

use crate::scheme::{evaluate, ColorScheme, Rgb};
use escmap_core::{Error, Result};

/// An ordered color lookup table.
///
/// Entry `i` is the color for escape count `i`. The table is built by
/// sampling a [`ColorScheme`] at `len` evenly spaced positions with
/// end-exclusive stepping (`t = i / len`), so the scheme's end color is
/// never emitted — a full-circle rainbow does not repeat its first color
/// as its last.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Build a palette of `len` colors from a scheme.
    ///
    /// Rainbow hue bounds are validated here: `0 <= start < 360`,
    /// `0 < end <= 360`, `start < end`.
    pub fn build(scheme: ColorScheme, len: usize) -> Result<Self> {
        validate_scheme(&scheme)?;
        if len == 0 {
            return Err(Error::InvalidParameter {
                name: "len",
                value: "0".to_string(),
                reason: "a palette needs at least one color".to_string(),
            });
        }

        let colors = (0..len)
            .map(|i| evaluate(scheme, i as f64 / len as f64))
            .collect();

        Ok(Self { colors })
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Look up the color for an escape count
    pub fn get(&self, count: u32) -> Result<Rgb> {
        self.colors
            .get(count as usize)
            .copied()
            .ok_or(Error::PaletteIndexOutOfRange {
                count: count as usize,
                len: self.colors.len(),
            })
    }

    /// The full color table
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

fn validate_scheme(scheme: &ColorScheme) -> Result<()> {
    if let ColorScheme::Rainbow { start_deg, end_deg } = *scheme {
        if !(0.0..360.0).contains(&start_deg) {
            return Err(Error::InvalidParameter {
                name: "hue_start",
                value: start_deg.to_string(),
                reason: "must be in [0, 360)".to_string(),
            });
        }
        if !(end_deg > 0.0 && end_deg <= 360.0) {
            return Err(Error::InvalidParameter {
                name: "hue_end",
                value: end_deg.to_string(),
                reason: "must be in (0, 360]".to_string(),
            });
        }
        if start_deg >= end_deg {
            return Err(Error::InvalidParameter {
                name: "hue_start",
                value: start_deg.to_string(),
                reason: format!("must be below hue_end ({})", end_deg),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rainbow_full_sweep() {
        // Six steps around the full circle land on the six primaries.
        let palette = Palette::build(ColorScheme::rainbow(), 6).unwrap();
        assert_eq!(
            palette.colors(),
            &[
                Rgb::new(255, 0, 0),
                Rgb::new(255, 255, 0),
                Rgb::new(0, 255, 0),
                Rgb::new(0, 255, 255),
                Rgb::new(0, 0, 255),
                Rgb::new(255, 0, 255),
            ]
        );
    }

    #[test]
    fn grayscale_ramp() {
        let palette = Palette::build(ColorScheme::Grayscale, 2).unwrap();
        assert_eq!(palette.get(0).unwrap(), Rgb::new(0, 0, 0));
        assert_eq!(palette.get(1).unwrap(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn single_color_palette() {
        let palette = Palette::build(ColorScheme::Fire, 1).unwrap();
        assert_eq!(palette.get(0).unwrap(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn lookup_out_of_range() {
        let palette = Palette::build(ColorScheme::Grayscale, 4).unwrap();
        let err = palette.get(4).unwrap_err();
        assert!(matches!(
            err,
            Error::PaletteIndexOutOfRange { count: 4, len: 4 }
        ));
    }

    #[test]
    fn rejects_zero_length() {
        let err = Palette::build(ColorScheme::Grayscale, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "len", .. }));
    }

    #[test]
    fn rejects_bad_hue_bounds() {
        let bad_start = ColorScheme::Rainbow {
            start_deg: 360.0,
            end_deg: 360.0,
        };
        assert!(Palette::build(bad_start, 8).is_err());

        let bad_end = ColorScheme::Rainbow {
            start_deg: 0.0,
            end_deg: 361.0,
        };
        assert!(Palette::build(bad_end, 8).is_err());

        let inverted = ColorScheme::Rainbow {
            start_deg: 200.0,
            end_deg: 100.0,
        };
        assert!(Palette::build(inverted, 8).is_err());
    }
}
