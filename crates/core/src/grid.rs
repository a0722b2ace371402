//! The count-map grid type

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2};

/// A 2D grid of per-pixel escape counts.
///
/// `CountMap` stores the iteration count at which each pixel of a fractal
/// rendering escaped, in row-major order. Row 0 is the top image row, as
/// written by the generator.
///
/// # Example
///
/// ```ignore
/// use escmap_core::CountMap;
///
/// // Create a 100x100 map filled with zeros
/// let mut map = CountMap::new(100, 100);
///
/// // Set a value
/// map.set(10, 20, 42)?;
///
/// // Get a value
/// let count = map.get(10, 20)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CountMap {
    /// Escape counts stored in row-major order (row, col)
    data: Array2<u32>,
}

impl CountMap {
    /// Create a new map filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a new map filled with a specific count
    pub fn filled(rows: usize, cols: usize, count: u32) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), count),
        }
    }

    /// Create a map from existing row-major data
    pub fn from_vec(data: Vec<u32>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    // Dimensions

    /// Number of rows (image height)
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns (image width)
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get the count at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<u32> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get the count at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> u32 {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Set the count at (row, col)
    pub fn set(&mut self, row: usize, col: usize, count: u32) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = count;
        Ok(())
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, u32> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<u32> {
        &self.data
    }

    /// Get a row slice
    pub fn row(&self, row: usize) -> Result<ndarray::ArrayView1<'_, u32>> {
        if row >= self.rows() {
            return Err(Error::IndexOutOfBounds {
                row,
                col: 0,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.data.row(row))
    }

    // Statistics

    /// Largest escape count in the map, or `None` for an empty map
    pub fn max_count(&self) -> Option<u32> {
        self.data.iter().copied().max()
    }

    /// Number of palette entries needed to cover every count in the map.
    ///
    /// Counts start at 0, so a palette indexed by count needs `max + 1`
    /// entries.
    pub fn palette_size(&self) -> usize {
        match self.max_count() {
            Some(max) => max as usize + 1,
            None => 0,
        }
    }

    /// Calculate basic statistics (min, max, mean)
    pub fn statistics(&self) -> CountMapStatistics {
        let mut min = None;
        let mut max = None;
        let mut sum: u64 = 0;

        for &count in self.data.iter() {
            if min.is_none() || count < min.unwrap() {
                min = Some(count);
            }
            if max.is_none() || count > max.unwrap() {
                max = Some(count);
            }
            sum += count as u64;
        }

        let mean = if self.data.is_empty() {
            None
        } else {
            Some(sum as f64 / self.data.len() as f64)
        };

        CountMapStatistics {
            min,
            max,
            mean,
            cell_count: self.data.len(),
        }
    }
}

/// Basic statistics for a count map
#[derive(Debug, Clone)]
pub struct CountMapStatistics {
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub mean: Option<f64>,
    pub cell_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_creation() {
        let map = CountMap::new(100, 200);
        assert_eq!(map.rows(), 100);
        assert_eq!(map.cols(), 200);
        assert_eq!(map.shape(), (100, 200));
    }

    #[test]
    fn test_map_access() {
        let mut map = CountMap::new(10, 10);
        map.set(5, 5, 42).unwrap();
        assert_eq!(map.get(5, 5).unwrap(), 42);
    }

    #[test]
    fn test_out_of_bounds() {
        let map = CountMap::new(4, 4);
        assert!(matches!(
            map.get(4, 0),
            Err(Error::IndexOutOfBounds { .. })
        ));
        assert!(matches!(
            map.get(0, 7),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let result = CountMap::from_vec(vec![1, 2, 3], 2, 2);
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_statistics() {
        let mut map = CountMap::new(10, 10);
        for i in 0..10 {
            for j in 0..10 {
                map.set(i, j, (i * 10 + j) as u32).unwrap();
            }
        }

        let stats = map.statistics();
        assert_eq!(stats.min, Some(0));
        assert_eq!(stats.max, Some(99));
        assert_eq!(stats.mean, Some(49.5));
        assert_eq!(stats.cell_count, 100);
    }

    #[test]
    fn test_palette_size() {
        let map = CountMap::from_vec(vec![0, 3, 1, 2], 2, 2).unwrap();
        assert_eq!(map.palette_size(), 4);

        let empty = CountMap::new(0, 0);
        assert_eq!(empty.palette_size(), 0);
    }

    #[test]
    fn test_constant_map() {
        let map = CountMap::filled(3, 3, 7);
        assert_eq!(map.max_count(), Some(7));
        assert_eq!(map.palette_size(), 8);
    }
}
