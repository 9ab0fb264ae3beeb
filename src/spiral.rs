//! Ulam spiral: a square-grid layout of consecutive integers used to
//! visualize prime distribution.

use crate::error::{Error, Result};
use crate::primality::is_probable_prime;

/// Square spiral of consecutive integers, built center-out.
///
/// Created once per render call and discarded afterwards; nothing is cached
/// between invocations.
#[derive(Debug, Clone)]
pub struct UlamSpiral {
    size: usize,
    // row-major cell values
    cells: Vec<u64>,
}

// walk order with the run-growth flag: length grows before the right and
// left legs, giving the 1, 1, 2, 2, 3, 3, ... run pattern
const LEGS: [(isize, isize, bool); 4] = [(0, 1, true), (-1, 0, false), (0, -1, true), (1, 0, false)];

impl UlamSpiral {
    /// Lay out start, start+1, ... from the center, turning
    /// right → up → left → down. The final rightward run is clipped so the
    /// walk lands exactly on the bottom-right corner and stops there.
    pub fn new(size: usize, start: u64) -> Result<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(Error::InvalidArgument(format!(
                "spiral size must be odd, got {size}"
            )));
        }

        let n = size;
        let mut cells = vec![0u64; n * n];
        let mut row = (n - 1) / 2;
        let mut col = (n - 1) / 2;
        let mut value = start;
        cells[row * n + col] = value;

        let mut run = 0usize;
        'walk: loop {
            for &(dr, dc, grow) in &LEGS {
                if grow {
                    run += 1;
                }
                if col == 0 && col + run == n {
                    run = n - 1;
                }
                for _ in 0..run {
                    row = (row as isize + dr) as usize;
                    col = (col as isize + dc) as usize;
                    value += 1;
                    cells[row * n + col] = value;
                }
                if row == n - 1 && col == n - 1 {
                    break 'walk;
                }
            }
        }

        Ok(UlamSpiral { size: n, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.cells[row * self.size + col]
    }

    /// Connectivity diagram of the spiral.
    ///
    /// Primes print as centered numbers. Non-prime cells trace the walk:
    /// corner glyphs on the diagonals (off the center row and column),
    /// verticals in the left/right triangular sectors (with the turn glyph
    /// just right of the main diagonal), the start arrow at the center, and
    /// horizontal runs everywhere else.
    pub fn render(&self) -> String {
        let n = self.size;
        let center = (n - 1) / 2;
        let mut out = String::new();

        for i in 0..n {
            for j in 0..n {
                let value = self.get(i, j);
                if is_probable_prime(value) {
                    out.push_str(&format!("{value:^3}"));
                } else if i != center && j != center && (i == j || i + j == n - 1) {
                    let glyph = if i == j {
                        if i < center {
                            " ┌─"
                        } else {
                            "───"
                        }
                    } else if i < center {
                        "─┐ "
                    } else {
                        " └─"
                    };
                    out.push_str(&format!("{glyph:^3}"));
                } else if (i > j && i + j < n) || (i < j && i + j >= n) {
                    let glyph = if j == i + 1 { "─┘ " } else { "│" };
                    out.push_str(&format!("{glyph:^3}"));
                } else if i == center && j == center {
                    out.push_str(&format!("{:^3}", " •→"));
                } else {
                    out.push_str(&format!("{:^3}", "───"));
                }
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_even_or_zero_size() {
        assert!(UlamSpiral::new(0, 1).is_err());
        assert!(UlamSpiral::new(4, 1).is_err());
        assert!(UlamSpiral::new(3, 1).is_ok());
    }

    #[test]
    fn test_single_cell() {
        let spiral = UlamSpiral::new(1, 7).unwrap();
        assert_eq!(spiral.get(0, 0), 7);
    }

    #[test]
    fn test_walk_3x3() {
        let spiral = UlamSpiral::new(3, 1).unwrap();
        let rows: Vec<Vec<u64>> = (0..3).map(|i| (0..3).map(|j| spiral.get(i, j)).collect()).collect();
        assert_eq!(rows, vec![vec![5, 4, 3], vec![6, 1, 2], vec![7, 8, 9]]);
    }

    #[test]
    fn test_walk_5x5() {
        let spiral = UlamSpiral::new(5, 1).unwrap();
        assert_eq!(spiral.get(2, 2), 1);
        assert_eq!(spiral.get(2, 3), 2); // right
        assert_eq!(spiral.get(1, 3), 3); // up
        assert_eq!(spiral.get(0, 0), 17); // top-left corner
        assert_eq!(spiral.get(4, 0), 21); // bottom-left corner
        assert_eq!(spiral.get(4, 4), 25); // walk ends bottom-right
    }

    #[test]
    fn test_offset_start() {
        let spiral = UlamSpiral::new(3, 100).unwrap();
        assert_eq!(spiral.get(1, 1), 100);
        assert_eq!(spiral.get(2, 2), 108);
    }

    #[test]
    fn test_render_3x3() {
        let spiral = UlamSpiral::new(3, 1).unwrap();
        let expected = " 5 ─── 3 \n │  •→ 2 \n 7 ──────\n";
        assert_eq!(spiral.render(), expected);
    }

    #[test]
    fn test_render_marks_primes_as_numbers() {
        let spiral = UlamSpiral::new(5, 1).unwrap();
        let rendered = spiral.render();
        for prime in [2, 3, 5, 7, 11, 13, 17, 19, 23] {
            assert!(rendered.contains(&prime.to_string()), "missing {prime}");
        }
        assert!(rendered.contains("•→"));
    }
}
