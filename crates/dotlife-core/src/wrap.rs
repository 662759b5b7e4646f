//! Toroidal coordinate helpers shared by the grid and its neighbourhood.

use smallvec::SmallVec;

/// All 8 Moore offsets as `(dx, dy)`: W, E, N, S, NW, NE, SW, SE.
pub(crate) const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Resolve a single axis value onto `[0, len)` with true mathematical modulo.
///
/// `len` must be non-zero; grid construction guarantees it.
pub(crate) fn wrap_axis(val: isize, len: usize) -> usize {
    let n = len as isize;
    (((val % n) + n) % n) as usize
}

/// The 8 wrapped neighbours of `(x, y)` on a `width x height` torus.
///
/// On grids narrower or shorter than 3 cells the same coordinate can
/// appear more than once; each occurrence counts.
pub(crate) fn moore_neighbours(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> SmallVec<[(usize, usize); 8]> {
    let (x, y) = (x as isize, y as isize);
    OFFSETS_8
        .iter()
        .map(|&(dx, dy)| (wrap_axis(x + dx, width), wrap_axis(y + dy, height)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_axis_negative_is_non_negative() {
        assert_eq!(wrap_axis(-1, 5), 4);
        assert_eq!(wrap_axis(-6, 5), 4);
        assert_eq!(wrap_axis(5, 5), 0);
        assert_eq!(wrap_axis(3, 5), 3);
    }

    #[test]
    fn corner_neighbours_wrap_both_axes() {
        let n = moore_neighbours(0, 0, 5, 4);
        assert_eq!(n.len(), 8);
        assert!(n.contains(&(4, 3))); // NW
        assert!(n.contains(&(4, 0))); // W
        assert!(n.contains(&(0, 3))); // N
        assert!(n.contains(&(1, 1))); // SE
    }

    #[test]
    fn single_cell_is_its_own_neighbourhood() {
        let n = moore_neighbours(0, 0, 1, 1);
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|&c| c == (0, 0)));
    }
}
