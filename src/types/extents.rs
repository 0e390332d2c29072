//! 3D array extents and loop bounds.

use super::Axis;

/// Size of a dense 3D array, stored with `i` fastest.
///
/// Fields are ordered (k, j, i) to match the storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extents3D {
    /// Number of points along K
    pub nk: usize,
    /// Number of points along J
    pub nj: usize,
    /// Number of points along I
    pub ni: usize,
}

impl Extents3D {
    /// Create extents from (nk, nj, ni).
    #[inline]
    pub const fn new(nk: usize, nj: usize, ni: usize) -> Self {
        Self { nk, nj, ni }
    }

    /// Total number of points.
    #[inline]
    pub const fn len(&self) -> usize {
        self.nk * self.nj * self.ni
    }

    /// True if any extent is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of points along an axis.
    #[inline]
    pub const fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::I => self.ni,
            Axis::J => self.nj,
            Axis::K => self.nk,
        }
    }

    /// Extents grown by one point along `axis` (face-centred arrays).
    #[inline]
    pub const fn with_faces(&self, axis: Axis) -> Self {
        match axis {
            Axis::I => Self::new(self.nk, self.nj, self.ni + 1),
            Axis::J => Self::new(self.nk, self.nj + 1, self.ni),
            Axis::K => Self::new(self.nk + 1, self.nj, self.ni),
        }
    }

    /// Number of points in one k-plane.
    #[inline(always)]
    pub const fn plane(&self) -> usize {
        self.nj * self.ni
    }

    /// Linear offset of (k, j, i).
    #[inline(always)]
    pub const fn offset(&self, k: usize, j: usize, i: usize) -> usize {
        (k * self.nj + j) * self.ni + i
    }
}

/// Half-open index ranges `[begin, end)` along each axis.
///
/// Stored in axis order (I, J, K).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexRange3D {
    /// First index per axis
    pub begin: [usize; 3],
    /// One past the last index per axis
    pub end: [usize; 3],
}

impl IndexRange3D {
    /// Create a range from `[begin, end)` pairs for I, J and K.
    pub const fn new(i: [usize; 2], j: [usize; 2], k: [usize; 2]) -> Self {
        Self {
            begin: [i[0], j[0], k[0]],
            end: [i[1], j[1], k[1]],
        }
    }

    /// Range covering every point of `extents`.
    pub const fn full(extents: Extents3D) -> Self {
        Self::new([0, extents.ni], [0, extents.nj], [0, extents.nk])
    }

    /// Same range extended by one point along `axis`.
    ///
    /// A row of `n` cells is bounded by `n + 1` faces; this is the loop range
    /// of a flux sweep along `axis`.
    pub const fn face_range(&self, axis: Axis) -> Self {
        let mut end = self.end;
        end[axis.index()] += 1;
        Self {
            begin: self.begin,
            end,
        }
    }

    /// Start of the range along `axis`.
    #[inline]
    pub const fn begin(&self, axis: Axis) -> usize {
        self.begin[axis.index()]
    }

    /// End of the range along `axis` (exclusive).
    #[inline]
    pub const fn end(&self, axis: Axis) -> usize {
        self.end[axis.index()]
    }

    /// Number of points along `axis`.
    #[inline]
    pub const fn len(&self, axis: Axis) -> usize {
        self.end[axis.index()].saturating_sub(self.begin[axis.index()])
    }

    /// Number of points in the range.
    pub const fn count(&self) -> usize {
        self.len(Axis::I) * self.len(Axis::J) * self.len(Axis::K)
    }

    /// True if (k, j, i) lies inside the range.
    #[inline]
    pub const fn contains(&self, k: usize, j: usize, i: usize) -> bool {
        i >= self.begin[0]
            && i < self.end[0]
            && j >= self.begin[1]
            && j < self.end[1]
            && k >= self.begin[2]
            && k < self.end[2]
    }

    /// Iterate over (k, j, i) with `i` fastest.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let (bi, ei) = (self.begin[0], self.end[0]);
        let (bj, ej) = (self.begin[1], self.end[1]);
        (self.begin[2]..self.end[2])
            .flat_map(move |k| (bj..ej).flat_map(move |j| (bi..ei).map(move |i| (k, j, i))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_row_major() {
        let e = Extents3D::new(2, 3, 4);
        assert_eq!(e.offset(0, 0, 1), 1);
        assert_eq!(e.offset(0, 1, 0), 4);
        assert_eq!(e.offset(1, 0, 0), 12);
        assert_eq!(e.offset(1, 2, 3), e.len() - 1);
    }

    #[test]
    fn test_with_faces() {
        let e = Extents3D::new(2, 3, 4);
        assert_eq!(e.with_faces(Axis::I), Extents3D::new(2, 3, 5));
        assert_eq!(e.with_faces(Axis::K), Extents3D::new(3, 3, 4));
    }

    #[test]
    fn test_face_range_adds_one_face() {
        let cells = IndexRange3D::new([2, 6], [2, 6], [2, 6]);
        let faces = cells.face_range(Axis::J);
        assert_eq!(faces.len(Axis::I), 4);
        assert_eq!(faces.len(Axis::J), 5);
        assert_eq!(faces.len(Axis::K), 4);
        assert_eq!(faces.count(), 80);
    }

    #[test]
    fn test_iter_visits_every_point_once() {
        let range = IndexRange3D::new([1, 3], [0, 2], [4, 5]);
        let points: Vec<_> = range.iter().collect();
        assert_eq!(points.len(), range.count());
        assert_eq!(points[0], (4, 0, 1));
        assert_eq!(points[1], (4, 0, 2));
        assert!(points.iter().all(|&(k, j, i)| range.contains(k, j, i)));
    }
}
