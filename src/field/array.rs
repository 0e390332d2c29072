//! 3D and 4D dense arrays indexed (k, j, i) and (nv, k, j, i).

use std::ops::{Index, IndexMut};

use crate::types::{Extents3D, IndexRange3D};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Dense scalar field, `i` fastest.
#[derive(Clone, Debug, PartialEq)]
pub struct Array3 {
    extents: Extents3D,
    data: Vec<f64>,
}

impl Array3 {
    /// Zero-initialised array.
    pub fn new(extents: Extents3D) -> Self {
        Self::filled(extents, 0.0)
    }

    /// Array with every entry set to `value`.
    pub fn filled(extents: Extents3D, value: f64) -> Self {
        Self {
            extents,
            data: vec![value; extents.len()],
        }
    }

    /// Array evaluated point-wise from `f(k, j, i)`.
    pub fn from_fn<F>(extents: Extents3D, f: F) -> Self
    where
        F: Fn(usize, usize, usize) -> f64 + Sync,
    {
        let mut array = Self::new(extents);
        array.fill_with(f);
        array
    }

    /// Overwrite every entry with `f(k, j, i)`, one k-plane per task when
    /// the `parallel` feature is enabled.
    pub fn fill_with<F>(&mut self, f: F)
    where
        F: Fn(usize, usize, usize) -> f64 + Sync,
    {
        let e = self.extents;
        let plane = e.plane().max(1);
        let fill_plane = |(k, chunk): (usize, &mut [f64])| {
            for j in 0..e.nj {
                for i in 0..e.ni {
                    chunk[j * e.ni + i] = f(k, j, i);
                }
            }
        };

        #[cfg(feature = "parallel")]
        self.data.par_chunks_mut(plane).enumerate().for_each(fill_plane);
        #[cfg(not(feature = "parallel"))]
        self.data.chunks_mut(plane).enumerate().for_each(fill_plane);
    }

    /// Array extents.
    #[inline]
    pub fn extents(&self) -> Extents3D {
        self.extents
    }

    /// Value at (k, j, i).
    #[inline(always)]
    pub fn get(&self, k: usize, j: usize, i: usize) -> f64 {
        self.data[self.extents.offset(k, j, i)]
    }

    /// Set the value at (k, j, i).
    #[inline(always)]
    pub fn set(&mut self, k: usize, j: usize, i: usize, value: f64) {
        let idx = self.extents.offset(k, j, i);
        self.data[idx] = value;
    }

    /// Set every entry to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Raw storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Raw mutable storage.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Sum over a range of points.
    pub fn sum_over(&self, range: &IndexRange3D) -> f64 {
        range.iter().map(|(k, j, i)| self.get(k, j, i)).sum()
    }

    /// Maximum over a range of points; NaN entries propagate.
    pub fn max_over(&self, range: &IndexRange3D) -> f64 {
        range
            .iter()
            .map(|(k, j, i)| self.get(k, j, i))
            .fold(f64::NEG_INFINITY, |acc, v| if v.is_nan() || v > acc { v } else { acc })
    }
}

impl Index<(usize, usize, usize)> for Array3 {
    type Output = f64;

    #[inline(always)]
    fn index(&self, (k, j, i): (usize, usize, usize)) -> &f64 {
        &self.data[self.extents.offset(k, j, i)]
    }
}

impl IndexMut<(usize, usize, usize)> for Array3 {
    #[inline(always)]
    fn index_mut(&mut self, (k, j, i): (usize, usize, usize)) -> &mut f64 {
        let idx = self.extents.offset(k, j, i);
        &mut self.data[idx]
    }
}

/// Dense multi-variable field stored variable-major: (nv, k, j, i).
#[derive(Clone, Debug, PartialEq)]
pub struct Array4 {
    nvar: usize,
    extents: Extents3D,
    data: Vec<f64>,
}

impl Array4 {
    /// Zero-initialised array of `nvar` variables.
    pub fn new(nvar: usize, extents: Extents3D) -> Self {
        Self {
            nvar,
            extents,
            data: vec![0.0; nvar * extents.len()],
        }
    }

    /// Number of variables.
    #[inline]
    pub fn nvar(&self) -> usize {
        self.nvar
    }

    /// Extents of each variable block.
    #[inline]
    pub fn extents(&self) -> Extents3D {
        self.extents
    }

    #[inline(always)]
    fn offset(&self, nv: usize, k: usize, j: usize, i: usize) -> usize {
        nv * self.extents.len() + self.extents.offset(k, j, i)
    }

    /// Value of variable `nv` at (k, j, i).
    #[inline(always)]
    pub fn get(&self, nv: usize, k: usize, j: usize, i: usize) -> f64 {
        self.data[self.offset(nv, k, j, i)]
    }

    /// Set variable `nv` at (k, j, i).
    #[inline(always)]
    pub fn set(&mut self, nv: usize, k: usize, j: usize, i: usize, value: f64) {
        let idx = self.offset(nv, k, j, i);
        self.data[idx] = value;
    }

    /// Copy all variables at (k, j, i) into `out[..nvar]`.
    #[inline(always)]
    pub fn gather(&self, k: usize, j: usize, i: usize, out: &mut [f64]) {
        let stride = self.extents.len();
        let base = self.extents.offset(k, j, i);
        for (nv, v) in out.iter_mut().take(self.nvar).enumerate() {
            *v = self.data[nv * stride + base];
        }
    }

    /// Write `values[..nvar]` at (k, j, i).
    #[inline(always)]
    pub fn scatter(&mut self, k: usize, j: usize, i: usize, values: &[f64]) {
        let stride = self.extents.len();
        let base = self.extents.offset(k, j, i);
        for (nv, v) in values.iter().take(self.nvar).enumerate() {
            self.data[nv * stride + base] = *v;
        }
    }

    /// Contiguous block of one variable.
    pub fn var(&self, nv: usize) -> &[f64] {
        let n = self.extents.len();
        &self.data[nv * n..(nv + 1) * n]
    }

    /// Set every entry to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Raw storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable k-planes regrouped by k.
    ///
    /// Entry `k` holds one `ni * nj` slice per variable, so disjoint k-planes
    /// of every variable can be handed to independent tasks.
    pub fn planes_mut(&mut self) -> Vec<Vec<&mut [f64]>> {
        let nk = self.extents.nk;
        let plane = self.extents.plane();
        let mut per_k: Vec<Vec<&mut [f64]>> =
            (0..nk).map(|_| Vec::with_capacity(self.nvar)).collect();
        if plane == 0 {
            return per_k;
        }
        for (c, chunk) in self.data.chunks_mut(plane).enumerate() {
            per_k[c % nk].push(chunk);
        }
        per_k
    }
}

impl Index<(usize, usize, usize, usize)> for Array4 {
    type Output = f64;

    #[inline(always)]
    fn index(&self, (nv, k, j, i): (usize, usize, usize, usize)) -> &f64 {
        &self.data[self.offset(nv, k, j, i)]
    }
}

impl IndexMut<(usize, usize, usize, usize)> for Array4 {
    #[inline(always)]
    fn index_mut(&mut self, (nv, k, j, i): (usize, usize, usize, usize)) -> &mut f64 {
        let idx = self.offset(nv, k, j, i);
        &mut self.data[idx]
    }
}
