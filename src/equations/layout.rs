//! Variable indices of the state vector.

use crate::types::Axis;

/// Capacity of a [`StateVector`]: density, three velocities, three
/// magnetic components and pressure.
pub const MAX_VARS: usize = 8;

/// Fixed-size state of one cell or face.
///
/// Primitive and conserved states share the layout: momentum sits at the
/// velocity indices and total energy at the pressure index.
pub type StateVector = [f64; MAX_VARS];

/// Position of each variable in a [`StateVector`].
///
/// Order: RHO, VX1..VX3, then BX1..BX3 when a magnetic field is evolved,
/// then PRS when an energy equation is evolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VarLayout {
    /// Number of variables in use
    pub nvar: usize,
    /// Magnetic field indices, if any
    pub bx: Option<[usize; 3]>,
    /// Pressure (energy) index, if any
    pub prs: Option<usize>,
}

impl VarLayout {
    /// Density index.
    pub const RHO: usize = 0;
    /// Velocity (momentum) indices.
    pub const VX: [usize; 3] = [1, 2, 3];

    /// Layout with or without a magnetic field and an energy equation.
    pub const fn new(magnetic: bool, have_energy: bool) -> Self {
        let mut nvar = 4;
        let bx = if magnetic {
            nvar += 3;
            Some([4, 5, 6])
        } else {
            None
        };
        let prs = if have_energy {
            nvar += 1;
            Some(nvar - 1)
        } else {
            None
        };
        Self { nvar, bx, prs }
    }

    /// Velocity index along `axis`.
    #[inline(always)]
    pub const fn vx(&self, axis: Axis) -> usize {
        Self::VX[axis.index()]
    }

    /// Magnetic field index along `axis`.
    ///
    /// # Panics
    /// Panics if the layout has no magnetic field.
    #[inline(always)]
    pub fn bx(&self, axis: Axis) -> usize {
        match self.bx {
            Some(b) => b[axis.index()],
            None => panic!("Layout has no magnetic field"),
        }
    }

    /// Names of the primitive variables, in layout order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = vec!["RHO", "VX1", "VX2", "VX3"];
        if self.bx.is_some() {
            names.extend(["BX1", "BX2", "BX3"]);
        }
        if self.prs.is_some() {
            names.push("PRS");
        }
        names
    }
}
