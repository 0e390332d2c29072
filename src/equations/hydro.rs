//! Euler equations of gas dynamics.
//!
//! Primitive state: (ρ, v1, v2, v3[, p]).
//! Conserved state: (ρ, ρv1, ρv2, ρv3[, E]) with E = p/(γ-1) + ρv²/2.
//!
//! Flux along the normal direction n:
//!
//! F = (ρ vn, ρ v vn + p e_n, (E + p) vn)

use crate::types::{Axis, SweepAxes};

use super::{EnergyEquation, Physics, StateVector, VarLayout};

/// Compressible hydrodynamics.
#[derive(Clone, Debug)]
pub struct Hydro {
    layout: VarLayout,
    energy: EnergyEquation,
}

impl Hydro {
    /// Hydrodynamics with the given closure.
    pub fn new(energy: EnergyEquation) -> Self {
        Self {
            layout: VarLayout::new(false, energy.have_energy()),
            energy,
        }
    }

    /// Ideal gas with adiabatic index `gamma`.
    pub fn adiabatic(gamma: f64) -> Self {
        Self::new(EnergyEquation::Adiabatic { gamma })
    }

    /// Isothermal gas with sound speed `cs`.
    pub fn isothermal(cs: f64) -> Self {
        Self::new(EnergyEquation::isothermal(cs))
    }

    /// Gas pressure of a primitive state.
    #[inline]
    pub fn pressure(&self, prim: &StateVector) -> f64 {
        let p = self.layout.prs.map_or(0.0, |ip| prim[ip]);
        self.energy.pressure(prim[VarLayout::RHO], p)
    }
}

impl Default for Hydro {
    fn default() -> Self {
        Self::new(EnergyEquation::default())
    }
}

impl Physics for Hydro {
    fn name(&self) -> &'static str {
        "hydro"
    }

    fn layout(&self) -> &VarLayout {
        &self.layout
    }

    fn energy(&self) -> EnergyEquation {
        self.energy
    }

    fn prim_to_cons(&self, prim: &StateVector) -> StateVector {
        let rho = prim[VarLayout::RHO];
        let mut cons = [0.0; super::MAX_VARS];
        cons[VarLayout::RHO] = rho;

        let mut kinetic = 0.0;
        for iv in VarLayout::VX {
            cons[iv] = rho * prim[iv];
            kinetic += prim[iv] * prim[iv];
        }

        if let (Some(ip), EnergyEquation::Adiabatic { gamma }) = (self.layout.prs, self.energy) {
            cons[ip] = prim[ip] / (gamma - 1.0) + 0.5 * rho * kinetic;
        }
        cons
    }

    fn cons_to_prim(&self, cons: &StateVector) -> StateVector {
        let rho = cons[VarLayout::RHO];
        let mut prim = [0.0; super::MAX_VARS];
        prim[VarLayout::RHO] = rho;

        let mut kinetic = 0.0;
        for iv in VarLayout::VX {
            prim[iv] = cons[iv] / rho;
            kinetic += cons[iv] * prim[iv];
        }

        if let (Some(ip), EnergyEquation::Adiabatic { gamma }) = (self.layout.prs, self.energy) {
            prim[ip] = (gamma - 1.0) * (cons[ip] - 0.5 * kinetic);
        }
        prim
    }

    fn flux(&self, prim: &StateVector, cons: &StateVector, axes: SweepAxes) -> StateVector {
        let vn = prim[self.layout.vx(axes.normal)];
        let p = self.pressure(prim);

        let mut flux = [0.0; super::MAX_VARS];
        flux[VarLayout::RHO] = cons[VarLayout::RHO] * vn;
        for iv in VarLayout::VX {
            flux[iv] = cons[iv] * vn;
        }
        flux[self.layout.vx(axes.normal)] += p;

        if let Some(ip) = self.layout.prs {
            flux[ip] = (cons[ip] + p) * vn;
        }
        flux
    }

    fn signal_speed(&self, prim: &StateVector, _axis: Axis) -> f64 {
        let p = self.layout.prs.map_or(0.0, |ip| prim[ip]);
        self.energy.sound_speed_sq(prim[VarLayout::RHO], p).sqrt()
    }
}
