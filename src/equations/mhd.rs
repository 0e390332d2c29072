//! Ideal magnetohydrodynamics.
//!
//! Primitive state: (ρ, v, B[, p]); conserved state: (ρ, ρv, B[, E]) with
//! E = p/(γ-1) + ρv²/2 + B²/2. Units absorb the 4π factor.
//!
//! Flux along the normal direction n, with total pressure pt = p + B²/2:
//!
//! - mass: ρ vn
//! - momentum: ρ v vn - B Bn + pt e_n
//! - induction: vn B - v Bn (zero for the normal component)
//! - energy: (E + pt) vn - Bn (v·B)

use crate::flux::nan_max;
use crate::types::{Axis, SweepAxes};

use super::{EnergyEquation, MAX_VARS, Physics, StateVector, VarLayout};

/// Ideal MHD.
#[derive(Clone, Debug)]
pub struct Mhd {
    layout: VarLayout,
    energy: EnergyEquation,
}

impl Mhd {
    /// MHD with the given closure.
    pub fn new(energy: EnergyEquation) -> Self {
        Self {
            layout: VarLayout::new(true, energy.have_energy()),
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

    #[inline(always)]
    fn b(&self, state: &StateVector) -> [f64; 3] {
        Axis::ALL.map(|a| state[self.layout.bx(a)])
    }

    #[inline(always)]
    fn gas_pressure(&self, prim: &StateVector) -> f64 {
        let p = self.layout.prs.map_or(0.0, |ip| prim[ip]);
        self.energy.pressure(prim[VarLayout::RHO], p)
    }

    /// Magnetic pressure B²/2.
    #[inline]
    pub fn magnetic_pressure(&self, state: &StateVector) -> f64 {
        0.5 * self.b(state).iter().map(|b| b * b).sum::<f64>()
    }

    /// Gas plus magnetic pressure.
    #[inline]
    pub fn total_pressure(&self, prim: &StateVector) -> f64 {
        self.gas_pressure(prim) + self.magnetic_pressure(prim)
    }
}

impl Physics for Mhd {
    fn name(&self) -> &'static str {
        "mhd"
    }

    fn layout(&self) -> &VarLayout {
        &self.layout
    }

    fn energy(&self) -> EnergyEquation {
        self.energy
    }

    fn prim_to_cons(&self, prim: &StateVector) -> StateVector {
        let rho = prim[VarLayout::RHO];
        let mut cons = *prim;

        let mut kinetic = 0.0;
        for iv in VarLayout::VX {
            cons[iv] = rho * prim[iv];
            kinetic += prim[iv] * prim[iv];
        }

        if let (Some(ip), EnergyEquation::Adiabatic { gamma }) = (self.layout.prs, self.energy) {
            cons[ip] =
                prim[ip] / (gamma - 1.0) + 0.5 * rho * kinetic + self.magnetic_pressure(prim);
        }
        cons
    }

    fn cons_to_prim(&self, cons: &StateVector) -> StateVector {
        let rho = cons[VarLayout::RHO];
        let mut prim = *cons;

        let mut kinetic = 0.0;
        for iv in VarLayout::VX {
            prim[iv] = cons[iv] / rho;
            kinetic += cons[iv] * prim[iv];
        }

        if let (Some(ip), EnergyEquation::Adiabatic { gamma }) = (self.layout.prs, self.energy) {
            prim[ip] = (gamma - 1.0) * (cons[ip] - 0.5 * kinetic - self.magnetic_pressure(cons));
        }
        prim
    }

    fn flux(&self, prim: &StateVector, cons: &StateVector, axes: SweepAxes) -> StateVector {
        let n = axes.normal;
        let v = Axis::ALL.map(|a| prim[self.layout.vx(a)]);
        let b = self.b(prim);
        let (vn, bn) = (v[n.index()], b[n.index()]);
        let pt = self.total_pressure(prim);

        let mut flux = [0.0; MAX_VARS];
        flux[VarLayout::RHO] = cons[VarLayout::RHO] * vn;

        for a in [axes.normal, axes.tangential_1, axes.tangential_2] {
            let d = a.index();
            flux[self.layout.vx(a)] = cons[self.layout.vx(a)] * vn - b[d] * bn;
            flux[self.layout.bx(a)] = vn * b[d] - v[d] * bn;
        }
        flux[self.layout.vx(n)] += pt;
        flux[self.layout.bx(n)] = 0.0;

        if let Some(ip) = self.layout.prs {
            let v_dot_b: f64 = v.iter().zip(&b).map(|(v, b)| v * b).sum();
            flux[ip] = (cons[ip] + pt) * vn - bn * v_dot_b;
        }
        flux
    }

    /// Fast magnetosonic speed:
    /// cf² = ½ (a² + b² + sqrt((a² + b²)² - 4 a² bn²)), with b = B/√ρ.
    fn signal_speed(&self, prim: &StateVector, axis: Axis) -> f64 {
        let rho = prim[VarLayout::RHO];
        let p = self.layout.prs.map_or(0.0, |ip| prim[ip]);
        // NaN for an unphysical state, as in the hydro sound speed
        let a = self.energy.sound_speed_sq(rho, p).sqrt();
        let a2 = a * a;
        let b2 = 2.0 * self.magnetic_pressure(prim) / rho;
        let bn = prim[self.layout.bx(axis)];
        let bn2 = bn * bn / rho;

        let sum = a2 + b2;
        let disc = nan_max(sum * sum - 4.0 * a2 * bn2, 0.0);
        (0.5 * (sum + disc.sqrt())).sqrt()
    }
}
