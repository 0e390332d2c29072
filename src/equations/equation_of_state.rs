//! Thermodynamic closure.
//!
//! Two closures are supported:
//!
//! - Adiabatic: p = (γ - 1) e, with the total energy evolved
//! - Isothermal: p = c_iso² ρ, no energy equation

/// Closure relating pressure to the other state variables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EnergyEquation {
    /// Ideal gas with adiabatic index `gamma`
    Adiabatic {
        /// Ratio of specific heats
        gamma: f64,
    },
    /// Constant sound speed
    Isothermal {
        /// Squared isothermal sound speed
        c2_iso: f64,
    },
}

impl EnergyEquation {
    /// Isothermal closure from the sound speed (not its square).
    pub fn isothermal(cs: f64) -> Self {
        Self::Isothermal { c2_iso: cs * cs }
    }

    /// Whether an energy equation is evolved.
    #[inline]
    pub fn have_energy(&self) -> bool {
        matches!(self, Self::Adiabatic { .. })
    }

    /// Adiabatic index, if any.
    pub fn gamma(&self) -> Option<f64> {
        match *self {
            Self::Adiabatic { gamma } => Some(gamma),
            Self::Isothermal { .. } => None,
        }
    }

    /// Gas pressure. `prs` is ignored by the isothermal closure.
    #[inline(always)]
    pub fn pressure(&self, rho: f64, prs: f64) -> f64 {
        match *self {
            Self::Adiabatic { .. } => prs,
            Self::Isothermal { c2_iso } => c2_iso * rho,
        }
    }

    /// Squared sound speed.
    ///
    /// Adiabatic: γ p / ρ. Isothermal: c_iso².
    #[inline(always)]
    pub fn sound_speed_sq(&self, rho: f64, prs: f64) -> f64 {
        match *self {
            Self::Adiabatic { gamma } => gamma * prs / rho,
            Self::Isothermal { c2_iso } => c2_iso,
        }
    }
}

impl Default for EnergyEquation {
    fn default() -> Self {
        Self::Adiabatic { gamma: 5.0 / 3.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isothermal_pressure() {
        let eos = EnergyEquation::isothermal(2.0);
        assert_eq!(eos.pressure(3.0, 100.0), 12.0);
        assert_eq!(eos.sound_speed_sq(3.0, 100.0), 4.0);
        assert!(!eos.have_energy());
        assert_eq!(eos.gamma(), None);
    }

    #[test]
    fn test_adiabatic_sound_speed() {
        let eos = EnergyEquation::Adiabatic { gamma: 1.4 };
        assert!((eos.sound_speed_sq(1.4, 1.0) - 1.0).abs() < 1e-15);
        assert_eq!(eos.pressure(1.0, 0.3), 0.3);
        assert!(eos.have_energy());
    }

    #[test]
    fn test_negative_pressure_gives_nan_speed() {
        let eos = EnergyEquation::Adiabatic { gamma: 1.4 };
        assert!(eos.sound_speed_sq(1.0, -1.0).sqrt().is_nan());
    }
}
