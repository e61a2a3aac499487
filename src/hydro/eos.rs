use crate::error::InitError;

use self::conformal::Conformal;

pub mod conformal;

/// Thermodynamic relations needed to build an initial state. Energy densities are in fm^-4
/// and temperatures in fm^-1.
pub trait EquationOfState {
    fn p(&self, e: f64) -> f64;
    /// Effective temperature of a fluid cell with energy density `e`.
    fn temperature(&self, e: f64) -> f64;
    /// Equilibrium energy density at temperature `t`.
    fn energy_density(&self, t: f64) -> f64;
}

custom_derive! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumDisplay, EnumFromStr, IterVariantNames(EOSsNames))]
    pub enum EOSs {
        Conformal,
        PureGauge,
        ThreeFlavor,
    }
}

impl EOSs {
    pub fn parse(name: &str) -> crate::error::Result<Self> {
        name.parse::<EOSs>().map_err(|_| {
            let known = EOSs::iter_variant_names().collect::<Vec<_>>().join(", ");
            InitError::InvalidParameter(format!(
                "unknown equation of state \"{name}\", expected one of {known}"
            ))
        })
    }

    pub fn build(self) -> Conformal {
        match self {
            EOSs::Conformal => Conformal::qcd(2.5),
            EOSs::PureGauge => Conformal::qcd(0.0),
            EOSs::ThreeFlavor => Conformal::qcd(3.0),
        }
    }
}
