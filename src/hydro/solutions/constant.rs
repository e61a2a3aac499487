use tracing::debug;

use crate::hydro::{eos::EquationOfState, EnergyInit, HBARC};

/// Energy density [fm^-4] of the uniform medium, calibrated for `T0 = 3.05 fm^-1`.
pub const CONSTANT_ENERGY_DENSITY: f64 = 93.2104;

pub fn init_constant<'a>(eos: &dyn EquationOfState) -> EnergyInit<'a> {
    let e = CONSTANT_ENERGY_DENSITY;
    debug!("uniform medium at T = {:.4} GeV", eos.temperature(e) * HBARC);
    Box::new(move |_, _| e)
}
