use tracing::debug;

use crate::{
    error::{InitError, Result},
    hydro::{eos::EquationOfState, grid::Lattice, EnergyInit},
};

/// Reference temperatures [fm^-1] fixing the energy-density scale of each model.
pub const OPTICAL_T0: f64 = 3.05;
pub const MONTE_CARLO_T0: f64 = 2.03;
/// Added everywhere so that no cell is exactly empty.
pub const ENERGY_DENSITY_FLOOR: f64 = 1e-3;

/// `e = e0 * transverse(i, j) * longitudinal(k) + ENERGY_DENSITY_FLOOR`.
pub fn init_glauber<'a>(
    lattice: &Lattice,
    e0: f64,
    transverse: Vec<f64>,
    longitudinal: Vec<f64>,
) -> Result<EnergyInit<'a>> {
    let nx = lattice.nx;
    if transverse.len() != nx * lattice.ny {
        return Err(InitError::ShapeMismatch {
            what: "transverse profile".to_string(),
            expected: nx * lattice.ny,
            found: transverse.len(),
        });
    }
    if longitudinal.len() != lattice.nz {
        return Err(InitError::ShapeMismatch {
            what: "longitudinal profile".to_string(),
            expected: lattice.nz,
            found: longitudinal.len(),
        });
    }
    debug!(e0, "Glauber energy-density scale");
    Ok(Box::new(move |[i, j, k], _| {
        e0 * transverse[i + nx * j] * longitudinal[k] + ENERGY_DENSITY_FLOOR
    }))
}

pub fn init_optical_glauber<'a>(
    lattice: &Lattice,
    eos: &dyn EquationOfState,
    transverse: Vec<f64>,
    longitudinal: Vec<f64>,
) -> Result<EnergyInit<'a>> {
    init_glauber(lattice, eos.energy_density(OPTICAL_T0), transverse, longitudinal)
}

pub fn init_monte_carlo_glauber<'a>(
    lattice: &Lattice,
    eos: &dyn EquationOfState,
    transverse: Vec<f64>,
    longitudinal: Vec<f64>,
) -> Result<EnergyInit<'a>> {
    init_glauber(lattice, eos.energy_density(MONTE_CARLO_T0), transverse, longitudinal)
}
