//! Rapidity profile of the collision-geometry initial conditions: flat plateau of width
//! `plateau` centred on `eta = 0`, with Gaussian tails of variance `variance`.

use crate::error::{InitError, Result};

pub fn shape(eta: f64, plateau: f64, variance: f64) -> f64 {
    let scaled = (eta.abs() - plateau / 2.0).max(0.0);
    (-0.5 * scaled * scaled / variance).exp()
}

/// One value per physical longitudinal cell, `eta = (k - (nz - 1) / 2) dz`.
pub fn longitudinal_energy_density(
    nz: usize,
    dz: f64,
    plateau: f64,
    variance: f64,
) -> Result<Vec<f64>> {
    if !(variance > 0.0) {
        return Err(InitError::InvalidParameter(format!(
            "rapidity variance must be positive, got {variance}"
        )));
    }
    let centre = nz.saturating_sub(1) as f64 / 2.0;
    Ok((0..nz)
        .map(|k| shape((k as f64 - centre) * dz, plateau, variance))
        .collect())
}
