use std::f64::consts::PI;

use crate::{
    error::{InitError, Result},
    hydro::{grid::Lattice, Cell, Init},
};

const CENTRE: (f64, f64) = (0.5, 0.5);
const BETA: f64 = 50.0;
const AMPLITUDE: f64 = 0.1;
const GAS_GAMMA: f64 = 1.4;

/// Gaussian pressure bump at `(0.5, 0.5)` carried by a periodic transverse flow along `y`.
pub fn init_gaussian_pulse<'a>(lattice: &Lattice) -> Result<Init<'a>> {
    let lx = (lattice.nx as f64 - 1.0) / 2.0 * lattice.dx;
    let ly = (lattice.ny as f64 - 1.0) / 2.0 * lattice.dy;
    if !(lx > 0.0 && ly > 0.0) {
        return Err(InitError::InvalidParameter(format!(
            "the Gaussian pulse needs nx > 1 and ny > 1, got {}x{}",
            lattice.nx, lattice.ny
        )));
    }
    Ok(Box::new(move |_, [x, y, _]| {
        let (xc, yc) = CENTRE;
        let pr = 1.0 + AMPLITUDE * (-BETA * ((x - xc).powi(2) + (y - yc).powi(2))).exp();
        let e = pr / (GAS_GAMMA - 1.0);
        let uy = (1.0 + (2.0 * PI * x / lx).cos()) * (1.0 + (2.0 * PI * y / ly).cos());
        Cell::ideal(e, e / 3.0, [(1.0 + uy * uy).sqrt(), 0.0, uy, 0.0])
    }))
}
