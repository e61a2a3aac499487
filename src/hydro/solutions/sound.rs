use std::f64::consts::PI;

use crate::{
    error::{InitError, Result},
    hydro::{eos::EquationOfState, grid::Lattice, Cell, Init},
};

/// Background temperature [fm^-1].
pub const T0: f64 = 3.05;
/// Speed of sound of a conformal fluid.
pub const CS: f64 = 0.57735;

/// Small-amplitude sound wave along `x` with wavelength half the lattice width, on a
/// background `e0 = e_scale T0^4`.
pub fn init_sound_wave<'a>(
    lattice: &Lattice,
    e_scale: f64,
    eos: &'a dyn EquationOfState,
) -> Result<Init<'a>> {
    let lambda = (lattice.nx as f64 - 1.0) * lattice.dx / 2.0;
    if !(lambda > 0.0) {
        return Err(InitError::InvalidParameter(format!(
            "the sound wave needs nx > 1, got {}",
            lattice.nx
        )));
    }
    let e0 = e_scale * T0.powi(4);
    let de = e0 / 100.0;
    let p0 = e0 / 3.0;
    Ok(Box::new(move |_, [x, _, _]| {
        let phase = (2.0 * PI * x / lambda).sin();
        let vx = CS * de / (e0 + p0) * phase;
        let e = e0 + de * phase;
        let u0 = 1.0 / (1.0 - vx * vx).sqrt();
        Cell::ideal(e, eos.p(e), [u0, u0 * vx, 0.0, 0.0])
    }))
}
