use std::path::Path;

use tracing::{info, warn};

use crate::{
    error::{InitError, Result},
    hydro::{
        grid::{Lattice, GHOST},
        utils::load_rows,
        Cell, Init,
    },
};

/// Inverse size [fm^-1] of the Gubser solution.
pub const Q: f64 = 1.0;
/// Dimensionless temperature normalization.
pub const T_HAT_0: f64 = 1.2;

/// Temperature and four-velocity `[T, ut, ux, uy]` of ideal conformal Gubser flow at
/// transverse position `(x, y)` and proper time `t`.
pub fn gubser(x: f64, y: f64, t: f64) -> [f64; 4] {
    let r = (x * x + y * y).sqrt();
    let q2 = Q * Q;
    let temp = T_HAT_0 * (2.0 * Q).powf(2.0 / 3.0)
        / (t.powf(1.0 / 3.0)
            * (1.0 + 2.0 * q2 * (t * t + r * r) + q2 * q2 * (t * t - r * r).powi(2))
                .powf(1.0 / 3.0));
    let k = (2.0 * q2 * t * r / (1.0 + q2 * t * t + q2 * r * r)).atanh();
    let ux;
    let uy;
    if r == 0.0 {
        ux = 0.0;
        uy = 0.0;
    } else {
        ux = x / r * k.sinh();
        uy = y / r * k.sinh();
    }
    let ut = (1.0 + ux * ux + uy * uy).sqrt();
    [temp, ut, ux, uy]
}

pub fn init_ideal_gubser<'a>(t0: f64, e_scale: f64) -> Init<'a> {
    Box::new(move |_, [x, y, _]| {
        let [temp, ut, ux, uy] = gubser(x, y, t0);
        let e = e_scale * temp.powi(4);
        Cell::ideal(e, e / 3.0, [ut, ux, uy, 0.0])
    })
}

/// One transverse point of the viscous reference solution:
/// `x y e ux uy pixx piyy pixy pitt pitx pity pinn`.
pub type ReferenceRow = [f64; 12];

/// Reads the whole reference solution, which must hold exactly `nx * ny` rows ordered with
/// `j` running fastest.
pub fn load_reference_solution(path: &Path, lattice: &Lattice) -> Result<Vec<ReferenceRow>> {
    info!("loading reference solution \"{}\"", path.display());
    let rows = load_rows::<12>(path)?;
    let expected = lattice.nx * lattice.ny;
    if rows.len() != expected {
        return Err(InitError::MissingRows {
            path: path.to_path_buf(),
            expected,
            found: rows.len(),
        });
    }

    let tolerance = 1e-6 * lattice.dx.max(lattice.dy);
    let mut misplaced = 0;
    for (n, row) in rows.iter().enumerate() {
        let (i, j) = (n / lattice.ny, n % lattice.ny);
        let [x, y, ..] = lattice.coordinates(i + GHOST, j + GHOST, GHOST);
        if (row[0] - x).abs() > tolerance || (row[1] - y).abs() > tolerance {
            misplaced += 1;
        }
    }
    if misplaced > 0 {
        warn!(
            misplaced,
            "reference solution coordinates do not match the lattice"
        );
    }
    Ok(rows)
}

/// Replays the reference solution, identical for every `k`.
pub fn init_viscous_gubser<'a>(rows: Vec<ReferenceRow>, ny: usize) -> Init<'a> {
    Box::new(move |[i, j, _], _| {
        let [_, _, e, ux, uy, pixx, piyy, pixy, pitt, pitx, pity, pinn] = rows[i * ny + j];
        let (pitn, pixn, piyn) = (0.0, 0.0, 0.0);
        Cell {
            e,
            p: e / 3.0,
            u: [(1.0 + ux * ux + uy * uy).sqrt(), ux, uy, 0.0],
            pi: [pitt, pitx, pity, pitn, pixx, pixy, pixn, piyy, piyn, pinn],
        }
    })
}
