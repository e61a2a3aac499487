use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::hydro::{eos::EquationOfState, grid::Fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DissipativeInit {
    #[default]
    Zero,
    NavierStokes,
}

/// Used instead of a vanishing effective temperature.
pub const TEMPERATURE_FLOOR: f64 = 1e-3;
/// `t^2 pi^nn / e` for a kinetic-theory state with anisotropy `xi = 100`.
pub const PINN_ANISOTROPY_FIT: f64 = 0.324594;

/// Temperature [fm^-1] scaling the argument of the `zeta/s` fit.
pub const ZETA_TEMPERATURE_SCALE: f64 = 1.01355;
/// Window of `x = T / ZETA_TEMPERATURE_SCALE` where the quadratic form applies.
pub const ZETA_WINDOW: (f64, f64) = (0.995, 1.05);

const A_1: f64 = -13.77;
const A_2: f64 = 27.55;
const A_3: f64 = 13.45;

const LAMBDA_1: f64 = 0.9;
const LAMBDA_2: f64 = 0.25;
const LAMBDA_3: f64 = 0.9;
const LAMBDA_4: f64 = 0.22;

const SIGMA_1: f64 = 0.025;
const SIGMA_2: f64 = 0.13;
const SIGMA_3: f64 = 0.0025;
const SIGMA_4: f64 = 0.022;

/// Bulk viscosity over entropy density as a function of `x = T / ZETA_TEMPERATURE_SCALE`.
pub fn zeta_over_s(x: f64) -> f64 {
    let (low, high) = ZETA_WINDOW;
    if x > high {
        LAMBDA_1 * (-(x - 1.0) / SIGMA_1).exp() + LAMBDA_2 * (-(x - 1.0) / SIGMA_2).exp() + 0.001
    } else if x < low {
        LAMBDA_3 * ((x - 1.0) / SIGMA_3).exp() + LAMBDA_4 * ((x - 1.0) / SIGMA_4).exp() + 0.03
    } else {
        A_1 * x * x + A_2 * x - A_3
    }
}

pub fn effective_temperature(eos: &dyn EquationOfState, e: f64) -> f64 {
    let temp = eos.temperature(e);
    if temp == 0.0 {
        TEMPERATURE_FLOOR
    } else {
        temp
    }
}

/// `[pitt, pitx, pity, pitn, pixx, pixy, pixn, piyy, piyn, pinn]` at proper time `t`.
pub fn navier_stokes_shear(e: f64, t: f64) -> [f64; 10] {
    let pinn = PINN_ANISOTROPY_FIT * e / (t * t);
    let pixx = -t * t * pinn / 2.0;
    let piyy = pixx;
    [0.0, 0.0, 0.0, 0.0, pixx, 0.0, 0.0, piyy, 0.0, pinn]
}

pub fn navier_stokes_bulk(e: f64, p: f64, temp: f64, t: f64) -> f64 {
    let zetabar = zeta_over_s(temp / ZETA_TEMPERATURE_SCALE);
    -zetabar * (e + p) / temp / t
}

/// Initializes the dissipative fields that exist in `fields`, from `e` and `p` already set.
pub fn set_pimunu_initial_condition(
    fields: &mut Fields,
    mode: DissipativeInit,
    t0: f64,
    eos: &dyn EquationOfState,
) {
    let caps = fields.capabilities();
    match mode {
        DissipativeInit::NavierStokes => {
            if caps.shear {
                info!("Initialize \\pi^\\mu\\nu to its asymptotic Navier-Stokes value.");
            }
            if caps.bulk {
                info!("Initialize \\Pi to its asymptotic Navier-Stokes value.");
            }
        }
        DissipativeInit::Zero => {
            if caps.shear {
                info!("Initialize \\pi^\\mu\\nu to zero.");
            }
            if caps.bulk {
                info!("Initialize \\Pi to zero.");
            }
        }
    }

    let lattice = fields.lattice;
    for [i, j, k] in lattice.physical() {
        let s = lattice.index(i, j, k);
        let (e, p) = (fields.e[s], fields.p[s]);
        match mode {
            DissipativeInit::NavierStokes => {
                if let Some(pi) = fields.pi.as_mut() {
                    pi.set(s, navier_stokes_shear(e, t0));
                }
                if let Some(bulk) = fields.bulk.as_mut() {
                    let temp = effective_temperature(eos, e);
                    bulk[s] = navier_stokes_bulk(e, p, temp, t0);
                }
            }
            DissipativeInit::Zero => {
                if let Some(pi) = fields.pi.as_mut() {
                    pi.set(s, [0.0; 10]);
                }
                if let Some(bulk) = fields.bulk.as_mut() {
                    bulk[s] = 0.0;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydro::{
        eos::conformal::Conformal,
        grid::{Capabilities, Lattice},
    };
    use approx::assert_relative_eq;

    const ALL: Capabilities = Capabilities {
        shear: true,
        bulk: true,
    };

    fn fields_with_energy(e: impl Fn([f64; 3]) -> f64) -> Fields {
        let lattice = Lattice {
            nx: 4,
            ny: 3,
            nz: 2,
            dx: 0.5,
            dy: 0.5,
            dz: 0.5,
        };
        let mut fields = Fields::new(lattice, ALL);
        for [i, j, k] in lattice.physical() {
            let s = lattice.index(i, j, k);
            fields.e[s] = e(lattice.coordinates(i, j, k));
            fields.p[s] = fields.e[s] / 3.0;
        }
        fields
    }

    #[test]
    fn zero_mode_clears_everything() {
        let eos = Conformal::qcd(2.5);
        let mut fields = fields_with_energy(|[x, y, _]| 1.0 + x * x + y * y);
        set_pimunu_initial_condition(&mut fields, DissipativeInit::NavierStokes, 0.5, &eos);
        set_pimunu_initial_condition(&mut fields, DissipativeInit::Zero, 0.5, &eos);
        let lattice = fields.lattice;
        let pi = fields.pi.as_ref().unwrap();
        let bulk = fields.bulk.as_ref().unwrap();
        for [i, j, k] in lattice.physical() {
            let s = lattice.index(i, j, k);
            assert_eq!(pi.get(s), [0.0; 10]);
            assert_eq!(bulk[s], 0.0);
        }
    }

    #[test]
    fn navier_stokes_shear_is_diagonal_and_traceless() {
        let eos = Conformal::qcd(2.5);
        let t0 = 0.6;
        let mut fields = fields_with_energy(|[x, y, eta]| 10.0 + x - y + eta);
        set_pimunu_initial_condition(&mut fields, DissipativeInit::NavierStokes, t0, &eos);
        let lattice = fields.lattice;
        let pi = fields.pi.as_ref().unwrap();
        for [i, j, k] in lattice.physical() {
            let s = lattice.index(i, j, k);
            let [pitt, pitx, pity, pitn, pixx, pixy, pixn, piyy, piyn, pinn] = pi.get(s);
            assert_eq!(pixx, piyy);
            assert_eq!([pitt, pitx, pity, pitn, pixy, pixn, piyn], [0.0; 7]);
            assert_relative_eq!(pinn, PINN_ANISOTROPY_FIT * fields.e[s] / (t0 * t0));
            assert_relative_eq!(pitt - pixx - piyy - t0 * t0 * pinn, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn navier_stokes_bulk_uses_the_fit() {
        let eos = Conformal::qcd(2.5);
        let t0 = 0.5;
        let mut fields = fields_with_energy(|_| 20.0);
        set_pimunu_initial_condition(&mut fields, DissipativeInit::NavierStokes, t0, &eos);
        let s = fields.lattice.index(3, 3, 3);
        let temp = eos.temperature(20.0);
        let expected = -zeta_over_s(temp / ZETA_TEMPERATURE_SCALE) * (20.0 + 20.0 / 3.0) / temp / t0;
        assert_relative_eq!(fields.bulk.as_ref().unwrap()[s], expected);
        assert!(expected < 0.0);
    }

    #[test]
    fn zero_temperature_is_floored() {
        let eos = Conformal::qcd(2.5);
        assert_eq!(effective_temperature(&eos, 0.0), TEMPERATURE_FLOOR);
        let bulk = navier_stokes_bulk(0.0, 0.0, TEMPERATURE_FLOOR, 1.0);
        assert!(bulk.is_finite());
    }

    #[test]
    fn zeta_fit_regimes() {
        // quadratic inside the window
        assert_relative_eq!(zeta_over_s(1.0), A_1 + A_2 - A_3);
        assert_relative_eq!(zeta_over_s(0.995), A_1 * 0.995 * 0.995 + A_2 * 0.995 - A_3);
        assert_relative_eq!(zeta_over_s(1.05), A_1 * 1.05 * 1.05 + A_2 * 1.05 - A_3);
        // exponential tails
        assert_relative_eq!(
            zeta_over_s(3.0),
            0.9 * (-2.0f64 / 0.025).exp() + 0.25 * (-2.0f64 / 0.13).exp() + 0.001
        );
        assert_relative_eq!(zeta_over_s(3.0), 0.001, max_relative = 1e-4);
        assert_relative_eq!(
            zeta_over_s(0.5),
            0.9 * (-0.5f64 / 0.0025).exp() + 0.22 * (-0.5f64 / 0.022).exp() + 0.03
        );
        let above = 1.06;
        assert_relative_eq!(
            zeta_over_s(above),
            0.9 * (-0.06f64 / 0.025).exp() + 0.25 * (-0.06f64 / 0.13).exp() + 0.001
        );
    }

    #[test]
    fn missing_fields_are_left_alone() {
        let eos = Conformal::qcd(2.5);
        let lattice = Lattice {
            nx: 2,
            ny: 2,
            nz: 1,
            ..Lattice::default()
        };
        let mut fields = Fields::new(lattice, Capabilities::default());
        fields.e.iter_mut().for_each(|e| *e = 1.0);
        let before = fields.clone();
        set_pimunu_initial_condition(&mut fields, DissipativeInit::NavierStokes, 1.0, &eos);
        assert_eq!(fields, before);
    }
}
