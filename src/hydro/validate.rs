use nalgebra::{Matrix4, Vector4};
use serde::Serialize;
use tracing::debug;

use crate::{
    error::{InitError, Result},
    hydro::grid::{Fields, GHOST},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Validation {
    pub cells: usize,
    /// max |u^mu g_mu_nu u^nu - 1|
    pub max_normalization_error: f64,
    pub min_energy_density: f64,
    /// max |g_mu_nu pi^mu_nu|, when the shear field exists
    pub max_shear_trace: Option<f64>,
    /// max_mu |pi^mu_nu u_nu|, when the shear field exists
    pub max_shear_transversality: Option<f64>,
}

pub fn milne_metric(t: f64) -> Matrix4<f64> {
    Matrix4::from_diagonal(&Vector4::new(1.0, -1.0, -1.0, -t * t))
}

fn shear_matrix(pi: [f64; 10]) -> Matrix4<f64> {
    let [pitt, pitx, pity, pitn, pixx, pixy, pixn, piyy, piyn, pinn] = pi;
    Matrix4::new(
        pitt, pitx, pity, pitn, //
        pitx, pixx, pixy, pixn, //
        pity, pixy, piyy, piyn, //
        pitn, pixn, piyn, pinn,
    )
}

/// Checks every physical cell of `fields` at proper time `t0`. Non-finite values are
/// errors; the other properties are measured and returned.
pub fn validate(fields: &Fields, t0: f64) -> Result<Validation> {
    let lattice = fields.lattice;
    let g = milne_metric(t0);
    let mut validation = Validation {
        cells: 0,
        max_normalization_error: 0.0,
        min_energy_density: f64::INFINITY,
        max_shear_trace: fields.pi.as_ref().map(|_| 0.0),
        max_shear_transversality: fields.pi.as_ref().map(|_| 0.0),
    };

    let names = fields.names();
    let columns = fields.columns();
    for [i, j, k] in lattice.physical() {
        let s = lattice.index(i, j, k);
        let cell = [i - GHOST, j - GHOST, k - GHOST];
        for (&name, column) in names.iter().zip(&columns) {
            if !column[s].is_finite() {
                return Err(InitError::NonFinite { field: name, cell });
            }
        }

        let u = Vector4::from(fields.u.get(s));
        let norm = u.dot(&(g * u));
        validation.max_normalization_error =
            validation.max_normalization_error.max((norm - 1.0).abs());
        validation.min_energy_density = validation.min_energy_density.min(fields.e[s]);

        if let Some(pi) = &fields.pi {
            let pimn = shear_matrix(pi.get(s));
            let trace = g.component_mul(&pimn).sum().abs();
            let transversality = (pimn * g * u).amax();
            if let Some(max) = validation.max_shear_trace.as_mut() {
                *max = max.max(trace);
            }
            if let Some(max) = validation.max_shear_transversality.as_mut() {
                *max = max.max(transversality);
            }
        }
        validation.cells += 1;
    }
    debug!(?validation, "initial state checked");
    Ok(validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydro::grid::{Capabilities, Lattice};
    use approx::assert_relative_eq;

    fn fields() -> Fields {
        let lattice = Lattice {
            nx: 2,
            ny: 2,
            nz: 2,
            ..Lattice::default()
        };
        let mut fields = Fields::new(
            lattice,
            Capabilities {
                shear: true,
                bulk: false,
            },
        );
        for [i, j, k] in lattice.physical() {
            let s = lattice.index(i, j, k);
            fields.e[s] = 1.0;
            fields.u.set(s, [1.0, 0.0, 0.0, 0.0]);
        }
        fields
    }

    #[test]
    fn fluid_at_rest_is_normalized() {
        let v = validate(&fields(), 0.6).unwrap();
        assert_eq!(v.cells, 8);
        assert_eq!(v.max_normalization_error, 0.0);
        assert_eq!(v.min_energy_density, 1.0);
        assert_eq!(v.max_shear_trace, Some(0.0));
        assert_eq!(v.max_shear_transversality, Some(0.0));
    }

    #[test]
    fn rapidity_component_uses_the_milne_metric() {
        let t = 2.0;
        let mut f = fields();
        let s = f.lattice.index(2, 3, 2);
        let un: f64 = 0.5;
        f.u.set(s, [(1.0 + t * t * un * un).sqrt(), 0.0, 0.0, un]);
        assert_relative_eq!(
            validate(&f, t).unwrap().max_normalization_error,
            0.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            validate(&f, 1.0).unwrap().max_normalization_error,
            0.75,
            max_relative = 1e-12
        );
    }

    #[test]
    fn shear_trace_and_transversality() {
        let t = 0.5;
        let mut f = fields();
        let s = f.lattice.index(2, 2, 2);
        let pinn = 4.0;
        let pixx = -t * t * pinn / 2.0;
        f.pi.as_mut()
            .unwrap()
            .set(s, [0.0, 0.0, 0.0, 0.0, pixx, 0.0, 0.0, pixx, 0.0, pinn]);
        let v = validate(&f, t).unwrap();
        assert_relative_eq!(v.max_shear_trace.unwrap(), 0.0, epsilon = 1e-12);
        assert_eq!(v.max_shear_transversality, Some(0.0));

        f.pi.as_mut().unwrap().pitx[s] = 0.25;
        let v = validate(&f, t).unwrap();
        assert_relative_eq!(v.max_shear_transversality.unwrap(), 0.25);
    }

    #[test]
    fn non_finite_values_are_errors() {
        let mut f = fields();
        let s = f.lattice.index(3, 2, 3);
        f.p[s] = f64::NAN;
        match validate(&f, 1.0) {
            Err(InitError::NonFinite { field, cell }) => {
                assert_eq!(field, "p");
                assert_eq!(cell, [1, 0, 1]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
