use std::f64::consts::PI;

use super::EquationOfState;

const NC: f64 = 3.0;

/// Massless gas of quarks and gluons: `e = g pi^2 / 30 T^4`, `p = e / 3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conformal {
    /// e / T^4
    pub factor: f64,
}

impl Conformal {
    /// Degrees of freedom of SU(3) with `nf` massless flavours.
    pub fn degeneracy(nf: f64) -> f64 {
        2.0 * (NC * NC - 1.0) + 7.0 / 8.0 * 4.0 * NC * nf
    }

    pub fn qcd(nf: f64) -> Self {
        Conformal {
            factor: Self::degeneracy(nf) * PI * PI / 30.0,
        }
    }
}

impl EquationOfState for Conformal {
    fn p(&self, e: f64) -> f64 {
        e / 3.0
    }

    fn temperature(&self, e: f64) -> f64 {
        (e.max(0.0) / self.factor).powf(0.25)
    }

    fn energy_density(&self, t: f64) -> f64 {
        self.factor * t.powi(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn two_and_a_half_flavours() {
        let eos = Conformal::qcd(2.5);
        assert_relative_eq!(Conformal::degeneracy(2.5), 42.25);
        assert_relative_eq!(eos.factor, 42.25 * PI * PI / 30.0, max_relative = 1e-12);
        assert_relative_eq!(eos.factor, 13.89969286, max_relative = 1e-9);
    }

    #[test]
    fn temperature_inverts_energy_density() {
        let eos = Conformal::qcd(3.0);
        for t in [0.1, 1.0, 2.03, 3.05] {
            let e = eos.energy_density(t);
            assert_relative_eq!(eos.temperature(e), t, max_relative = 1e-12);
            assert_relative_eq!(eos.p(e), e / 3.0);
        }
        assert_eq!(eos.temperature(0.0), 0.0);
    }
}
