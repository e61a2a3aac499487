use std::f64::consts::PI;

use crate::hydro::{Cell, Init};

pub const RHO_TOP: f64 = 2.0;
pub const RHO_BOTTOM: f64 = 1.0;
pub const GRAVITY: f64 = 0.1;
/// Amplitude of the interface perturbation.
pub const PERTURBATION: f64 = 0.01;

/// Hydrostatic pressure of two stacked layers with interface at `0.5 + PERTURBATION cos(pi x)`.
pub fn rayleigh_taylor_pressure(x: f64, y: f64) -> f64 {
    let yloc = 0.5 + PERTURBATION * (PI * x).cos();
    if y > yloc {
        RHO_TOP * GRAVITY * (1.0 - y)
    } else {
        RHO_TOP * GRAVITY * (1.0 - yloc) + RHO_BOTTOM * GRAVITY * (yloc - y)
    }
}

pub fn init_rayleigh_taylor<'a>() -> Init<'a> {
    Box::new(|_, [x, y, _]| {
        let e = rayleigh_taylor_pressure(x, y);
        Cell::at_rest(e, e / 3.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn continuous_across_the_interface() {
        let x = 0.3;
        let yloc = 0.5 + PERTURBATION * (PI * x).cos();
        let above = rayleigh_taylor_pressure(x, yloc + 1e-12);
        let below = rayleigh_taylor_pressure(x, yloc);
        assert_relative_eq!(above, below, max_relative = 1e-9);
    }

    #[test]
    fn heavier_on_top() {
        // the upper layer's pressure gradient is twice the lower one
        let top = rayleigh_taylor_pressure(0.5, 0.8) - rayleigh_taylor_pressure(0.5, 0.9);
        let bottom = rayleigh_taylor_pressure(0.5, 0.1) - rayleigh_taylor_pressure(0.5, 0.2);
        assert_relative_eq!(top, 2.0 * bottom, max_relative = 1e-9);
        assert_relative_eq!(rayleigh_taylor_pressure(0.0, 1.0), 0.0);
        let cell = init_rayleigh_taylor()([0, 0, 0], [0.0, 0.0, 0.0]);
        assert_eq!(cell.u, [1.0, 0.0, 0.0, 0.0]);
        assert_relative_eq!(cell.p, cell.e / 3.0);
    }
}
