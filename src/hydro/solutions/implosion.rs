use crate::hydro::{
    solutions::riemann::{E_HIGH, E_LOW},
    Cell, Init,
};

/// Energy density of the inner disc `r <= 0.5`.
pub const E_CORE: f64 = 0.001;
pub const CORE_RADIUS: f64 = 0.5;
pub const SHELL_RADIUS: f64 = 1.0;

pub fn implosion_energy_density(r: f64) -> f64 {
    if (0.0..=CORE_RADIUS).contains(&r) {
        E_CORE
    } else if r > CORE_RADIUS && r <= SHELL_RADIUS {
        E_HIGH
    } else {
        E_LOW
    }
}

pub fn init_implosion<'a>() -> Init<'a> {
    Box::new(|_, [x, y, _]| {
        let e = implosion_energy_density((x * x + y * y).sqrt());
        Cell::at_rest(e, e / 3.0)
    })
}
