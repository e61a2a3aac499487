use crate::hydro::{Cell, Init};

/// Energy densities on the two sides of the Sod membrane.
pub const E_LOW: f64 = 0.00778147;
pub const E_HIGH: f64 = 0.124503;

fn sod(e: f64) -> Cell {
    Cell::at_rest(e, e / 3.0)
}

/// Membrane on the plane `x = 0`, low side at `x > 0`.
pub fn init_sod_shock_tube<'a>() -> Init<'a> {
    Box::new(|_, [x, _, _]| if x > 0.0 { sod(E_LOW) } else { sod(E_HIGH) })
}

/// Membrane on the diagonal `y = x`, low side at `y > x`.
pub fn init_sod_shock_tube_2d<'a>() -> Init<'a> {
    Box::new(|_, [x, y, _]| if y > x { sod(E_LOW) } else { sod(E_HIGH) })
}
