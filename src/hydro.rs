pub mod eos;
pub mod grid;
pub mod init;
pub mod solutions;
pub mod utils;
pub mod validate;

/// hbar*c in GeV.fm
pub const HBARC: f64 = 0.1973269804;

/// State written into one physical cell by a self-contained generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub e: f64,
    pub p: f64,
    /// [ut, ux, uy, un]
    pub u: [f64; 4],
    /// [pitt, pitx, pity, pitn, pixx, pixy, pixn, piyy, piyn, pinn]
    pub pi: [f64; 10],
}

impl Cell {
    pub fn at_rest(e: f64, p: f64) -> Self {
        Cell::ideal(e, p, [1.0, 0.0, 0.0, 0.0])
    }

    pub fn ideal(e: f64, p: f64, u: [f64; 4]) -> Self {
        Cell {
            e,
            p,
            u,
            pi: [0.0; 10],
        }
    }
}

/// Fn(physical indices [i, j, k], coordinates [x, y, eta]) -> cell state
pub type Init<'a> = Box<dyn Fn([usize; 3], [f64; 3]) -> Cell + 'a>;
/// Fn(physical indices [i, j, k], coordinates [x, y, eta]) -> energy density
pub type EnergyInit<'a> = Box<dyn Fn([usize; 3], [f64; 3]) -> f64 + 'a>;
