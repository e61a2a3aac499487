use tracing::debug;

use crate::hydro::grid::Fields;

/// No transverse flow and longitudinal Bjorken scaling (`un = 0`), so `u = (1, 0, 0, 0)`.
pub fn set_fluid_velocity_initial_condition(fields: &mut Fields, t0: f64) {
    debug!("initialize u^mu to (1, 0, 0, 0)");
    let lattice = fields.lattice;
    let (ux, uy, un) = (0.0f64, 0.0f64, 0.0f64);
    let ut = (1.0 + ux * ux + uy * uy + t0 * t0 * un * un).sqrt();
    for [i, j, k] in lattice.physical() {
        let s = lattice.index(i, j, k);
        fields.u.set(s, [ut, ux, uy, un]);
    }
}
