//! Ghost cells belong to the solver's boundary stage and are never written here.

use serde::{Deserialize, Serialize};

use crate::error::{InitError, Result};

pub const GHOST: usize = 2;

pub const SHEAR_NAMES: [&str; 10] = [
    "pitt", "pitx", "pity", "pitn", "pixx", "pixy", "pixn", "piyy", "piyn", "pinn",
];

/// Linear index shared with the consuming solver: `i + nx * j + nx * ny * k`, where `nx`
/// and `ny` are the padded extents.
pub fn column_major_linear_index(i: usize, j: usize, k: usize, nx: usize, ny: usize) -> usize {
    i + nx * (j + ny * k)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lattice {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl Default for Lattice {
    fn default() -> Self {
        Lattice {
            nx: 129,
            ny: 129,
            nz: 1,
            dx: 0.1,
            dy: 0.1,
            dz: 0.1,
        }
    }
}

impl Lattice {
    pub fn check(&self) -> Result<()> {
        if self.nx == 0 || self.ny == 0 || self.nz == 0 {
            return Err(InitError::InvalidParameter(format!(
                "lattice needs at least one cell per axis, got {}x{}x{}",
                self.nx, self.ny, self.nz
            )));
        }
        for (name, d) in [("dx", self.dx), ("dy", self.dy), ("dz", self.dz)] {
            if !(d > 0.0 && d.is_finite()) {
                return Err(InitError::InvalidParameter(format!(
                    "lattice spacing {name} must be positive, got {d}"
                )));
            }
        }
        Ok(())
    }

    pub fn padded(&self) -> [usize; 3] {
        [self.nx + 2 * GHOST, self.ny + 2 * GHOST, self.nz + 2 * GHOST]
    }

    pub fn len(&self) -> usize {
        let [px, py, pz] = self.padded();
        px * py * pz
    }

    /// Linear index of the padded cell `(i, j, k)`.
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        let [px, py, _] = self.padded();
        column_major_linear_index(i, j, k, px, py)
    }

    /// `[x, y, eta]` of the padded cell `(i, j, k)`, centred on the middle of the lattice.
    pub fn coordinates(&self, i: usize, j: usize, k: usize) -> [f64; 3] {
        let centre = |n: usize| (n - 1) as f64 / 2.0;
        let g = GHOST as f64;
        [
            (i as f64 - g - centre(self.nx)) * self.dx,
            (j as f64 - g - centre(self.ny)) * self.dy,
            (k as f64 - g - centre(self.nz)) * self.dz,
        ]
    }

    pub fn is_physical(&self, i: usize, j: usize, k: usize) -> bool {
        let inside = |c: usize, n: usize| c >= GHOST && c < n + GHOST;
        inside(i, self.nx) && inside(j, self.ny) && inside(k, self.nz)
    }

    /// Padded indices of every physical cell, `i` running fastest.
    pub fn physical(&self) -> impl Iterator<Item = [usize; 3]> {
        let (nx, ny, nz) = (self.nx, self.ny, self.nz);
        (GHOST..nz + GHOST).flat_map(move |k| {
            (GHOST..ny + GHOST).flat_map(move |j| (GHOST..nx + GHOST).map(move |i| [i, j, k]))
        })
    }
}

/// Which optional dissipative fields exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub shear: bool,
    pub bulk: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FourVelocity {
    pub ut: Vec<f64>,
    pub ux: Vec<f64>,
    pub uy: Vec<f64>,
    pub un: Vec<f64>,
}

impl FourVelocity {
    fn zeros(n: usize) -> Self {
        FourVelocity {
            ut: vec![0.0; n],
            ux: vec![0.0; n],
            uy: vec![0.0; n],
            un: vec![0.0; n],
        }
    }

    pub fn set(&mut self, s: usize, [ut, ux, uy, un]: [f64; 4]) {
        self.ut[s] = ut;
        self.ux[s] = ux;
        self.uy[s] = uy;
        self.un[s] = un;
    }

    pub fn get(&self, s: usize) -> [f64; 4] {
        [self.ut[s], self.ux[s], self.uy[s], self.un[s]]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShearStress {
    pub pitt: Vec<f64>,
    pub pitx: Vec<f64>,
    pub pity: Vec<f64>,
    pub pitn: Vec<f64>,
    pub pixx: Vec<f64>,
    pub pixy: Vec<f64>,
    pub pixn: Vec<f64>,
    pub piyy: Vec<f64>,
    pub piyn: Vec<f64>,
    pub pinn: Vec<f64>,
}

impl ShearStress {
    fn zeros(n: usize) -> Self {
        ShearStress {
            pitt: vec![0.0; n],
            pitx: vec![0.0; n],
            pity: vec![0.0; n],
            pitn: vec![0.0; n],
            pixx: vec![0.0; n],
            pixy: vec![0.0; n],
            pixn: vec![0.0; n],
            piyy: vec![0.0; n],
            piyn: vec![0.0; n],
            pinn: vec![0.0; n],
        }
    }

    /// Components in `SHEAR_NAMES` order.
    pub fn components(&self) -> [&[f64]; 10] {
        [
            &self.pitt, &self.pitx, &self.pity, &self.pitn, &self.pixx, &self.pixy, &self.pixn,
            &self.piyy, &self.piyn, &self.pinn,
        ]
    }

    fn components_mut(&mut self) -> [&mut Vec<f64>; 10] {
        [
            &mut self.pitt,
            &mut self.pitx,
            &mut self.pity,
            &mut self.pitn,
            &mut self.pixx,
            &mut self.pixy,
            &mut self.pixn,
            &mut self.piyy,
            &mut self.piyn,
            &mut self.pinn,
        ]
    }

    pub fn set(&mut self, s: usize, pi: [f64; 10]) {
        for (c, v) in self.components_mut().into_iter().zip(pi) {
            c[s] = v;
        }
    }

    pub fn get(&self, s: usize) -> [f64; 10] {
        self.components().map(|c| c[s])
    }
}

/// All per-cell fields of the fluid, owned in one place and sized to the padded lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    pub lattice: Lattice,
    pub e: Vec<f64>,
    pub p: Vec<f64>,
    pub u: FourVelocity,
    pub pi: Option<ShearStress>,
    pub bulk: Option<Vec<f64>>,
}

impl Fields {
    pub fn new(lattice: Lattice, capabilities: Capabilities) -> Self {
        let n = lattice.len();
        Fields {
            lattice,
            e: vec![0.0; n],
            p: vec![0.0; n],
            u: FourVelocity::zeros(n),
            pi: capabilities.shear.then(|| ShearStress::zeros(n)),
            bulk: capabilities.bulk.then(|| vec![0.0; n]),
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            shear: self.pi.is_some(),
            bulk: self.bulk.is_some(),
        }
    }

    /// Names of the stored fields, in the order of `columns`.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = vec!["e", "p", "ut", "ux", "uy", "un"];
        if self.pi.is_some() {
            names.extend(SHEAR_NAMES);
        }
        if self.bulk.is_some() {
            names.push("Pi");
        }
        names
    }

    pub fn columns(&self) -> Vec<&[f64]> {
        let mut columns = vec![
            self.e.as_slice(),
            self.p.as_slice(),
            self.u.ut.as_slice(),
            self.u.ux.as_slice(),
            self.u.uy.as_slice(),
            self.u.un.as_slice(),
        ];
        if let Some(pi) = &self.pi {
            columns.extend(pi.components());
        }
        if let Some(bulk) = &self.bulk {
            columns.push(bulk);
        }
        columns
    }
}
