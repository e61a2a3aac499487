use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    error::Result,
    hydro::{
        grid::Lattice,
        utils::{load_binary_2d, load_matrix_2d},
    },
};

/// Source of a normalized transverse energy-density profile, `nx * ny` values with index
/// `i + nx * j`.
pub trait TransverseProfile {
    fn energy_density(&self, lattice: &Lattice) -> Result<Vec<f64>>;
}

impl<F> TransverseProfile for F
where
    F: Fn(&Lattice) -> Vec<f64>,
{
    fn energy_density(&self, lattice: &Lattice) -> Result<Vec<f64>> {
        Ok(self(lattice))
    }
}

/// Profile precomputed by an external overlap model. Files ending in `.bin` hold raw
/// little-endian f64, anything else is a text matrix of `ny` rows and `nx` columns.
#[derive(Debug, Clone)]
pub struct ProfileFile {
    pub path: PathBuf,
}

impl ProfileFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        ProfileFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn is_binary(&self) -> bool {
        self.path.extension().map_or(false, |ext| ext == "bin")
    }
}

impl TransverseProfile for ProfileFile {
    fn energy_density(&self, lattice: &Lattice) -> Result<Vec<f64>> {
        info!("loading transverse profile \"{}\"", self.path.display());
        if self.is_binary() {
            load_binary_2d(&self.path, lattice.nx, lattice.ny)
        } else {
            load_matrix_2d(&self.path, lattice.nx, lattice.ny)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{ByteOrder, LittleEndian};

    fn lattice() -> Lattice {
        Lattice {
            nx: 3,
            ny: 2,
            nz: 1,
            ..Lattice::default()
        }
    }

    #[test]
    fn closures_are_profiles() {
        let flat = |l: &Lattice| vec![1.0; l.nx * l.ny];
        assert_eq!(flat.energy_density(&lattice()).unwrap(), vec![1.0; 6]);
    }

    #[test]
    fn text_and_binary_files() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join("overlap.dat");
        std::fs::write(&text, "0 1 2\n3 4 5\n").unwrap();
        let profile = ProfileFile::new(&text).energy_density(&lattice()).unwrap();
        assert_eq!(profile, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        let bin = dir.path().join("overlap.bin");
        let mut bytes = vec![0u8; 6 * 8];
        LittleEndian::write_f64_into(&profile, &mut bytes);
        std::fs::write(&bin, bytes).unwrap();
        assert_eq!(ProfileFile::new(&bin).energy_density(&lattice()).unwrap(), profile);
    }
}
