use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{InitError, Result};

use super::grid::{Fields, GHOST};

fn data_lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(n, l)| (n + 1, l.trim()))
        .filter(|(_, l)| !l.starts_with('#') && !l.is_empty())
}

fn parse_line(path: &Path, line: usize, l: &str) -> Result<Vec<f64>> {
    l.split_whitespace()
        .map(|v| {
            v.parse::<f64>().map_err(|err| InitError::Parse {
                path: path.to_path_buf(),
                line,
                message: format!("\"{v}\": {err}"),
            })
        })
        .collect()
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| InitError::io(path, err))
}

/// Rows of exactly `N` whitespace-separated numbers. Lines starting with `#` and blank lines
/// are skipped.
pub fn load_rows<const N: usize>(path: &Path) -> Result<Vec<[f64; N]>> {
    let contents = read_text(path)?;
    data_lines(&contents)
        .map(|(line, l)| {
            let values = parse_line(path, line, l)?;
            <[f64; N]>::try_from(values).map_err(|values| InitError::Parse {
                path: path.to_path_buf(),
                line,
                message: format!("expected {N} columns, found {}", values.len()),
            })
        })
        .collect()
}

/// Text matrix with `vy` rows of `vx` columns, returned flat with index `i + vx * j`.
pub fn load_matrix_2d(path: &Path, vx: usize, vy: usize) -> Result<Vec<f64>> {
    let contents = read_text(path)?;
    let mut mat = Vec::with_capacity(vx * vy);
    let mut rows = 0;
    for (line, l) in data_lines(&contents) {
        let row = parse_line(path, line, l)?;
        if row.len() != vx {
            return Err(InitError::ShapeMismatch {
                what: format!("columns of \"{}\" line {line}", path.display()),
                expected: vx,
                found: row.len(),
            });
        }
        mat.extend(row);
        rows += 1;
    }
    if rows != vy {
        return Err(InitError::MissingRows {
            path: path.to_path_buf(),
            expected: vy,
            found: rows,
        });
    }
    Ok(mat)
}

/// Raw little-endian f64 matrix of `vx * vy` values with index `i + vx * j`.
pub fn load_binary_2d(path: &Path, vx: usize, vy: usize) -> Result<Vec<f64>> {
    let size = std::mem::size_of::<f64>();
    let file = File::open(path).map_err(|err| InitError::io(path, err))?;
    let mut bytes = vec![];
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|err| InitError::io(path, err))?;
    if bytes.len() != vx * vy * size {
        return Err(InitError::ShapeMismatch {
            what: format!("bytes in \"{}\"", path.display()),
            expected: vx * vy * size,
            found: bytes.len(),
        });
    }
    let mut mat = vec![0.0f64; vx * vy];
    LittleEndian::read_f64_into(&bytes, &mut mat);
    Ok(mat)
}

/// Description of a saved initial state, written next to the raw field data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub scenario: String,
    pub t0: f64,
    pub etaovers: f64,
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub ghost: usize,
    pub variables: String,
}

impl Info {
    pub fn new(scenario: &str, t0: f64, etaovers: f64, fields: &Fields) -> Self {
        let l = fields.lattice;
        Info {
            scenario: scenario.to_string(),
            t0,
            etaovers,
            nx: l.nx,
            ny: l.ny,
            nz: l.nz,
            dx: l.dx,
            dy: l.dy,
            dz: l.dz,
            ghost: GHOST,
            variables: fields.names().join(" "),
        }
    }
}

/// Writes `info.yaml` and `fields.dat` into `dir`. Each field is stored as the full padded
/// array of little-endian f64, in the order of `Info::variables`.
pub fn save_fields(dir: &Path, fields: &Fields, info: &Info) -> Result<()> {
    fs::create_dir_all(dir).map_err(|err| InitError::io(dir, err))?;

    let info_path = dir.join("info.yaml");
    fs::write(&info_path, serde_yaml::to_string(info)?)
        .map_err(|err| InitError::io(&info_path, err))?;

    let data_path = dir.join("fields.dat");
    let file = File::create(&data_path).map_err(|err| InitError::io(&data_path, err))?;
    let mut buf = BufWriter::new(file);
    let write = |buf: &mut BufWriter<File>| -> std::io::Result<()> {
        for column in fields.columns() {
            for &v in column {
                buf.write_f64::<LittleEndian>(v)?;
            }
        }
        buf.flush()
    };
    write(&mut buf).map_err(|err| InitError::io(&data_path, err))?;
    debug!(variables = %info.variables, "fields written");
    info!("initial state saved in \"{}\"", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydro::grid::{Capabilities, Lattice};
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents).unwrap();
        path
    }

    #[test]
    fn matrix_is_read_row_by_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "m.dat", b"# header\n1 2 3\n\n4 5 6\n");
        let m = load_matrix_2d(&path, 3, 2).unwrap();
        assert_eq!(m, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn matrix_with_missing_rows_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "m.dat", b"1 2 3\n");
        match load_matrix_2d(&path, 3, 2) {
            Err(InitError::MissingRows {
                expected, found, ..
            }) => assert_eq!((expected, found), (2, 1)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rows_report_the_failing_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "r.dat", b"1\t2\n# c\n3 x\n");
        match load_rows::<2>(&path) {
            Err(InitError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected {other:?}"),
        }
        let path = write_file(dir.path(), "s.dat", b"1 2 3\n");
        assert!(matches!(load_rows::<2>(&path), Err(InitError::Parse { line: 1, .. })));
    }

    #[test]
    fn binary_matrix_checks_its_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut bytes = vec![0u8; 4 * 8];
        LittleEndian::write_f64_into(&[0.5, 1.5, 2.5, 3.5], &mut bytes);
        let path = write_file(dir.path(), "m.bin", &bytes);
        assert_eq!(load_binary_2d(&path, 2, 2).unwrap(), vec![0.5, 1.5, 2.5, 3.5]);
        assert!(matches!(
            load_binary_2d(&path, 3, 2),
            Err(InitError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nothing.dat");
        assert!(matches!(load_rows::<12>(&missing), Err(InitError::Io { .. })));
    }

    #[test]
    fn saved_fields_have_one_padded_array_per_variable() {
        let dir = tempfile::tempdir().unwrap();
        let lattice = Lattice {
            nx: 2,
            ny: 1,
            nz: 1,
            ..Lattice::default()
        };
        let mut fields = Fields::new(
            lattice,
            Capabilities {
                shear: false,
                bulk: true,
            },
        );
        fields.e[lattice.index(2, 2, 2)] = 7.0;
        let info = Info::new("sod-shock-tube", 0.5, 0.2, &fields);
        save_fields(dir.path(), &fields, &info).unwrap();

        let read: Info =
            serde_yaml::from_str(&fs::read_to_string(dir.path().join("info.yaml")).unwrap())
                .unwrap();
        assert_eq!(read, info);
        assert_eq!(read.variables, "e p ut ux uy un Pi");

        let bytes = fs::read(dir.path().join("fields.dat")).unwrap();
        assert_eq!(bytes.len(), 7 * lattice.len() * 8);
        let s = lattice.index(2, 2, 2);
        assert_eq!(LittleEndian::read_f64(&bytes[s * 8..s * 8 + 8]), 7.0);
    }
}
