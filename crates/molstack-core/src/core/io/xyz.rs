use crate::core::io::traits::GeometryFile;
use crate::core::models::molecule::Atom;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Minimum number of lines in a readable file: count, comment, one atom.
const MIN_LINE_COUNT: usize = 3;
const MIN_ATOM_FIELDS: usize = 4;
const LABEL_WIDTH: usize = 4;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyzMetadata {
    /// Atom count from the first line, if it parsed as an integer.
    pub declared_count: Option<usize>,
    pub comment: String,
}

impl XyzMetadata {
    pub fn with_comment(comment: impl Into<String>) -> Self {
        Self {
            declared_count: None,
            comment: comment.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("File has {found} line(s); at least 3 are required")]
    TooShort { found: usize },
    #[error("Parse error on line {line}: invalid {axis} coordinate '{value}'")]
    InvalidCoordinate {
        line: usize,
        axis: char,
        value: String,
    },
}

pub struct XyzFile;

fn parse_coordinate(value: &str, axis: char, line: usize) -> Result<f64, XyzError> {
    value.parse().map_err(|_| XyzError::InvalidCoordinate {
        line,
        axis,
        value: value.to_string(),
    })
}

impl GeometryFile for XyzFile {
    type Metadata = XyzMetadata;
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Vec<Atom>, Self::Metadata), Self::Error> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        if lines.len() < MIN_LINE_COUNT {
            return Err(XyzError::TooShort { found: lines.len() });
        }

        let metadata = XyzMetadata {
            declared_count: lines[0].trim().parse().ok(),
            comment: lines[1].clone(),
        };

        let mut atoms = Vec::new();
        for (idx, line) in lines.iter().enumerate().skip(2) {
            let line_num = idx + 1;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < MIN_ATOM_FIELDS {
                continue;
            }
            let x = parse_coordinate(fields[1], 'x', line_num)?;
            let y = parse_coordinate(fields[2], 'y', line_num)?;
            let z = parse_coordinate(fields[3], 'z', line_num)?;
            atoms.push(Atom::new(fields[0], Point3::new(x, y, z)));
        }

        Ok((atoms, metadata))
    }

    fn write_to(
        atoms: &[Atom],
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        writeln!(writer, "{}", atoms.len())?;
        writeln!(writer, "{}", metadata.comment)?;
        for atom in atoms {
            let p = &atom.position;
            writeln!(
                writer,
                "{:<width$} {:.6} {:.6} {:.6}",
                atom.label,
                p.x,
                p.y,
                p.z,
                width = LABEL_WIDTH
            )?;
        }
        Ok(())
    }
}
