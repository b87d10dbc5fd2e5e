use crate::core::models::molecule::Atom;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing plain geometry file formats.
///
/// Implementors handle format-specific parsing and serialization of an ordered
/// list of labelled positions together with whatever header data the format
/// carries.
pub trait GeometryFile {
    /// Header data carried alongside the atoms (e.g., a comment line).
    type Metadata;

    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads atoms and metadata from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<(Vec<Atom>, Self::Metadata), Self::Error>;

    /// Writes atoms and metadata to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn write_to(
        atoms: &[Atom],
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads atoms and metadata from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<(Vec<Atom>, Self::Metadata), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes atoms and metadata to a file path, replacing any existing file.
    ///
    /// The buffer is flushed explicitly so that late write failures surface as
    /// errors instead of being dropped with the writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        atoms: &[Atom],
        metadata: &Self::Metadata,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(atoms, metadata, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
