//! LID file I/O.
//!
//! Per-point LID (Local Intrinsic Dimensionality) estimates arrive as a
//! binary artifact produced by an external estimation pipeline, one scalar
//! per indexed point in ascending node-id order. The layout mirrors the
//! conventional `(npts, dim)` vector/label dataset format, so the same
//! tooling can inspect both:
//!
//! ```text
//! count        i32, little-endian   number of points, must be > 0
//! reserved_dim i32, little-endian   carried for layout compatibility
//! values       count * f32, little-endian
//! ```
//!
//! `reserved_dim` is read but not validated (scalar files write 1). The
//! reader performs one bounded synchronous pass and does not retain the
//! file handle.

use crate::error::{McgiError, McgiResult};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Read a LID file into one `f32` per node, in file order.
///
/// File order equals ascending node-id order, matching the point ordering
/// of the vector dataset being indexed.
///
/// # Errors
///
/// - [`McgiError::Io`] if the file is missing or unreadable
/// - [`McgiError::MalformedHeader`] if the declared count is not positive
/// - [`McgiError::TruncatedData`] if the payload is shorter than `count * 4`
pub fn read_lid_file(path: &Path) -> McgiResult<Vec<f32>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut buf_i32 = [0u8; 4];
    reader.read_exact(&mut buf_i32)?;
    let count = i32::from_le_bytes(buf_i32);

    reader.read_exact(&mut buf_i32)?;
    let _reserved_dim = i32::from_le_bytes(buf_i32);

    if count <= 0 {
        return Err(McgiError::MalformedHeader { count });
    }

    let expected = count as usize * 4;
    let mut payload = Vec::with_capacity(expected);
    reader.take(expected as u64).read_to_end(&mut payload)?;
    if payload.len() < expected {
        return Err(McgiError::TruncatedData {
            expected,
            actual: payload.len(),
        });
    }

    let values = payload
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();

    Ok(values)
}

/// Write LID values in the same layout (`reserved_dim = 1`).
///
/// Counterpart to [`read_lid_file`], used by tests and by tooling that
/// produces synthetic LID inputs.
pub fn write_lid_file(path: &Path, values: &[f32]) -> McgiResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&(values.len() as i32).to_le_bytes())?;
    writer.write_all(&1i32.to_le_bytes())?;
    for &v in values {
        writer.write_all(&v.to_le_bytes())?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_values_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points_lid.bin");

        let values = vec![1.0f32, 5.0, 9.0, 2.5];
        write_lid_file(&path, &values).unwrap();

        let loaded = read_lid_file(&path).unwrap();
        assert_eq!(loaded, values);
    }

    #[test]
    fn zero_count_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty_lid.bin");

        // An empty slice writes header count 0
        write_lid_file(&path, &[]).unwrap();

        match read_lid_file(&path) {
            Err(McgiError::MalformedHeader { count }) => assert_eq!(count, 0),
            other => panic!("expected MalformedHeader, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn negative_count_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_lid.bin");

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(-3i32).to_le_bytes());
        bytes.extend_from_slice(&1i32.to_le_bytes());
        std::fs::write(&path, &bytes).unwrap();

        match read_lid_file(&path) {
            Err(McgiError::MalformedHeader { count }) => assert_eq!(count, -3),
            other => panic!("expected MalformedHeader, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn short_payload_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated_lid.bin");

        // Header declares 4 points but only 2 are present
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&4i32.to_le_bytes());
        bytes.extend_from_slice(&1i32.to_le_bytes());
        bytes.extend_from_slice(&1.0f32.to_le_bytes());
        bytes.extend_from_slice(&2.0f32.to_le_bytes());
        std::fs::write(&path, &bytes).unwrap();

        match read_lid_file(&path) {
            Err(McgiError::TruncatedData { expected, actual }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 8);
            }
            other => panic!("expected TruncatedData, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.bin");

        assert!(matches!(read_lid_file(&path), Err(McgiError::Io(_))));
    }

    #[test]
    fn reserved_dim_is_not_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odd_dim_lid.bin");

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2i32.to_le_bytes());
        bytes.extend_from_slice(&128i32.to_le_bytes());
        bytes.extend_from_slice(&3.0f32.to_le_bytes());
        bytes.extend_from_slice(&4.0f32.to_le_bytes());
        std::fs::write(&path, &bytes).unwrap();

        assert_eq!(read_lid_file(&path).unwrap(), vec![3.0, 4.0]);
    }
}
