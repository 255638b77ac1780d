//! CSV export of the collected samples.
//!
//! Files are named `<YYYY-MM-DD_HH-MM-SS>_<experiment>.csv` and hold one
//! `time,value` row per sample, without a header.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

/// Timestamp layout used as the file name prefix.
pub const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Error: experiment name cannot be empty!")]
    EmptyName,
    #[error("Error: could not save {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Build the export file name for `experiment` saved at `stamp`.
pub fn file_name(stamp: &NaiveDateTime, experiment: &str) -> String {
    format!("{}_{}.csv", stamp.format(FILE_STAMP_FORMAT), experiment)
}

/// Write `time[i],data[i]` rows in index order.
///
/// Values use the shortest representation that parses back to the same
/// `f64` (`0.0`, `0.01`, `9.42`).
pub fn write_csv<W: Write>(mut w: W, time: &[f64], data: &[f64]) -> std::io::Result<()> {
    for (t, y) in time.iter().zip(data.iter()) {
        writeln!(w, "{t:?},{y:?}")?;
    }
    w.flush()
}

/// Save the aligned `time`/`data` sequences to `dir` and return the written path.
///
/// An empty `experiment` name is rejected before anything touches the
/// filesystem. An existing file with the same name is overwritten. Rows go
/// to a `.part` file next to the target which is renamed into place only
/// once every row is written, so a failed save leaves no file behind.
pub fn save_csv(
    dir: &Path,
    experiment: &str,
    stamp: &NaiveDateTime,
    time: &[f64],
    data: &[f64],
) -> Result<PathBuf, ExportError> {
    if experiment.is_empty() {
        return Err(ExportError::EmptyName);
    }
    let path = dir.join(file_name(stamp, experiment));
    persist(&path, |w| write_csv(w, time, data)).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn persist<F>(path: &Path, write: F) -> std::io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let mut part = path.as_os_str().to_owned();
    part.push(".part");
    let part = PathBuf::from(part);

    let mut w = BufWriter::new(File::create(&part)?);
    let written = write(&mut w)
        .and_then(|()| w.into_inner().map_err(|e| e.into_error()))
        .and_then(|file| file.sync_all())
        .and_then(|()| std::fs::rename(&part, path));
    if written.is_err() {
        if let Err(e) = std::fs::remove_file(&part) {
            log::debug!("could not remove {}: {e}", part.display());
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn failed_write_leaves_no_file() {
        let dir = std::env::temp_dir().join(format!("fnvisualizer-persist-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.csv");

        let err = persist(&path, |w| {
            writeln!(w, "0.0,1.0")?;
            Err(Error::new(ErrorKind::WriteZero, "disk full"))
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteZero);
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn failed_write_keeps_previous_file() {
        let dir = std::env::temp_dir().join(format!("fnvisualizer-persist-keep-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.csv");
        std::fs::write(&path, "0.0,1.0\n").unwrap();

        assert!(persist(&path, |_| Err(Error::new(ErrorKind::Other, "boom"))).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0.0,1.0\n");
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
