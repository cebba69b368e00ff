use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::config as global_config;

/// Root directory under which per-instance operation logs are written.
///
/// Create one of these at process initialization and hand it to every
/// session that should log. A session that is opened without logging never
/// touches the filesystem at all.
#[derive(Clone, Debug)]
pub struct OperationLogRoot {
    dir: PathBuf,
}

impl OperationLogRoot {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root taken from `PLC_LOG_DIR` (default `logs`).
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(global_config().plc_log_dir.clone())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Open a fresh log stream for one session.
    ///
    /// The file lands at `{root}/{instance_id}/{start_ts}.log`; the start
    /// timestamp keys the stream, so two sessions with the same instance id
    /// opened at different times write to distinct files.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error when the directory or file cannot be
    /// created.
    pub fn stream(&self, instance_id: u32) -> std::io::Result<OperationLog> {
        let folder = self.dir.join(instance_id.to_string());
        std::fs::create_dir_all(&folder)?;
        let start = Local::now().format("%Y_%m_%d_%H_%M_%S");
        let path = folder.join(format!("{start}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(OperationLog {
            instance_id,
            path,
            file,
        })
    }
}

/// Append-only, per-instance operation trail.
///
/// One line per operation; no rotation, truncation or compaction. Lines are
/// stamped by the sink, not the caller.
#[derive(Debug)]
pub struct OperationLog {
    instance_id: u32,
    path: PathBuf,
    file: File,
}

impl OperationLog {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn instance_id(&self) -> u32 {
        self.instance_id
    }

    /// Append one record line: `{HH:MM:SS.mmm} PLC_id{n} INFO {message}`.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error when the write fails. Sessions treat
    /// that as non-fatal (warn and continue) so a full disk cannot take the
    /// register path down.
    pub fn append(&mut self, message: &str) -> std::io::Result<()> {
        let stamp = Local::now().format("%H:%M:%S%.3f");
        writeln!(
            self.file,
            "{stamp} PLC_id{id} INFO {message}",
            id = self.instance_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_creates_instance_folder_and_appends_lines() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = OperationLogRoot::new(tmp.path());
        let mut log = root.stream(3).expect("stream");
        assert!(log.path().starts_with(tmp.path().join("3")));

        log.append("Connection Successful!").expect("append");
        log.append("Read Bool operation : Register : M100, Result : true, Status : Success")
            .expect("append");

        let text = std::fs::read_to_string(log.path()).expect("read back");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("PLC_id3 INFO Connection Successful!"));
        assert!(lines[1].ends_with("Status : Success"));
    }
}
