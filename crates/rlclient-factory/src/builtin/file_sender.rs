// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed sender.
//!
//! Appends every payload to a local file as a length-prefixed record
//! (little-endian `u32` byte count followed by the payload). The file is
//! opened by `init` and flushed after every record.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rlclient_core::{
    Capability, ClientError, ErrorCallback, Plugin, Sender, TraceLevel, TraceLogger,
};

/// Sender that appends records to a file.
pub struct FileSender {
    name: String,
    path: PathBuf,
    file: Option<File>,
    error_cb: ErrorCallback,
    trace_logger: Option<Arc<dyn TraceLogger>>,
}

impl FileSender {
    /// Create a sender bound to `path`. The file is not touched until
    /// [`Sender::init`].
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        error_cb: ErrorCallback,
        trace_logger: Option<Arc<dyn TraceLogger>>,
    ) -> Result<Self, ClientError> {
        let name = name.into();
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ClientError::InvalidConfiguration {
                key: name,
                message: "file name must not be empty".to_string(),
            });
        }
        Ok(Self {
            name,
            path,
            file: None,
            error_cb,
            trace_logger,
        })
    }

    /// The destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_record(file: &mut File, payload: &[u8]) -> std::io::Result<()> {
        let len = u32::try_from(payload.len()).map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "payload larger than 4 GiB",
            )
        })?;
        file.write_all(&len.to_le_bytes())?;
        file.write_all(payload)?;
        file.flush()
    }

    fn trace(&self, level: TraceLevel, message: &str) {
        if let Some(trace_logger) = &self.trace_logger {
            trace_logger.log(level, message);
        }
    }
}

impl Plugin for FileSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capability(&self) -> Capability {
        Capability::Sender
    }
}

impl Sender for FileSender {
    fn init(&mut self) -> Result<(), ClientError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ClientError::io(format!("failed to open {}", self.path.display()), e)
            })?;
        self.file = Some(file);
        self.trace(
            TraceLevel::Info,
            &format!("{}: writing to {}", self.name, self.path.display()),
        );
        Ok(())
    }

    fn send(&mut self, payload: &[u8]) -> Result<(), ClientError> {
        let Some(file) = self.file.as_mut() else {
            return Err(ClientError::Internal(format!(
                "{}: send called before init",
                self.name
            )));
        };
        if let Err(e) = Self::write_record(file, payload) {
            let err = ClientError::io(format!("failed to write {}", self.path.display()), e);
            (self.error_cb)(&err);
            self.trace(TraceLevel::Error, &err.to_string());
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlclient_core::{ErrorKind, ignore_errors};
    use std::sync::Mutex;

    #[test]
    fn empty_path_is_invalid_configuration() {
        let err = FileSender::new("observation_file", "", ignore_errors(), None)
            .err()
            .expect("empty path rejected");
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn send_before_init_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut sender =
            FileSender::new("observation_file", dir.path().join("obs.dat"), ignore_errors(), None)
                .unwrap();
        let err = sender.send(b"event").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(!dir.path().join("obs.dat").exists());
    }

    #[test]
    fn writes_length_prefixed_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interaction.fb.data");
        let mut sender =
            FileSender::new("interaction_file", &path, ignore_errors(), None).unwrap();
        sender.init().unwrap();
        sender.send(b"abc").unwrap();
        sender.send(b"").unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, vec![3, 0, 0, 0, b'a', b'b', b'c', 0, 0, 0, 0]);
    }

    #[test]
    fn reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("obs.dat");
        for payload in [b"one".as_slice(), b"two".as_slice()] {
            let mut sender =
                FileSender::new("observation_file", &path, ignore_errors(), None).unwrap();
            sender.init().unwrap();
            sender.send(payload).unwrap();
        }
        assert_eq!(std::fs::read(&path).unwrap().len(), 2 * (4 + 3));
    }

    #[test]
    fn init_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut sender = FileSender::new(
            "observation_file",
            dir.path().join("missing").join("obs.dat"),
            ignore_errors(),
            None,
        )
        .unwrap();
        assert_eq!(sender.init().unwrap_err().kind(), ErrorKind::Io);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn write_failure_reaches_error_callback() {
        let reported: Arc<Mutex<Vec<ErrorKind>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&reported);
        let cb: ErrorCallback = Arc::new(move |err: &ClientError| {
            sink.lock().unwrap().push(err.kind());
        });

        let mut sender = FileSender::new("observation_file", "/dev/full", cb, None).unwrap();
        sender.init().unwrap();
        let err = sender.send(b"payload").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(*reported.lock().unwrap(), vec![ErrorKind::Io]);
    }
}
