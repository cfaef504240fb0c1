use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use crate::trace::trace::TraceEvent;

/// Appends one JSON line per dispatched form response.
///
/// A trace problem never fails the dispatch that produced it: the event is
/// dropped, counted, and reported on stderr with the form it belonged to.
pub struct TraceLogger {
    path: Option<PathBuf>,
    file: Option<Mutex<File>>,
    dropped: AtomicUsize,
}

impl TraceLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Self {
                path: Some(path.to_path_buf()),
                file: Some(Mutex::new(f)),
                dropped: AtomicUsize::new(0),
            },
            Err(e) => {
                eprintln!(
                    "Warning: form tracing disabled, could not open '{}': {}",
                    path.display(),
                    e
                );
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self {
            path: None,
            file: None,
            dropped: AtomicUsize::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Events that could not be written since the logger was opened.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Record a dispatch. Returns whether the event reached the trace file.
    pub fn log(&self, event: &TraceEvent) -> bool {
        let Some(file) = &self.file else {
            return false;
        };

        match Self::write_event(file, event) {
            Ok(()) => true,
            Err(reason) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                eprintln!(
                    "Warning: dropped trace of {} response ({:?}): {}",
                    event.form_type, event.outcome, reason
                );
                false
            }
        }
    }

    fn write_event(file: &Mutex<File>, event: &TraceEvent) -> Result<(), String> {
        let json = serde_json::to_string(event).map_err(|e| format!("serialize: {}", e))?;
        let mut file = file.lock().map_err(|e| format!("lock poisoned: {}", e))?;
        writeln!(file, "{}", json).map_err(|e| format!("write: {}", e))
    }
}
