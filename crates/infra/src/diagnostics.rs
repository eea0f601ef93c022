// crates/infra/src/diagnostics.rs
use std::sync::{Mutex, PoisonError};

use filelist_source_ports::{Diagnostic, DiagnosticsSink};

/// Forwards diagnostics to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    pub const TARGET: &'static str = "filelist_source";
}

impl DiagnosticsSink for LogSink {
    fn warn(&self, diagnostic: &Diagnostic) {
        log::warn!(target: Self::TARGET, "{diagnostic}");
    }
}

/// Buffers diagnostics so the host can surface them after a traversal.
#[derive(Debug, Default)]
pub struct CollectingSink {
    seen: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Remove and return everything received so far.
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.seen.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticsSink for CollectingSink {
    fn warn(&self, diagnostic: &Diagnostic) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}
