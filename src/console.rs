//! Output sink shared by the demonstrations

use std::sync::{Arc, Mutex};

/// Where demonstration output goes.
///
/// Cloning a capturing console shares the same buffer, so tasks spawned by a
/// demo record into the transcript the caller inspects afterwards.
#[derive(Debug, Clone, Default)]
pub struct Console {
    captured: Option<Arc<Mutex<Vec<String>>>>,
}

impl Console {
    /// Print every line to standard output
    pub fn stdout() -> Self {
        Self { captured: None }
    }

    /// Record lines in memory instead of printing them
    pub fn capture() -> Self {
        Self {
            captured: Some(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Emit one line
    pub fn line(&self, line: impl Into<String>) {
        let line = line.into();
        match &self.captured {
            Some(buffer) => {
                // A poisoned buffer still holds every line written before the panic
                let mut lines = buffer.lock().unwrap_or_else(|e| e.into_inner());
                lines.push(line);
            },
            None => println!("{}", line),
        }
    }

    /// Lines recorded so far (always empty for a stdout console)
    pub fn lines(&self) -> Vec<String> {
        match &self.captured {
            Some(buffer) => buffer.lock().unwrap_or_else(|e| e.into_inner()).clone(),
            None => Vec::new(),
        }
    }
}
