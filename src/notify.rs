//! Fila de toasts: canal lateral de avisos disparados pelo controlador.

use std::time::{Duration, Instant};

/// Tempo que um toast permanece na tela.
const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Destructive,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    created: Instant,
}

/// Fila de avisos "dispare e esqueça". O controlador empurra, a UI desenha,
/// e cada aviso expira sozinho depois do TTL.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, severity: Severity) {
        self.queue.push(Toast {
            title: title.into(),
            description: description.into(),
            severity,
            created: Instant::now(),
        });
    }

    /// Descarta os avisos expirados.
    pub fn prune(&mut self, now: Instant) {
        self.queue
            .retain(|t| now.saturating_duration_since(t.created) < TOAST_TTL);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
