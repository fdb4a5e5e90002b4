//! Push local edits of the source file back into the remote editor.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{Config as NotifyConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use crate::editor::EditorSurface;
use crate::error::{Error, Result};
use crate::lang;
use crate::models::Language;

/// Quiet period between the last file change and the push.
pub const SYNC_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    PendingSync { due: Instant },
}

/// Coalesces bursts of change notifications into a single push.
///
/// A notification while a push is pending never schedules a second one; it
/// only moves the deadline so the push lands `delay` after the last change.
#[derive(Debug, Clone)]
pub struct Debouncer {
    state: SyncState,
    delay: Duration,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: SyncState::Idle,
            delay,
        }
    }

    /// Record a change. Returns `true` when this armed a new pending sync.
    pub fn notify(&mut self, now: Instant) -> bool {
        let armed = self.state == SyncState::Idle;
        self.state = SyncState::PendingSync {
            due: now + self.delay,
        };
        armed
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            SyncState::Idle => None,
            SyncState::PendingSync { due } => Some(due),
        }
    }

    /// Fire the pending sync if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            SyncState::PendingSync { due } if now >= due => {
                self.state = SyncState::Idle;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SYNC_DELAY)
    }
}

pub struct SyncLoop<E: EditorSurface> {
    path: PathBuf,
    language: Language,
    title: String,
    editor: E,
    debouncer: Debouncer,
}

impl<E: EditorSurface> SyncLoop<E> {
    pub fn new(path: impl Into<PathBuf>, language: Language, title: impl Into<String>, editor: E) -> Self {
        Self {
            path: path.into(),
            language,
            title: title.into(),
            editor,
            debouncer: Debouncer::default(),
        }
    }

    #[cfg(test)]
    pub fn editor(&self) -> &E {
        &self.editor
    }

    fn is_tracked(&self, event: &Event) -> bool {
        if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
            return false;
        }
        let tracked = self.path.file_name();
        event.paths.iter().any(|p| p.file_name() == tracked)
    }

    fn push(&mut self) {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                return;
            }
        };

        let text = lang::strip_scaffolding(self.language, &content);
        match self.editor.set_value(&text) {
            Ok(()) => info!("{} synced to the editor", self.title),
            Err(e) => warn!("Failed to sync {}: {}", self.title, e),
        }
    }

    /// Process watcher events until the channel disconnects.
    pub fn run(&mut self, events: &Receiver<notify::Result<Event>>) -> Result<()> {
        loop {
            let received = match self.debouncer.deadline() {
                Some(due) => match events.recv_timeout(due.saturating_duration_since(Instant::now())) {
                    Ok(event) => Some(event),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => return Ok(()),
                },
                None => match events.recv() {
                    Ok(event) => Some(event),
                    Err(_) => return Ok(()),
                },
            };

            match received {
                Some(Ok(event)) if self.is_tracked(&event) => {
                    if self.debouncer.notify(Instant::now()) {
                        debug!("Change detected in {}", self.path.display());
                    }
                }
                Some(Ok(_)) | None => {}
                Some(Err(e)) => warn!("Watch error: {}", e),
            }

            if self.debouncer.poll(Instant::now()) {
                self.push();
            }
        }
    }

    /// Watch the source file and keep the editor in sync for the rest of the
    /// process lifetime.
    pub fn watch(&mut self) -> Result<()> {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            tx,
            NotifyConfig::default().with_poll_interval(Duration::from_millis(500)),
        )?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            return Err(Error::io(
                &dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "directory to watch is missing"),
            ));
        }
        watcher.watch(Path::new(&dir), RecursiveMode::NonRecursive)?;
        info!("Watching {} for changes", self.path.display());

        self.run(&rx)
    }
}
