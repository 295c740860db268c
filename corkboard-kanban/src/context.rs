//! KanbanContext - the single-writer home of the board aggregate
//!
//! The context provides access primitives, not business logic. Commands do
//! all the work through [`KanbanContext::read`] and [`KanbanContext::mutate`].

use crate::error::{KanbanError, Result};
use crate::types::{Board, BoardId, KanbanSnapshot};
use corkboard_config::CorkboardConfig;
use corkboard_operations::{ExecutionResult, LogEntry, Operation};
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};
use std::time::Instant;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Buffered change events per subscriber before the oldest are dropped
const EVENT_CAPACITY: usize = 256;

/// Default number of activity entries kept in memory
const DEFAULT_ACTIVITY_CAPACITY: usize = 200;

/// Broadcast after every committed mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Canonical op string of the command that made the change
    pub op: String,
    /// The board that changed, if the change was board-scoped
    pub board_id: Option<BoardId>,
}

/// What a mutation did to the working copy
#[derive(Debug)]
pub enum Outcome<T> {
    /// The working copy changed and must be committed
    Changed {
        board_id: Option<BoardId>,
        value: T,
    },
    /// Nothing to commit (unknown id, value already in place)
    Unchanged(T),
}

impl<T> Outcome<T> {
    pub fn changed(board_id: impl Into<Option<BoardId>>, value: T) -> Self {
        Self::Changed {
            board_id: board_id.into(),
            value,
        }
    }

    pub fn unchanged(value: T) -> Self {
        Self::Unchanged(value)
    }
}

/// Context passed to every command - provides access, not logic
pub struct KanbanContext {
    state: RwLock<KanbanSnapshot>,
    /// Where the snapshot is written after each commit; `None` keeps it in memory
    store_path: Option<PathBuf>,
    events: broadcast::Sender<ChangeEvent>,
    activity: Mutex<VecDeque<LogEntry>>,
    activity_capacity: usize,
    seed_sample_cards: bool,
}

impl KanbanContext {
    /// Create an empty in-memory context
    pub fn new() -> Self {
        Self::with_snapshot(KanbanSnapshot::default(), None)
    }

    /// Open a context backed by a snapshot file, loading it if it exists
    pub fn open(store_path: impl Into<PathBuf>) -> Result<Self> {
        let store_path = store_path.into();
        let snapshot = match read_snapshot_file(&store_path)? {
            Some(mut snapshot) => {
                if snapshot.normalize() {
                    warn!(
                        "repaired positions in snapshot {}",
                        store_path.display()
                    );
                }
                info!(
                    boards = snapshot.boards.len(),
                    "loaded kanban snapshot from {}",
                    store_path.display()
                );
                snapshot
            }
            None => KanbanSnapshot::default(),
        };
        Ok(Self::with_snapshot(snapshot, Some(store_path)))
    }

    /// Build a context from configuration
    pub fn from_config(config: &CorkboardConfig) -> Result<Self> {
        let ctx = match config.storage.store_path() {
            Some(path) => Self::open(path)?,
            None => Self::new(),
        };
        Ok(ctx
            .with_sample_cards(config.boards.seed_sample_cards)
            .with_activity_capacity(config.activity.capacity))
    }

    fn with_snapshot(snapshot: KanbanSnapshot, store_path: Option<PathBuf>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: RwLock::new(snapshot),
            store_path,
            events,
            activity: Mutex::new(VecDeque::new()),
            activity_capacity: DEFAULT_ACTIVITY_CAPACITY,
            seed_sample_cards: true,
        }
    }

    /// Enable or disable welcome cards on new boards
    pub fn with_sample_cards(mut self, enabled: bool) -> Self {
        self.seed_sample_cards = enabled;
        self
    }

    /// Bound the in-memory activity log
    pub fn with_activity_capacity(mut self, capacity: usize) -> Self {
        self.activity_capacity = capacity;
        self
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Path of the snapshot file, if persistent
    pub fn store_path(&self) -> Option<&Path> {
        self.store_path.as_deref()
    }

    /// Whether new boards get the welcome cards
    pub fn seeds_sample_cards(&self) -> bool {
        self.seed_sample_cards
    }

    // =========================================================================
    // Aggregate access
    // =========================================================================

    /// Run `f` against the current state under the read lock
    pub fn read<R>(&self, f: impl FnOnce(&KanbanSnapshot) -> R) -> R {
        // The state is only ever replaced wholesale after a successful apply,
        // so a poisoned lock still guards a consistent value.
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Clone of the whole aggregate
    pub fn snapshot(&self) -> KanbanSnapshot {
        self.read(KanbanSnapshot::clone)
    }

    /// Clone of every board
    pub fn boards(&self) -> Vec<Board> {
        self.read(|state| state.boards.clone())
    }

    /// The session's current board id
    pub fn current_board_id(&self) -> Option<BoardId> {
        self.read(|state| state.current_board.clone())
    }

    /// Apply a mutation atomically.
    ///
    /// `apply` works on a copy of the state under the write lock. On
    /// [`Outcome::Changed`] the copy is persisted (if a store path is set),
    /// swapped in, and a [`ChangeEvent`] is broadcast. On error or
    /// [`Outcome::Unchanged`] the state is left exactly as it was.
    pub fn mutate<T>(
        &self,
        op: &str,
        apply: impl FnOnce(&mut KanbanSnapshot) -> Result<Outcome<T>>,
    ) -> Result<T> {
        self.commit(op, apply).map(|(value, _)| value)
    }

    /// Run a mutating operation through [`mutate`](Self::mutate) and wrap the
    /// result for the activity log.
    ///
    /// Committed changes and failures carry a log entry. An
    /// [`Outcome::Unchanged`] result is returned unlogged.
    pub fn mutate_logged<O, T>(
        &self,
        op: &O,
        apply: impl FnOnce(&mut KanbanSnapshot) -> Result<Outcome<T>>,
    ) -> ExecutionResult<T, KanbanError>
    where
        O: Operation + Serialize,
        T: Serialize,
    {
        let started = Instant::now();
        let op_string = op.op_string();
        let input = serde_json::to_value(op).unwrap_or(Value::Null);

        match self.commit(&op_string, apply) {
            Ok((value, false)) => ExecutionResult::Unlogged { value },
            result => ExecutionResult::logged(
                op_string,
                input,
                started,
                result.map(|(value, _)| value),
            ),
        }
    }

    /// Shared body of the mutate methods; the flag is true if a change was committed
    fn commit<T>(
        &self,
        op: &str,
        apply: impl FnOnce(&mut KanbanSnapshot) -> Result<Outcome<T>>,
    ) -> Result<(T, bool)> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let mut working = state.clone();

        match apply(&mut working)? {
            Outcome::Unchanged(value) => {
                debug!(op, "nothing to commit");
                Ok((value, false))
            }
            Outcome::Changed { board_id, value } => {
                if let Some(path) = &self.store_path {
                    write_snapshot_file(path, &working)?;
                }
                *state = working;
                debug!(op, board = ?board_id, "committed");

                // No receivers is not an error
                let _ = self.events.send(ChangeEvent {
                    op: op.to_string(),
                    board_id,
                });
                Ok((value, true))
            }
        }
    }

    /// Write the current state to the store path (no-op when in memory)
    pub fn save(&self) -> Result<()> {
        match &self.store_path {
            Some(path) => self.read(|state| write_snapshot_file(path, state)),
            None => Ok(()),
        }
    }

    // =========================================================================
    // Change notification
    // =========================================================================

    /// Receive a [`ChangeEvent`] for every mutation committed from now on
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.events.subscribe()
    }

    // =========================================================================
    // Activity logging
    // =========================================================================

    /// Record a log entry in the activity log, evicting the oldest beyond capacity
    pub fn append_activity(&self, entry: LogEntry) {
        let mut activity = self.activity.lock().unwrap_or_else(PoisonError::into_inner);
        activity.push_front(entry);
        activity.truncate(self.activity_capacity);
    }

    /// Activity entries, newest first
    pub fn read_activity(&self, limit: Option<usize>) -> Vec<LogEntry> {
        let activity = self.activity.lock().unwrap_or_else(PoisonError::into_inner);
        let limit = limit.unwrap_or(activity.len());
        activity.iter().take(limit).cloned().collect()
    }
}

impl Default for KanbanContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a snapshot file; a missing file is `None`
pub fn read_snapshot_file(path: &Path) -> Result<Option<KanbanSnapshot>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let snapshot: KanbanSnapshot = serde_json::from_str(&content)?;
    Ok(Some(snapshot))
}

/// Write a snapshot file as pretty JSON (atomic write via temp file)
pub fn write_snapshot_file(path: &Path, snapshot: &KanbanSnapshot) -> Result<()> {
    let content = serde_json::to_string_pretty(snapshot)?;
    atomic_write(path, content.as_bytes())
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path)?;

    Ok(())
}
