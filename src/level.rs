//! Level records and persistence.
//!
//! A level is a name plus its list of filled blocks. The level contract
//! stores blocks as `uint8` pairs, so anything outside `0..=255` cannot be
//! saved. Stores hand out sequential ids the way the contract's
//! `levelCount` does. [`SnapshotFileStore`] reads and writes the
//! `level-snapshot.json` document produced by the level snapshot script.
//!
//! Block lists coming from outside are parsed leniently: an entry that is
//! not an object with integer `x`/`y` in range is dropped on its own and the
//! rest of the level still loads.

#[cfg(test)]
#[path = "level_test.rs"]
mod level_test;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::consts::MAX_BLOCK_COORD;
use crate::grid::Block;

/// Level identifier assigned by the store.
pub type LevelId = u64;

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("level not found: {0}")]
    NotFound(LevelId),
    #[error("block ({x}, {y}) is outside the storable range 0..=255")]
    CoordinateOutOfRange { x: i32, y: i32 },
    #[error("no level ids left after {0}")]
    IdExhausted(LevelId),
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A stored level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: LevelId,
    /// Address (or other identity) of the creator, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_blocks")]
    pub blocks: Vec<Block>,
}

/// Listing entry for a level picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    pub id: LevelId,
    pub name: String,
    pub block_count: usize,
}

impl From<&Level> for LevelSummary {
    fn from(level: &Level) -> Self {
        Self { id: level.id, name: level.name.clone(), block_count: level.blocks.len() }
    }
}

/// The `level-snapshot.json` document: every level, in id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    #[serde(default)]
    pub levels: Vec<Level>,
}

impl LevelSnapshot {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Id the next saved level receives.
    pub fn next_id(&self) -> Result<LevelId, LevelError> {
        match self.levels.iter().map(|l| l.id).max() {
            Some(max) => max.checked_add(1).ok_or(LevelError::IdExhausted(max)),
            None => Ok(0),
        }
    }

    #[must_use]
    pub fn get(&self, id: LevelId) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Append a new level and return its id. Blocks are stored sorted.
    pub fn push(&mut self, name: &str, owner: Option<String>, blocks: &[Block]) -> Result<LevelId, LevelError> {
        check_storable(blocks)?;
        let id = self.next_id()?;
        let mut blocks = blocks.to_vec();
        blocks.sort_unstable();
        blocks.dedup();
        self.levels.push(Level { id, owner, name: name.to_owned(), blocks });
        Ok(id)
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<LevelSummary> {
        self.levels.iter().map(LevelSummary::from).collect()
    }
}

/// Reject blocks the level contract cannot represent.
pub fn check_storable(blocks: &[Block]) -> Result<(), LevelError> {
    let range = 0..=MAX_BLOCK_COORD;
    match blocks.iter().find(|b| !range.contains(&b.x) || !range.contains(&b.y)) {
        Some(b) => Err(LevelError::CoordinateOutOfRange { x: b.x, y: b.y }),
        None => Ok(()),
    }
}

/// Parse a JSON block list, dropping malformed entries individually.
///
/// Anything other than an array yields an empty list.
#[must_use]
pub fn parse_blocks(value: &Value) -> Vec<Block> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };
    let blocks: Vec<Block> = entries.iter().filter_map(parse_block).collect();
    let dropped = entries.len() - blocks.len();
    if dropped > 0 {
        warn!(dropped, kept = blocks.len(), "dropped malformed block entries");
    }
    blocks
}

fn parse_block(value: &Value) -> Option<Block> {
    Some(Block::new(parse_coord(value, "x")?, parse_coord(value, "y")?))
}

fn parse_coord(value: &Value, key: &str) -> Option<i32> {
    let raw = value.get(key).and_then(Value::as_i64)?;
    match i32::try_from(raw) {
        Ok(coord) if (0..=MAX_BLOCK_COORD).contains(&coord) => Some(coord),
        _ => None,
    }
}

fn lenient_blocks<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_blocks(&value))
}

/// Persistence collaborator for the editor.
pub trait LevelStore {
    /// Store a new level and return its id.
    fn save(&mut self, name: &str, blocks: &[Block]) -> Result<LevelId, LevelError>;

    /// Blocks of a stored level.
    fn load(&self, id: LevelId) -> Result<Vec<Block>, LevelError>;

    /// All stored levels.
    fn list(&self) -> Result<Vec<LevelSummary>, LevelError>;
}

/// In-memory store, for tests and offline editing.
#[derive(Debug, Clone, Default)]
pub struct MemoryLevelStore {
    snapshot: LevelSnapshot,
    owner: Option<String>,
}

impl MemoryLevelStore {
    #[must_use]
    pub fn new(owner: Option<String>) -> Self {
        Self { snapshot: LevelSnapshot::default(), owner }
    }

    #[must_use]
    pub fn from_snapshot(snapshot: LevelSnapshot) -> Self {
        Self { snapshot, owner: None }
    }

    #[must_use]
    pub fn snapshot(&self) -> &LevelSnapshot {
        &self.snapshot
    }
}

impl LevelStore for MemoryLevelStore {
    fn save(&mut self, name: &str, blocks: &[Block]) -> Result<LevelId, LevelError> {
        self.snapshot.push(name, self.owner.clone(), blocks)
    }

    fn load(&self, id: LevelId) -> Result<Vec<Block>, LevelError> {
        self.snapshot.get(id).map(|l| l.blocks.clone()).ok_or(LevelError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<LevelSummary>, LevelError> {
        Ok(self.snapshot.summaries())
    }
}

/// Store backed by a snapshot JSON file. A missing file is an empty snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotFileStore {
    path: PathBuf,
    owner: Option<String>,
}

impl SnapshotFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, owner: Option<String>) -> Self {
        Self { path: path.into(), owner }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole snapshot from disk.
    pub fn read(&self) -> Result<LevelSnapshot, LevelError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => LevelSnapshot::from_json(&json),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(LevelSnapshot::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the snapshot on disk.
    pub fn write(&self, snapshot: &LevelSnapshot) -> Result<(), LevelError> {
        fs::write(&self.path, snapshot.to_json_pretty()?)?;
        info!(path = %self.path.display(), levels = snapshot.levels.len(), "level snapshot written");
        Ok(())
    }
}

impl LevelStore for SnapshotFileStore {
    fn save(&mut self, name: &str, blocks: &[Block]) -> Result<LevelId, LevelError> {
        let mut snapshot = self.read()?;
        let id = snapshot.push(name, self.owner.clone(), blocks)?;
        self.write(&snapshot)?;
        Ok(id)
    }

    fn load(&self, id: LevelId) -> Result<Vec<Block>, LevelError> {
        self.read()?.get(id).map(|l| l.blocks.clone()).ok_or(LevelError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<LevelSummary>, LevelError> {
        Ok(self.read()?.summaries())
    }
}
