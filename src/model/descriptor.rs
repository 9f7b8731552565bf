//! Drawer descriptors - the identifying record for one open panel

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Kind of domain entity a drawer displays
///
/// The set is closed for dispatch purposes but open for parsing: any
/// unrecognized name survives as `Other` so newer producers never break an
/// older stack. `Other` names are normalized like the known ones, with `-`
/// replaced by `_` so the kind never contains the id separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DrawerKind {
    Task,
    Note,
    Team,
    User,
    Board,
    Other(String),
}

impl DrawerKind {
    /// Lowercase wire name (`task`, `note`, ...)
    pub fn as_str(&self) -> &str {
        match self {
            DrawerKind::Task => "task",
            DrawerKind::Note => "note",
            DrawerKind::Team => "team",
            DrawerKind::User => "user",
            DrawerKind::Board => "board",
            DrawerKind::Other(name) => name,
        }
    }

    /// Capitalized name for breadcrumb chips
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<&str> for DrawerKind {
    fn from(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "task" => DrawerKind::Task,
            "note" => DrawerKind::Note,
            "team" => DrawerKind::Team,
            "user" => DrawerKind::User,
            "board" => DrawerKind::Board,
            _ => DrawerKind::Other(normalized.replace('-', "_")),
        }
    }
}

impl From<String> for DrawerKind {
    fn from(name: String) -> Self {
        DrawerKind::from(name.as_str())
    }
}

impl From<DrawerKind> for String {
    fn from(kind: DrawerKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for DrawerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique identifier for a drawer within the stack
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawerId(pub String);

impl DrawerId {
    /// Deterministic id for an entity, so re-requesting it never duplicates
    ///
    /// The kind is everything before the first `-`; entity ids may contain
    /// further dashes.
    pub fn for_entity(kind: &DrawerKind, entity_id: &str) -> Self {
        Self(format!("{}-{}", kind.as_str().replace('-', "_"), entity_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DrawerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DrawerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for DrawerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifying record for a panel
///
/// Field values never change once the descriptor enters the stack; raising
/// a drawer only moves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub id: DrawerId,
    #[serde(rename = "type")]
    pub kind: DrawerKind,
    #[serde(rename = "entityId")]
    pub entity_id: String,
    /// Milliseconds since the Unix epoch, stamped when the stack accepts it
    #[serde(default)]
    pub timestamp: u64,
}

impl Descriptor {
    /// Create a descriptor with an id derived from kind and entity
    pub fn new(kind: DrawerKind, entity_id: impl Into<String>) -> Self {
        let entity_id = entity_id.into();
        Self {
            id: DrawerId::for_entity(&kind, &entity_id),
            kind,
            entity_id,
            timestamp: 0,
        }
    }

    /// Create a descriptor with an explicit id
    pub fn with_id(id: impl Into<DrawerId>, kind: DrawerKind, entity_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            entity_id: entity_id.into(),
            timestamp: 0,
        }
    }

    pub fn task(entity_id: impl Into<String>) -> Self {
        Self::new(DrawerKind::Task, entity_id)
    }

    pub fn note(entity_id: impl Into<String>) -> Self {
        Self::new(DrawerKind::Note, entity_id)
    }

    pub fn team(entity_id: impl Into<String>) -> Self {
        Self::new(DrawerKind::Team, entity_id)
    }

    pub fn user(entity_id: impl Into<String>) -> Self {
        Self::new(DrawerKind::User, entity_id)
    }
}

/// Current wall-clock time in milliseconds
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
