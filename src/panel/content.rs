//! Hosted content dispatch
//!
//! The drawer kind selects which detail screen a panel hosts. Detail screens
//! themselves live outside this crate; they receive `ContentProps` and own
//! their data fetching, editing and saving.

use crate::messages::{DrawerMsg, Msg};
use crate::model::{DrawerId, DrawerKind, MountedDrawer};

/// Detail screens a drawer can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    TaskDetail,
    NoteDetail,
    TeamDetail,
    UserDetail,
}

impl ContentKind {
    /// Content for a drawer kind; `None` means render nothing
    ///
    /// Boards and unknown kinds have no drawer content yet.
    pub fn resolve(kind: &DrawerKind) -> Option<Self> {
        match kind {
            DrawerKind::Task => Some(ContentKind::TaskDetail),
            DrawerKind::Note => Some(ContentKind::NoteDetail),
            DrawerKind::Team => Some(ContentKind::TeamDetail),
            DrawerKind::User => Some(ContentKind::UserDetail),
            DrawerKind::Board | DrawerKind::Other(_) => None,
        }
    }
}

/// The only interface hosted content receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentProps {
    pub open: bool,
    pub id: DrawerId,
    /// Message to dispatch when the content wants to close itself
    pub on_close: Msg,
}

impl ContentProps {
    pub fn new(id: DrawerId, open: bool) -> Self {
        Self {
            open,
            on_close: Msg::Drawer(DrawerMsg::Close(id.clone())),
            id,
        }
    }
}

/// A mounted drawer paired with the content it renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedContent {
    pub content: ContentKind,
    pub entity_id: String,
    pub props: ContentProps,
}

impl MountedContent {
    /// Resolve a mount entry; `None` when its kind renders nothing
    pub fn for_mounted(mounted: &MountedDrawer) -> Option<Self> {
        let Some(content) = ContentKind::resolve(&mounted.descriptor.kind) else {
            tracing::trace!(
                id = %mounted.descriptor.id,
                kind = %mounted.descriptor.kind,
                "no content for drawer kind"
            );
            return None;
        };
        Some(Self {
            content,
            entity_id: mounted.descriptor.entity_id.clone(),
            props: ContentProps::new(mounted.descriptor.id.clone(), mounted.is_open()),
        })
    }
}
