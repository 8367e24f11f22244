use super::error::TabPanelError;
use serde::{Deserialize, Serialize};

/// Identity of a tab group: the document order of its list on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub usize);

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "group-{}", self.0)
    }
}

/// Explicit selection state of one tab group.
///
/// `active` is `None` only between registration and the first activation.
/// Once a tab is selected the group always has exactly one active tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabGroupState {
    pub group_id: GroupId,
    len: usize,
    active: Option<usize>,
}

impl TabGroupState {
    pub fn new(group_id: GroupId, len: usize) -> Self {
        Self {
            group_id,
            len,
            active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Make `index` the single active tab. Selecting the current tab again is allowed.
    pub fn select(&mut self, index: usize) -> Result<(), TabPanelError> {
        if self.len == 0 {
            return Err(TabPanelError::EmptyGroup(self.group_id));
        }
        if index >= self.len {
            return Err(TabPanelError::IndexOutOfRange {
                group: self.group_id,
                index,
                len: self.len,
            });
        }
        self.active = Some(index);
        Ok(())
    }
}
