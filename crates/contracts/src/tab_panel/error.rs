use super::state::GroupId;

/// Ошибка модели табов
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabPanelError {
    /// The group has no items, so nothing can be selected.
    EmptyGroup(GroupId),
    IndexOutOfRange {
        group: GroupId,
        index: usize,
        len: usize,
    },
    /// No group with this id is registered on the page.
    UnknownGroup(GroupId),
    InvalidConfig(String),
}

impl TabPanelError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

impl std::fmt::Display for TabPanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGroup(group) => write!(f, "[EMPTY_GROUP] {} has no tabs", group),
            Self::IndexOutOfRange { group, index, len } => write!(
                f,
                "[INDEX_OUT_OF_RANGE] tab {} requested in {} with {} tabs",
                index, group, len
            ),
            Self::UnknownGroup(group) => write!(f, "[UNKNOWN_GROUP] {} is not registered", group),
            Self::InvalidConfig(message) => write!(f, "[INVALID_CONFIG] {}", message),
        }
    }
}

impl std::error::Error for TabPanelError {}
