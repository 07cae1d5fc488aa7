//! Parent-owned editing target
//!
//! A list screen decides which item (if any) its editor is working on; the
//! editor never reaches back into the list.

use crate::types::Identity;

/// What an open editor is working on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditingTarget {
    Create,
    Edit(Identity),
}

impl EditingTarget {
    /// Identity to bind the editor controller to.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// Which editor, if any, is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSlot {
    target: Option<EditingTarget>,
}

impl EditorSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the editor on `target`, replacing whatever was open.
    ///
    /// Returns the previous target.
    pub fn open(&mut self, target: EditingTarget) -> Option<EditingTarget> {
        self.target.replace(target)
    }

    pub fn close(&mut self) -> Option<EditingTarget> {
        self.target.take()
    }

    #[must_use]
    pub fn target(&self) -> Option<&EditingTarget> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_replaces_previous_target() {
        let mut slot = EditorSlot::new();
        assert!(!slot.is_open());

        assert_eq!(slot.open(EditingTarget::Create), None);
        let previous = slot.open(EditingTarget::Edit(Identity::new("c-2")));
        assert_eq!(previous, Some(EditingTarget::Create));
        assert_eq!(
            slot.target().and_then(EditingTarget::identity),
            Some(&Identity::new("c-2"))
        );
    }

    #[test]
    fn close_empties_slot() {
        let mut slot = EditorSlot::new();
        slot.open(EditingTarget::Create);
        assert_eq!(slot.close(), Some(EditingTarget::Create));
        assert!(!slot.is_open());
        assert_eq!(slot.close(), None);
    }
}
