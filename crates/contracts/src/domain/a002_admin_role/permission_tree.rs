//! Check state of the role editor's permission tree.
//!
//! Only leaf ids are stored in a role's `permissionIds`; parent check boxes
//! are derived from their leaves.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Vec<PermissionNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
    Indeterminate,
}

impl PermissionNode {
    pub fn leaf(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Ids of every leaf below (or equal to) this node.
    pub fn leaf_ids(&self) -> Vec<String> {
        if self.is_leaf() {
            return vec![self.id.clone()];
        }
        self.children.iter().flat_map(|c| c.leaf_ids()).collect()
    }

    pub fn check_state(&self, selected: &BTreeSet<String>) -> CheckState {
        let leaves = self.leaf_ids();
        let hits = leaves.iter().filter(|id| selected.contains(*id)).count();
        if hits == 0 {
            CheckState::Unchecked
        } else if hits == leaves.len() {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }

    /// Clicking a node: a fully checked node clears all its leaves, anything
    /// else (unchecked or indeterminate) selects all of them.
    pub fn toggle(&self, selected: &BTreeSet<String>) -> BTreeSet<String> {
        let mut next = selected.clone();
        let leaves = self.leaf_ids();
        if self.check_state(selected) == CheckState::Checked {
            for id in &leaves {
                next.remove(id);
            }
        } else {
            next.extend(leaves);
        }
        next
    }
}

/// Finds a node anywhere in a forest.
pub fn find_node<'a>(forest: &'a [PermissionNode], id: &str) -> Option<&'a PermissionNode> {
    forest.iter().find_map(|node| {
        if node.id == id {
            Some(node)
        } else {
            find_node(&node.children, id)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> PermissionNode {
        PermissionNode {
            id: "content".into(),
            name: "Content".into(),
            children: vec![
                PermissionNode::leaf("content.view", "View"),
                PermissionNode {
                    id: "content.moderate".into(),
                    name: "Moderate".into(),
                    children: vec![
                        PermissionNode::leaf("content.approve", "Approve"),
                        PermissionNode::leaf("content.reject", "Reject"),
                    ],
                },
            ],
        }
    }

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_check_state() {
        let root = tree();
        assert_eq!(root.check_state(&set(&[])), CheckState::Unchecked);
        assert_eq!(
            root.check_state(&set(&["content.approve"])),
            CheckState::Indeterminate
        );
        assert_eq!(
            root.check_state(&set(&["content.view", "content.approve", "content.reject"])),
            CheckState::Checked
        );
        let moderate = find_node(std::slice::from_ref(&root), "content.moderate").unwrap();
        assert_eq!(
            moderate.check_state(&set(&["content.approve", "content.reject"])),
            CheckState::Checked
        );
    }

    #[test]
    fn test_toggle_indeterminate_selects_all() {
        let root = tree();
        let next = root.toggle(&set(&["content.approve"]));
        assert_eq!(
            next,
            set(&["content.view", "content.approve", "content.reject"])
        );
        assert!(root.toggle(&next).is_empty());
    }

    #[test]
    fn test_toggle_keeps_unrelated_ids() {
        let root = tree();
        let next = root.toggle(&set(&["users.view"]));
        assert!(next.contains("users.view"));
        assert_eq!(next.len(), 4);
    }
}
