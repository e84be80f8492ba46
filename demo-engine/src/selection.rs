use crate::catalog::{self, OperationDefinition};

/// Session-lifetime selection: the id of the currently active operation.
///
/// `select` is a plain overwrite with no validation; consumers resolve the
/// id through the total catalog lookup, so an unresolvable id silently
/// renders the default operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    active_id: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            active_id: catalog::default_operation().id.to_string(),
        }
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn select(&mut self, id: &str) {
        self.active_id = id.to_string();
    }

    /// The resolved active operation (falls back to the catalog default).
    pub fn active_operation(&self) -> &'static OperationDefinition {
        catalog::lookup(&self.active_id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id == id
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_catalog_first_entry() {
        let selection = SelectionState::new();
        assert_eq!(selection.active_id(), catalog::all()[0].id);
        assert!(selection.is_active("read_csv"));
    }

    #[test]
    fn test_select_overwrites() {
        let mut selection = SelectionState::new();
        selection.select("softmax");
        assert_eq!(selection.active_id(), "softmax");
        assert_eq!(selection.active_operation().id, "softmax");
        assert!(!selection.is_active("read_csv"));
    }

    #[test]
    fn test_unresolvable_id_renders_default() {
        let mut selection = SelectionState::new();
        selection.select("not_in_catalog");
        assert_eq!(selection.active_id(), "not_in_catalog");
        assert_eq!(selection.active_operation().id, catalog::default_operation().id);
    }
}
