//! Per-entity field tables.
//!
//! Each entity exposes a fixed set of filterable fields. Criteria use
//! camelCase keys locally; the API expects upper-snake-case wire names.
//! The mapping is immutable configuration passed into the compiler, never
//! module-level mutable state.

/// Immutable 1:1 mapping from local criteria keys to wire field names.
#[derive(Debug, Clone, Copy)]
pub struct FieldTable {
    entries: &'static [(&'static str, &'static str)],
}

impl FieldTable {
    /// Create a table from `(local key, wire name)` pairs.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Resolve a local key to its wire name.
    ///
    /// Unknown keys pass through unchanged: the API carries catch-all
    /// fields for forward compatibility and rejecting them here would
    /// break the wire contract.
    pub fn wire_name<'a>(&self, key: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(local, _)| *local == key)
            .map(|(_, wire)| *wire)
            .unwrap_or(key)
    }

    /// Check whether a key is in the entity's declared field set.
    ///
    /// For callers that want to validate criteria keys up front instead of
    /// relying on pass-through.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(local, _)| *local == key)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: FieldTable = FieldTable::new(&[
        ("code", "CODE"),
        ("dateCreated", "DATE_CREATED"),
        ("status", "STATUS"),
    ]);

    #[test]
    fn test_known_keys_map_to_wire_names() {
        assert_eq!(TABLE.wire_name("code"), "CODE");
        assert_eq!(TABLE.wire_name("dateCreated"), "DATE_CREATED");
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        assert_eq!(TABLE.wire_name("CUSTOM_1"), "CUSTOM_1");
        assert!(!TABLE.contains("CUSTOM_1"));
    }

    #[test]
    fn test_contains() {
        assert!(TABLE.contains("status"));
        assert_eq!(TABLE.len(), 3);
        assert!(!TABLE.is_empty());
    }
}
