//! Owned field storage for one logical record.

/// One logical record: an ordered set of `(name, value)` fields.
///
/// Fields keep insertion order internally and duplicate names overwrite
/// in place. Serialization order is decided by [`Record::sorted_fields`],
/// which sorts by name, so JSON output stays deterministic no matter
/// which container backs the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing the value if the name is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Fields sorted by name ascending, the order used for JSON output.
    pub fn sorted_fields(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut record = Record::new();
        record.insert("title", "The Spirit");
        assert_eq!(record.get("title"), Some("The Spirit"));
        assert_eq!(record.get("price"), None);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_duplicate_name_overwrites_in_place() {
        let mut record = Record::new();
        record.insert("title", "first");
        record.insert("title", "second");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("title"), Some("second"));
    }

    #[test]
    fn test_sorted_fields_orders_by_name() {
        let mut record = Record::new();
        record.insert("issue", "7");
        record.insert("colors", "True");
        record.insert("inks", "Smith");
        let names: Vec<&str> = record.sorted_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["colors", "inks", "issue"]);
    }

    #[test]
    fn test_empty_record() {
        assert!(Record::new().is_empty());
    }
}
