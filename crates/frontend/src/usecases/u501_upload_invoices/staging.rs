//! Files picked by the user and not yet submitted.

/// Identity of a staged file. Browsers expose no stable file id, so the
/// (name, size, lastModified) triple stands in for one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileKey {
    pub name: String,
    pub size: u64,
    pub last_modified: i64,
}

impl FileKey {
    pub fn new(name: impl Into<String>, size: u64, last_modified: i64) -> Self {
        Self {
            name: name.into(),
            size,
            last_modified,
        }
    }

    pub fn of(file: &web_sys::File) -> Self {
        Self::new(file.name(), file.size() as u64, file.last_modified() as i64)
    }
}

#[derive(Debug, Clone)]
pub struct StagedFile<F> {
    pub key: FileKey,
    pub file: F,
}

/// Ordered list of staged files, unique by [`FileKey`]
#[derive(Debug, Clone)]
pub struct StagingList<F> {
    entries: Vec<StagedFile<F>>,
}

impl<F> Default for StagingList<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F> StagingList<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &FileKey) -> bool {
        self.entries.iter().any(|e| &e.key == key)
    }

    /// Appends unless an entry with the same key is already staged
    pub fn add(&mut self, key: FileKey, file: F) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.entries.push(StagedFile { key, file });
        true
    }

    pub fn remove(&mut self, key: &FileKey) -> Option<F> {
        let pos = self.entries.iter().position(|e| &e.key == key)?;
        Some(self.entries.remove(pos).file)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &StagedFile<F>> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &FileKey> {
        self.entries.iter().map(|e| &e.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> FileKey {
        FileKey::new(name, 1024, 1_700_000_000_000)
    }

    #[test]
    fn test_add_skips_duplicates() {
        let mut list = StagingList::new();
        assert!(list.add(key("a.png"), "first"));
        assert!(!list.add(key("a.png"), "again"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().map(|e| e.file), Some("first"));
    }

    #[test]
    fn test_identity_uses_all_three_fields() {
        let mut list = StagingList::new();
        list.add(FileKey::new("a.png", 1, 1), ());
        assert!(list.add(FileKey::new("a.png", 2, 1), ()));
        assert!(list.add(FileKey::new("a.png", 1, 2), ()));
        assert!(list.add(FileKey::new("b.png", 1, 1), ()));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_remove_by_key() {
        let mut list = StagingList::new();
        list.add(key("a.png"), 1);
        list.add(key("b.png"), 2);
        assert_eq!(list.remove(&key("a.png")), Some(1));
        assert_eq!(list.len(), 1);
        assert_eq!(list.remove(&key("a.png")), None);
        assert_eq!(list.keys().cloned().collect::<Vec<_>>(), vec![key("b.png")]);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut list = StagingList::new();
        for name in ["c", "a", "b"] {
            list.add(key(name), ());
        }
        let names: Vec<&str> = list.keys().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
