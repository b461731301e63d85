use super::error::UploadError;
use super::staging::{FileKey, StagingList};
use super::thumbnail::Preview;
use leptos::prelude::*;
use std::collections::HashMap;

/// State of the upload page. Created when the page mounts and cleared
/// after a successful submission.
#[derive(Debug, Clone)]
pub struct UploadState<F> {
    pub staged: StagingList<F>,
    pub previews: HashMap<FileKey, Preview>,
    pub is_uploading: bool,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            staged: StagingList::new(),
            previews: HashMap::new(),
            is_uploading: false,
        }
    }
}

impl<F: Clone> UploadState<F> {
    /// Stages every candidate not already present; returns the newly staged
    /// ones so the caller can start reading their previews.
    pub fn add_files<I>(&mut self, candidates: I) -> Vec<(FileKey, F)>
    where
        I: IntoIterator<Item = (FileKey, F)>,
    {
        candidates
            .into_iter()
            .filter(|(key, file)| self.staged.add(key.clone(), file.clone()))
            .collect()
    }

    pub fn remove_file(&mut self, key: &FileKey) -> bool {
        self.previews.remove(key);
        self.staged.remove(key).is_some()
    }

    /// A preview that arrives after its file was removed is dropped
    pub fn set_preview(&mut self, key: FileKey, preview: Preview) -> bool {
        if !self.staged.contains(&key) {
            return false;
        }
        self.previews.insert(key, preview);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Staged files that already have a preview, in staging order
    pub fn thumbnails(&self) -> Vec<(FileKey, Preview)> {
        self.staged
            .keys()
            .filter_map(|key| self.previews.get(key).map(|p| (key.clone(), p.clone())))
            .collect()
    }

    /// Validates and marks the upload as running; returns the files to send
    pub fn begin_submit(&mut self) -> Result<Vec<F>, UploadError> {
        if self.is_uploading {
            return Err(UploadError::InProgress);
        }
        if self.staged.is_empty() {
            return Err(UploadError::EmptySelection);
        }
        self.is_uploading = true;
        Ok(self.staged.iter().map(|e| e.file.clone()).collect())
    }

    /// On failure the staged list stays as it was so the user can retry
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.is_uploading = false;
        if succeeded {
            self.staged.clear();
            self.previews.clear();
        }
    }
}

// web_sys::File is not Send, so the state lives in local reactive storage
pub fn create_state() -> RwSignal<UploadState<web_sys::File>, LocalStorage> {
    RwSignal::new_local(UploadState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> FileKey {
        FileKey::new(name, 10, 1)
    }

    fn staged(names: &[&str]) -> UploadState<String> {
        let mut state = UploadState::default();
        state.add_files(names.iter().map(|n| (key(n), n.to_string())));
        state
    }

    #[test]
    fn test_add_returns_only_new_files() {
        let mut state = staged(&["a.png"]);
        let added = state.add_files(vec![
            (key("a.png"), "a.png".to_string()),
            (key("b.png"), "b.png".to_string()),
            (key("b.png"), "b.png".to_string()),
        ]);
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].0, key("b.png"));
        assert_eq!(state.staged.len(), 2);
    }

    #[test]
    fn test_adding_duplicate_keeps_count() {
        let mut state = staged(&["a.png", "b.png"]);
        state.add_files(vec![(key("a.png"), "a.png".to_string())]);
        assert_eq!(state.staged.len(), 2);
    }

    #[test]
    fn test_remove_last_file_empties_list() {
        let mut state = staged(&["a.png", "b.png"]);
        assert!(state.remove_file(&key("a.png")));
        assert_eq!(state.staged.len(), 1);
        assert!(!state.is_empty());
        assert!(state.remove_file(&key("b.png")));
        assert!(state.is_empty());
        assert!(!state.remove_file(&key("b.png")));
    }

    #[test]
    fn test_late_preview_for_removed_file_is_dropped() {
        let mut state = staged(&["a.png"]);
        state.remove_file(&key("a.png"));
        assert!(!state.set_preview(key("a.png"), Preview::Unavailable));
        assert!(state.thumbnails().is_empty());
    }

    #[test]
    fn test_thumbnails_follow_staging_order() {
        let mut state = staged(&["a.png", "b.png", "c.png"]);
        state.set_preview(key("c.png"), Preview::Image("data:c".into()));
        state.set_preview(key("a.png"), Preview::Image("data:a".into()));
        let names: Vec<String> = state.thumbnails().into_iter().map(|(k, _)| k.name).collect();
        assert_eq!(names, vec!["a.png", "c.png"]);
    }

    #[test]
    fn test_submit_with_nothing_staged_is_rejected() {
        let mut state: UploadState<String> = UploadState::default();
        assert_eq!(state.begin_submit(), Err(UploadError::EmptySelection));
        assert!(!state.is_uploading);
    }

    #[test]
    fn test_failed_submit_keeps_files() {
        let mut state = staged(&["a.png", "b.png"]);
        let files = state.begin_submit().unwrap();
        assert_eq!(files, vec!["a.png".to_string(), "b.png".to_string()]);
        assert_eq!(state.begin_submit(), Err(UploadError::InProgress));
        state.finish_submit(false);
        assert!(!state.is_uploading);
        assert_eq!(state.staged.len(), 2);
    }

    #[test]
    fn test_successful_submit_clears_state() {
        let mut state = staged(&["a.png"]);
        state.set_preview(key("a.png"), Preview::Unavailable);
        state.begin_submit().unwrap();
        state.finish_submit(true);
        assert!(state.is_empty());
        assert!(state.previews.is_empty());
    }
}
