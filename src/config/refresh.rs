//! Re-derive file paths from their directories.
//!
//! Useful after pointing a directory at a local mirror: file keys captured
//! the old directory when the config was built and keep it until refreshed.

use super::{ConfigKey, Group, SynphotConfig, join_path};

impl SynphotConfig {
    /// Recompute every file key as `join(current parent dir, filename)`.
    ///
    /// Returns the keys whose value changed. Running it twice in a row
    /// returns an empty list the second time.
    pub fn set_files(&mut self) -> Vec<ConfigKey> {
        Group::ALL
            .iter()
            .flat_map(|&group| self.refresh_group(group))
            .collect()
    }

    /// Recompute the file keys of a single group.
    pub fn refresh_group(&mut self, group: Group) -> Vec<ConfigKey> {
        let dir = self.get(group.directory()).to_string();
        let mut changed = Vec::new();

        for key in group.keys() {
            let Some((_, filename)) = key.derivation() else {
                continue;
            };
            let path = join_path(&dir, filename);
            if self.get(key) != path {
                self.set(key, path);
                changed.push(key);
            }
        }

        if !changed.is_empty() {
            crate::debug!("refresh"; "{}: {} file(s) now under {}", group, changed.len(), dir);
        }
        changed
    }
}
