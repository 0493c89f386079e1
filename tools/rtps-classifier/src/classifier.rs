// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Send/receive/ignore classification of RTPS topics.

use crate::category::Category;
use crate::config::{ConfigError, MsgIdFile};
use crate::paths;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Message name to RTPS topic id.
pub type MsgIdMap = BTreeMap<String, u32>;

/// What to do when a name repeats inside one list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Later entry replaces the earlier one.
    #[default]
    Overwrite,
    /// Fail with [`ConfigError::DuplicateMessage`].
    Reject,
}

/// Messages and message files for each category.
///
/// Built once from a message-id file; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Classifier {
    msg_folder: PathBuf,
    msgs_to_send: MsgIdMap,
    msgs_to_receive: MsgIdMap,
    msgs_to_ignore: MsgIdMap,
    msg_files_send: Vec<PathBuf>,
    msg_files_receive: Vec<PathBuf>,
    msg_files_ignore: Vec<PathBuf>,
}

impl Classifier {
    /// Classify with last-write-wins on duplicate names.
    pub fn new(msg_id_file: &MsgIdFile, msg_folder: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::with_policy(msg_id_file, msg_folder, DuplicatePolicy::Overwrite)
    }

    pub fn with_policy(
        msg_id_file: &MsgIdFile,
        msg_folder: impl AsRef<Path>,
        policy: DuplicatePolicy,
    ) -> Result<Self, ConfigError> {
        let msg_folder = paths::absolutize(msg_folder.as_ref())?;

        let msgs_to_send = build_map(msg_id_file, Category::Send, policy)?;
        let msgs_to_receive = build_map(msg_id_file, Category::Receive, policy)?;
        let msgs_to_ignore = build_map(msg_id_file, Category::Ignore, policy)?;

        let resolve = |map: &MsgIdMap| -> Vec<PathBuf> {
            map.keys()
                .map(|name| paths::resolve_msg_file(&msg_folder, name))
                .collect()
        };
        let msg_files_send = resolve(&msgs_to_send);
        let msg_files_receive = resolve(&msgs_to_receive);
        let msg_files_ignore = resolve(&msgs_to_ignore);

        debug!(
            send = msgs_to_send.len(),
            receive = msgs_to_receive.len(),
            ignore = msgs_to_ignore.len(),
            folder = %msg_folder.display(),
            "classified RTPS messages"
        );

        Ok(Self {
            msg_folder,
            msgs_to_send,
            msgs_to_receive,
            msgs_to_ignore,
            msg_files_send,
            msg_files_receive,
            msg_files_ignore,
        })
    }

    /// Load `ids_file` and classify against `msg_folder`.
    pub fn from_file(
        ids_file: impl AsRef<Path>,
        msg_folder: impl AsRef<Path>,
        policy: DuplicatePolicy,
    ) -> Result<Self, ConfigError> {
        let ids_file = ids_file.as_ref();
        debug!("loading RTPS message ids from {}", ids_file.display());
        let msg_id_file = MsgIdFile::from_file(ids_file)?;
        Self::with_policy(&msg_id_file, msg_folder, policy)
    }

    /// Absolute folder the message files resolve against.
    pub fn msg_folder(&self) -> &Path {
        &self.msg_folder
    }

    pub fn msgs_to_send(&self) -> &MsgIdMap {
        &self.msgs_to_send
    }

    pub fn msgs_to_receive(&self) -> &MsgIdMap {
        &self.msgs_to_receive
    }

    pub fn msgs_to_ignore(&self) -> &MsgIdMap {
        &self.msgs_to_ignore
    }

    pub fn msg_files_send(&self) -> &[PathBuf] {
        &self.msg_files_send
    }

    pub fn msg_files_receive(&self) -> &[PathBuf] {
        &self.msg_files_receive
    }

    pub fn msg_files_ignore(&self) -> &[PathBuf] {
        &self.msg_files_ignore
    }

    pub fn msgs(&self, category: Category) -> &MsgIdMap {
        match category {
            Category::Send => &self.msgs_to_send,
            Category::Receive => &self.msgs_to_receive,
            Category::Ignore => &self.msgs_to_ignore,
        }
    }

    /// Files for `category`, in the key order of [`Classifier::msgs`].
    pub fn msg_files(&self, category: Category) -> &[PathBuf] {
        match category {
            Category::Send => &self.msg_files_send,
            Category::Receive => &self.msg_files_receive,
            Category::Ignore => &self.msg_files_ignore,
        }
    }

    /// Every category listing `msg`. A name may sit in several.
    pub fn categories_of(&self, msg: &str) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&category| self.msgs(category).contains_key(msg))
            .collect()
    }
}

fn build_map(
    msg_id_file: &MsgIdFile,
    category: Category,
    policy: DuplicatePolicy,
) -> Result<MsgIdMap, ConfigError> {
    let mut map = MsgIdMap::new();
    for entry in msg_id_file.entries(category)? {
        if map.contains_key(&entry.msg) {
            if policy == DuplicatePolicy::Reject {
                return Err(ConfigError::DuplicateMessage {
                    list: category.list_key(),
                    msg: entry.msg,
                });
            }
            warn!(
                "`{}` listed twice in `{}`, keeping id {}",
                entry.msg,
                category.list_key(),
                entry.id
            );
        }
        map.insert(entry.msg, entry.id);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MsgIdEntry;

    fn sample() -> MsgIdFile {
        MsgIdFile::new(
            vec![MsgIdEntry::new("A", 1)],
            vec![MsgIdEntry::new("B", 2)],
            vec![MsgIdEntry::new("C", 3)],
        )
    }

    #[test]
    fn test_end_to_end_sample() {
        let classifier = Classifier::new(&sample(), "/tmp/msg").unwrap();

        assert_eq!(
            classifier.msgs_to_send(),
            &MsgIdMap::from([("A".to_string(), 1)])
        );
        assert_eq!(
            classifier.msg_files_send(),
            [PathBuf::from("/tmp/msg/A.msg")]
        );
        assert_eq!(classifier.msgs_to_receive().get("B"), Some(&2));
        assert_eq!(classifier.msgs_to_ignore().get("C"), Some(&3));
        assert_eq!(classifier.msg_folder(), Path::new("/tmp/msg"));
    }

    #[test]
    fn test_counts_match_lists() {
        let send: Vec<_> = (0..5).map(|i| MsgIdEntry::new(format!("s{i}"), i)).collect();
        let receive: Vec<_> = (0..3).map(|i| MsgIdEntry::new(format!("r{i}"), i)).collect();
        let file = MsgIdFile::new(send, receive, vec![]);

        let classifier = Classifier::new(&file, "/msg").unwrap();
        assert_eq!(classifier.msgs_to_send().len(), 5);
        assert_eq!(classifier.msgs_to_receive().len(), 3);
        assert!(classifier.msgs_to_ignore().is_empty());
        assert!(classifier.msg_files_ignore().is_empty());
    }

    #[test]
    fn test_files_follow_keys() {
        let file = MsgIdFile::new(
            vec![
                MsgIdEntry::new("vehicle_status", 7),
                MsgIdEntry::new("actuator_outputs", 2),
            ],
            vec![],
            vec![],
        );
        let classifier = Classifier::new(&file, "/px4/msg").unwrap();

        assert_eq!(
            classifier.msg_files_send().len(),
            classifier.msgs_to_send().len()
        );
        for (name, path) in classifier
            .msgs_to_send()
            .keys()
            .zip(classifier.msg_files_send())
        {
            assert_eq!(*path, Path::new("/px4/msg").join(format!("{name}.msg")));
        }
    }

    #[test]
    fn test_duplicate_last_write_wins() {
        let file = MsgIdFile::new(
            vec![
                MsgIdEntry::new("A", 1),
                MsgIdEntry::new("A", 9),
                MsgIdEntry::new("A", 4),
            ],
            vec![],
            vec![],
        );
        let classifier = Classifier::new(&file, "/msg").unwrap();
        assert_eq!(classifier.msgs_to_send().len(), 1);
        assert_eq!(classifier.msgs_to_send()["A"], 4);
        assert_eq!(classifier.msg_files_send().len(), 1);
    }

    #[test]
    fn test_duplicate_rejected_in_strict_mode() {
        let file = MsgIdFile::new(
            vec![],
            vec![MsgIdEntry::new("B", 1), MsgIdEntry::new("B", 2)],
            vec![],
        );
        let err = Classifier::with_policy(&file, "/msg", DuplicatePolicy::Reject).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateMessage { list: "receive", ref msg } if msg == "B"
        ));
    }

    #[test]
    fn test_strict_mode_allows_cross_category_names() {
        let file = MsgIdFile::new(
            vec![MsgIdEntry::new("X", 1)],
            vec![MsgIdEntry::new("X", 2)],
            vec![],
        );
        let classifier = Classifier::with_policy(&file, "/msg", DuplicatePolicy::Reject).unwrap();
        assert_eq!(classifier.msgs_to_send()["X"], 1);
        assert_eq!(classifier.msgs_to_receive()["X"], 2);
        assert_eq!(
            classifier.categories_of("X"),
            vec![Category::Send, Category::Receive]
        );
        assert!(classifier.categories_of("Y").is_empty());
    }

    #[test]
    fn test_missing_list_fails_whole_construction() {
        let yaml = "rtps:\n  send:\n    - msg: A\n      id: 1\n  receive: []\n";
        let file = MsgIdFile::from_yaml(yaml).unwrap();
        let result = Classifier::new(&file, "/msg");
        assert!(matches!(
            result,
            Err(ConfigError::MissingList("unclassified"))
        ));
    }

    #[test]
    fn test_relative_folder_made_absolute() {
        let classifier = Classifier::new(&sample(), "msg").unwrap();
        assert!(classifier.msg_folder().is_absolute());
        assert!(classifier.msg_files_send()[0].ends_with("msg/A.msg"));
    }

    #[test]
    fn test_generic_accessors() {
        let classifier = Classifier::new(&sample(), "/tmp/msg").unwrap();
        for category in Category::ALL {
            assert_eq!(classifier.msgs(category).len(), 1);
            assert_eq!(classifier.msg_files(category).len(), 1);
        }
        assert_eq!(
            classifier.msg_files(Category::Ignore),
            classifier.msg_files_ignore()
        );
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let ids = dir.path().join("ids.yaml");
        std::fs::write(
            &ids,
            "rtps:\n  send: []\n  receive:\n    - msg: B\n      id: 2\n  unclassified: []\n",
        )
        .unwrap();

        let classifier =
            Classifier::from_file(&ids, dir.path(), DuplicatePolicy::Overwrite).unwrap();
        assert_eq!(
            classifier.msg_files_receive(),
            [paths::normalize(dir.path()).join("B.msg")]
        );
    }
}
