// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! RTPS message-id file.
//!
//! The file maps every uORB message that crosses the RTPS bridge to a numeric
//! topic id, grouped by direction:
//!
//! ```yaml
//! rtps:
//!   send:
//!     - msg: sensor_combined
//!       id: 1
//!   receive:
//!     - msg: vehicle_command
//!       id: 2
//!   unclassified:
//!     - msg: debug_value
//!       id: 3
//! ```
//!
//! Unknown keys are ignored. The three lists are required.

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("missing top-level `{0}` section")]
    MissingSection(&'static str),

    #[error("missing required `{0}` list")]
    MissingList(&'static str),

    #[error("`{list}[{index}]` has no `{field}` field")]
    MissingField {
        list: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("message `{msg}` listed more than once in `{list}`")]
    DuplicateMessage { list: &'static str, msg: String },
}

/// One message/topic-id pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgIdEntry {
    pub msg: String,
    pub id: u32,
}

impl MsgIdEntry {
    pub fn new(msg: impl Into<String>, id: u32) -> Self {
        Self {
            msg: msg.into(),
            id,
        }
    }
}

/// List record as written in the file. Both fields are checked when the
/// list is read so the error can name the offending entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct EntryRecord {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    id: Option<u32>,
}

impl From<MsgIdEntry> for EntryRecord {
    fn from(entry: MsgIdEntry) -> Self {
        Self {
            msg: Some(entry.msg),
            id: Some(entry.id),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RtpsSection {
    #[serde(default)]
    send: Option<Vec<EntryRecord>>,
    #[serde(default)]
    receive: Option<Vec<EntryRecord>>,
    #[serde(default)]
    unclassified: Option<Vec<EntryRecord>>,
}

/// Parsed message-id file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MsgIdFile {
    #[serde(default)]
    rtps: Option<RtpsSection>,
}

impl MsgIdFile {
    /// Build a document from already-known lists.
    pub fn new(send: Vec<MsgIdEntry>, receive: Vec<MsgIdEntry>, ignore: Vec<MsgIdEntry>) -> Self {
        let records = |entries: Vec<MsgIdEntry>| -> Option<Vec<EntryRecord>> {
            Some(entries.into_iter().map(Into::into).collect())
        };
        Self {
            rtps: Some(RtpsSection {
                send: records(send),
                receive: records(receive),
                unclassified: records(ignore),
            }),
        }
    }

    /// Parse a document from YAML text.
    ///
    /// Only syntax and field types are checked here; missing lists surface
    /// from [`MsgIdFile::entries`].
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a document from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Entries of one category list, in file order.
    pub fn entries(&self, category: Category) -> Result<Vec<MsgIdEntry>, ConfigError> {
        let section = self
            .rtps
            .as_ref()
            .ok_or(ConfigError::MissingSection("rtps"))?;
        let list = category.list_key();
        let records = match category {
            Category::Send => section.send.as_ref(),
            Category::Receive => section.receive.as_ref(),
            Category::Ignore => section.unclassified.as_ref(),
        }
        .ok_or(ConfigError::MissingList(list))?;

        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let msg = record.msg.clone().ok_or(ConfigError::MissingField {
                    list,
                    index,
                    field: "msg",
                })?;
                let id = record.id.ok_or(ConfigError::MissingField {
                    list,
                    index,
                    field: "id",
                })?;
                Ok(MsgIdEntry { msg, id })
            })
            .collect()
    }
}
