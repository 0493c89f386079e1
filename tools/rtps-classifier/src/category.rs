// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The three-way partition applied to RTPS topics.

use std::fmt;

/// How the bridge treats a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Published from the flight stack to the RTPS side.
    Send,
    /// Subscribed from the RTPS side into the flight stack.
    Receive,
    /// Known to the id file but not bridged.
    Ignore,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Category; 3] = [Category::Send, Category::Receive, Category::Ignore];

    /// Name of the list holding this category in the message-id file.
    pub fn list_key(self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Receive => "receive",
            Self::Ignore => "unclassified",
        }
    }

    /// Label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Receive => "receive",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
