// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Report output for the CLI.

use crate::category::Category;
use crate::classifier::Classifier;
use serde_json::{Map, Value};

/// Whether a report lists topic names or their message files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Topics,
    Files,
}

impl ReportKind {
    fn label(self) -> &'static str {
        match self {
            Self::Topics => "topics",
            Self::Files => "files",
        }
    }
}

fn items(classifier: &Classifier, category: Category, kind: ReportKind) -> Vec<String> {
    match kind {
        ReportKind::Topics => classifier.msgs(category).keys().cloned().collect(),
        ReportKind::Files => classifier
            .msg_files(category)
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
    }
}

/// `"<category> topics: a, b"` or `"<category> files: /x/a.msg, /x/b.msg"`.
pub fn render_line(classifier: &Classifier, category: Category, kind: ReportKind) -> String {
    format!(
        "{category} {}: {}",
        kind.label(),
        items(classifier, category, kind).join(", ")
    )
}

/// JSON object keyed by category label, one array per requested category.
pub fn render_json(classifier: &Classifier, categories: &[Category], kind: ReportKind) -> Value {
    let mut object = Map::new();
    for &category in categories {
        let values = items(classifier, category, kind)
            .into_iter()
            .map(Value::String)
            .collect();
        object.insert(category.label().to_string(), Value::Array(values));
    }
    Value::Object(object)
}
