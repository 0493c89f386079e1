// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Message file path resolution.
//!
//! Pure path construction: nothing here touches the file system except
//! reading the current directory.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Extension of uORB message definition files.
pub const MSG_EXTENSION: &str = "msg";

/// Make `path` absolute against the current directory and drop `.`/`..`
/// components lexically. Symlinks are not resolved.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}

/// Lexical normalization. `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// `<folder>/<name>.msg`.
///
/// `name` is appended verbatim; a name carrying its own dots keeps them.
pub fn resolve_msg_file(folder: &Path, name: &str) -> PathBuf {
    folder.join(format!("{name}.{MSG_EXTENSION}"))
}
