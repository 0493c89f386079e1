// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! RTPS message classifier
//!
//! Splits the uORB messages listed in an RTPS message-id file into the
//! topics the bridge sends, the topics it receives, and the ones it ignores,
//! and resolves each to its `.msg` definition file.
//!
//! # Quick Start
//!
//! ```bash
//! # Topics sent over RTPS
//! rtps-classifier --send
//!
//! # Message files for received topics, from a custom msg dir
//! rtps-classifier --receive --path -m px4/msg
//! ```
//!
//! ```no_run
//! use rtps_classifier::{Classifier, DuplicatePolicy};
//!
//! let classifier = Classifier::from_file(
//!     "msg/tools/uorb_rtps_message_ids.yaml",
//!     "msg",
//!     DuplicatePolicy::Overwrite,
//! )?;
//! for path in classifier.msg_files_send() {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), rtps_classifier::ConfigError>(())
//! ```

pub mod category;
pub mod classifier;
pub mod config;
pub mod paths;
pub mod report;

pub use category::Category;
pub use classifier::{Classifier, DuplicatePolicy, MsgIdMap};
pub use config::{ConfigError, MsgIdEntry, MsgIdFile};
pub use report::ReportKind;
