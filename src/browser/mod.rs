// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser API
//!
//! Stateful browsing on top of the HTTP session: history, parsed pages and
//! form submission.

mod browser;
mod config;
mod debug;
mod merge;
mod resolve;

pub use browser::{Browser, Snapshot};
pub use config::{BrowserConfig, DEFAULT_DEBUG_NUM_CHARS};
pub use debug::DebugReport;
pub use merge::merge;
pub use resolve::resolve_form_url;
