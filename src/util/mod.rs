//! Utility helpers shared across the site script.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate persistence and page-matching rules from the
//! browser bindings so they can be exercised by native unit tests.

pub mod boot;
pub mod dark_mode;
pub mod nav;
pub mod storage;
