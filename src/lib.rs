//! # portfolio-client
//!
//! WASM client script for the static portfolio site. Applies the persisted
//! light/dark theme, fades sections in as they scroll into view, marks the
//! navigation link for the current page, and acknowledges the recommendation
//! form locally.
//!
//! Browser glue lives behind the `hydrate` feature in `app` and `dom`;
//! the theme state machine, configuration and the collaborators' decision
//! logic compile natively so they can be unit tested without a browser.

pub mod config;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod dom;
