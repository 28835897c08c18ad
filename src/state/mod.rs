//! Browser-independent state for the site script.
//!
//! SYSTEM CONTEXT
//! ==============
//! These types carry the decisions (which theme, which section to reveal,
//! whether a submission is acceptable) so the `dom` layer only moves values
//! in and out of the page.

pub mod recommendation;
pub mod reveal;
pub mod theme;
