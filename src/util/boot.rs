//! Page-load scheduling rules.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

/// Whether the ready pass can run immediately for `document.readyState`.
///
/// Only `"loading"` means `DOMContentLoaded` is still to come; once the
/// document is `"interactive"` or `"complete"` the event has already fired.
pub fn ready_now(ready_state: &str) -> bool {
    ready_state != "loading"
}
