//! Navigation link matching.
//!
//! A link is "current" when the last path segment of its `href` equals the
//! last path segment of the page's own path. Only file names are compared,
//! so `about.html`, `./about.html` and `/site/about.html` all match.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// The last `/`-separated segment of `path`. Empty for paths ending in `/`.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

pub fn is_current_link(page_path: &str, href: &str) -> bool {
    file_name(page_path) == file_name(href)
}
