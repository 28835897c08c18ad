use super::*;

#[test]
fn file_name_takes_last_segment() {
    assert_eq!(file_name("/site/about.html"), "about.html");
    assert_eq!(file_name("about.html"), "about.html");
    assert_eq!(file_name("./projects.html"), "projects.html");
}

#[test]
fn file_name_of_directory_is_empty() {
    assert_eq!(file_name("/"), "");
    assert_eq!(file_name("/site/"), "");
    assert_eq!(file_name(""), "");
}

#[test]
fn matching_file_names_are_current() {
    assert!(is_current_link("/portfolio/about.html", "about.html"));
    assert!(is_current_link("/about.html", "./about.html"));
}

#[test]
fn different_file_names_are_not_current() {
    assert!(!is_current_link("/about.html", "index.html"));
    assert!(!is_current_link("/", "index.html"));
}

#[test]
fn root_path_matches_directory_links() {
    assert!(is_current_link("/", "/"));
}
