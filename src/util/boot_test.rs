use super::*;

#[test]
fn loading_document_waits_for_dom_content_loaded() {
    assert!(!ready_now("loading"));
}

#[test]
fn parsed_document_runs_ready_pass_immediately() {
    assert!(ready_now("interactive"));
    assert!(ready_now("complete"));
}
