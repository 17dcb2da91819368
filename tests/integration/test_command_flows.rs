//! Integration tests for full command flows through a console session
//!
//! Exercises the complete submit contract against the built-in kubectl
//! registry: echo ordering, clear semantics, unknown commands, history
//! bookkeeping, and the dirty-flag protocol a renderer relies on.

use batteries_console::models::LineKind;
use batteries_console::{kubectl, Config, ConsoleSession, NOT_RECOGNIZED_MESSAGE};

fn fresh_session() -> ConsoleSession {
    let mut config = Config::default();
    config.console.seed_transcript = false;
    kubectl::demo_session(&config)
}

#[test]
fn test_echo_before_output_ordering() {
    let mut session = fresh_session();
    session.submit("kubectl get pods");

    let snapshot = session.snapshot();
    // echo + 3 output lines + trailing blank
    assert_eq!(snapshot.len(), 5);
    assert_eq!(snapshot[0].text, "$ kubectl get pods");
    assert_eq!(snapshot[0].kind, LineKind::Prompt);
    assert!(snapshot[1].text.starts_with("NAME"));
    assert!(snapshot[4].is_blank());
}

#[test]
fn test_whitespace_trimming() {
    let mut session = fresh_session();
    session.submit("   kubectl get nodes   ");

    let snapshot = session.snapshot();
    assert_eq!(snapshot[0].text, "$ kubectl get nodes");
    assert_eq!(session.history().last(), Some("kubectl get nodes"));
}

#[test]
fn test_empty_submissions_change_nothing() {
    let mut session = fresh_session();
    session.submit("kubectl get pods");
    let before = session.snapshot();
    let history_before = session.history().len();
    session.take_dirty();

    session.submit("");
    session.submit("   \t  ");

    assert_eq!(session.snapshot(), before);
    assert_eq!(session.history().len(), history_before);
    assert!(!session.take_dirty());
}

#[test]
fn test_clear_suppresses_echo() {
    let mut session = kubectl::demo_session(&Config::default());
    assert!(!session.snapshot().is_empty());

    session.submit("clear");

    assert!(session.snapshot().is_empty());
    assert_eq!(session.history().last(), Some("clear"));
    // The clear itself is a mutation the renderer must observe
    assert!(session.take_dirty());
}

#[test]
fn test_unknown_command_scenario() {
    let mut session = fresh_session();
    session.submit("foobar");

    let snapshot = session.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[0].text, "$ foobar");
    assert_eq!(snapshot[1].text, NOT_RECOGNIZED_MESSAGE);
    assert_eq!(snapshot[1].kind, LineKind::Plain);
    assert!(snapshot[2].is_blank());
    assert_eq!(session.history().last(), Some("foobar"));
}

#[test]
fn test_history_records_every_submission() {
    let mut session = fresh_session();
    session.submit("kubectl get pods");
    session.submit("nonsense");
    session.submit("clear");
    session.submit("kubectl get pods");

    let entries: Vec<_> = session.history().entries().collect();
    assert_eq!(
        entries,
        vec!["kubectl get pods", "nonsense", "clear", "kubectl get pods"]
    );
}

#[test]
fn test_substring_matching_is_permissive() {
    let mut session = fresh_session();
    // "get pods" appears mid-line; the pods handler still wins
    session.submit("kubectl get pods --all-namespaces -o wide");

    let snapshot = session.snapshot();
    assert!(snapshot[1].text.starts_with("NAME"));
    assert!(snapshot[2].text.contains("Running"));
}

#[test]
fn test_session_survives_arbitrary_inputs() {
    let mut session = fresh_session();
    for input in ["", "!!!", "clear", "help", "嗨", "   ", "kubectl get nodes"] {
        session.submit(input);
    }
    // Console is still usable afterwards
    session.submit("kubectl get pods");
    let snapshot = session.snapshot();
    assert_eq!(snapshot[snapshot.len() - 5].text, "$ kubectl get pods");
}

#[test]
fn test_dirty_flag_drives_rendering() {
    let mut session = kubectl::demo_session(&Config::default());

    // Seeding marks the buffer dirty for the first paint
    assert!(session.take_dirty());
    assert!(!session.take_dirty());

    session.submit("help");
    assert!(session.take_dirty());
}

#[test]
fn test_seeded_transcript_renders_first() {
    let session = kubectl::demo_session(&Config::default());
    let snapshot = session.snapshot();

    assert_eq!(snapshot.len(), 10);
    assert_eq!(snapshot[0].text, "$ kubectl get pods --all-namespaces");
    assert_eq!(snapshot[0].kind, LineKind::Prompt);
}

#[test]
fn test_sessions_are_independent() {
    let mut a = fresh_session();
    let b = fresh_session();

    a.submit("kubectl get pods");

    assert_ne!(a.id(), b.id());
    assert!(!a.snapshot().is_empty());
    assert!(b.snapshot().is_empty());
}

#[test]
fn test_scrollback_cap_applies_to_session() {
    let mut config = Config::default();
    config.console.seed_transcript = false;
    config.scrollback.max_lines = Some(4);

    let mut session = kubectl::demo_session(&config);
    session.submit("kubectl get pods"); // 5 lines appended

    let snapshot = session.snapshot();
    assert_eq!(snapshot.len(), 4);
    // The echo line was the oldest and fell off
    assert!(snapshot[0].text.starts_with("NAME"));
}

#[test]
fn test_capped_session_still_yields_render_deltas() {
    let mut config = Config::default();
    config.console.seed_transcript = false;
    config.scrollback.max_lines = Some(5);

    let mut session = kubectl::demo_session(&config);
    session.submit("kubectl get pods"); // fills the cap
    assert!(session.take_dirty());
    let mut seen = session.scrollback().total_appended();

    // From here on every submit evicts as many lines as it appends, so
    // the buffer length never changes again
    for _ in 0..3 {
        session.submit("kubectl get nodes");
        assert!(session.take_dirty());

        let snapshot = session.snapshot();
        assert_eq!(snapshot.len(), 5);

        let fresh = (session.scrollback().total_appended() - seen) as usize;
        assert_eq!(fresh, 5);
        let start = snapshot.len().saturating_sub(fresh);
        let delta: Vec<_> = snapshot[start..].iter().map(|l| l.text.as_str()).collect();
        assert_eq!(delta[0], "$ kubectl get nodes");
        assert!(delta[4].is_empty());
        seen = session.scrollback().total_appended();
    }
}
