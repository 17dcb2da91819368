//! Property-based tests for the console core

use batteries_console::models::{Line, LineKind};
use batteries_console::{CommandRegistry, ConsoleSession, Matcher, ScrollbackBuffer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_classification_is_total(text in "\\PC{0,200}") {
        // Any text classifies without panicking and never yields Error
        let kind = Line::classify(&text);
        prop_assert_ne!(kind, LineKind::Error);
    }

    #[test]
    fn test_spans_reassemble_to_text(text in "\\PC{0,200}") {
        let line = Line::new(text.clone());
        let joined: String = line.spans().iter().map(|s| s.text).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn test_snapshot_round_trip(texts in prop::collection::vec("\\PC{0,80}", 0..50)) {
        let mut buffer = ScrollbackBuffer::new();
        buffer.append_texts(texts.clone());

        let snapshot = buffer.snapshot();
        prop_assert_eq!(snapshot.len(), texts.len());
        for (line, text) in snapshot.iter().zip(&texts) {
            prop_assert_eq!(&line.text, text);
        }
    }

    #[test]
    fn test_snapshot_after_interleaved_clears(
        batches in prop::collection::vec(
            (prop::collection::vec("[a-z ]{0,40}", 0..10), any::<bool>()),
            0..8,
        )
    ) {
        let mut buffer = ScrollbackBuffer::new();
        let mut expected: Vec<String> = Vec::new();

        for (texts, clear_first) in batches {
            if clear_first {
                buffer.clear();
                expected.clear();
            }
            buffer.append_texts(texts.clone());
            expected.extend(texts);
        }

        let actual: Vec<String> = buffer.snapshot().into_iter().map(|l| l.text).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_capped_buffer_keeps_newest(
        texts in prop::collection::vec("[a-z]{1,10}", 1..100),
        cap in 1usize..20,
    ) {
        let mut buffer = ScrollbackBuffer::with_max_lines(cap);
        buffer.append_texts(texts.clone());

        let snapshot = buffer.snapshot();
        prop_assert!(snapshot.len() <= cap);

        let expected: Vec<&String> = texts.iter().rev().take(cap).rev().collect();
        let actual: Vec<&String> = snapshot.iter().map(|l| &l.text).collect();
        prop_assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(&expected) {
            prop_assert_eq!(*a, *e);
        }
    }

    #[test]
    fn test_submit_never_panics_and_history_is_total(inputs in prop::collection::vec("\\PC{0,60}", 0..30)) {
        let mut registry = CommandRegistry::new();
        registry.register_clear("clear", Matcher::exact("clear"));
        let mut session = ConsoleSession::new(registry);

        let mut expected_history = 0usize;
        for input in &inputs {
            session.submit(input);
            if !input.trim().is_empty() {
                expected_history += 1;
            }
        }

        // Exactly one history entry per non-empty trimmed submission
        prop_assert_eq!(session.history().len(), expected_history);
    }

    #[test]
    fn test_unknown_commands_append_three_lines(input in "[a-z]{1,20}") {
        // Single lowercase words never match the kubectl registry's
        // multi-word predicates except the exact entries
        prop_assume!(input != "clear" && input != "help");

        let mut config = batteries_console::Config::default();
        config.console.seed_transcript = false;
        let mut session = batteries_console::kubectl::demo_session(&config);

        session.submit(&input);

        let snapshot = session.snapshot();
        prop_assert_eq!(snapshot.len(), 3);
        prop_assert_eq!(snapshot[0].text.clone(), format!("$ {}", input));
        prop_assert!(snapshot[2].is_blank());
    }
}
