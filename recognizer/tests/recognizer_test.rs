use recognizer::{recognize, recognize_iterative, recognize_with_sink, Verdict};
use recognizer_core::{RecordingSink, TraceEvent};
use rstest::rstest;
use token_stream::tokenize;

#[rstest]
#[case("i", true)]
#[case("i+i", true)]
#[case("i+i+i", true)]
#[case("", false)]
#[case("i+", false)]
#[case("i+i+", false)]
#[case("+i", false)]
#[case("+", false)]
#[case("ii", false)]
#[case("i++i", false)]
fn verdicts(#[case] input: &str, #[case] accepted: bool) {
    let stream = tokenize(input);
    assert_eq!(recognize(&stream).is_accepted(), accepted, "input: {input:?}");
}

#[rstest]
#[case("x")]
#[case("i+x")]
#[case("i*i")]
#[case("abc")]
fn foreign_symbols_reject_without_error(#[case] input: &str) {
    // Symbols outside the alphabet never match a terminal check; the
    // recognizer must treat them as an ordinary rejection, not a fault.
    assert_eq!(recognize(&tokenize(input)), Verdict::Rejected);
}

#[test]
fn repeated_calls_agree() {
    let stream = tokenize("i+i");
    let first = recognize(&stream);
    let second = recognize(&stream);
    assert_eq!(first, second);
}

#[test]
fn recursive_and_iterative_agree_on_table() {
    for input in ["", "i", "i+", "i+i", "i+i+", "i+i+i", "+i", "x", "ii"] {
        let stream = tokenize(input);
        assert_eq!(
            recognize(&stream),
            recognize_iterative(&stream),
            "input: {input:?}"
        );
    }
}

#[test]
fn chain_production_fails_before_leaf_production_runs() {
    // For a lone `i`, production 1 is tried first, fails when no `+`
    // follows, and must restore the position to 0 before production 2 runs.
    let stream = tokenize("i");
    let mut sink = RecordingSink::new();
    let verdict = recognize_with_sink(&stream, &mut sink);
    assert!(verdict.is_accepted());

    assert_eq!(
        sink.events(),
        &[
            TraceEvent::TryAlternative {
                label: "E -> i + E",
                pos: 0
            },
            TraceEvent::Backtrack { from: 1, to: 0 },
            TraceEvent::TryAlternative {
                label: "E -> i",
                pos: 0
            },
            TraceEvent::AlternativeMatched {
                label: "E -> i",
                pos: 1
            },
        ]
    );
}

#[test]
fn no_backtrack_event_when_the_chain_never_advanced() {
    // On `+i` production 1 fails on its first terminal without consuming
    // anything, so no backtrack is reported before production 2 is tried.
    let stream = tokenize("+i");
    let mut sink = RecordingSink::new();
    let verdict = recognize_with_sink(&stream, &mut sink);
    assert_eq!(verdict, Verdict::Rejected);

    assert_eq!(
        sink.events(),
        &[
            TraceEvent::TryAlternative {
                label: "E -> i + E",
                pos: 0
            },
            TraceEvent::TryAlternative {
                label: "E -> i",
                pos: 0
            },
        ]
    );
}

#[test]
fn trace_sink_does_not_change_the_verdict() {
    for input in ["i+i", "i+"] {
        let stream = tokenize(input);
        let mut sink = RecordingSink::new();
        assert_eq!(recognize(&stream), recognize_with_sink(&stream, &mut sink));
    }
}

#[test]
fn accepted_tree_covers_whole_input() {
    let stream = tokenize("i+i+i+i");
    match recognize(&stream) {
        Verdict::Accepted(tree) => {
            assert_eq!(tree.terminals(), stream.as_slice());
            assert_eq!(tree.idents(), 4);
        }
        Verdict::Rejected => panic!("expected acceptance"),
    }
}
