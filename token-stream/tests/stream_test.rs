use recognizer_core::StreamError;
use token_stream::{tokenize, Term, TokenStream};

#[test]
fn length_is_fixed_at_construction() {
    let stream = tokenize("i+i");
    assert_eq!(stream.len(), 3);
    assert!(!stream.is_empty());
}

#[test]
fn peek_at_reports_out_of_bounds_instead_of_panicking() {
    let stream = tokenize("i");
    assert!(stream.peek_at(0).is_ok());
    assert_eq!(
        stream.peek_at(5),
        Err(StreamError::OutOfBounds { index: 5, len: 1 })
    );
}

#[test]
fn stream_is_reusable_across_reads() {
    // The stream carries no cursor, so reads at the same position always
    // agree.
    let stream = tokenize("i+");
    assert_eq!(stream.get(1), Some(&Term::Plus));
    assert_eq!(stream.get(1), Some(&Term::Plus));
}

#[test]
fn streams_build_from_any_token_type() {
    let stream: TokenStream<u8> = vec![1, 2, 3].into();
    assert_eq!(stream.as_slice(), &[1, 2, 3]);
}
