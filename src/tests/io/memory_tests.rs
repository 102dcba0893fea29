//! Tests for the in-memory sink.

use crate::{InMemorySink, OutputTarget};
use std::io::Write;

#[test]
fn in_memory_sink_writes_and_reads_back() {
    let sink = InMemorySink::new("out");

    // overwrite
    {
        let mut w = sink.open_overwrite().unwrap();
        w.write_all(b"abc").unwrap();
    }
    assert_eq!(sink.contents(), b"abc".to_vec());

    // append
    {
        let mut w = sink.open_append().unwrap();
        w.write_all(b"def").unwrap();
    }
    assert_eq!(sink.contents(), b"abcdef".to_vec());

    // overwrite again clears
    {
        let mut w = sink.open_overwrite().unwrap();
        w.write_all(b"x").unwrap();
    }
    assert_eq!(sink.contents_string(), "x");
}

#[test]
fn in_memory_sink_clones_share_buffer() {
    let sink = InMemorySink::new("shared");
    let other = sink.clone();

    let mut w = other.open_append().unwrap();
    w.write_all(b"one\ntwo\n").unwrap();

    assert_eq!(sink.lines(), vec!["one", "two"]);
    assert_eq!(other.id(), "shared");

    sink.clear();
    assert!(other.contents().is_empty());
}

#[test]
fn broken_sink_rejects_writes() {
    let sink = InMemorySink::broken("closed");
    let mut w = sink.open_append().unwrap();

    let err = w.write_all(b"lost").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    assert!(sink.contents().is_empty());
}

#[test]
fn in_memory_sink_never_reports_existing() {
    let sink = InMemorySink::new("fresh");
    assert!(!sink.exists());
}

#[test]
fn cloned_writer_shares_the_buffer() {
    let sink = InMemorySink::new("out");
    let mut first = sink.open_append().unwrap();
    let mut second = first.try_clone_writer().unwrap();

    first.write_all(b"a").unwrap();
    second.write_all(b"b").unwrap();

    assert_eq!(sink.contents_string(), "ab");
}
