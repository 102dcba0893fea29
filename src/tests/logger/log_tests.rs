//! Tests for the normal log path and destination switching.

use std::fs;
use std::sync::Arc;

use crate::tests::support::captured_logger;
use crate::{InMemorySink, PhaseCell, ProcessLogger, ProcessLoggerBuilder, RunPhase, plog};

#[test]
fn log_writes_phase_prefixed_line() {
    let (logger, out, err) = captured_logger(RunPhase::Main);

    plog!(logger, "loaded {} entries from {}", 3, "index");

    assert_eq!(out.contents_string(), "[main] loaded 3 entries from index\n");
    assert!(err.contents().is_empty());
}

#[test]
fn log_without_arguments_and_empty_message() {
    let (logger, out, _) = captured_logger(RunPhase::Init);

    plog!(logger, "plain");
    logger.log(format_args!(""));

    assert_eq!(out.contents_string(), "[init] plain\n[init] \n");
}

#[test]
fn log_does_not_interpret_message_as_format() {
    let (logger, out, _) = captured_logger(RunPhase::Main);

    plog!(logger, "{}", "100% {done}");

    assert_eq!(out.contents_string(), "[main] 100% {done}\n");
}

#[test]
fn log_reads_phase_on_every_call() {
    let out = InMemorySink::new("mem");
    let phases = Arc::new(PhaseCell::new(RunPhase::Preprocess));
    let logger = ProcessLoggerBuilder::new()
        .destination_target(Arc::new(out.clone()))
        .with_phases(phases.clone())
        .build()
        .unwrap();

    plog!(logger, "a");
    phases.set(RunPhase::Main);
    assert_eq!(logger.phase(), RunPhase::Main);
    plog!(logger, "b");

    assert_eq!(out.lines(), vec!["[preprocess] a", "[main] b"]);
}

#[test]
fn log_swallows_write_failures() {
    let broken = InMemorySink::broken("closed");
    let logger = ProcessLoggerBuilder::new()
        .destination_target(Arc::new(broken.clone()))
        .build()
        .unwrap();

    plog!(logger, "dropped");
    plog!(logger, "still dropped");

    assert!(broken.contents().is_empty());
}

#[test]
fn default_destination_is_stdout() {
    let logger = ProcessLogger::default();
    assert_eq!(logger.destination_name(), "/dev/stdout");
    assert_eq!(logger.error_stream_name(), "/dev/stderr");
    assert_eq!(logger.phase(), RunPhase::Init);
}

#[test]
fn set_destination_reroutes_next_write() {
    let (logger, first, _) = captured_logger(RunPhase::Main);
    let second = InMemorySink::new("memory://second");

    plog!(logger, "one");
    logger.set_destination(Arc::new(second.clone())).unwrap();
    assert_eq!(logger.destination_name(), "memory://second");
    plog!(logger, "two");

    assert_eq!(first.lines(), vec!["[main] one"]);
    assert_eq!(second.lines(), vec!["[main] two"]);
}

#[test]
fn set_destination_to_file_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.log");
    fs::write(&path, "earlier\n").unwrap();

    let (logger, _, _) = captured_logger(RunPhase::Main);
    logger
        .set_destination(Arc::new(crate::FileOutput::new(path.clone())))
        .unwrap();
    assert_eq!(logger.destination_name(), path.to_string_lossy());

    plog!(logger, "later");

    assert_eq!(fs::read_to_string(&path).unwrap(), "earlier\n[main] later\n");
}

#[test]
fn failed_set_destination_keeps_previous() {
    let dir = tempfile::tempdir().unwrap();
    let (logger, out, _) = captured_logger(RunPhase::Main);
    let bad = crate::FileOutput::new(dir.path().join("missing").join("x.log"));

    assert!(logger.set_destination(Arc::new(bad)).is_err());
    assert_eq!(logger.destination_name(), "memory://out");

    plog!(logger, "kept");
    assert_eq!(out.lines(), vec!["[main] kept"]);
}

#[test]
fn set_destination_spec_applies_policy() {
    use crate::{DestinationSpec, FileExistsPolicy, LogError};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.log");
    fs::write(&path, "keep me\n").unwrap();
    let (logger, _, _) = captured_logger(RunPhase::Main);

    let refuse = DestinationSpec::parse(path.to_string_lossy())
        .unwrap()
        .with_file_exists_policy(FileExistsPolicy::Error);
    assert!(matches!(
        logger.set_destination_spec(&refuse),
        Err(LogError::FileExists { .. })
    ));
    assert_eq!(logger.destination_name(), "memory://out");

    let overwrite = refuse.with_file_exists_policy(FileExistsPolicy::Overwrite);
    logger.set_destination_spec(&overwrite).unwrap();
    plog!(logger, "replaced");
    assert_eq!(fs::read_to_string(&path).unwrap(), "[main] replaced\n");
}

#[test]
fn debug_shows_destination_names() {
    let (logger, _, _) = captured_logger(RunPhase::Main);
    let rendered = format!("{logger:?}");
    assert!(rendered.contains("memory://out"));
    assert!(rendered.contains("memory://err"));
}
