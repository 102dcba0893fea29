//! Tests for concurrent use of one logger.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use crate::tests::support::captured_logger;
use crate::{InMemorySink, RunPhase, plog};

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 200;

#[test]
fn concurrent_logs_produce_whole_lines() {
    let (logger, out, _) = captured_logger(RunPhase::Main);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    plog!(logger, "thread {t} line {i} {}", "x".repeat(64));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let lines = out.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    let padding = "x".repeat(64);
    let unique: HashSet<&String> = lines.iter().collect();
    assert_eq!(unique.len(), lines.len());
    for line in &lines {
        assert!(line.starts_with("[main] thread "), "interleaved: {line}");
        assert!(line.ends_with(&padding), "interleaved: {line}");
    }
}

#[test]
fn per_thread_order_is_preserved() {
    let (logger, out, _) = captured_logger(RunPhase::Main);
    let logger = Arc::new(logger);

    thread::scope(|s| {
        for t in 0..4 {
            let logger = &logger;
            s.spawn(move || {
                for i in 0..50 {
                    plog!(logger, "{t}:{i}");
                }
            });
        }
    });

    for t in 0..4 {
        let prefix = format!("[main] {t}:");
        let seq: Vec<usize> = out
            .lines()
            .iter()
            .filter_map(|l| l.strip_prefix(&prefix).map(|n| n.parse().unwrap()))
            .collect();
        assert_eq!(seq, (0..50).collect::<Vec<_>>());
    }
}

#[test]
fn destination_swaps_race_safely_with_writes() {
    let (logger, first, _) = captured_logger(RunPhase::Main);
    let second = InMemorySink::new("memory://second");
    let logger = Arc::new(logger);

    thread::scope(|s| {
        let writer = Arc::clone(&logger);
        s.spawn(move || {
            for i in 0..500 {
                plog!(writer, "n{i}");
            }
        });
        let swapper = Arc::clone(&logger);
        let target = second.clone();
        s.spawn(move || {
            swapper.set_destination(Arc::new(target)).unwrap();
        });
    });

    let total = first.lines().len() + second.lines().len();
    assert_eq!(total, 500);
    assert_eq!(logger.destination_name(), "memory://second");
}
