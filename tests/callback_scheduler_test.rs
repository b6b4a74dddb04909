//! Integration tests for the callback scheduler.
//!
//! These tests validate:
//! 1. Callbacks execute exactly once, in insertion order
//! 2. Work scheduled during a round runs no earlier than the next round
//! 3. Self-rescheduling chains take exactly one round per link
//! 4. A failing callback aborts the whole run

use std::sync::Arc;

use anyhow::anyhow;
use parking_lot::Mutex;
use roundloop::core::{AppResult, CallbackScheduler};

type Log = Arc<Mutex<Vec<String>>>;

#[test]
fn test_non_rescheduling_callbacks_run_once_in_one_round() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let mut sched = CallbackScheduler::new();

    for i in 0..5 {
        let log = Arc::clone(&log);
        sched.schedule(move |_| {
            log.lock().push(format!("cb-{i}"));
            Ok(())
        });
    }

    sched.run_to_completion().unwrap();

    assert_eq!(
        *log.lock(),
        vec!["cb-0", "cb-1", "cb-2", "cb-3", "cb-4"]
    );
    assert_eq!(sched.rounds(), 1);
}

#[test]
fn test_chain_of_length_k_takes_k_rounds() {
    fn link(sched: &mut CallbackScheduler, remaining: u32, log: Log) -> AppResult<()> {
        log.lock().push(format!("link-{remaining}"));
        if remaining > 1 {
            let log = Arc::clone(&log);
            sched.schedule(move |s| link(s, remaining - 1, log));
        }
        Ok(())
    }

    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let mut sched = CallbackScheduler::new();
    let k = 4;

    let chain_log = Arc::clone(&log);
    sched.schedule(move |s| link(s, k, chain_log));
    sched.run_to_completion().unwrap();

    assert_eq!(sched.rounds(), u64::from(k));
    assert_eq!(log.lock().len(), k as usize);
}

#[test]
fn test_work_scheduled_mid_round_waits_for_next_round() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let mut sched = CallbackScheduler::new();

    let first = Arc::clone(&log);
    sched.schedule(move |s| {
        first.lock().push("round1-first".into());
        let late = Arc::clone(&first);
        s.schedule(move |_| {
            late.lock().push("round2-late".into());
            Ok(())
        });
        Ok(())
    });

    let second = Arc::clone(&log);
    sched.schedule(move |_| {
        second.lock().push("round1-second".into());
        Ok(())
    });

    sched.run_to_completion().unwrap();

    // The entry scheduled from inside round 1 must not jump the queue.
    assert_eq!(
        *log.lock(),
        vec!["round1-first", "round1-second", "round2-late"]
    );
}

#[test]
fn test_notebook_chaining_scenario() {
    // Mirrors the worked example: f(i) reschedules f(i-1) for even i.
    fn run_eventually(sched: &mut CallbackScheduler, i: i32, log: Log) -> AppResult<()> {
        log.lock().push(format!("f({i})"));
        if i % 2 == 0 {
            let log = Arc::clone(&log);
            sched.schedule(move |s| run_eventually(s, i - 1, log));
        }
        Ok(())
    }

    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let mut sched = CallbackScheduler::new();

    let one = Arc::clone(&log);
    sched.schedule(move |s| run_eventually(s, 1, one));
    let two = Arc::clone(&log);
    sched.schedule(move |s| run_eventually(s, 2, two));

    sched.run_to_completion().unwrap();

    assert_eq!(*log.lock(), vec!["f(1)", "f(2)", "f(1)"]);
    assert_eq!(sched.rounds(), 2);
}

#[test]
fn test_failing_callback_aborts_remaining_work() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let mut sched = CallbackScheduler::new();

    let before = Arc::clone(&log);
    sched.schedule(move |_| {
        before.lock().push("before".into());
        Ok(())
    });
    sched.schedule(|_| Err(anyhow!("callback exploded")));
    let after = Arc::clone(&log);
    sched.schedule(move |_| {
        after.lock().push("after".into());
        Ok(())
    });

    let err = sched.run_to_completion().unwrap_err();
    assert_eq!(err.to_string(), "callback exploded");

    // The error is fatal: the entry behind the failing one never ran.
    assert_eq!(*log.lock(), vec!["before"]);
}
