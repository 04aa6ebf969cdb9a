//! Cross-module scenario and property tests.

mod scenario;

use std::sync::{Arc, Mutex};

use crate::{Bundle, Callback};

/// Shared firing record asserted against after each dispatch.
pub(crate) type Log = Arc<Mutex<Vec<&'static str>>>;

pub(crate) fn log() -> Log {
	Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn tagging(log: &Log, tag: &'static str) -> Callback {
	let log = Arc::clone(log);
	Arc::new(move || log.lock().unwrap().push(tag))
}

/// One-event bundle whose callback records `tag`.
pub(crate) fn single(log: &Log, event: &str, tag: &'static str) -> Bundle {
	let mut bundle = Bundle::new();
	bundle.insert(event, tagging(log, tag));
	bundle
}

/// Drains and returns everything recorded so far.
pub(crate) fn take(log: &Log) -> Vec<&'static str> {
	std::mem::take(&mut *log.lock().unwrap())
}
