//! The five-step override scenario exercised end to end.

use super::{log, single, take};
use crate::CallbackRegistry;

#[test]
fn override_scenario_preserves_priorities() {
	let fired = log();
	let registry = CallbackRegistry::new();

	registry.register(single(&fired, "onA", "f1"), "aa").unwrap();
	registry.dispatch("onA");
	assert_eq!(take(&fired), ["f1"]);

	registry.register(single(&fired, "onA", "f2"), "bb").unwrap();
	registry.dispatch("onA");
	assert_eq!(take(&fired), ["f1", "f2"]);

	// "aa" overrides itself: f1 must never fire again, and "aa" keeps
	// firing ahead of "bb".
	registry.register(single(&fired, "onA", "f3"), "aa").unwrap();
	registry.dispatch("onA");
	assert_eq!(take(&fired), ["f3", "f2"]);

	registry.register(single(&fired, "onA", "f4"), "cc").unwrap();
	registry.dispatch("onA");
	assert_eq!(take(&fired), ["f3", "f2", "f4"]);

	registry.register(single(&fired, "onA", "f5"), "bb").unwrap();
	registry.dispatch("onA");
	assert_eq!(take(&fired), ["f3", "f5", "f4"]);
}
