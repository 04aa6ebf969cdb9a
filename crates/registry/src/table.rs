//! Compiled dispatch table.
//!
//! Derived state: recomputed in full from the slot table after every
//! registration, never patched incrementally. Each event name compiles to
//! a flat callback list rather than a closure wrapping the previous
//! compiled callable, so invocation depth stays constant no matter how
//! often contributors re-register.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::bundle::{Bundle, Callback};

/// The compiled callable for one event name: every active contributor's
/// callback for that event, in ascending slot order.
pub struct CompiledHandler {
	callbacks: Box<[Callback]>,
}

impl CompiledHandler {
	/// Invokes every callback in priority order, discarding results.
	pub fn invoke(&self) {
		for callback in &self.callbacks {
			callback();
		}
	}

	/// Number of contributor callbacks merged into this handler.
	pub fn len(&self) -> usize {
		self.callbacks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.callbacks.is_empty()
	}
}

impl fmt::Debug for CompiledHandler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CompiledHandler")
			.field("callbacks", &self.callbacks.len())
			.finish()
	}
}

/// Immutable mapping from event name to its compiled handler.
#[derive(Debug, Default)]
pub struct DispatchTable {
	by_event: FxHashMap<Box<str>, CompiledHandler>,
}

impl DispatchTable {
	/// Compiles bundles, visited in ascending slot order, into per-event
	/// handlers. Within one bundle, callbacks append in declaration order.
	pub(crate) fn compile<'a>(bundles: impl Iterator<Item = &'a Bundle>) -> Self {
		let mut lists: FxHashMap<Box<str>, Vec<Callback>> = FxHashMap::default();
		for bundle in bundles {
			for (event, callback) in bundle.iter() {
				lists.entry(Box::from(event)).or_default().push(callback.clone());
			}
		}

		let by_event = lists
			.into_iter()
			.map(|(event, callbacks)| {
				(
					event,
					CompiledHandler {
						callbacks: callbacks.into_boxed_slice(),
					},
				)
			})
			.collect();

		Self { by_event }
	}

	/// Looks up the compiled handler for `event`.
	pub fn get(&self, event: &str) -> Option<&CompiledHandler> {
		self.by_event.get(event)
	}

	/// Returns true if any contributor supplied a callback for `event`.
	pub fn contains(&self, event: &str) -> bool {
		self.by_event.contains_key(event)
	}

	/// Invokes the compiled handler for `event` if one exists; no-op
	/// otherwise.
	pub fn dispatch(&self, event: &str) {
		if let Some(handler) = self.get(event) {
			handler.invoke();
		}
	}

	/// Event names with at least one compiled callback, in no particular
	/// order.
	pub fn events(&self) -> impl Iterator<Item = &str> {
		self.by_event.keys().map(AsRef::as_ref)
	}

	/// Number of event names with a compiled handler.
	pub fn len(&self) -> usize {
		self.by_event.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_event.is_empty()
	}
}
