//! Callback bundles: the unit of contribution.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Zero-argument callback stored in a [`Bundle`].
pub type Callback = Arc<dyn Fn() + Send + Sync + 'static>;

/// An ordered set of named callbacks contributed by one call site in a
/// single registration.
///
/// Event names iterate in declaration order. Inserting an event name the
/// bundle already holds replaces the callback in place, keeping the first
/// insertion's position.
#[derive(Clone, Default)]
pub struct Bundle {
	callbacks: IndexMap<Box<str>, Callback>,
}

impl Bundle {
	/// Creates an empty bundle.
	pub fn new() -> Self {
		Self {
			callbacks: IndexMap::new(),
		}
	}

	/// Adds a callback under `event`, replacing any callback this bundle
	/// already held for the same event name.
	pub fn insert(&mut self, event: impl Into<Box<str>>, callback: Callback) -> &mut Self {
		self.callbacks.insert(event.into(), callback);
		self
	}

	/// Builder form of [`insert`](Self::insert) that wraps a plain closure.
	pub fn with(mut self, event: impl Into<Box<str>>, callback: impl Fn() + Send + Sync + 'static) -> Self {
		self.insert(event, Arc::new(callback));
		self
	}

	/// Returns the number of event names in this bundle.
	pub fn len(&self) -> usize {
		self.callbacks.len()
	}

	/// Returns true if this bundle carries no callbacks.
	pub fn is_empty(&self) -> bool {
		self.callbacks.is_empty()
	}

	/// Returns true if this bundle carries a callback for `event`.
	pub fn contains(&self, event: &str) -> bool {
		self.callbacks.contains_key(event)
	}

	/// Event names in declaration order.
	pub fn events(&self) -> impl Iterator<Item = &str> {
		self.callbacks.keys().map(AsRef::as_ref)
	}

	/// `(event, callback)` pairs in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Callback)> {
		self.callbacks.iter().map(|(event, callback)| (event.as_ref(), callback))
	}
}

impl fmt::Debug for Bundle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Bundle")
			.field("events", &self.callbacks.keys().collect::<Vec<_>>())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	#[test]
	fn events_iterate_in_declaration_order() {
		let bundle = Bundle::new()
			.with("save", || {})
			.with("open", || {})
			.with("close", || {});
		let events: Vec<&str> = bundle.events().collect();
		assert_eq!(events, ["save", "open", "close"]);
	}

	#[test]
	fn duplicate_insert_replaces_in_place() {
		let hits = Arc::new(AtomicUsize::new(0));
		let first = Arc::clone(&hits);
		let second = Arc::clone(&hits);

		let mut bundle = Bundle::new().with("open", || {});
		bundle.insert("save", Arc::new(move || { first.fetch_add(1, Ordering::SeqCst); }));
		bundle.insert("save", Arc::new(move || { second.fetch_add(10, Ordering::SeqCst); }));

		assert_eq!(bundle.len(), 2);
		let events: Vec<&str> = bundle.events().collect();
		assert_eq!(events, ["open", "save"]);

		let (_, callback) = bundle.iter().find(|(event, _)| *event == "save").unwrap();
		callback();
		assert_eq!(hits.load(Ordering::SeqCst), 10);
	}

	#[test]
	fn debug_lists_event_names_only() {
		let bundle = Bundle::new().with("resize", || {});
		assert_eq!(format!("{bundle:?}"), r#"Bundle { events: ["resize"] }"#);
	}
}
