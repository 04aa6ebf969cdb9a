//! Registry container with atomic publication.
//!
//! # Role
//!
//! Thread-safe entrypoint: writers serialize on a mutex held across the
//! whole of [`CallbackRegistry::register`], readers load the published
//! table through `ArcSwap` without locking.
//!
//! # Invariants
//!
//! - The published table is always the full compilation of the current
//!   slot table; `register` commits both or neither.
//! - Readers observe either the fully-old or fully-new table, never a mix.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::bundle::Bundle;
use crate::error::{InvalidArgument, RegistryError};
use crate::slots::{Slot, SlotTable};
use crate::table::DispatchTable;

/// Merges contributor [`Bundle`]s into one compiled dispatch table.
///
/// Each contributor id claims a priority slot on first registration and
/// keeps it forever; re-registering under the same id replaces only that
/// contributor's callbacks. Dispatch runs every active callback for an
/// event in ascending slot order.
pub struct CallbackRegistry {
	slots: Mutex<SlotTable>,
	compiled: ArcSwap<DispatchTable>,
}

impl CallbackRegistry {
	/// Creates an empty registry: no slots, no compiled handlers.
	pub fn new() -> Self {
		Self {
			slots: Mutex::new(SlotTable::default()),
			compiled: ArcSwap::from_pointee(DispatchTable::default()),
		}
	}

	/// Registers `bundle` under `contributor_id`.
	///
	/// A first-seen id claims the next priority slot; a known id replaces
	/// the bundle at its existing slot wholesale (event names absent from
	/// the new bundle are dropped for that contributor). Either way the
	/// dispatch table is recompiled from all slots and published
	/// atomically before this returns.
	///
	/// Fails with [`RegistryError::InvalidArgument`] on an empty
	/// contributor id or an empty event name, leaving all state untouched.
	pub fn register(&self, bundle: Bundle, contributor_id: &str) -> Result<(), RegistryError> {
		if contributor_id.is_empty() {
			return Err(InvalidArgument::EmptyContributorId.into());
		}
		if bundle.events().any(str::is_empty) {
			return Err(InvalidArgument::EmptyEventName {
				contributor: Box::from(contributor_id),
			}
			.into());
		}

		let event_count = bundle.len();
		let mut slots = self.slots.lock();
		let action = slots.upsert(contributor_id, bundle);
		let table = DispatchTable::compile(slots.iter());
		trace!(events = table.len(), contributors = slots.len(), "recompiled dispatch table");

		// Publish while still holding the writer lock so tables reach
		// readers in slot-mutation order.
		self.compiled.store(Arc::new(table));

		debug!(
			contributor = contributor_id,
			slot = action.slot().get(),
			action = ?action,
			events = event_count,
			"registered callback bundle"
		);
		Ok(())
	}

	/// Invokes the compiled handler for `event_name`, if any contributor
	/// supplied one; silent no-op otherwise.
	pub fn dispatch(&self, event_name: &str) {
		self.compiled.load().dispatch(event_name);
	}

	/// Returns true if the current table has a handler for `event_name`.
	pub fn has_handler(&self, event_name: &str) -> bool {
		self.compiled.load().contains(event_name)
	}

	/// Pins the current compiled table so several events can be dispatched
	/// against one consistent view.
	pub fn snapshot(&self) -> Arc<DispatchTable> {
		self.compiled.load_full()
	}

	/// The priority slot assigned to `contributor_id`, if it has ever
	/// registered.
	pub fn slot_of(&self, contributor_id: &str) -> Option<Slot> {
		self.slots.lock().slot_of(contributor_id)
	}

	/// Number of priority slots assigned so far.
	pub fn contributor_count(&self) -> usize {
		self.slots.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.contributor_count() == 0
	}
}

impl Default for CallbackRegistry {
	fn default() -> Self {
		Self::new()
	}
}
