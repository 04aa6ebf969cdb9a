//! Contributor-keyed callback bundle registry.
//!
//! Many independent call sites want to attach a handler to the same named
//! event, and a naive last-writer-wins assignment lets one contributor
//! silently clobber another's handler. [`CallbackRegistry`] merges each
//! contributor's [`Bundle`] into one compiled dispatch table instead: a
//! contributor re-registering under the same id replaces only its own
//! callbacks and keeps its original priority rank, while every other
//! contributor keeps firing.
//!
//! ```
//! use strata_registry::{CallbackRegistry, bundle};
//!
//! let registry = CallbackRegistry::new();
//! registry
//! 	.register(bundle! { "window:resize" => || println!("sidebar") }, "sidebar")
//! 	.unwrap();
//! registry
//! 	.register(bundle! { "window:resize" => || println!("minimap") }, "minimap")
//! 	.unwrap();
//!
//! // Replaces only the sidebar's handler; the minimap still fires after it.
//! registry
//! 	.register(bundle! { "window:resize" => || println!("sidebar v2") }, "sidebar")
//! 	.unwrap();
//!
//! registry.dispatch("window:resize"); // "sidebar v2", then "minimap"
//! ```
//!
//! Registration serializes on an internal writer lock; dispatch is a
//! lock-free read of the atomically published table and may race freely
//! with an in-flight registration.

mod bundle;
mod error;
mod macros;
mod registry;
mod slots;
mod table;

#[cfg(test)]
mod tests;

pub use bundle::{Bundle, Callback};
pub use error::{InvalidArgument, RegistryError};
pub use registry::CallbackRegistry;
pub use slots::Slot;
pub use table::{CompiledHandler, DispatchTable};
