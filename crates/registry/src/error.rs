//! Registration error types.

/// Rejected inputs to [`CallbackRegistry::register`](crate::CallbackRegistry::register).
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidArgument {
	/// Contributor ids are lookup keys; an empty key is never valid.
	#[error("contributor id must be non-empty")]
	EmptyContributorId,
	/// Every bundle key must name an event.
	#[error("empty event name in bundle from contributor {contributor:?}")]
	EmptyEventName {
		/// Id of the contributor whose bundle was rejected.
		contributor: Box<str>,
	},
}

/// Generic registry error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
	#[error("invalid argument: {0}")]
	InvalidArgument(#[from] InvalidArgument),
}
