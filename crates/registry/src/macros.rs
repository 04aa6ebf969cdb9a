//! Bundle construction macro.

/// Builds a [`Bundle`](crate::Bundle) from `event => closure` pairs.
///
/// # Example
///
/// ```
/// use strata_registry::{CallbackRegistry, bundle};
///
/// let registry = CallbackRegistry::new();
/// registry
/// 	.register(bundle! { "window:resize" => || {} }, "status-bar")
/// 	.unwrap();
/// assert!(registry.has_handler("window:resize"));
/// ```
#[macro_export]
macro_rules! bundle {
	() => {
		$crate::Bundle::new()
	};
	($($event:expr => $callback:expr),+ $(,)?) => {{
		let mut bundle = $crate::Bundle::new();
		$(bundle.insert($event, ::std::sync::Arc::new($callback));)+
		bundle
	}};
}
