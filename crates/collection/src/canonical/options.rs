use std::fmt;

/// Caller-supplied filter over keys of type `K`.
pub type KeyValidator<K> = Box<dyn Fn(&K) -> bool>;

/// Construction-time configuration for a [`CanonicalKeyMap`](super::CanonicalKeyMap).
///
/// The default configuration has no validator, which accepts every key of the
/// declared type.
pub struct CanonicalMapOptions<K> {
	is_valid_key: Option<KeyValidator<K>>,
}

impl<K> CanonicalMapOptions<K> {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self { is_valid_key: None }
	}

	/// Restricts accepted keys to those for which `validator` returns true.
	pub fn with_validator(mut self, validator: impl Fn(&K) -> bool + 'static) -> Self {
		self.is_valid_key = Some(Box::new(validator));
		self
	}

	/// Returns true if a validator is configured.
	pub fn has_validator(&self) -> bool {
		self.is_valid_key.is_some()
	}

	/// Applies the validator, if any, to an already type-checked key.
	#[inline]
	pub fn accepts(&self, key: &K) -> bool {
		self.is_valid_key.as_ref().is_none_or(|validate| validate(key))
	}
}

impl<K> Default for CanonicalMapOptions<K> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K> fmt::Debug for CanonicalMapOptions<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CanonicalMapOptions")
			.field("has_validator", &self.has_validator())
			.finish()
	}
}
