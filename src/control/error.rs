//! Error raised by the unsafe accessors.

/// Represents a `get` on the variant that holds no value.
///
/// Domain failures (`Left`, `Failure`, `Void`) are data; they only turn
/// into an error when a caller asks for the continuation value of a
/// termination variant (or, for projections, the opposite side).
///
/// # Examples
///
/// ```rust
/// use monadic::control::{AccessError, Maybe};
///
/// let error = Maybe::<i32>::Void.get().unwrap_err();
/// assert_eq!(error, AccessError::new("Maybe", "Void", "get"));
/// assert_eq!(format!("{error}"), "Maybe::get: called on a `Void` value");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessError {
    /// The type the accessor was called on.
    pub type_name: &'static str,
    /// The variant that was present.
    pub variant: &'static str,
    /// The accessor that failed.
    pub accessor: &'static str,
}

impl AccessError {
    /// Creates an access error for `type_name::accessor` on `variant`.
    #[must_use]
    pub const fn new(type_name: &'static str, variant: &'static str, accessor: &'static str) -> Self {
        Self {
            type_name,
            variant,
            accessor,
        }
    }
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::{}: called on a `{}` value",
            self.type_name, self.accessor, self.variant
        )
    }
}

impl std::error::Error for AccessError {}
