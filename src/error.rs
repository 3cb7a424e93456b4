use thiserror::Error;

/// The errors reported by [`AvlMap`](crate::AvlMap) operations.
///
/// Failures are detected before any mutation takes place, so an operation that
/// returns an error leaves the map exactly as it was.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The requested key has no matching entry.
    ///
    /// Reported by [`at`](crate::AvlMap::at) and [`at_mut`](crate::AvlMap::at_mut).
    #[error("key not found in map")]
    KeyNotFound,

    /// A cursor operation was invalid: the cursor belongs to a different map,
    /// sits at the past-the-end position where an entry is required, or was
    /// stepped outside the container.
    #[error("cursor does not reference a valid entry of this map")]
    InvalidCursor,
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(Error::KeyNotFound.to_string(), "key not found in map");
        assert_eq!(
            Error::InvalidCursor.to_string(),
            "cursor does not reference a valid entry of this map"
        );
    }
}
