//! Option helpers.

/// Unwrap a value or fail with a lazily built error.
///
/// `value.or_throw(|| err)?` reads like the operator it replaces: the error is
/// only constructed when the value is missing.
pub trait OrThrow<T> {
    fn or_throw<E>(self, error: impl FnOnce() -> E) -> Result<T, E>;
}

impl<T> OrThrow<T> for Option<T> {
    fn or_throw<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            Some(value) => Ok(value),
            None => Err(error()),
        }
    }
}
