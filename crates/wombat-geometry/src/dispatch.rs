//! The optional-value calling convention.
//!
//! Every accessor is one operation with an optional value: absent means
//! read, present means write and hand the written value back.

/// Read through `get` when `value` is `None`; otherwise write it through
/// `set` and return it.
///
/// The host is passed to whichever closure runs, so reads can borrow it
/// shared and writes mutably.
///
/// # Errors
///
/// Returns whatever error the chosen closure returns.
pub fn get_or_set<H: ?Sized, T: Copy, E>(
    host: &mut H,
    value: Option<T>,
    get: impl FnOnce(&H) -> Result<T, E>,
    set: impl FnOnce(&mut H, T) -> Result<(), E>,
) -> Result<T, E> {
    match value {
        Some(value) => {
            set(host, value)?;
            Ok(value)
        }
        None => get(host),
    }
}
