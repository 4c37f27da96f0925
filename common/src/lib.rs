//! The `common` crate contains types and functionality shared between the
//! PRiVCY payment URI parser, the `privcy-uri` CLI, and wallet frontends.

/// `Amount`, a non-negative fixed-point quantity of PRIV.
pub mod amount;
/// `Denomination`, the units an [`Amount`] can be parsed or displayed in.
///
/// [`Amount`]: crate::amount::Amount
pub mod denomination;
/// Human-readable formatting for durations, timestamps, and rich text.
pub mod display;
/// Save-dialog filter strings and default file suffixes.
pub mod file_filter;
/// Fallback from CLI args to env vars.
pub mod or_env;

/// Feature-gated test utilities that can be shared across crate boundaries.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// A trait which allows us to apply functions (including tuple enum variants)
/// to non-[`Iterator`]/[`Result`]/[`Option`] values for cleaner iterator-like
/// chains. It exposes an [`apply`] method and is implemented for all `T`.
///
/// For example, instead of this:
///
/// ```ignore
/// let amount = Amount::from_units(units).context("Invalid amount")?;
/// let amount_str = format_in(Denomination::PRIV, amount);
/// ```
///
/// We can remove the useless `amount` intermediate variable:
///
/// ```ignore
/// let amount_str = Amount::from_units(units)
///     .context("Invalid amount")?
///     .apply(|amount| format_in(Denomination::PRIV, amount));
/// ```
///
/// [`apply`]: Apply::apply
pub trait Apply<F, T> {
    fn apply(self, f: F) -> T;
}

impl<F, T, U> Apply<F, U> for T
where
    F: FnOnce(T) -> U,
{
    #[inline]
    fn apply(self, f: F) -> U {
        f(self)
    }
}
