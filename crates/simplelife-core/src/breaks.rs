//! Break suggestion picker.

use rand::Rng;

use crate::error::CoreError;

/// Pick one activity uniformly at random from `activities`.
///
/// Each call is independent; repeats across consecutive calls are allowed.
/// Generic over the RNG so callers can pass a seeded generator.
///
/// # Errors
/// Returns [`CoreError::EmptyPool`] when `activities` is empty.
pub fn suggest_break<'a, R: Rng + ?Sized>(
    activities: &'a [String],
    rng: &mut R,
) -> Result<&'a str, CoreError> {
    if activities.is_empty() {
        return Err(CoreError::EmptyPool);
    }
    let index = rng.gen_range(0..activities.len());
    Ok(activities[index].as_str())
}
