use midas_types::Point;

use crate::MidasError;

fn ensure_covers(first: usize, second: usize, what: &str) -> Result<(), MidasError> {
    if second < first {
        return Err(MidasError::invalid_arg(format!(
            "{what}: second series has {second} entries, first has {first}"
        )));
    }
    Ok(())
}

/// Zip two index-aligned series into pairs.
///
/// The result follows the length of `first`; extra entries in `second` are
/// ignored.
///
/// # Errors
/// Returns `Err(MidasError::InvalidArg)` if `second` is shorter than `first`.
pub fn merge_parallel<A: Clone, B: Clone>(
    first: &[A],
    second: &[B],
) -> Result<Vec<(A, B)>, MidasError> {
    ensure_covers(first.len(), second.len(), "merge_parallel")?;
    Ok(first.iter().cloned().zip(second.iter().cloned()).collect())
}

/// Zip x and y series into `{x, y}` points. Same length rule as [`merge_parallel`].
///
/// # Errors
/// Returns `Err(MidasError::InvalidArg)` if `y` is shorter than `x`.
pub fn merge_points<X: Clone, Y: Clone>(x: &[X], y: &[Y]) -> Result<Vec<Point<X, Y>>, MidasError> {
    ensure_covers(x.len(), y.len(), "merge_points")?;
    Ok(x.iter()
        .cloned()
        .zip(y.iter().cloned())
        .map(|(x, y)| Point { x, y })
        .collect())
}
