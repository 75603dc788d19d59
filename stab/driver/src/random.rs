use crate::{conf::RandomConf, err::*};
use rand::Rng;

/// Draws `count` endpoint pairs within `[lower, upper]`, each at least `min_span` apart and
/// rounded to one decimal place.
pub fn endpoints(rng: &mut impl Rng, conf: &RandomConf, count: usize) -> Result<Vec<(f64, f64)>> {
    let RandomConf { lower, upper, min_span, .. } = *conf;
    if !(lower.is_finite() && upper.is_finite() && min_span.is_finite() && min_span >= 0.0)
        || lower + min_span > upper
    {
        return Err(SessionError::InvalidInput(format!(
            "cannot fit intervals of span {} between {} and {}",
            min_span, lower, upper
        )));
    }
    let round = |v: f64| (v * 10.0).round() / 10.0;
    Ok((0..count)
        .map(|_| {
            let left = rng.random_range(lower..=upper - min_span);
            let right = rng.random_range((left + min_span).min(upper)..=upper);
            (round(left), round(right))
        })
        .collect())
}
