use smallvec::SmallVec;

/// Divisor list; most axis intervals have few enough divisors to stay inline.
pub type Divisors = SmallVec<[usize; 16]>;

/// Returns every positive divisor of `value` in ascending order, `1` and
/// `value` included. Zero has no divisors.
#[must_use]
pub fn factorize(value: usize) -> Divisors {
    let mut low = Divisors::new();
    let mut high = Divisors::new();
    let mut candidate = 1usize;
    while candidate.saturating_mul(candidate) <= value {
        if value % candidate == 0 {
            low.push(candidate);
            let pair = value / candidate;
            if pair != candidate {
                high.push(pair);
            }
        }
        candidate += 1;
    }

    low.extend(high.into_iter().rev());
    low
}

/// Returns the common difference of `indices` when consecutive entries are
/// evenly spaced. Needs at least two entries.
#[must_use]
pub fn even_spacing(indices: &[usize]) -> Option<usize> {
    if indices.len() < 2 {
        return None;
    }

    let diff = indices[1].checked_sub(indices[0])?;
    let even = indices
        .windows(2)
        .all(|pair| pair[1].checked_sub(pair[0]) == Some(diff));
    (even && diff > 0).then_some(diff)
}

/// Rounds half-way values toward positive infinity (`-0.5` becomes `0`,
/// `2.5` becomes `3`). Tick positions depend on this tie rule.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
