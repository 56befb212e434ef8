//! Random draws shared by both transformers
//!
//! Every draw goes through an explicitly passed generator, so a seeded
//! generator reproduces the same edits.

use rand::Rng;

/// True with probability `p`
#[inline]
pub(crate) fn roll<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.random::<f64>() < p
}

/// Pick one of several mutually exclusive events, or none
///
/// Returns the index of the selected event; the remaining probability mass
/// (1 - sum) selects nothing.
#[inline]
pub(crate) fn pick_exclusive<R: Rng + ?Sized>(rng: &mut R, probabilities: &[f64]) -> Option<usize> {
    let draw = rng.random::<f64>();
    let mut cumulative = 0.0;
    for (index, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if draw < cumulative {
            return Some(index);
        }
    }
    None
}

/// Uniform choice from a non-empty slice
#[inline]
pub(crate) fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.random_range(0..items.len()))
    }
}

/// Side on which an inserted character or unit is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Before,
    After,
}

impl Side {
    #[inline]
    pub(crate) fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Side::Before
        } else {
            Side::After
        }
    }
}
