//! Perturbation kicks used to leave a 2-opt local optimum.

use rand::Rng;

/// Tours shorter than this are kicked with a segment reversal instead of a double bridge.
pub const DOUBLE_BRIDGE_MIN_LEN: usize = 8;

/// Reverse a random segment of at least two targets.
pub fn reverse_random_segment<R: Rng + ?Sized>(tour: &mut [usize], rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }

    let start = rng.gen_range(0..n - 1);
    let end = rng.gen_range(start + 2..=n);
    tour[start..end].reverse();
}

/// Cut the tour into four pieces `A B C D` and reconnect them as `A C B D`.
///
/// A single 2-opt move cannot undo this, so the following descent explores a new basin.
pub fn double_bridge<R: Rng + ?Sized>(tour: &mut Vec<usize>, rng: &mut R) {
    let n = tour.len();
    if n < DOUBLE_BRIDGE_MIN_LEN {
        reverse_random_segment(tour, rng);
        return;
    }

    let mut cuts = [
        rng.gen_range(1..n),
        rng.gen_range(1..n),
        rng.gen_range(1..n),
    ];
    cuts.sort_unstable();
    let [p1, p2, p3] = cuts;
    if p1 == p2 || p2 == p3 {
        reverse_random_segment(tour, rng);
        return;
    }

    let mut kicked = Vec::with_capacity(n);
    kicked.extend_from_slice(&tour[..p1]);
    kicked.extend_from_slice(&tour[p2..p3]);
    kicked.extend_from_slice(&tour[p1..p2]);
    kicked.extend_from_slice(&tour[p3..]);
    *tour = kicked;
}

/// Apply the kick suited to the tour length.
pub fn perturb<R: Rng + ?Sized>(tour: &mut Vec<usize>, rng: &mut R) {
    if tour.len() >= DOUBLE_BRIDGE_MIN_LEN {
        double_bridge(tour, rng);
    } else {
        reverse_random_segment(tour, rng);
    }
}
