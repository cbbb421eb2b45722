//! Generic vector-genome operators.
//!
//! Operators here are domain-agnostic: they work on any fixed-length gene
//! slice. Domain-specific perturbation (bit flips, promotion-kind redraws,
//! cardinality repair) lives with the problem that owns the gene domain.

use rand::Rng;

/// Single-point crossover for fixed-length genomes.
///
/// Picks a cut point in `1..n` and swaps the tails: the first child takes
/// `a`'s head and `b`'s tail, the second the reverse. Length-1 parents are
/// returned unchanged, since no interior cut point exists.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn single_point_crossover<G: Clone, R: Rng>(
    a: &[G],
    b: &[G],
    rng: &mut R,
) -> (Vec<G>, Vec<G>) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (a.to_vec(), b.to_vec());
    }

    let point = rng.random_range(1..n);
    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);
    child1.extend_from_slice(&a[..point]);
    child1.extend_from_slice(&b[point..]);
    child2.extend_from_slice(&b[..point]);
    child2.extend_from_slice(&a[point..]);

    (child1, child2)
}
