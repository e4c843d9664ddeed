//! A lazy, unbounded prime generator built on an incremental Sieve of
//! Eratosthenes.
//!
//! The classical sieve allocates a bit per integer up to some fixed limit.
//! The incremental variant has no limit: it walks the integers upward and
//! keeps a map from each upcoming composite to the primes that divide it
//! (its "witnesses"). When the walk reaches a composite, each witness is
//! moved forward to its next multiple and the entry is discarded, so the map
//! only ever holds one entry per prime discovered so far — O(π(√n)) space
//! rather than O(n).
//!
//! # Examples
//!
//! ```
//! use treewalk::sieve::Primes;
//!
//! let first_five: Vec<_> = Primes::new().take(5).collect();
//! assert_eq!(first_five, vec![2, 3, 5, 7, 11]);
//! ```

use std::collections::HashMap;

/// An infinite iterator over the prime numbers, ascending from 2.
///
/// The iterator never returns `None`; callers are responsible for stopping
/// consumption (with `take`, a bounded loop, and so on). Each instance owns
/// its own sieve state, so separate instances are fully independent.
///
/// # Examples
///
/// ```
/// use treewalk::sieve::Primes;
///
/// let mut primes = Primes::new();
/// assert_eq!(primes.next(), Some(2));
/// assert_eq!(primes.next(), Some(3));
///
/// // A fresh instance starts over.
/// assert_eq!(Primes::new().next(), Some(2));
/// ```
pub struct Primes {
    /// Maps an upcoming composite to the primes witnessing its
    /// compositeness. A prime `p` first appears here keyed at `p * p`; every
    /// smaller multiple of `p` already has a smaller prime factor on file.
    witnesses: HashMap<u64, Vec<u64>>,
    /// The next integer to test.
    q: u64,
}

impl Primes {
    /// Generates a new sieve positioned just before the first prime.
    pub fn new() -> Self {
        Self {
            witnesses: HashMap::new(),
            q: 2,
        }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let q = self.q;
            self.q += 1;

            match self.witnesses.remove(&q) {
                // Nothing marked q composite, so it is prime. Its first
                // multiple worth marking is q², everything smaller having a
                // smaller prime factor already.
                None => {
                    self.witnesses.insert(q * q, vec![q]);
                    return Some(q);
                }
                // q is composite: slide each witness forward to its next
                // multiple. Dropping q's entry is what keeps the map small.
                Some(primes) => {
                    for p in primes {
                        self.witnesses.entry(p + q).or_default().push(p);
                    }
                }
            }
        }
    }
}
