use treewalk::sieve::Primes;

#[test]
fn there_are_168_primes_below_1000() {
    assert_eq!(Primes::new().take_while(|&p| p < 1000).count(), 168);
}

quickcheck::quickcheck! {
    /// Consecutive primes from the sieve bracket no other prime: every
    /// integer strictly between them has a divisor.
    fn no_primes_between_consecutive_primes(skip: u8) -> bool {
        let mut primes = Primes::new().skip(usize::from(skip));
        let (lo, hi) = (primes.next().unwrap(), primes.next().unwrap());

        lo < hi && (lo + 1..hi).all(|x| (2..x).any(|d| x % d == 0))
    }
}

quickcheck::quickcheck! {
    fn output_is_strictly_ascending(len: u8) -> bool {
        let primes: Vec<_> = Primes::new().take(usize::from(len)).collect();
        primes.windows(2).all(|w| w[0] < w[1])
    }
}
