//! Digit reduction to a single digit or a master number.

/// Master numbers, exempt from further reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Whether `n` is one of the master numbers 11, 22, 33.
pub const fn is_master(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

/// Sum of the decimal digits of `n`.
pub const fn sum_digits(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` by repeated digit summing until it is a single digit or a
/// master number.
///
/// Every step strictly decreases a value >= 10, so the loop terminates.
/// Inputs <= 9 (including 0) are returned unchanged.
pub const fn reduce(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = sum_digits(n);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_digits_known() {
        assert_eq!(sum_digits(0), 0);
        assert_eq!(sum_digits(7), 7);
        assert_eq!(sum_digits(2011), 4);
        assert_eq!(sum_digits(1996), 25);
        assert_eq!(sum_digits(u32::MAX), 57);
    }

    #[test]
    fn single_digits_unchanged() {
        for n in 0..=9 {
            assert_eq!(reduce(n), n);
        }
    }

    #[test]
    fn master_numbers_are_fixed_points() {
        for m in MASTER_NUMBERS {
            assert_eq!(reduce(m), m);
        }
    }

    #[test]
    fn twenty_nine_reduces_to_master_eleven() {
        assert_eq!(reduce(29), 11);
    }

    #[test]
    fn two_step_reduction() {
        // 1996 -> 25 -> 7
        assert_eq!(reduce(1996), 7);
        // 10 -> 1
        assert_eq!(reduce(10), 1);
    }

    #[test]
    fn reaches_master_through_chain() {
        // 4999 -> 31 -> 4; 9992 -> 29 -> 11
        assert_eq!(reduce(4999), 4);
        assert_eq!(reduce(9992), 11);
    }

    #[test]
    fn result_domain_and_idempotence() {
        for n in 1..=20_000u32 {
            let r = reduce(n);
            assert!((1..=9).contains(&r) || is_master(r), "reduce({n}) = {r}");
            assert_eq!(reduce(r), r, "not idempotent at {n}");
        }
    }

    #[test]
    fn large_input_terminates() {
        let r = reduce(u32::MAX);
        assert!((1..=9).contains(&r) || is_master(r));
    }
}
