// Unit conversion between hastings and siacoins
//
// One siacoin is 10^24 hastings. Amounts are arbitrary-precision decimals;
// converting through native floats would lose precision long before typical
// wallet balances.

use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;

/// Number of hastings in one siacoin (10^24).
pub static HASTINGS_PER_SIACOIN: Lazy<BigDecimal> = Lazy::new(|| {
    "1000000000000000000000000"
        .parse()
        .expect("constant parses")
});

/// Convert a siacoin amount to hastings.
///
/// Negative amounts are passed through the same arithmetic; whether they
/// mean anything is siad's concern, not this wrapper's.
pub fn siacoins_to_hastings(siacoins: &BigDecimal) -> BigDecimal {
    (siacoins * &*HASTINGS_PER_SIACOIN).normalized()
}

/// Convert a hastings amount to siacoins.
///
/// Dividing by 10^24 is a pure scale shift on the decimal representation,
/// so the result is exact at any magnitude.
pub fn hastings_to_siacoins(hastings: &BigDecimal) -> BigDecimal {
    let (digits, scale) = hastings.as_bigint_and_exponent();
    BigDecimal::new(digits, scale + 24).normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn converts_siacoins_to_hastings() {
        assert_eq!(
            siacoins_to_hastings(&dec("1")),
            dec("1000000000000000000000000")
        );
        assert_eq!(
            siacoins_to_hastings(&dec("0.5")),
            dec("500000000000000000000000")
        );
        assert_eq!(siacoins_to_hastings(&dec("0")), dec("0"));
    }

    #[test]
    fn converts_hastings_to_siacoins() {
        assert_eq!(
            hastings_to_siacoins(&dec("1000000000000000000000000")),
            dec("1")
        );
        assert_eq!(
            hastings_to_siacoins(&dec("1")),
            dec("0.000000000000000000000001")
        );
    }

    #[test]
    fn converts_random_integer_magnitudes() {
        // For integer siacoin amounts the expected hastings value can be
        // built independently by appending 24 zeros.
        let mut rng = rand::thread_rng();
        for _ in 0..999 {
            let n: u64 = rng.gen();
            let expected = dec(&format!("{}{}", n, "0".repeat(24)));
            assert_eq!(siacoins_to_hastings(&BigDecimal::from(n)), expected);
            assert_eq!(hastings_to_siacoins(&expected), BigDecimal::from(n));
        }
    }

    #[test]
    fn round_trips_random_fractional_amounts() {
        let mut rng = rand::thread_rng();
        for _ in 0..999 {
            let whole: u64 = rng.gen();
            let frac: u32 = rng.gen_range(0..100_000);
            let amount = dec(&format!("{}.{:05}", whole, frac));
            assert_eq!(hastings_to_siacoins(&siacoins_to_hastings(&amount)), amount);
            assert_eq!(siacoins_to_hastings(&hastings_to_siacoins(&amount)), amount);
        }
    }

    #[test]
    fn does_not_drift_across_repeated_round_trips() {
        let original = dec("1337338498282837188273");
        let mut converted = original.clone();
        for _ in 0..10_000 {
            converted = hastings_to_siacoins(&siacoins_to_hastings(&converted));
        }
        assert_eq!(converted, original);
        // Normalization keeps the textual representation stable too.
        assert_eq!(
            converted.as_bigint_and_exponent(),
            original.as_bigint_and_exponent()
        );
    }

    #[test]
    fn negative_amounts_pass_through() {
        assert_eq!(
            siacoins_to_hastings(&dec("-2")),
            dec("-2000000000000000000000000")
        );
        assert_eq!(
            hastings_to_siacoins(&dec("-2000000000000000000000000")),
            dec("-2")
        );
    }
}
