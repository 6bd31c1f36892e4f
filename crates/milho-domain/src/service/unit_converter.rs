//! Weight to bag count conversion

/// Mass of one bag ("saca") in kilograms
pub const BAG_WEIGHT_KG: f64 = 60.0;

const KG_PER_TON: f64 = 1000.0;

const GRAMS_PER_KG: f64 = 1000.0;

/// Whole bags in `weight_tons` metric tons, at 60 kg per bag.
///
/// Partial bags are dropped. Negative or non-finite input is not a
/// supported value and yields 0.
pub fn weight_to_bag_count(weight_tons: f64) -> u64 {
    weight_to_bag_count_with(weight_tons, BAG_WEIGHT_KG)
}

/// Same as [`weight_to_bag_count`] with an explicit bag mass.
pub fn weight_to_bag_count_with(weight_tons: f64, bag_weight_kg: f64) -> u64 {
    if !weight_tons.is_finite() || weight_tons <= 0.0 || bag_weight_kg <= 0.0 {
        return 0;
    }
    // Weights are typed with at most gram precision; snap to the gram
    // so 4.02 t reads as 4020 kg and not 4019.9999...
    let kg = (weight_tons * KG_PER_TON * GRAMS_PER_KG).round() / GRAMS_PER_KG;
    (kg / bag_weight_kg).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_ton() {
        assert_eq!(weight_to_bag_count(1.0), 16);
    }

    #[test]
    fn test_zero_weight() {
        assert_eq!(weight_to_bag_count(0.0), 0);
    }

    #[test]
    fn test_single_bag_boundary() {
        assert_eq!(weight_to_bag_count(0.06), 1);
        assert_eq!(weight_to_bag_count(0.059), 0);
    }

    #[test]
    fn test_exact_multiples() {
        assert_eq!(weight_to_bag_count(1.5), 25);
        assert_eq!(weight_to_bag_count(30.0), 500);
    }

    #[test]
    fn test_decimal_tons_keep_whole_bags() {
        assert_eq!(weight_to_bag_count(4.02), 67);
        assert_eq!(weight_to_bag_count(8.04), 134);
        assert_eq!(weight_to_bag_count(16.38), 273);
        assert_eq!(weight_to_bag_count(32.16), 536);
        for k in 1..=2000u64 {
            let tons = (k as f64 * 0.06 * 1000.0).round() / 1000.0;
            assert_eq!(weight_to_bag_count(tons), k, "{} t", tons);
        }
    }

    #[test]
    fn test_unsupported_inputs_yield_zero() {
        assert_eq!(weight_to_bag_count(-2.0), 0);
        assert_eq!(weight_to_bag_count(f64::NAN), 0);
        assert_eq!(weight_to_bag_count_with(1.0, 0.0), 0);
    }

    #[test]
    fn test_custom_bag_weight() {
        assert_eq!(weight_to_bag_count_with(1.0, 50.0), 20);
    }
}
