//! CNPJ masking and check-digit validation

use super::mask::{digits_only, Mask, MaskStep};

pub const TAX_ID_LEN: usize = 14;

const TAX_ID_MASK: Mask = Mask::new(&[MaskStep {
    max_len: TAX_ID_LEN,
    template: "##.###.###/####-##",
}]);

/// Mask a CNPJ as `NN.NNN.NNN/NNNN-NN`, progressively.
pub fn format_tax_id(input: &str) -> String {
    TAX_ID_MASK.apply(&digits_only(input))
}

/// Digits only; no length enforcement.
pub fn unformat_tax_id(input: &str) -> String {
    digits_only(input)
}

/// Exactly 14 digits, not all identical, both check digits correct.
pub fn is_valid_tax_id(input: &str) -> bool {
    let digits: Vec<u32> = unformat_tax_id(input)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != TAX_ID_LEN {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..12], 5) == digits[12] && check_digit(&digits[..13], 6) == digits[13]
}

/// Modulo-11 check digit. Weights count down from `first_weight` to 2,
/// then wrap to 9.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let mut weight = first_weight;
    let mut sum = 0;
    for &d in digits {
        sum += d * weight;
        weight = if weight == 2 { 9 } else { weight - 1 };
    }
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
