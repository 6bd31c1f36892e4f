//! Brazilian phone number masking and validation

use super::mask::{digits_only, Mask, MaskStep};

const PHONE_MASK: Mask = Mask::new(&[
    // Landline
    MaskStep {
        max_len: 10,
        template: "(##) ####-####",
    },
    // Mobile
    MaskStep {
        max_len: 11,
        template: "(##) #####-####",
    },
]);

/// Mask as `(NN) NNNN-NNNN`, or `(NN) NNNNN-NNNN` once 11 digits exist.
pub fn format_phone(input: &str) -> String {
    PHONE_MASK.apply(&digits_only(input))
}

pub fn unformat_phone(input: &str) -> String {
    digits_only(input)
}

/// 10 or 11 digits, area code 11..=99, mobiles start with 9.
pub fn is_valid_phone(input: &str) -> bool {
    let digits = unformat_phone(input);
    if digits.len() != 10 && digits.len() != 11 {
        return false;
    }

    let area_code: u32 = match digits[..2].parse() {
        Ok(code) => code,
        Err(_) => return false,
    };
    if !(11..=99).contains(&area_code) {
        return false;
    }

    digits.len() == 10 || digits.as_bytes()[2] == b'9'
}
