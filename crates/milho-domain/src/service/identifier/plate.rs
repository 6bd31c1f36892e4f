//! Vehicle plate masking and validation (legacy and Mercosul)

use super::mask::{alphanumeric_upper, Mask, MaskStep};

pub const PLATE_LEN: usize = 7;

const PLATE_MASK: Mask = Mask::new(&[MaskStep {
    max_len: PLATE_LEN,
    template: "###-####",
}]);

/// Uppercase, strip, truncate to 7 and hyphenate after the 3rd character.
pub fn format_plate(input: &str) -> String {
    PLATE_MASK.apply(&alphanumeric_upper(input))
}

pub fn unformat_plate(input: &str) -> String {
    alphanumeric_upper(input)
}

/// Legacy `LLLDDDD` or Mercosul `LLLDLDD`.
pub fn is_valid_plate(input: &str) -> bool {
    let plate = unformat_plate(input);
    let b = plate.as_bytes();
    if b.len() != PLATE_LEN {
        return false;
    }

    let prefix_ok = b[..3].iter().all(u8::is_ascii_uppercase);
    let suffix_ok = b[3].is_ascii_digit() && b[5..].iter().all(u8::is_ascii_digit);
    let legacy_or_mercosul = b[4].is_ascii_digit() || b[4].is_ascii_uppercase();

    prefix_ok && suffix_ok && legacy_or_mercosul
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_plate("abc1234"), "ABC-1234");
        assert_eq!(format_plate("abc1d23"), "ABC-1D23");
        assert_eq!(format_plate("ab"), "AB");
        assert_eq!(format_plate("abc"), "ABC");
        assert_eq!(format_plate("abc1"), "ABC-1");
        assert_eq!(format_plate("ABC-12345"), "ABC-1234");
        assert_eq!(format_plate(" a.b c*1 2 "), "ABC-12");
    }

    #[test]
    fn test_unformat() {
        assert_eq!(unformat_plate("abc-1d23"), "ABC1D23");
    }

    #[test]
    fn test_valid_plates() {
        assert!(is_valid_plate("ABC1234"));
        assert!(is_valid_plate("ABC1D23"));
        assert!(is_valid_plate("abc-1234"));
    }

    #[test]
    fn test_invalid_plates() {
        assert!(!is_valid_plate("AB12345"));
        assert!(!is_valid_plate("ABC123"));
        assert!(!is_valid_plate("ABCD123"));
        assert!(!is_valid_plate("ABC12D3"));
        assert!(!is_valid_plate("1BC1234"));
        assert!(!is_valid_plate(""));
    }
}
