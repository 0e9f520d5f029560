//! Input masks for Brazilian document, postal-code, and phone formats.
//!
//! Each mask strips non-digits and re-inserts the fixed separators when the
//! digit count matches the canonical length. Inputs with any other digit
//! count come back as bare digits so field validation can reject them.

/// Keeps only ASCII digits.
pub fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `12345678900` -> `123.456.789-00`
pub fn format_cpf(value: &str) -> String {
    let d = digits(value);
    if d.len() != 11 {
        return d;
    }
    format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
}

/// `01234567` -> `01234-567`
pub fn format_cep(value: &str) -> String {
    let d = digits(value);
    if d.len() != 8 {
        return d;
    }
    format!("{}-{}", &d[0..5], &d[5..8])
}

/// `11987654321` -> `(11) 98765-4321`; landlines keep the 4+4 split.
pub fn format_phone(value: &str) -> String {
    let d = digits(value);
    match d.len() {
        10 => format!("({}) {}-{}", &d[0..2], &d[2..6], &d[6..10]),
        11 => format!("({}) {}-{}", &d[0..2], &d[2..7], &d[7..11]),
        _ => d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_mask_inserts_separators() {
        assert_eq!(format_cpf("12345678900"), "123.456.789-00");
        // Already-masked input is normalized through the same path.
        assert_eq!(format_cpf("123.456.789-00"), "123.456.789-00");
    }

    #[test]
    fn cep_mask_inserts_separator() {
        assert_eq!(format_cep("01234567"), "01234-567");
        assert_eq!(format_cep("01234-567"), "01234-567");
    }

    #[test]
    fn phone_mask_handles_mobile_and_landline_lengths() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("1187654321"), "(11) 8765-4321");
    }

    #[test]
    fn wrong_digit_counts_fall_through_as_digits() {
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cep("0123456"), "0123456");
        assert_eq!(format_phone("119876"), "119876");
    }
}
