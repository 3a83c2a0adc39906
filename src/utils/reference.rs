use rand::Rng;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// Prefixed human-facing code, e.g. RNJ4K7TQ2 for a booking reference or
// RCT83HZQW1AB for a receipt number. Uniqueness is the caller's problem.
pub fn generate_code(prefix: &str, len: usize) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect();
    format!("{}{}", prefix, suffix)
}

pub fn booking_reference() -> String {
    generate_code("RNJ", 6)
}

pub fn receipt_number() -> String {
    generate_code("RCT", 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_reference_shape() {
        let code = booking_reference();
        assert_eq!(code.len(), 9);
        assert!(code.starts_with("RNJ"));
        assert!(code[3..]
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
    }

    #[test]
    fn receipt_number_shape() {
        let code = receipt_number();
        assert_eq!(code.len(), 11);
        assert!(code.starts_with("RCT"));
        assert!(code[3..]
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
    }
}
