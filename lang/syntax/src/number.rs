/* --------------------------------- Numbers -------------------------------- */

/// Encode a number as a sign letter, binary digits and the `n` terminator.
///
/// Zero is written with a single `s` digit, matching what the assembler emits.
pub fn serialize_number(n: i64) -> String {
    let sign = if n < 0 { 't' } else { 's' };
    let digits: String = format!("{:b}", n.unsigned_abs())
        .chars()
        .map(|d| if d == '1' { 't' } else { 's' })
        .collect();
    format!("{sign}{digits}n")
}

/// Decode the letters of a number argument. The trailing `n` is optional and a
/// sign without digits is zero. Returns `None` on stray letters or overflow.
pub fn parse_number(code: &str) -> Option<i64> {
    let code = code.strip_suffix('n').unwrap_or(code);
    let mut chars = code.chars();
    let negative = match chars.next()? {
        | 's' => false,
        | 't' => true,
        | _ => return None,
    };
    // the magnitude of `i64::MIN` only fits unsigned
    let mut magnitude: u64 = 0;
    for c in chars {
        let bit = match c {
            | 's' => 0,
            | 't' => 1,
            | _ => return None,
        };
        magnitude = magnitude.checked_mul(2)?.checked_add(bit)?;
    }
    let magnitude = i128::from(magnitude);
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/* ------------------------------ Token names ------------------------------- */

/// Letter numerals in base 26: `A`, `B`, ..., `Z`, `BA`, `BB`, ...
pub fn alpha_token(n: usize) -> String {
    let mut digits = Vec::new();
    let mut n = n;
    loop {
        digits.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers() {
        assert_eq!(serialize_number(5), "ststn");
        assert_eq!(serialize_number(0), "ssn");
        assert_eq!(serialize_number(-2), "ttsn");
        assert_eq!(parse_number("ststn"), Some(5));
        assert_eq!(parse_number("ttsn"), Some(-2));
        assert_eq!(parse_number("sn"), Some(0));
        assert_eq!(parse_number("xsn"), None);
        assert_eq!(parse_number(&serialize_number(i64::MIN + 1)), Some(i64::MIN + 1));
    }

    #[test]
    fn number_extremes() {
        assert_eq!(parse_number(&serialize_number(i64::MIN)), Some(i64::MIN));
        assert_eq!(parse_number(&serialize_number(i64::MAX)), Some(i64::MAX));
        // 2^63 only fits when negative
        let two_to_63 = format!("st{}n", "s".repeat(63));
        assert_eq!(parse_number(&two_to_63), None);
        assert_eq!(parse_number(&two_to_63.replacen('s', "t", 1)), Some(i64::MIN));
        // 2^64 overflows the magnitude itself
        assert_eq!(parse_number(&format!("tt{}n", "s".repeat(64))), None);
    }

    #[test]
    fn tokens() {
        assert_eq!(alpha_token(0), "A");
        assert_eq!(alpha_token(25), "Z");
        assert_eq!(alpha_token(26), "BA");
        assert_eq!(alpha_token(27), "BB");
    }
}
