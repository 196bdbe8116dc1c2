/// Folds `s` into a `u32` with the `acc * 31 + unit` string hash.
///
/// Characters are taken as UTF-16 code units and every step wraps at 32 bits.
/// Truncating to a signed 32-bit value and reinterpreting it as unsigned at the
/// end yields the same bits as wrapping unsigned arithmetic throughout.
/// Not collision resistant.
pub fn hash_to_u32(s: &str) -> u32 {
    s.encode_utf16().fold(0u32, |acc, unit| {
        // (acc << 5) - acc == acc * 31
        acc.wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(u32::from(unit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_vectors() {
        assert_eq!(hash_to_u32(""), 0);
        assert_eq!(hash_to_u32("a"), 97);
        assert_eq!(hash_to_u32("abc"), 96_354);
        assert_eq!(hash_to_u32("12345"), 46_792_755);
        assert_eq!(hash_to_u32("hello world"), 1_794_106_052);
    }

    #[test]
    fn wraps_past_signed_overflow() {
        // The signed accumulator goes negative here; the result is its unsigned view.
        assert_eq!(hash_to_u32("abc|{count:5,unique:true}"), 4_006_672_009);
        assert_eq!(hash_to_u32("12345|undefined"), 1_301_006_535);
    }

    #[test]
    fn hashes_utf16_code_units() {
        assert_eq!(hash_to_u32("h\u{e9}llo"), 103_094_734);
        // Surrogate pair, two units.
        assert_eq!(hash_to_u32("\u{1F600}"), 1_772_899);
    }

    #[test]
    fn is_deterministic() {
        for input in ["", "seed", "a much longer seed string with spaces|{k:v}"] {
            assert_eq!(hash_to_u32(input), hash_to_u32(input));
        }
    }
}
