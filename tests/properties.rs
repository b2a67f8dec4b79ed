//! Property-based tests for the letter substitution.

use keyshift::{
    boundary_crossings, classify, decode, decode_with_config, encode, encode_with_config,
    matches, CharClass, DecoderConfig, EncoderConfig, ShiftKeys, ShiftMode,
};
use proptest::prelude::*;

fn keys_strategy() -> impl Strategy<Value = ShiftKeys> {
    (any::<i64>(), any::<i64>()).prop_map(|(n, m)| ShiftKeys::new(n, m))
}

fn small_keys_strategy() -> impl Strategy<Value = ShiftKeys> {
    (-1000i64..1000, -1000i64..1000).prop_map(|(n, m)| ShiftKeys::new(n, m))
}

fn configs(mode: ShiftMode) -> (EncoderConfig, DecoderConfig) {
    (EncoderConfig { mode }, DecoderConfig { mode })
}

proptest! {
    #[test]
    fn test_length_and_order_preserved(text in any::<String>(), keys in keys_strategy()) {
        let encoded = encode(&text, keys);
        prop_assert_eq!(encoded.chars().count(), text.chars().count());
        for (src, enc) in text.chars().zip(encoded.chars()) {
            prop_assert_eq!(src.is_ascii_alphabetic(), enc.is_ascii_alphabetic());
        }
    }

    #[test]
    fn test_non_letters_unchanged(text in any::<String>(), keys in keys_strategy()) {
        let encoded = encode(&text, keys);
        let decoded = decode(&text, keys);
        for ((src, enc), dec) in text.chars().zip(encoded.chars()).zip(decoded.chars()) {
            if classify(src) == CharClass::Other {
                prop_assert_eq!(src, enc);
                prop_assert_eq!(src, dec);
            }
        }
    }

    #[test]
    fn test_case_preserved(text in "[a-zA-Z]{0,64}", keys in keys_strategy()) {
        let encoded = encode(&text, keys);
        for (src, enc) in text.chars().zip(encoded.chars()) {
            prop_assert_eq!(src.is_ascii_lowercase(), enc.is_ascii_lowercase());
        }
    }

    #[test]
    fn test_wide_roundtrip_restores_class_preserving_letters(
        text in "[a-zA-Z0-9 ,.!?\n]{0,64}",
        keys in small_keys_strategy()
    ) {
        let encoded = encode(&text, keys);
        let decoded = decode(&encoded, keys);
        for ((src, enc), dec) in text.chars().zip(encoded.chars()).zip(decoded.chars()) {
            if classify(src) == classify(enc) {
                prop_assert_eq!(src, dec);
            }
        }
        if boundary_crossings(&text, keys).is_empty() {
            prop_assert!(matches(&text, &decoded));
        }
    }

    #[test]
    fn test_half_mode_roundtrip(text in any::<String>(), keys in keys_strategy()) {
        let (enc, dec) = configs(ShiftMode::Half);
        let encoded = encode_with_config(&text, keys, &enc);
        let decoded = decode_with_config(&encoded, keys, &dec);
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn test_half_mode_class_closure(text in "[a-zA-Z]{0,64}", keys in keys_strategy()) {
        let (enc, _) = configs(ShiftMode::Half);
        let encoded = encode_with_config(&text, keys, &enc);
        for (src, out) in text.chars().zip(encoded.chars()) {
            prop_assert_eq!(classify(src), classify(out));
        }
    }
}
