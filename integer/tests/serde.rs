use exactfp_int::{SBig, UBig};
use serde_test::{assert_de_tokens, assert_tokens, Configure, Token};

#[test]
fn ubig_serializes_as_decimal_string_when_human_readable() {
    assert_tokens(&UBig::from_u64(0).readable(), &[Token::Str("0")]);
    assert_tokens(&UBig::from_u64(17).readable(), &[Token::Str("17")]);
    assert_de_tokens(&UBig::from_u64(17).readable(), &[Token::Str("17")]);
}

#[test]
fn ubig_serializes_as_big_endian_bytes_when_compact() {
    assert_tokens(&UBig::from_u64(0).compact(), &[Token::Bytes(&[])]);
    assert_tokens(&UBig::from_u64(0x1234).compact(), &[Token::Bytes(&[0x12, 0x34])]);
}

#[test]
fn ubig_round_trips_through_json() {
    let n = UBig::from_u64(123_456_789_012_345);
    let json = serde_json::to_string(&n).unwrap();
    assert_eq!(serde_json::from_str::<UBig>(&json).unwrap(), n);
}

#[test]
fn sbig_serializes_as_decimal_string_when_human_readable() {
    assert_tokens(&SBig::from_i64(-17).readable(), &[Token::Str("-17")]);
    assert_tokens(&SBig::from_i64(17).readable(), &[Token::Str("17")]);
}

#[test]
fn sbig_serializes_as_two_complement_bytes_when_compact() {
    assert_tokens(&SBig::from_i64(17).compact(), &[Token::Bytes(&[17])]);
    assert_tokens(&SBig::from_i64(-17).compact(), &[Token::Bytes(&[0xef])]);
}

#[test]
fn sbig_round_trips_through_json() {
    let n = SBig::from_i64(-987_654_321);
    let json = serde_json::to_string(&n).unwrap();
    assert_eq!(serde_json::from_str::<SBig>(&json).unwrap(), n);
}
