use barcode::{
    EncodeError, EncodeOptions, RenderStyle, SYMBOL_MODULES, SymbolEncoding, SymbologyRegistry,
    UpcA, compute_check_digit, encode_lines_to_batch, encode_upca,
};
use pretty_assertions::assert_eq;

fn bit_string(modules: &[barcode::BarModule]) -> String {
    modules
        .iter()
        .map(|m| if m.is_bar { '1' } else { '0' })
        .collect()
}

#[test]
fn check_digit_matches_the_worked_example() {
    assert_eq!(compute_check_digit("03600029145").unwrap(), 2);
}

#[test]
fn encode_accepts_the_matching_check_digit() {
    let sequence = encode_upca("036000291452", &EncodeOptions::default()).unwrap();
    assert_eq!(sequence.symbol_modules().len(), SYMBOL_MODULES);
    assert_eq!(sequence.value(), "036000291452");
}

#[test]
fn encode_rejects_a_wrong_check_digit() {
    let err = encode_upca("036000291459", &EncodeOptions::default()).unwrap_err();
    assert_eq!(err, EncodeError::ChecksumMismatch { supplied: 9, computed: 2 });
}

#[test]
fn encode_rejects_malformed_values() {
    assert_eq!(
        encode_upca("12345", &EncodeOptions::default()).unwrap_err(),
        EncodeError::BadLength(5)
    );
    assert_eq!(
        encode_upca("12345678901a", &EncodeOptions::default()).unwrap_err(),
        EncodeError::BadCharacter('a', 0x61, 12)
    );
}

#[test]
fn ascii01_rendering_exposes_the_standard_bit_pattern() {
    let options = EncodeOptions { quiet_zone_modules: 0, ..Default::default() };
    let sequence = encode_upca("036000291452", &options).unwrap();
    let rendered = sequence.render(RenderStyle::Ascii01);
    let expected = concat!(
        "101",
        "0001101", "0111101", "0101111", "0001101", "0001101", "0001101",
        "01010",
        "1101100", "1110100", "1100110", "1011100", "1001110", "1101100",
        "101",
    );
    assert_eq!(rendered.lines().nth(1).unwrap(), expected);
}

#[test]
fn encoding_is_pure_and_idempotent() {
    let first = encode_upca("01234567890", &EncodeOptions::default()).unwrap();
    let second = encode_upca("01234567890", &EncodeOptions::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.value(), "012345678905");
    assert_eq!(
        bit_string(first.symbol_modules()),
        bit_string(second.symbol_modules())
    );
}

#[test]
fn batch_encoding_skips_blank_lines() {
    let text = "036000291452\n\n  01234567890  \n";
    let batch = encode_lines_to_batch(&UpcA, text, &EncodeOptions::default()).unwrap();
    assert_eq!(batch.symbols.len(), 2);
    assert_eq!(batch.symbols[0].value(), "036000291452");
    assert_eq!(batch.symbols[1].value(), "012345678905");
}

#[test]
fn batch_encoding_fails_on_the_first_bad_value() {
    let text = "036000291452\nnot-a-upc\n";
    let err = encode_lines_to_batch(&UpcA, text, &EncodeOptions::default()).unwrap_err();
    assert_eq!(err, EncodeError::BadLength(9));
}

#[test]
fn registry_refuses_unimplemented_symbologies() {
    let err = SymbologyRegistry::get("code128").unwrap_err();
    assert_eq!(err, EncodeError::UnsupportedSymbology("code128".to_string()));
}

#[test]
fn registry_encoder_round_trips_through_the_trait() {
    let encoder = SymbologyRegistry::get("upc-a").unwrap();
    let sequence = encoder.encode("03600029145", &EncodeOptions::default()).unwrap();
    assert_eq!(sequence.symbology(), "UPC-A");
    assert_eq!(sequence.value(), "036000291452");
}

#[test]
fn serialized_sequence_carries_the_module_list() {
    let options = EncodeOptions { quiet_zone_modules: 0, ..Default::default() };
    let sequence = encode_upca("036000291452", &options).unwrap();
    let json: serde_json::Value = serde_json::from_str(
        &serde_json::to_string(&sequence).unwrap(),
    )
    .unwrap();
    assert_eq!(json["symbology"], "UPC-A");
    assert_eq!(json["value"], "036000291452");
    assert_eq!(json["modules"].as_array().unwrap().len(), SYMBOL_MODULES);
    assert_eq!(json["modules"][0]["is_bar"], true);
}
