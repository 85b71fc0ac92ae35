//! End-to-end tokenizer scenarios

use cuneiform_translit::translit::fragment::MarkerKind;
use cuneiform_translit::translit::slice::Position;
use cuneiform_translit::translit::testing::assert_word;
use cuneiform_translit::translit::{
    parse_word, parse_words, BreakdownType, Loader, ParagraphLanguage, StatusCode, StatusLevel,
    WordParser,
};
use rstest::rstest;

fn parse(text: &str) -> cuneiform_translit::translit::ParsedWord {
    parse_word(text, ParagraphLanguage::Hit)
}

#[test]
fn logogram_with_phonetic_complement() {
    assert_word(&parse("LUGAL-uš"))
        .is_ok()
        .fragment_count(2)
        .fragment(0, |f| f.kind(BreakdownType::Sumerogram).text("LUGAL"))
        .fragment(1, |f| f.kind(BreakdownType::Basic).text("-uš"));
}

#[rstest]
#[case("NINDA.GUR₄.RA")]
#[case("NINDA.GUR4.RA")]
fn dotted_sumerogram(#[case] input: &str) {
    assert_word(&parse(input))
        .is_ok()
        .fragment_count(1)
        .fragment(0, |f| {
            f.kind(BreakdownType::Sumerogram)
                .split_count(3)
                .text_starts_with("NINDA.")
                .text_contains("GUR₄")
                .text("NINDA.GUR₄.RA")
        });
}

#[test]
fn determinative_before_sumerogram() {
    assert_word(&parse("°MUNUS°ŠU.GI"))
        .is_ok()
        .fragment_count(2)
        .fragment(0, |f| f.kind(BreakdownType::Determinative).text("MUNUS"))
        .fragment(1, |f| f.kind(BreakdownType::Sumerogram).text("ŠU.GI"));
}

#[test]
fn akkadogram_spans_hyphens() {
    assert_word(&parse("_ŠI-PÁT"))
        .is_ok()
        .fragment_count(1)
        .fragment(0, |f| {
            f.kind(BreakdownType::Akkadogram)
                .split_count(2)
                .text("ŠI-PÁT")
        });
}

#[rstest]
#[case("°m.D°IŠKUR-šar-ru-um-ma")]
#[case("°m°°.°°D°IŠKUR-šar-ru-um-ma")]
fn personal_name_with_god_determinative(#[case] input: &str) {
    assert_word(&parse(input))
        .is_ok()
        .fragment_count(3)
        .fragment(0, |f| f.kind(BreakdownType::Determinative).text("m.D"))
        .fragment(1, |f| f.kind(BreakdownType::Sumerogram).text("IŠKUR"))
        .fragment(2, |f| f.kind(BreakdownType::Basic).text("-šar-ru-um-ma"));
}

#[rstest]
#[case("KAxU")]
#[case("KA×U")]
fn inscribed_sign(#[case] input: &str) {
    assert_word(&parse(input))
        .fragment_count(1)
        .fragment(0, |f| {
            f.kind(BreakdownType::Sumerogram)
                .text("KA×U")
                .raw_text("KA×U")
        });
}

#[rstest]
#[case("4")]
#[case("[3]0")]
#[case("n")]
fn numbers_beat_sumerograms(#[case] input: &str) {
    assert_word(&parse(input))
        .fragment_count(1)
        .fragment(0, |f| f.kind(BreakdownType::Number));
}

#[test]
fn god_number_is_a_sumerogram() {
    assert_word(&parse("°D°30"))
        .is_ok()
        .fragment_count(2)
        .fragment(0, |f| f.kind(BreakdownType::Determinative).text("D"))
        .fragment(1, |f| f.kind(BreakdownType::Sumerogram).text("30"));
}

#[test]
fn other_numbers_after_god_determinative_stay_numbers() {
    assert_word(&parse("°D°7"))
        .fragment_count(2)
        .fragment(1, |f| f.kind(BreakdownType::Number).text("7"));
}

#[test]
fn configured_god_numbers_are_honoured() {
    let config = Loader::new()
        .with_god_numbers(&[7])
        .unwrap()
        .build()
        .unwrap();
    let parser = WordParser::new(&config);
    assert_word(&parser.parse("°D°7", ParagraphLanguage::Hit))
        .fragment(1, |f| f.kind(BreakdownType::Sumerogram));
    assert_word(&parser.parse("°D°30", ParagraphLanguage::Hit))
        .fragment(1, |f| f.kind(BreakdownType::Number));
}

#[test]
fn numeral_inside_logogram_is_extracted() {
    assert_word(&parse("GÍN.4"))
        .fragment_count(2)
        .fragment(0, |f| f.kind(BreakdownType::Sumerogram).text("GÍN"))
        .fragment(1, |f| f.kind(BreakdownType::Number).text(".4"));
}

#[test]
fn preposition_is_an_akkadogram() {
    assert_word(&parse("A-NA"))
        .fragment_count(1)
        .fragment(0, |f| f.kind(BreakdownType::Akkadogram).text("A-NA"));
}

#[test]
fn sumerogram_then_akkadogram() {
    assert_word(&parse("LUGAL_ŠU"))
        .fragment_count(2)
        .fragment(0, |f| f.kind(BreakdownType::Sumerogram).text("LUGAL"))
        .fragment(1, |f| f.kind(BreakdownType::Akkadogram).text("ŠU"));
}

#[test]
fn gloss_joins_collection() {
    assert_word(&parse("ḫa-an°an°-da"))
        .is_ok()
        .fragment_count(1)
        .fragment(0, |f| {
            f.kind(BreakdownType::Basic)
                .text("ḫa-an")
                .member_count(2)
                .member(0, BreakdownType::Glossing, "an")
                .member(1, BreakdownType::Basic, "-da")
        });
}

#[test]
fn paired_erasure_markers_are_clean() {
    assert_word(&parse("*ša*"))
        .is_ok()
        .fragment(0, |f| f.position(Position::Initial));
}

#[test]
fn single_erasure_marker_is_reported() {
    assert_word(&parse("*ša"))
        .level(StatusLevel::Info)
        .has_code(StatusCode::Required)
        .fragment(0, |f| f.position(Position::End));
}

#[test]
fn erasure_spans_fragments() {
    assert_word(&parse("*LUGAL-uš*"))
        .is_ok()
        .fragment_count(2)
        .fragment(0, |f| f.position(Position::End))
        .fragment(1, |f| f.position(Position::Initial));
}

#[test]
fn fraction_glyph() {
    assert_word(&parse("½"))
        .fragment_count(1)
        .fragment(0, |f| f.is_fraction(1, 2));
}

#[test]
fn gap() {
    assert_word(&parse("¬¬¬"))
        .is_ok()
        .fragment(0, |f| f.is_gap());
}

#[test]
fn ligature_between_syllables() {
    assert_word(&parse("ša‿ra"))
        .fragment_count(3)
        .fragment(0, |f| f.kind(BreakdownType::Basic).text("ša"))
        .fragment(1, |f| f.is_ligature())
        .fragment(2, |f| f.kind(BreakdownType::Basic).text("ra"));
}

#[test]
fn sign_markers() {
    assert_word(&parse("{S:KA U}"))
        .fragment_count(2)
        .fragment(0, |f| f.is_marker(MarkerKind::Sign, "KA"))
        .fragment(1, |f| f.is_marker(MarkerKind::Sign, "U"));
}

#[rstest]
#[case("{K:a<b>...c½}", MarkerKind::Comment, "a<b>...c½")]
#[case("{F:x+_y}", MarkerKind::Footnote, "x+_y")]
fn marker_content_is_verbatim(#[case] input: &str, #[case] kind: MarkerKind, #[case] content: &str) {
    assert_word(&parse(input))
        .fragment_count(1)
        .fragment(0, |f| f.is_marker(kind, content).raw_text(input));
}

#[test]
fn text_around_marker_is_still_normalized() {
    assert_word(&parse("LUGAL+_ŠU{K:+_}"))
        .fragment_count(3)
        .fragment(0, |f| f.kind(BreakdownType::Sumerogram).text("LUGAL"))
        .fragment(1, |f| f.kind(BreakdownType::Akkadogram).text("ŠU"))
        .fragment(2, |f| f.is_marker(MarkerKind::Comment, "+_"));
}

#[test]
fn pure_evaluation_word() {
    assert_word(&parse("!"))
        .fragment_count(1)
        .fragment(0, |f| f.kind(BreakdownType::Basic).raw_text("!"));
}

#[rstest]
#[case("°°", StatusCode::Undefined)]
#[case("°a b°", StatusCode::Undefined)]
#[case("°Ab°", StatusCode::Malformed)]
fn undefined_degree_signs(#[case] input: &str, #[case] code: StatusCode) {
    assert_word(&parse(input))
        .level(StatusLevel::Error)
        .has_code(code)
        .fragment(0, |f| f.kind(BreakdownType::UndefinedDegreeSign));
}

#[test]
fn unclassifiable_text() {
    assert_word(&parse("Ab#"))
        .level(StatusLevel::Critical)
        .has_code(StatusCode::Parser)
        .fragment(0, |f| f.kind(BreakdownType::NotImplemented).raw_text("Ab#"));
}

#[test]
fn language_switch_reaches_next_word() {
    let parser = WordParser::default();
    let words = parse_words(&parser, ["@Akk", "_A-NA"], ParagraphLanguage::Hit);
    assert_word(&words[0]).language_change(None);
    assert_word(&words[1])
        .language_change(Some(ParagraphLanguage::Akk))
        .fragment(0, |f| f.kind(BreakdownType::Akkadogram).text("A-NA"));
}
