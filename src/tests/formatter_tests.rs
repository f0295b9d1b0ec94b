use crate::{classify, group_digits, render, render_tokens, tokenize, Field, FormatTemplate, NumberKind, Token};

use super::init_logging;

#[test]
fn tokens_consume_contiguous_slices() {
    init_logging();

    let parsed = classify("12345678").unwrap();
    let tokens = tokenize("{area} {number:2} {number:2} {number:3}", &parsed);
    assert_eq!(
        tokens,
        vec![
            Token { raw: "{area}".to_owned(), field: Field::Area, width: 1, start: 0, value: "1".to_owned() },
            Token { raw: "{number:2}".to_owned(), field: Field::Number, width: 2, start: 0, value: "23".to_owned() },
            Token { raw: "{number:2}".to_owned(), field: Field::Number, width: 2, start: 2, value: "45".to_owned() },
            Token { raw: "{number:3}".to_owned(), field: Field::Number, width: 3, start: 4, value: "678".to_owned() },
        ]
    );
}

#[test]
fn cursors_are_independent_per_field() {
    init_logging();

    let parsed = classify("31123456").unwrap();
    let rendered = render("{number:3}-{area:1}{area}-{number}", &parsed);
    assert_eq!(rendered, "123-031-456");
}

#[test]
fn unwidthed_token_swallows_the_rest() {
    init_logging();

    let parsed = classify("31123456").unwrap();
    let tokens = tokenize("{number:2} {number} {number:2}", &parsed);
    let values = tokens.iter().map(|token| token.value.as_str()).collect::<Vec<_>>();
    assert_eq!(values, vec!["12", "3456", ""]);
    assert_eq!(tokens[1].width, 4);
    assert_eq!(render("{number:2} {number} {number:2}", &parsed), "12 3456 ");
}

#[test]
fn widths_clamp_to_segment() {
    init_logging();

    let parsed = classify("31123456").unwrap();
    assert_eq!(render("{number:100}", &parsed), "123456");
    assert_eq!(render("{number:9}", &parsed), "123456");
    assert_eq!(render("{number:4}.{number:4}", &parsed), "1234.56");
    assert_eq!(render("{area:99999999999999999999999}", &parsed), "031");
}

#[test]
fn round_trip_without_widths() {
    init_logging();

    for canonical in ["12345678", "31123456"] {
        let parsed = classify(canonical).unwrap();
        let rendered = render("{area}{number}", &parsed);
        assert_eq!(rendered, format!("{}{}", parsed.area(), parsed.number()));
    }
    let fixed = classify("12345678").unwrap();
    assert_eq!(render("{area}{number}", &fixed), "12345678");
}

#[test]
fn text_without_tokens_is_unchanged() {
    init_logging();

    let parsed = classify("12345678").unwrap();
    for template in ["", "no tokens here", "{areas} {number:x} {nuber}", "{AREA}"] {
        assert_eq!(render(template, &parsed), template);
        assert!(tokenize(template, &parsed).is_empty());
    }
}

#[test]
fn render_tokens_pairs_output_and_tokens() {
    init_logging();

    let parsed = classify("41234567").unwrap();
    let (rendered, tokens) = render_tokens("+386 (0){area} {number:3} {number:3}", &parsed);
    assert_eq!(rendered, "+386 (0)041 234 567");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].value, "041");
}

#[test]
fn template_selection_by_kind() {
    let pair = FormatTemplate::from(["mobile", "fixed"]);
    assert_eq!(pair.select(NumberKind::Mobile), Some("mobile"));
    assert_eq!(pair.select(NumberKind::Fixed), Some("fixed"));

    let shared = FormatTemplate::from("shared");
    assert_eq!(shared.select(NumberKind::Mobile), Some("shared"));
    assert_eq!(shared.select(NumberKind::Fixed), Some("shared"));

    assert_eq!(FormatTemplate::default().select(NumberKind::Fixed), None);
    assert_eq!(FormatTemplate::from(""), FormatTemplate::Display);
    assert_eq!(FormatTemplate::from(None::<&str>), FormatTemplate::Display);
    assert_eq!(FormatTemplate::from(("m", "f")), FormatTemplate::ByKind { mobile: "m", fixed: "f" });
}

#[test]
fn group_digits_splits_in_order() {
    assert_eq!(group_digits("31123456", &[2, 3, 3]), "31 123 456");
    assert_eq!(group_digits("12345678", &[1, 2, 2, 3]), "1 23 45 678");
    assert_eq!(group_digits("1234", &[2, 3, 3]), "12 34 ");
}
