use crate::{binary, snbt, test::builder::Builder, Tag, TagType};

/// Inputs that once broke, or that sit on edge cases of, the parsers. None
/// of these may panic.

#[test]
fn partial_input_causes_panic_if_in_string() {
    let input = Builder::new().start_compound("some long name").build();
    for end in 0..input.len() {
        assert!(binary::decode(&input[0..end]).is_err());
    }
}

#[test]
fn list_of_end() {
    let input = Builder::new()
        .start_compound("")
        .start_list("", TagType::End, 1)
        .tag(TagType::End)
        .end_compound()
        .build();

    assert!(binary::decode(&input).is_err());
}

#[test]
fn huge_list_of_end_does_not_allocate() {
    let input = Builder::new()
        .start_list("", TagType::End, i32::MAX)
        .build();

    assert!(binary::decode(&input).is_err());
}

#[test]
fn huge_list_of_compounds() {
    let input = Builder::new()
        .start_list("", TagType::Compound, i32::MAX)
        .end_compound()
        .build();

    assert!(binary::decode(&input).is_err());
}

#[test]
fn every_truncation_of_a_tree() {
    let input = Builder::new()
        .start_compound("root")
        .int_array("ints", &[1, 2, 3])
        .start_list("list", TagType::String, 2)
        .string_payload("a")
        .string_payload("bc")
        .long_array("longs", &[i64::MAX])
        .start_compound("inner")
        .double("d", 1.0)
        .end_compound()
        .end_compound()
        .build();

    assert!(binary::decode(&input).is_ok());
    for end in 0..input.len() {
        assert!(binary::decode(&input[..end]).is_err(), "truncated at {}", end);
    }
}

#[test]
fn snbt_multibyte_near_array_header() {
    for input in ["[é]", "[aé", "[é", "[B", "[B;", "[Bé", "{é", "{é:", "é"] {
        let _ = snbt::from_str(input);
    }
    assert_eq!(snbt::from_str("[é]").unwrap().tag_type(), TagType::List);
}

#[test]
fn snbt_lone_punctuation() {
    for input in [
        "{", "}", "[", "]", ",", "'", "\"", "{:", "{\"", "[,", "[B;,", "[]]", "{}}",
    ] {
        assert!(snbt::from_str(input).is_err(), "{:?} should fail", input);
    }
}

#[test]
fn snbt_escape_at_end_of_input() {
    assert!(snbt::from_str("\"\\").is_err());
    assert!(snbt::from_str("{\"a\\").is_err());
    assert!(snbt::from_str("[\"\\u12").is_err());
}

#[test]
fn snbt_sign_only_literals_are_strings() {
    assert_eq!(snbt::from_str("-").unwrap(), Tag::String("-".into()));
    assert_eq!(snbt::from_str("+d").unwrap(), Tag::String("+d".into()));
    assert_eq!(snbt::from_str(".f").unwrap(), Tag::String(".f".into()));
}

#[test]
fn snbt_deep_mixed_nesting() {
    let input = "[{a:".repeat(300);
    assert!(snbt::from_str(&input).is_err());
}
