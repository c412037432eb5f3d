use crate::{
    error::ErrorKind,
    snbt::{self, ParseOpts, Parser},
    ByteArray, Compound, IntArray, List, Tag, TagType,
};

fn parse(input: &str) -> Tag {
    snbt::from_str(input).unwrap()
}

fn list(items: Vec<Tag>) -> Tag {
    Tag::List(List::try_from(items).unwrap())
}

fn err_kind(input: &str) -> ErrorKind {
    snbt::from_str(input).unwrap_err().kind().clone()
}

fn err_offset(input: &str) -> Option<usize> {
    snbt::from_str(input).unwrap_err().offset()
}

#[test]
fn test_num() {
    assert_eq!(parse("5b"), Tag::Byte(5));
    assert_eq!(parse("5B"), Tag::Byte(5));
    assert_eq!(parse("-20s"), Tag::Short(-20));
    assert_eq!(parse("5"), Tag::Int(5));
    assert_eq!(parse("+5"), Tag::Int(5));
    assert_eq!(parse("007"), Tag::Int(7));
    assert_eq!(parse("20l"), Tag::Long(20));
    assert_eq!(parse("20L"), Tag::Long(20));
    assert_eq!(parse("9223372036854775807l"), Tag::Long(i64::MAX));
    assert_eq!(parse("-128b"), Tag::Byte(i8::MIN));
}

#[test]
fn test_float() {
    assert_eq!(parse("3.14"), Tag::Float(3.14));
    assert_eq!(parse("3.14f"), Tag::Float(3.14));
    assert_eq!(parse("3.14d"), Tag::Double(3.14));
    assert_eq!(parse("3.14D"), Tag::Double(3.14));
    assert_eq!(parse("50."), Tag::Float(50.));
    assert_eq!(parse(".5"), Tag::Float(0.5));
    assert_eq!(parse("1e3"), Tag::Float(1000.));
    assert_eq!(parse("-5000.e-2f"), Tag::Float(-50.));
    assert_eq!(parse("1f"), Tag::Float(1.));
    assert_eq!(parse("1d"), Tag::Double(1.));
}

#[test]
fn decimal_point_makes_a_float_whatever_the_suffix() {
    assert_eq!(parse("1.5b"), Tag::Float(1.5));
    assert_eq!(parse("2e1l"), Tag::Float(20.));
}

#[test]
fn integer_out_of_range() {
    assert!(matches!(err_kind("300b"), ErrorKind::Syntax { .. }));
    assert!(matches!(err_kind("40000s"), ErrorKind::Syntax { .. }));
    assert!(matches!(err_kind("3000000000"), ErrorKind::Syntax { .. }));
    assert_eq!(err_offset("[1b,300b]"), Some(4));
}

#[test]
fn bare_strings() {
    assert_eq!(parse("hello"), Tag::String("hello".into()));
    assert_eq!(parse("no+.quo0tes"), Tag::String("no+.quo0tes".into()));
    assert_eq!(parse("1.2.3"), Tag::String("1.2.3".into()));
    assert_eq!(parse("true"), Tag::String("true".into()));
    assert_eq!(parse("inf"), Tag::String("inf".into()));
    assert_eq!(parse("NaN"), Tag::String("NaN".into()));
    // A lone suffix letter has nothing to be a suffix of.
    assert_eq!(parse("b"), Tag::String("b".into()));
    assert_eq!(parse("12ab"), Tag::String("12ab".into()));
    assert_eq!(parse("minecraft:stone"), Tag::String("minecraft:stone".into()));
}

#[test]
fn test_str() {
    assert_eq!(parse("\"simple\""), Tag::String("simple".into()));
    assert_eq!(parse("'single'"), Tag::String("single".into()));
    assert_eq!(parse("''"), Tag::String("".into()));
    assert_eq!(parse("'this\\'is a string'"), Tag::String("this'is a string".into()));
    assert_eq!(parse("'say \"hi\"'"), Tag::String("say \"hi\"".into()));
    assert_eq!(
        parse("\"yet\\\"ano\\\\\\\"ther\""),
        Tag::String("yet\"ano\\\"ther".into())
    );
    assert_eq!(parse("\"a,b}c]\""), Tag::String("a,b}c]".into()));
}

#[test]
fn json_escapes() {
    assert_eq!(parse(r#""a\nb\tc""#), Tag::String("a\nb\tc".into()));
    assert_eq!(parse(r#""é\/""#), Tag::String("é/".into()));
    assert_eq!(parse(r#""😀""#), Tag::String("😀".into()));
    assert_eq!(parse("\"raw\ttab\""), Tag::String("raw\ttab".into()));
}

#[test]
fn invalid_escape() {
    assert!(matches!(err_kind(r#""bad \x""#), ErrorKind::Syntax { .. }));
    assert_eq!(err_offset(r#"{a:"bad \q"}"#), Some(4));
}

#[test]
fn unterminated_string() {
    assert_eq!(
        err_kind("\"not closed"),
        ErrorKind::UnexpectedEndOfInput {
            expected: "'\"'".into()
        }
    );
    assert_eq!(
        err_kind("'trailing\\"),
        ErrorKind::UnexpectedEndOfInput {
            expected: "'''".into()
        }
    );
}

#[test]
fn test_map() {
    let tag = parse(r#"{foo:1,bar:"hi"}"#);
    let c = tag.as_compound().unwrap();

    assert_eq!(c.len(), 2);
    assert_eq!(c.get("foo"), Some(&Tag::Int(1)));
    assert_eq!(c.get("bar"), Some(&Tag::String("hi".into())));
    assert_eq!(c.keys().collect::<Vec<_>>(), ["foo", "bar"]);
}

#[test]
fn compound_keeps_insertion_order() {
    let tag = parse("{z:1,a:2,m:3,b:4}");
    let keys: Vec<_> = tag.as_compound().unwrap().keys().collect();
    assert_eq!(keys, ["z", "a", "m", "b"]);
}

#[test]
fn compound_keys() {
    let tag = parse(r#"{"a b":1, 'c':2, d e : 3, "x" : 4, :5, clé:6}"#);
    let keys: Vec<_> = tag.as_compound().unwrap().keys().collect();
    assert_eq!(keys, ["a b", "c", "d e", "x", "", "clé"]);
}

#[test]
fn bare_keys_run_to_the_colon() {
    let tag = parse("{a[0]:1,x,y:2,it's:3,k\"q\":4}");
    let keys: Vec<_> = tag.as_compound().unwrap().keys().collect();
    assert_eq!(keys, ["a[0]", "x,y", "it's", "k\"q\""]);

    let tag = parse("{ {b}: 1b }");
    assert_eq!(tag.as_compound().unwrap().get("{b}"), Some(&Tag::Byte(1)));
}

#[test]
fn bare_key_without_colon() {
    let colon = ErrorKind::UnexpectedEndOfInput {
        expected: "':'".into(),
    };
    assert_eq!(err_kind("{a}"), colon);
    assert_eq!(err_offset("{a}"), Some(3));
    assert_eq!(err_kind("{a:1,b}"), colon);
}

#[test]
fn nested() {
    let tag = parse("{a:{b:[{c:1b},{c:2b}]},d:[[1],[\"x\"]]}");

    let b: Compound = [("c", Tag::Byte(1))].into_iter().collect();
    let b2: Compound = [("c", Tag::Byte(2))].into_iter().collect();
    let a: Compound = [(
        "b",
        list(vec![Tag::Compound(b), Tag::Compound(b2)]),
    )]
    .into_iter()
    .collect();
    let d = list(vec![
        list(vec![Tag::Int(1)]),
        list(vec![Tag::String("x".into())]),
    ]);
    let expected: Compound = [("a", Tag::Compound(a)), ("d", d)].into_iter().collect();

    assert_eq!(tag, Tag::Compound(expected));
}

#[test]
fn whitespace_everywhere() {
    let tag = parse("  { a : 1 ,\n b : [ 1 , 2 ] ,\tc:[B; 1b , 2b ] }  ");
    let c = tag.as_compound().unwrap();

    assert_eq!(c.get("a"), Some(&Tag::Int(1)));
    assert_eq!(c.get("b"), Some(&list(vec![Tag::Int(1), Tag::Int(2)])));
    assert_eq!(
        c.get("c"),
        Some(&Tag::ByteArray(ByteArray::new(vec![1, 2])))
    );
}

#[test]
fn test_list() {
    assert_eq!(
        parse("[1b,2b,3b]"),
        list(vec![Tag::Byte(1), Tag::Byte(2), Tag::Byte(3)])
    );
    assert_eq!(
        parse("[\"a\",b,'c']"),
        list(vec![
            Tag::String("a".into()),
            Tag::String("b".into()),
            Tag::String("c".into())
        ])
    );
}

#[test]
fn test_bytearray() {
    assert_eq!(
        parse("[B;1b,2b,3b]"),
        Tag::ByteArray(ByteArray::new(vec![1, 2, 3]))
    );
    assert_eq!(
        parse("[b;1b,-2b,3B]"),
        Tag::ByteArray(ByteArray::new(vec![1, -2, 3]))
    );
}

#[test]
fn test_intarray() {
    assert_eq!(
        parse("[I;1,-2,3]"),
        Tag::IntArray(IntArray::new(vec![1, -2, 3]))
    );
    assert_eq!(parse("[i; 7 ]"), Tag::IntArray(IntArray::new(vec![7])));
}

#[test]
fn empty_containers() {
    assert_eq!(parse("{}"), Tag::Compound(Compound::new()));
    assert_eq!(parse("[]"), Tag::List(List::new()));
    assert_eq!(parse("[ ]"), Tag::List(List::new()));
    assert_eq!(parse("[B;]"), Tag::ByteArray(ByteArray::default()));
    assert_eq!(parse("[I;]"), Tag::IntArray(IntArray::default()));
}

#[test]
fn heterogeneous_list() {
    assert_eq!(
        err_kind(r#"[1,2,"x"]"#),
        ErrorKind::HeterogeneousList {
            expected: TagType::Int,
            found: TagType::String
        }
    );
    assert_eq!(err_offset(r#"[1,2,"x"]"#), Some(5));
    // Offsets count the whitespace trimmed from the front.
    assert_eq!(err_offset(r#"  [1,2,"x"]"#), Some(7));

    assert!(matches!(err_kind("[1b,1s]"), ErrorKind::HeterogeneousList { .. }));
    assert!(matches!(err_kind("[1.0f,1.0d]"), ErrorKind::HeterogeneousList { .. }));
    assert!(matches!(err_kind("[[],{}]"), ErrorKind::HeterogeneousList { .. }));
}

#[test]
fn array_element_type() {
    assert_eq!(
        err_kind("[B;1b,2,3b]"),
        ErrorKind::ArrayElementType {
            expected: TagType::Byte,
            found: TagType::Int
        }
    );
    assert_eq!(err_offset("[B;1b,2,3b]"), Some(6));

    assert_eq!(
        err_kind("[I;1,2b]"),
        ErrorKind::ArrayElementType {
            expected: TagType::Int,
            found: TagType::Byte
        }
    );
    assert!(matches!(err_kind("[I;[1]]"), ErrorKind::ArrayElementType { .. }));
}

#[test]
fn duplicate_key() {
    assert_eq!(err_kind("{a:1,a:2}"), ErrorKind::DuplicateKey("a".into()));
    assert_eq!(err_offset("{a:1,a:2}"), Some(5));
    assert_eq!(
        err_kind(r#"{a:1,"a":1}"#),
        ErrorKind::DuplicateKey("a".into())
    );

    // The same key at different levels is fine.
    assert!(snbt::from_str("{a:{a:1}}").is_ok());
}

#[test]
fn empty_value() {
    assert_eq!(err_kind(""), ErrorKind::EmptyValue);
    assert_eq!(err_kind("   "), ErrorKind::EmptyValue);
    assert_eq!(err_kind("{a:}"), ErrorKind::EmptyValue);
    assert_eq!(err_offset("{a:}"), Some(3));
    assert_eq!(err_kind("[1,]"), ErrorKind::EmptyValue);
    assert_eq!(err_kind("[1,,2]"), ErrorKind::EmptyValue);
}

#[test]
fn unexpected_end() {
    let close_compound = ErrorKind::UnexpectedEndOfInput {
        expected: "'}'".into(),
    };
    let close_list = ErrorKind::UnexpectedEndOfInput {
        expected: "']'".into(),
    };

    assert_eq!(err_kind("{"), close_compound);
    assert_eq!(err_kind("{a:1"), close_compound);
    assert_eq!(err_kind("{a:1,"), close_compound);
    assert_eq!(err_kind("{a:"), close_compound);
    assert_eq!(err_kind("["), close_list);
    assert_eq!(err_kind("[1,2"), close_list);
    assert_eq!(err_kind("[1,"), close_list);
    assert_eq!(err_kind("[B;1b"), close_list);
    assert_eq!(
        err_kind("{abc"),
        ErrorKind::UnexpectedEndOfInput {
            expected: "':'".into()
        }
    );
}

#[test]
fn syntax_errors() {
    let colon = ErrorKind::Syntax {
        expected: "':'".into(),
    };
    assert_eq!(err_kind("{\"a\" 1}"), colon);
    assert_eq!(err_offset("{\"a\" 1}"), Some(5));
    assert_eq!(err_kind("{'a'}"), colon);

    assert_eq!(
        err_kind("[\"a\" \"b\"]"),
        ErrorKind::Syntax {
            expected: "',' or ']'".into()
        }
    );
}

#[test]
fn trailing_input() {
    let end = ErrorKind::Syntax {
        expected: "end of input".into(),
    };
    assert_eq!(err_kind("{} x"), end);
    assert_eq!(err_offset("{} x"), Some(3));
    assert_eq!(err_kind("{a:1}}"), end);
    assert_eq!(err_kind("1]"), end);
    assert_eq!(err_kind("\"a\"b"), end);
}

#[test]
fn depth_limit() {
    let deep = "[".repeat(1000);
    assert_eq!(err_kind(&deep), ErrorKind::DepthLimitExceeded(512));

    let deep = "{a:".repeat(1000);
    assert_eq!(err_kind(&deep), ErrorKind::DepthLimitExceeded(512));

    let opts = ParseOpts::new().max_depth(2);
    assert!(snbt::from_str_with_opts("[[1]]", opts.clone()).is_ok());
    let err = snbt::from_str_with_opts("[[[1]]]", opts.clone()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::DepthLimitExceeded(2));
    assert_eq!(err.offset(), Some(2));
    assert!(snbt::from_str_with_opts("{a:{b:{}}}", opts).is_err());
}

#[test]
fn parser_direct() {
    let tag = Parser::new(" {a:1} ", ParseOpts::default()).parse().unwrap();
    assert_eq!(tag.as_compound().unwrap().get("a"), Some(&Tag::Int(1)));
}

#[test]
fn from_snbt_shortcut() {
    assert_eq!(crate::from_snbt("5b").unwrap(), Tag::Byte(5));
}
