/// Field-name casing tests.
use jsonview_core::{change_field_name_case, FieldCase};

// ============================================================================
// Presets
// ============================================================================

#[test]
fn presets_on_mixed_name() {
    let name = "superWRMLTest-aaa";
    assert_eq!(FieldCase::Camel.apply(name), "SuperWRMLTestAaa");
    assert_eq!(FieldCase::LowerCamel.apply(name), "superWRMLTestAaa");
    assert_eq!(FieldCase::Snake.apply(name), "super_wrml_test_aaa");
    assert_eq!(FieldCase::Kebab.apply(name), "super-wrml-test-aaa");
    assert_eq!(FieldCase::Train.apply(name), "super-wrml-test-aaa");
    assert_eq!(FieldCase::ScreamingSnake.apply(name), "SUPER_WRML_TEST_AAA");
}

#[test]
fn snake_to_camel() {
    assert_eq!(FieldCase::Camel.apply("user_id"), "UserId");
    assert_eq!(FieldCase::LowerCamel.apply("user_id"), "userId");
    assert_eq!(FieldCase::LowerCamel.apply("USER_ID"), "uSERID");
}

#[test]
fn kebab_to_snake() {
    assert_eq!(FieldCase::Snake.apply("created-at"), "created_at");
    assert_eq!(FieldCase::ScreamingSnake.apply("created-at"), "CREATED_AT");
}

#[test]
fn pascal_to_kebab() {
    assert_eq!(FieldCase::Kebab.apply("HTTPServerError"), "http-server-error");
}

#[test]
fn single_words() {
    assert_eq!(FieldCase::Camel.apply("name"), "Name");
    assert_eq!(FieldCase::Snake.apply("Name"), "name");
    assert_eq!(FieldCase::ScreamingSnake.apply("name"), "NAME");
}

#[test]
fn empty_name_stays_empty() {
    for case in FieldCase::ALL {
        assert_eq!(case.apply(""), "", "{case}");
    }
}

#[test]
fn doubled_separators_keep_empty_word() {
    assert_eq!(FieldCase::Snake.apply("a--b"), "a__b");
    assert_eq!(FieldCase::Camel.apply("a__b"), "AB");
}

#[test]
fn train_matches_kebab() {
    for name in ["fooBar", "foo_bar", "FOOBar", "x"] {
        assert_eq!(FieldCase::Train.apply(name), FieldCase::Kebab.apply(name));
    }
}

// ============================================================================
// Primitive and names
// ============================================================================

#[test]
fn primitive_combines_flags() {
    assert_eq!(
        change_field_name_case("fooBarBaz", true, false, false, "."),
        "Foo.bar.baz"
    );
    assert_eq!(
        change_field_name_case("fooBarBaz", false, true, true, " "),
        "FOO BAR BAZ"
    );
}

#[test]
fn names_parse_back() {
    for case in FieldCase::ALL {
        assert_eq!(case.name().parse::<FieldCase>(), Ok(case));
    }
}

#[test]
fn unknown_name_lists_choices() {
    let err = "title".parse::<FieldCase>().unwrap_err();
    assert!(err.contains("title"));
    assert!(err.contains("screaming-snake"));
}
