//! End-to-end parse of a realistic PO catalog: header with Russian
//! plural rules, contexts, multi-line continuations, escapes, plural
//! blocks, and a fuzzy-marked block that merges plurals into an entry
//! that already carries a translation.

use msgcat_po::{parse_bytes, parse_str, PoError};

const TEST_PO: &str = r##"
msgid ""
msgstr ""
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Language: ru\n"
"Plural-Forms:  nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);\n"

msgid "%d user likes this."
msgid_plural "%d users like this."
msgstr[0] "one"
msgstr[1] "few"
msgstr[2] "many"
msgstr[3] "other"

msgctxt "This is some context "
"about the string."
msgid "Accept language "
"%{accept_language} was rejected"
msgstr "Принять "
"языки %{accept_language} были отклонены"

msgctxt "Button label"
msgid "Log in"
msgstr "Войти"

msgctxt "Dialog title"
msgid "Log in"
msgstr "Вход в систему"

msgid "#This is a message with a # sign."
msgstr "#This is a translation with a # sign."

msgid "One piggy went to the market."
msgstr "Одна свинья ушла на рынок."

msgctxt "Context with plural"
msgid "One piggy went to the market."
msgstr "Одна свинья ушла на рынок."

#, fuzzy
msgctxt ""
"Context with plural"
msgid ""
"One piggy went to the market."
msgid_plural ""
"One piggy went to the market."
msgstr[0] ""
"Одна свинья ушла на рынок."
msgstr[1] ""
"%d свиньи пошли на рынок."
msgstr[2] "На рынок вышли %d поросят."
msgstr[3] "%d поросят вышли на рынок."
"##;

#[test]
fn header_entry_is_split_into_fields() {
    let catalog = parse_str(TEST_PO).expect("parse");

    assert_eq!(catalog.header("MIME-Version"), Some("1.0"));
    assert_eq!(catalog.header("Content-Type"), Some("text/plain; charset=UTF-8"));
    assert_eq!(catalog.header("Content-Transfer-Encoding"), Some("8bit"));
    assert_eq!(catalog.header("Language"), Some("ru"));
    assert_eq!(
        catalog.header("Plural-Forms"),
        Some(
            "nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);"
        )
    );

    let header = catalog.entry("", "").expect("header entry");
    assert_eq!(header.headers.len(), 5);
    assert_eq!(header.translation, None);
}

#[test]
fn default_context_entries() {
    let catalog = parse_str(TEST_PO).expect("parse");

    let piggy = catalog.entry("", "One piggy went to the market.").expect("entry");
    assert_eq!(piggy.translation.as_deref(), Some("Одна свинья ушла на рынок."));
    assert_eq!(piggy.plurals, None);

    let likes = catalog.entry("", "%d user likes this.").expect("entry");
    assert_eq!(likes.translation, None);
    assert_eq!(
        likes.plurals.as_deref(),
        Some(&["one", "few", "many", "other"].map(String::from)[..])
    );

    let hash = catalog
        .entry("", "#This is a message with a # sign.")
        .expect("a msgid starting with # is not a comment");
    assert_eq!(
        hash.translation.as_deref(),
        Some("#This is a translation with a # sign.")
    );
}

#[test]
fn contexts_are_isolated() {
    let catalog = parse_str(TEST_PO).expect("parse");

    assert_eq!(
        catalog
            .entry("Button label", "Log in")
            .and_then(|e| e.translation.as_deref()),
        Some("Войти")
    );
    assert_eq!(
        catalog
            .entry("Dialog title", "Log in")
            .and_then(|e| e.translation.as_deref()),
        Some("Вход в систему")
    );
    // No "Log in" in the default context.
    assert!(catalog.entry("", "Log in").is_none());
}

#[test]
fn multi_line_context_and_msgid_accumulate() {
    let catalog = parse_str(TEST_PO).expect("parse");
    let entry = catalog
        .entry(
            "This is some context about the string.",
            "Accept language %{accept_language} was rejected",
        )
        .expect("accumulated entry");
    assert_eq!(
        entry.translation.as_deref(),
        Some("Принять языки %{accept_language} были отклонены")
    );
}

#[test]
fn fuzzy_plural_block_merges_into_translated_entry() {
    let catalog = parse_str(TEST_PO).expect("parse");
    let entry = catalog
        .entry("Context with plural", "One piggy went to the market.")
        .expect("merged entry");

    assert_eq!(entry.translation.as_deref(), Some("Одна свинья ушла на рынок."));
    assert_eq!(
        entry.plurals.as_deref(),
        Some(
            &[
                "Одна свинья ушла на рынок.",
                "%d свиньи пошли на рынок.",
                "На рынок вышли %d поросят.",
                "%d поросят вышли на рынок.",
            ]
            .map(String::from)[..]
        )
    );
}

#[test]
fn serialized_catalog_matches_the_exported_json_shape() {
    let catalog = parse_str(TEST_PO).expect("parse");
    let exported = serde_json::to_value(&catalog).expect("serialize");

    let expected: serde_json::Value = serde_json::from_str(
        r##"{
    "": {
        "": {
            "Content-Transfer-Encoding": "8bit",
            "Content-Type": "text/plain; charset=UTF-8",
            "Language": "ru",
            "MIME-Version": "1.0",
            "Plural-Forms": "nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);"
        },
        "%d user likes this.": {
            "plurals": ["one", "few", "many", "other"]
        },
        "#This is a message with a # sign.": {
            "translation": "#This is a translation with a # sign."
        },
        "One piggy went to the market.": {
            "translation": "Одна свинья ушла на рынок."
        }
    },
    "Button label": {
        "Log in": { "translation": "Войти" }
    },
    "Context with plural": {
        "One piggy went to the market.": {
            "plurals": [
                "Одна свинья ушла на рынок.",
                "%d свиньи пошли на рынок.",
                "На рынок вышли %d поросят.",
                "%d поросят вышли на рынок."
            ],
            "translation": "Одна свинья ушла на рынок."
        }
    },
    "Dialog title": {
        "Log in": { "translation": "Вход в систему" }
    },
    "This is some context about the string.": {
        "Accept language %{accept_language} was rejected": {
            "translation": "Принять языки %{accept_language} были отклонены"
        }
    }
}"##,
    )
    .expect("expected JSON");

    assert_eq!(exported, expected);
}

#[test]
fn json_round_trip_preserves_the_catalog() {
    let catalog = parse_str(TEST_PO).expect("parse");
    let json = serde_json::to_string(&catalog).expect("serialize");
    let restored: msgcat_po::Catalog = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(catalog, restored);
}

#[test]
fn two_loads_of_the_same_bytes_are_equal() {
    let first = parse_bytes(TEST_PO.as_bytes()).expect("first");
    let second = parse_bytes(TEST_PO.as_bytes()).expect("second");
    assert_eq!(first, second);
}

#[test]
fn duplicate_translation_across_entries_fails() {
    let err = parse_str(concat!(
        "msgid \"piggy\"\n",
        "msgstr \"first\"\n",
        "\n",
        "msgid \"piggy\"\n",
        "msgstr \"second\"\n",
    ))
    .unwrap_err();
    assert!(matches!(err, PoError::DuplicateTranslation(id) if id == "piggy"));
}

#[test]
fn duplicate_header_key_fails() {
    let err = parse_str(concat!(
        "msgid \"\"\n",
        "msgstr \"Language: ru\\n\"\n",
        "\n",
        "msgid \"\"\n",
        "msgstr \"Language: en\\n\"\n",
    ))
    .unwrap_err();
    assert!(matches!(err, PoError::DuplicateHeaderKey(key) if key == "Language"));
}
