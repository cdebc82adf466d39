// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use serde_json::json;

const SINGLE: &str = r#"r"""usage: prog [-v]
"""
$ prog -v
{"-v": true}
"""#;

fn all_cases(sections: &[Section]) -> Vec<&Case> {
    sections.iter().flat_map(|s| s.cases.iter()).collect()
}

#[test]
fn parse_single_section_single_case() {
    let sections = parse(SINGLE).unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].name, "");
    assert_eq!(sections[0].doc, "usage: prog [-v]\n");
    assert_eq!(
        sections[0].cases,
        vec![Case {
            prog: "prog".to_string(),
            argv: "-v".to_string(),
            expected: Outcome::Parsed(json!({"-v": true})),
        }]
    );
}

#[test]
fn unterminated_doc_swallows_examples() {
    // No `"""` closes the usage text, so the prompt lines belong to the doc.
    let sections = parse("r\"\"\"usage: prog [-v]\n$ prog -v\n{\"-v\": true}\n\"\"\"\n").unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].doc, "usage: prog [-v]\n$ prog -v\n{\"-v\": true}");
    assert!(sections[0].cases.is_empty());
}

#[test]
fn trailing_triple_quote_is_dropped() {
    let with_quote = parse("r\"\"\"Usage: prog\n\"\"\"\n$ prog\n{}\n\"\"\"\n").unwrap();
    let without_quote = parse("r\"\"\"Usage: prog\n\"\"\"\n$ prog\n{}\n").unwrap();

    assert_eq!(with_quote, without_quote);
}

#[test]
fn parse_user_error_sentinel() {
    let sections = parse(
        r#"r"""usage: prog [-v]
"""
$ prog -x
"user-error"
"#,
    )
    .unwrap();

    assert_eq!(sections[0].cases[0].argv, "-x");
    assert_eq!(sections[0].cases[0].expected, Outcome::UserError);
}

#[test]
fn parse_multiple_sections_in_order() {
    let sections = parse(
        r#"r"""Usage: prog

"""
$ prog
{}

$ prog --xxx
"user-error"


r"""Usage: prog [options]

Options: -a  All.

"""
$ prog -a
{"-a": true}
"#,
    )
    .unwrap();

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].doc, "Usage: prog\n\n");
    assert_eq!(sections[0].cases.len(), 2);
    assert_eq!(sections[1].doc, "Usage: prog [options]\n\nOptions: -a  All.\n\n");
    assert_eq!(sections[1].cases.len(), 1);

    let argvs: Vec<&str> = all_cases(&sections).iter().map(|c| c.argv.as_str()).collect();
    assert_eq!(argvs, vec!["", "--xxx", "-a"]);
}

#[test]
fn invocation_without_arguments_has_empty_argv() {
    let sections = parse("r\"\"\"Usage: prog\n\"\"\"\n$ prog\n{}\n").unwrap();
    let case = &sections[0].cases[0];

    assert_eq!(case.prog, "prog");
    assert_eq!(case.argv, "");
    assert_eq!(case.expected, Outcome::Parsed(json!({})));
    assert_eq!(case.command_line(), "prog ");
}

#[test]
fn argv_is_passed_through_unmodified() {
    let sections = parse(
        "r\"\"\"Usage: prog <a>...\n\"\"\"\n$ prog   x  'y z'\t--w\n{\"<a>\": [\"x\"]}\n",
    )
    .unwrap();

    assert_eq!(sections[0].cases[0].argv, "  x  'y z'\t--w");
}

#[test]
fn comments_are_stripped_everywhere() {
    let sections = parse(
        r#"# leading comment
r"""Usage: prog [-v]  # trailing comment in usage

"""
# comment between examples
$ prog -v  # comment on invocation
{"-v": true}  # comment after JSON
"#,
    )
    .unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].doc, "Usage: prog [-v]  \n\n");
    let case = &sections[0].cases[0];
    assert_eq!(case.argv, "-v");
    assert_eq!(case.expected, Outcome::Parsed(json!({"-v": true})));
}

#[test]
fn hash_inside_json_string_is_stripped_too() {
    // Global comment stripping truncates the JSON, which then fails to decode.
    let err = parse("r\"\"\"Usage: prog <a>\n\"\"\"\n$ prog x\n{\"<a>\": \"#x\"}\n").unwrap_err();
    assert!(matches!(err, FixtureError::InvalidExpectation { .. }));
}

#[test]
fn leading_plain_triple_quote_is_dropped() {
    let sections = parse(
        r#""""Leading notes about this file.
"""

r"""Usage: prog
"""
$ prog
{}
"#,
    )
    .unwrap();

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].doc, "Leading notes about this file.\n");
    assert!(sections[0].cases.is_empty());
    assert_eq!(sections[1].cases.len(), 1);
}

#[test]
fn leading_fragment_examples_are_not_cases() {
    let sections = parse("preamble\n$ prog\n{}\nr\"\"\"Usage: prog\n\"\"\"\n").unwrap();

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].doc, "preamble\n$ prog\n{}\n");
    assert!(all_cases(&sections).is_empty());
}

#[test]
fn text_before_first_prompt_is_preamble() {
    let sections = parse(
        r#"r"""Usage: prog
"""
Some prose that is not an example.
$ prog
{}
"#,
    )
    .unwrap();

    assert_eq!(sections[0].cases.len(), 1);
}

#[test]
fn section_without_examples_is_legal() {
    let sections = parse("r\"\"\"Usage: prog\n\"\"\"\n").unwrap();

    assert_eq!(sections.len(), 1);
    assert!(sections[0].cases.is_empty());
}

#[test]
fn section_without_closing_quote_has_no_examples() {
    let sections = parse("r\"\"\"Usage: prog\n$ prog\n{}\n").unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].doc, "Usage: prog\n$ prog\n{}");
    assert!(sections[0].cases.is_empty());
}

#[test]
fn empty_doc_is_legal() {
    let sections = parse("r\"\"\"\"\"\"\n$ prog\n{}\n").unwrap();

    assert_eq!(sections[0].doc, "");
    assert_eq!(sections[0].cases.len(), 1);
}

#[test]
fn whitespace_only_fixture_has_no_sections() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("  \n\t\n  ").unwrap().is_empty());
    assert!(parse("# only a comment\n").unwrap().is_empty());
}

#[test]
fn crlf_line_endings_are_tolerated() {
    let sections = parse("r\"\"\"Usage: prog [-v]\r\n\"\"\"\r\n$ prog -v\r\n{\"-v\": true}\r\n").unwrap();
    let case = &sections[0].cases[0];

    assert_eq!(case.argv, "-v");
    assert_eq!(case.expected, Outcome::Parsed(json!({"-v": true})));
}

#[test]
fn invalid_json_fails_the_fixture() {
    let err = parse(
        r#"r"""usage: prog [-v]
"""
$ prog -v
{"-v": true}

$ prog
{"a": 1,}
"#,
    )
    .unwrap_err();

    match err {
        FixtureError::InvalidExpectation {
            section,
            case,
            invocation,
            ..
        } => {
            assert_eq!(section, 1);
            assert_eq!(case, 2);
            assert_eq!(invocation, "prog");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_expectation_fails_the_fixture() {
    let err = parse("r\"\"\"Usage: prog\n\"\"\"\n$ prog").unwrap_err();
    assert!(matches!(err, FixtureError::InvalidExpectation { case: 1, .. }));
}

#[test]
fn error_message_names_the_case() {
    let err = parse("r\"\"\"Usage: prog\n\"\"\"\n$ prog -q\nnope\n").unwrap_err();
    let message = err.to_string();

    assert!(message.starts_with("section 1, case 1 (`prog -q`): invalid expected result:"));
}

#[test]
fn fixture_file_base_name_drops_extension() {
    let file = FixtureFile::from_source("tests/fixtures/testcases.docopt", SINGLE);

    assert_eq!(file.base_name(), "testcases");
    assert_eq!(file.sections().unwrap().len(), 1);
}

#[test]
fn fixture_file_read_missing_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FixtureFile::read(&dir.path().join("test_missing.docopt")).unwrap_err();

    assert!(matches!(err, FixtureError::Io { .. }));
    assert!(err.to_string().contains("test_missing.docopt"));
}

#[derive(Debug, Clone)]
struct GenCase {
    prog: String,
    argv: String,
    user_error: bool,
}

fn gen_case() -> impl Strategy<Value = GenCase> {
    ("[a-z]{1,6}", "[a-z<>\\-= ]{0,12}", any::<bool>()).prop_map(|(prog, argv, user_error)| {
        GenCase {
            prog,
            argv,
            user_error,
        }
    })
}

fn gen_fixture() -> impl Strategy<Value = (String, Vec<usize>)> {
    let section = ("[A-Za-z:\\[\\]<> \\-\n]{0,40}", prop::collection::vec(gen_case(), 0..5));
    prop::collection::vec(section, 0..5).prop_map(|sections| {
        let mut text = String::new();
        let mut counts = Vec::new();
        for (doc, cases) in sections {
            text.push_str("r\"\"\"Usage: ");
            text.push_str(&doc);
            text.push_str("\n\"\"\"\n");
            for case in &cases {
                text.push_str(&format!("$ {} {}\n", case.prog, case.argv));
                if case.user_error {
                    text.push_str("\"user-error\"\n\n");
                } else {
                    text.push_str(&format!("{{\"<prog>\": \"{}\"}}\n\n", case.prog));
                }
            }
            counts.push(cases.len());
        }
        (text, counts)
    })
}

proptest! {
    #[test]
    fn case_count_matches_prompt_blocks((text, counts) in gen_fixture()) {
        let sections = parse(&text).unwrap();
        let per_section: Vec<usize> = sections.iter().map(|s| s.cases.len()).collect();
        prop_assert_eq!(per_section, counts);
    }

    #[test]
    fn case_order_follows_source((text, _) in gen_fixture()) {
        let sections = parse(&text).unwrap();
        for case in all_cases(&sections) {
            if let Outcome::Parsed(value) = &case.expected {
                prop_assert_eq!(value, &json!({"<prog>": case.prog.clone()}));
            }
        }
    }

    #[test]
    fn parse_is_deterministic((text, _) in gen_fixture()) {
        prop_assert_eq!(parse(&text).unwrap(), parse(&text).unwrap());
    }
}
