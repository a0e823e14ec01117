// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_ass_color::{AssColorError, AssColorValue, Channel};
use test_case::test_case;

#[test_case(&["FF", "FF", "00"], "00FFFF", "#FFFF00"; "yellow from channels")]
#[test_case(&["F00"], "FF0000", "#0000FF"; "blue from shorthand")]
#[test_case(&["0000FF"], "0000FF", "#FF0000"; "red from full hex")]
#[test_case(&["a1B2c3"], "a1B2c3", "#c3B2a1"; "mixed case is kept")]
fn builds_and_serializes(args: &[&str], escape_form: &str, display: &str) {
    let color = AssColorValue::from_args(args).unwrap();
    assert_eq!(color.to_escape_form(), escape_form);
    assert_eq!(color.to_escape_form().chars().count(), 6);
    assert_eq!(color.to_string(), display);
}

#[test_case(&["12345"], AssColorError::InvalidLength { length: 5 }; "length five")]
#[test_case(&["a", "bb", "cc"], AssColorError::InvalidComponent { channel: Channel::Red, value: "a".into() }; "short red channel")]
#[test_case(&["FF", "FF"], AssColorError::InvalidArity { count: 2 }; "two arguments")]
#[test_case(&["00FFGG"], AssColorError::InvalidComponent { channel: Channel::Red, value: "GG".into() }; "bad red in full hex")]
fn rejects(args: &[&str], expected: AssColorError) {
    assert_eq!(AssColorValue::from_args(args), Err(expected));
}

#[test]
fn rewrites_an_override_tag() -> miette::Result<()> {
    let line = r"{\c&H00FFFF&}Hello";
    let tag = line
        .strip_prefix(r"{\c")
        .and_then(|rest| rest.split_once('}'))
        .map(|(tag, _)| tag)
        .unwrap();

    let color = AssColorValue::from_override_tag(tag)?;
    assert_eq!((color.r(), color.g(), color.b()), ("FF", "FF", "00"));

    let swapped = AssColorValue::from_channels(color.b(), color.g(), color.r())?;
    assert_eq!(
        format!(r"{{\c{}}}Hello", swapped.to_override_tag()),
        r"{\c&HFFFF00&}Hello"
    );
    Ok(())
}

#[test]
fn errors_render_as_miette_reports() {
    let Err(error) = AssColorValue::from_bgr("12345") else {
        panic!("expected an error");
    };
    let report = miette::Report::new(error);
    assert_eq!(
        report.to_string(),
        "Expected a BGR hex string of 3 or 6 characters, got 5"
    );
}
