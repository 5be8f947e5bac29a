//! Unit tests for option validation and the conversion entry points

use ansi2::{convert, to_ans, to_html, to_svg, to_text, ConvertError, Format, RenderOptions};

#[test]
fn default_options_are_valid() {
    assert_eq!(RenderOptions::default().validate(), Ok(()));
    assert_eq!(RenderOptions::default().font_size(), ansi2::DEFAULT_FONT_SIZE);
}

#[test]
fn zero_width_is_rejected_everywhere() {
    let options = RenderOptions {
        width: Some(0),
        ..Default::default()
    };
    assert_eq!(to_svg("x", &options), Err(ConvertError::InvalidWidth(0)));
    assert_eq!(to_html("x", &options), Err(ConvertError::InvalidWidth(0)));
    assert_eq!(to_text("x", Some(0)), Err(ConvertError::InvalidWidth(0)));
    assert_eq!(to_ans("x", Some(0), true), Err(ConvertError::InvalidWidth(0)));
}

#[test]
fn zero_font_size_is_rejected() {
    let options = RenderOptions {
        font_size: Some(0),
        ..Default::default()
    };
    assert_eq!(
        convert("x", Format::Svg, &options),
        Err(ConvertError::InvalidFontSize(0))
    );
}

#[test]
fn error_messages_name_the_value() {
    assert_eq!(
        ConvertError::InvalidWidth(0).to_string(),
        "Invalid width 0: must be at least one column"
    );
    assert!(ConvertError::InvalidFontSize(0).to_string().contains("font size"));
}

#[test]
fn convert_dispatches_on_format() {
    let options = RenderOptions::default();
    let input = "\x1b[31mHi\x1b[0m";
    assert_eq!(convert(input, Format::Text, &options).unwrap(), "Hi");
    assert_eq!(convert(input, Format::Ans, &options).unwrap(), input);
    assert_eq!(convert(input, Format::Svg, &options), to_svg(input, &options));
    assert_eq!(convert(input, Format::Html, &options), to_html(input, &options));
}

#[test]
fn empty_input_renders() {
    let options = RenderOptions::default();
    assert_eq!(to_text("", None).unwrap(), "");
    assert_eq!(to_ans("", None, false).unwrap(), "");
    assert!(to_svg("", &options).unwrap().contains(r#"width="0" height="18""#));
}
