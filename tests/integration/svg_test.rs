//! SVG output tests

use ansi2::{to_svg, LengthAdjust, Mode, RenderOptions, Theme};

fn svg(input: &str) -> String {
    to_svg(input, &RenderOptions::default()).unwrap()
}

fn text_elements(svg: &str) -> Vec<&str> {
    svg.match_indices("<text ")
        .map(|(i, _)| {
            let end = svg[i..].find("</text>").unwrap() + i + "</text>".len();
            &svg[i..end]
        })
        .collect()
}

#[test]
fn red_run_is_the_only_text() {
    let out = svg("\x1b[31mHi\x1b[0m");
    let texts = text_elements(&out);
    assert_eq!(
        texts,
        vec![r#"<text x="0" y="15" textLength="20" class="c1">Hi</text>"#]
    );
    assert!(out.contains(".c1{fill:#cd3131}"));
}

#[test]
fn wraps_long_line_into_three_rows() {
    let out = to_svg(
        &"x".repeat(25),
        &RenderOptions {
            width: Some(10),
            ..Default::default()
        },
    )
    .unwrap();
    let texts = text_elements(&out);
    assert_eq!(texts.len(), 3);
    assert!(texts[0].contains(r#"y="15""#));
    assert!(texts[1].contains(r#"y="33""#));
    assert!(texts[2].contains(r#"y="51""#));
    assert!(texts[2].contains(">xxxxx     </text>"));
    assert!(out.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="54""#));
}

#[test]
fn background_color_draws_rect() {
    let out = svg("\x1b[44m ab \x1b[0m");
    assert!(out.contains(r#"<rect x="0" y="0" width="40" height="18" class="c4"/>"#));
    assert!(out.contains(".c4{fill:#2472c8}"));
}

#[test]
fn blank_default_runs_are_skipped() {
    let out = svg("a\x1b[1m   \x1b[0mb");
    assert_eq!(text_elements(&out).len(), 2);
}

#[test]
fn inverse_swaps_text_and_fill() {
    let out = svg("\x1b[7mX\x1b[0m");
    assert!(out.contains(r#"class="fg"/>"#));
    assert!(out.contains(r#"class="bg">X</text>"#));
}

#[test]
fn markup_is_escaped() {
    let out = svg("<a & b>");
    assert!(out.contains(">&lt;a &amp; b&gt;</text>"));
    assert!(svg("say \"hi\"").contains(">say \"hi\"</text>"));
}

#[test]
fn follows_color_scheme_without_mode() {
    let out = svg("plain");
    assert!(out.contains(":root{color-scheme:light dark}"));
    assert!(out.contains("@media (prefers-color-scheme: dark){text{fill:#e5e5e5}"));
}

#[test]
fn fixed_dark_mode_uses_dark_background() {
    let out = to_svg(
        "plain",
        &RenderOptions {
            mode: Some(Mode::Dark),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(out.contains(".bg{fill:#202020}"));
    assert!(!out.contains("@media"));
}

#[test]
fn black_text_stays_visible_on_dark_background() {
    let out = to_svg(
        "\x1b[30mX\x1b[97mY",
        &RenderOptions {
            mode: Some(Mode::Dark),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(out.contains(".c0{fill:#e5e5e5}"));
    assert!(out.contains(".c15{fill:#e5e5e5}"));

    let light = to_svg(
        "\x1b[30mX",
        &RenderOptions {
            mode: Some(Mode::Light),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(light.contains(".c0{fill:#000000}"));
}

#[test]
fn background_override_applies_to_its_mode() {
    let out = to_svg(
        "plain",
        &RenderOptions {
            mode: Some(Mode::Light),
            light_bg: Some("#ff0000".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(out.contains(".bg{fill:#ff0000}"));
}

#[test]
fn theme_changes_palette() {
    let out = to_svg(
        "\x1b[31mx",
        &RenderOptions {
            theme: Theme::Vga,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(out.contains(".c1{fill:#aa0000}"));
}

#[test]
fn font_size_scales_grid() {
    let out = to_svg(
        "ab",
        &RenderOptions {
            font_size: Some(32),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(out.contains(r#"width="40" height="36""#));
    assert!(out.contains("font-size:32px"));
}

#[test]
fn length_adjust_is_written() {
    let out = to_svg(
        "ab",
        &RenderOptions {
            length_adjust: Some(LengthAdjust::SpacingAndGlyphs),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(out.contains(r#"lengthAdjust="spacingAndGlyphs""#));
}

#[test]
fn sourcemap_locates_runs() {
    let out = to_svg(
        "\x1b[32mok\x1b[0m!",
        &RenderOptions {
            sourcemap: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(out.contains(r#"class="c2" data-line="0" data-col="0" data-src="5:7" data-style="0:5">ok</text>"#));
}

#[test]
fn font_url_adds_font_face() {
    let out = to_svg(
        "x",
        &RenderOptions {
            font: Some("https://example.com/mono.woff2".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(out.contains("@font-face{font-family:ansi2-custom-font;src:url(&quot;https://example.com/mono.woff2&quot;)}"));
}

#[test]
fn attributes_only_emit_used_rules() {
    let out = svg("\x1b[1mbold\x1b[0m");
    assert!(out.contains(".bold{font-weight:bold}"));
    assert!(!out.contains(".italic"));
    assert!(!out.contains("@keyframes"));
}

#[test]
fn hyperlink_text_is_underlined() {
    let out = svg("\x1b]8;;http://example.com\x1b\\link\x1b]8;;\x1b\\ after");
    let texts = text_elements(&out);
    assert_eq!(texts.len(), 2);
    assert!(texts[0].contains(r#"class="ul">link</text>"#));
    assert!(texts[1].ends_with("> after</text>"));
    assert!(out.contains(".ul{text-decoration:underline}"));
}
