//! Stylesheet generation for the SVG and HTML renderers.
//!
//! Colors are emitted as classes, one per paint actually used by the
//! document. Most explicit colors resolve the same in both modes; the
//! defaults and the black and white entries change with the color scheme.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::terminal::{Color, Style};
use crate::theme::{palette, Mode, Palette, Rgba};
use crate::RenderOptions;

pub(crate) const DEFAULT_FONTS: &str = "Consolas,Courier New,Monaco,monospace";
pub(crate) const CUSTOM_FONT: &str = "ansi2-custom-font";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Svg,
    Html,
}

/// A color as drawn: either a mode default or an explicit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Paint {
    Foreground,
    Background,
    Indexed(u8),
    Rgb(u8, u8, u8),
}

impl Paint {
    fn of(color: Color, default: Paint) -> Paint {
        match color {
            Color::Default => default,
            Color::Indexed(n) => Paint::Indexed(n),
            Color::Rgb(r, g, b) => Paint::Rgb(r, g, b),
        }
    }

    pub(crate) fn name(&self) -> String {
        match self {
            Paint::Foreground => "fg".to_string(),
            Paint::Background => "bg".to_string(),
            Paint::Indexed(n) => format!("c{n}"),
            Paint::Rgb(r, g, b) => format!("c{r:02x}{g:02x}{b:02x}"),
        }
    }

    fn resolve(&self, palette: &Palette) -> Rgba {
        match *self {
            Paint::Foreground => palette.foreground(),
            Paint::Background => palette.background(),
            Paint::Indexed(n) => palette.color(Color::Indexed(n)).unwrap_or(palette.foreground()),
            Paint::Rgb(r, g, b) => Rgba::rgb(r, g, b),
        }
    }

    fn follows_mode(&self) -> bool {
        match *self {
            Paint::Foreground | Paint::Background => true,
            Paint::Indexed(n) => palette::dark_index(n) != n,
            Paint::Rgb(..) => false,
        }
    }
}

/// Text and fill paints of a style, after inverse.
pub(crate) fn paints(style: &Style) -> (Paint, Paint) {
    let fg = Paint::of(style.fg, Paint::Foreground);
    let bg = Paint::of(style.bg, Paint::Background);
    if style.inverse {
        (bg, fg)
    } else {
        (fg, bg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Role {
    Text,
    Fill,
}

/// Attribute classes in stylesheet order: (class, svg rule, html rule).
const ATTRIBUTES: [(&str, &str, &str); 8] = [
    ("bold", "font-weight:bold", "font-weight:bold"),
    ("italic", "font-style:italic", "font-style:italic"),
    ("faint", "opacity:.5", "opacity:.5"),
    ("ul", "text-decoration:underline", "text-decoration:underline"),
    ("st", "text-decoration:line-through", "text-decoration:line-through"),
    (
        "ul.st",
        "text-decoration:underline line-through",
        "text-decoration:underline line-through",
    ),
    (
        "blink",
        "animation:ansi2-blink 1s steps(1,end) infinite",
        "animation:ansi2-blink 1s steps(1,end) infinite",
    ),
    ("hidden", "opacity:0", "color:transparent"),
];

/// Collects the classes a document uses and renders the matching CSS.
pub(crate) struct Stylesheet {
    target: Target,
    paints: BTreeSet<(Role, Paint)>,
    attributes: BTreeSet<&'static str>,
}

impl Stylesheet {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            paints: BTreeSet::new(),
            attributes: BTreeSet::new(),
        }
    }

    /// Classes for text drawn in `style`. The default foreground needs none.
    pub fn text_classes(&mut self, style: &Style) -> Vec<String> {
        let mut classes = Vec::new();
        let (text, _) = paints(style);
        if text != Paint::Foreground {
            classes.push(self.use_paint(Role::Text, text));
        }

        let flags = [
            (style.bold, "bold"),
            (style.italic, "italic"),
            (style.faint, "faint"),
            (style.underline, "ul"),
            (style.strikethrough, "st"),
            (style.blink, "blink"),
            (style.hidden, "hidden"),
        ];
        for (on, class) in flags {
            if on {
                self.attributes.insert(class);
                classes.push(class.to_string());
            }
        }
        if style.underline && style.strikethrough {
            self.attributes.insert("ul.st");
        }
        classes
    }

    /// Class for the background behind `style`, `None` for the default.
    pub fn fill_class(&mut self, style: &Style) -> Option<String> {
        let (_, fill) = paints(style);
        if fill == Paint::Background {
            return None;
        }
        Some(self.use_paint(Role::Fill, fill))
    }

    /// Class painting the document's default background.
    pub fn background_class(&mut self) -> String {
        self.use_paint(Role::Fill, Paint::Background)
    }

    fn use_paint(&mut self, role: Role, paint: Paint) -> String {
        self.paints.insert((role, paint));
        self.class_name(role, paint)
    }

    fn class_name(&self, role: Role, paint: Paint) -> String {
        match (self.target, role) {
            (Target::Html, Role::Fill) => format!("on-{}", paint.name()),
            _ => paint.name(),
        }
    }

    fn property(&self, role: Role) -> &'static str {
        match (self.target, role) {
            (Target::Svg, _) => "fill",
            (Target::Html, Role::Text) => "color",
            (Target::Html, Role::Fill) => "background-color",
        }
    }

    /// Rules that depend on the palette. With `mode_only`, explicit
    /// colors are skipped because an earlier block already has them.
    fn color_rules(&self, palette: &Palette, mode_only: bool) -> String {
        let mut css = String::new();
        let _ = match self.target {
            Target::Svg => write!(css, "text{{fill:{}}}", palette.foreground()),
            Target::Html => write!(
                css,
                ".ansi2{{color:{};background-color:{}}}",
                palette.foreground(),
                palette.background()
            ),
        };

        let mut written = BTreeSet::new();
        for &(role, paint) in &self.paints {
            if mode_only && !paint.follows_mode() {
                continue;
            }
            let class = self.class_name(role, paint);
            if written.insert(class.clone()) {
                let _ = write!(
                    css,
                    ".{class}{{{}:{}}}",
                    self.property(role),
                    paint.resolve(palette)
                );
            }
        }
        css
    }

    /// Render the full stylesheet.
    pub fn render(&self, options: &RenderOptions, line_height: usize) -> String {
        let (family, font_face) = font(options.font.as_deref());
        let mut css = font_face.unwrap_or_default();

        let palette = |mode| {
            Palette::new(
                options.theme,
                mode,
                options.light_bg.as_deref(),
                options.dark_bg.as_deref(),
            )
        };

        let _ = match self.target {
            Target::Svg => write!(
                css,
                "text{{font-family:{family};font-size:{}px;white-space:pre}}",
                options.font_size()
            ),
            Target::Html => write!(
                css,
                "body{{margin:0}}.ansi2{{margin:0;padding:0;font-family:{family};\
                 font-size:{}px;line-height:{line_height}px}}",
                options.font_size()
            ),
        };

        match options.mode {
            Some(mode) => css.push_str(&self.color_rules(&palette(mode), false)),
            None => {
                css.push_str(":root{color-scheme:light dark}");
                css.push_str(&self.color_rules(&palette(Mode::Light), false));
                let _ = write!(
                    css,
                    "@media (prefers-color-scheme: dark){{{}}}",
                    self.color_rules(&palette(Mode::Dark), true)
                );
            }
        }

        for (class, svg, html) in ATTRIBUTES {
            if self.attributes.contains(class) {
                let rule = match self.target {
                    Target::Svg => svg,
                    Target::Html => html,
                };
                let _ = write!(css, ".{class}{{{rule}}}");
            }
        }
        if self.attributes.contains("blink") {
            css.push_str("@keyframes ansi2-blink{50%{opacity:0}}");
        }

        css
    }
}

/// Font family for the stylesheet and, for URLs, the `@font-face` rule
/// that loads it.
pub(crate) fn font(font: Option<&str>) -> (String, Option<String>) {
    match font {
        Some(url)
            if url.starts_with("http://")
                || url.starts_with("https://")
                || url.starts_with("data:") =>
        {
            let url: String = url
                .chars()
                .filter(|c| !c.is_control())
                .map(|c| match c {
                    '"' => "%22".to_string(),
                    '<' => "%3C".to_string(),
                    '>' => "%3E".to_string(),
                    c => c.to_string(),
                })
                .collect();
            (
                format!("{CUSTOM_FONT},{DEFAULT_FONTS}"),
                Some(format!(
                    "@font-face{{font-family:{CUSTOM_FONT};src:url(\"{url}\")}}"
                )),
            )
        }
        Some(family) if !family.trim().is_empty() => {
            let family: String = family
                .chars()
                .filter(|c| !matches!(c, '{' | '}' | ';' | '<' | '>'))
                .collect();
            (family, None)
        }
        _ => (DEFAULT_FONTS.to_string(), None),
    }
}
