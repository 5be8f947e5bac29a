//! CLI definitions for ansi2
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::config::RenderConfig;
use crate::document::Overflow;
use crate::options::{Format, LengthAdjust};
use crate::theme::{Mode, Theme};

/// Build clap styles for help output.
///
/// - Green: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ansi2")]
#[command(about = "Convert ANSI escape sequences to SVG, HTML, plain text or ANS")]
#[command(
    long_about = "ansi2 - render terminal output with ANSI colors as an image or a web page.

Reads text containing ANSI escape sequences from a file or standard input
and writes the converted result to standard output.

EXAMPLES:
    ls --color=always | ansi2 > ls.svg          Render as SVG
    ansi2 -f html build.log > build.html        Render a log file as HTML
    ansi2 -f text colored.txt                   Strip all escape sequences
    ansi2 -f ans -c noisy.ans > clean.ans       Rewrite with minimal escapes
    ansi2 -w 80 -t xterm -m dark log.txt        Wrap at 80 columns, dark xterm colors

Defaults for every option can be set in ~/.config/ansi2/config.toml under
a [render] table; flags given on the command line take precedence."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub convert: ConvertArgs,
}

/// Conversion flags; unset flags fall back to the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ConvertArgs {
    /// Input file (reads standard input when omitted)
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Wrap or truncate lines at this many columns
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Color theme for the 16 base colors
    #[arg(short, long, value_enum)]
    pub theme: Option<Theme>,

    /// Fix the color scheme instead of following the viewer's preference
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Font family, font URL or local font file to embed
    #[arg(long)]
    pub font: Option<String>,

    /// Background color in light mode (hex)
    #[arg(long, value_name = "HEX")]
    pub light_bg: Option<String>,

    /// Background color in dark mode (hex)
    #[arg(long, value_name = "HEX")]
    pub dark_bg: Option<String>,

    /// Font size in pixels
    #[arg(long)]
    pub font_size: Option<usize>,

    /// SVG lengthAdjust for text elements
    #[arg(long, value_enum)]
    pub length_adjust: Option<LengthAdjust>,

    /// Annotate output elements with source positions
    #[arg(short, long)]
    pub sourcemap: bool,

    /// Choose the shortest escape for each style change (ans only)
    #[arg(short, long)]
    pub compress: bool,

    /// What to do with lines longer than --width
    #[arg(long, value_enum)]
    pub overflow: Option<Overflow>,
}

impl ConvertArgs {
    /// Merge these flags over the configured defaults.
    pub fn merge(&self, config: &RenderConfig) -> RenderConfig {
        RenderConfig {
            format: self.format.unwrap_or(config.format),
            theme: self.theme.unwrap_or(config.theme),
            mode: self.mode.or(config.mode),
            width: self.width.or(config.width),
            font: self.font.clone().or_else(|| config.font.clone()),
            font_size: self.font_size.or(config.font_size),
            light_bg: self.light_bg.clone().or_else(|| config.light_bg.clone()),
            dark_bg: self.dark_bg.clone().or_else(|| config.dark_bg.clone()),
            length_adjust: self.length_adjust.or(config.length_adjust),
            compress: self.compress || config.compress,
            sourcemap: self.sourcemap || config.sourcemap,
            overflow: self.overflow.unwrap_or(config.overflow),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script on standard output.

EXAMPLES:
    ansi2 completions bash > ~/.local/share/bash-completion/completions/ansi2
    ansi2 completions zsh > ~/.zfunc/_ansi2
    ansi2 completions fish > ~/.config/fish/completions/ansi2.fish")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "Inspect the ansi2 configuration.

Config file location: ~/.config/ansi2/config.toml

EXAMPLES:
    ansi2 config show        Print the effective configuration
    ansi2 config path        Print the config file location"
    )]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Values not present in the config file are shown with their defaults.

EXAMPLE:
    ansi2 config show")]
    Show,
    /// Print the configuration file path
    Path,
}
