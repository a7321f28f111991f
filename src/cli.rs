//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;

use crate::core::model::{CategorySet, CharacterClass};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::core::report::build_report;

/// charfreq - report the first non-, least- or most-repeating character of a file.
#[derive(Parser, Debug)]
#[command(name = "charfreq")]
#[command(
    author,
    version,
    about,
    args_override_self = true,
    long_about = r#"charfreq classifies every byte of a text file as a letter (a-z), a
punctuation character or a symbol ($ + < = > ^ ` | ~), counts them, and reports
the first character of each requested category matching the chosen format.

Arguments are matched the forgiving way: -i=PATH and -f=FORMAT (or --input=,
--format=) are recognised anywhere inside a token, category flags must match
exactly, and anything unrecognised is ignored. A combined -LPS is not a flag.

The file may only contain bytes in the printable ranges ! through /, : through @
and [ through ~. It must contain at least one letter, one punctuation character
and one symbol.

Exit codes:
- 0: success
- 1: missing input path, or the file cannot be read
- 2: empty file or invalid content
- 3: missing or unknown format
- 4: no category flag given

Examples:
    charfreq -i=data.txt -f=non-repeating -L -P -S
    charfreq --input=data.txt --format=most-repeating --include-symbol
    charfreq -i=data.txt -f=least-repeating -P --output json
"#
)]
pub struct Cli {
    /// Input file to analyze.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        long_help = "Input file to analyze. Accepts -i=PATH or --input=PATH; the value must\n\
be attached with `=`.\n\n\
The path is echoed back verbatim in the `File:` line."
    )]
    pub input: Option<String>,

    /// Repetition format (non-repeating/least-repeating/most-repeating).
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        long_help = "Which character to report per category.\n\n\
Supported values:\n\
- non-repeating: first character occurring exactly once\n\
- least-repeating: first character with the lowest count above one\n\
- most-repeating: first character with the highest count above one"
    )]
    pub format: Option<String>,

    /// Report the letter category.
    #[arg(short = 'L', long = "include-letter")]
    pub include_letter: bool,

    /// Report the punctuation category.
    #[arg(short = 'P', long = "include-punctuation")]
    pub include_punctuation: bool,

    /// Report the symbol category.
    #[arg(short = 'S', long = "include-symbol")]
    pub include_symbol: bool,

    /// Output format (text/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "json"],
        value_name = "OUTPUT",
        long_help = "Select how results are printed.\n\n\
Supported values:\n\
- text (default): `File:` line followed by one line per category\n\
- json: a single JSON object"
    )]
    pub output: String,

    /// Pretty-print JSON output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Verbose mode (diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Categories requested by the -L/-P/-S flags
    pub fn categories(&self) -> CategorySet {
        [
            (self.include_letter, CharacterClass::Letter),
            (self.include_punctuation, CharacterClass::Punctuation),
            (self.include_symbol, CharacterClass::Symbol),
        ]
        .into_iter()
        .filter_map(|(requested, class)| requested.then_some(class))
        .collect()
    }
}

const INPUT_MARKERS: [&str; 2] = ["-i=", "-input="];
const FORMAT_MARKERS: [&str; 2] = ["-f=", "-format="];

/// Tokens forwarded to clap unchanged
const PASSTHROUGH: [&str; 13] = [
    "-L",
    "--include-letter",
    "-P",
    "--include-punctuation",
    "-S",
    "--include-symbol",
    "--pretty",
    "-v",
    "--verbose",
    "-h",
    "--help",
    "-V",
    "--version",
];

/// Rewrite raw process arguments into the canonical form `Cli` parses.
///
/// Input and format are found wherever `-i=`/`-input=` or `-f=`/`-format=`
/// occurs inside a token; the value is the rest of the token and the last
/// occurrence wins. An empty value counts as not given. Category flags must
/// match exactly, so `-l`, `-L=`, `-LPS` or `--include-letterz` request
/// nothing. Every other token is dropped.
pub fn normalize_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<String> = args.next().into_iter().collect();
    let mut input = None;
    let mut format = None;

    while let Some(arg) = args.next() {
        if let Some(value) = value_after(&arg, &INPUT_MARKERS) {
            input = Some(value.to_string());
        } else if let Some(value) = value_after(&arg, &FORMAT_MARKERS) {
            format = Some(value.to_string());
        } else if arg == "--output" {
            if let Some(value) = args.next() {
                normalized.push(format!("--output={}", value));
            }
        } else if arg.starts_with("--output=") || PASSTHROUGH.contains(&arg.as_str()) {
            normalized.push(arg);
        }
    }

    if let Some(input) = input.filter(|value| !value.is_empty()) {
        normalized.push(format!("--input={}", input));
    }
    if let Some(format) = format.filter(|value| !value.is_empty()) {
        normalized.push(format!("--format={}", format));
    }
    normalized
}

fn value_after<'a>(arg: &'a str, markers: &[&str]) -> Option<&'a str> {
    markers
        .iter()
        .find_map(|marker| arg.find(marker).map(|pos| &arg[pos + marker.len()..]))
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.output.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    log::debug!("input={:?} format={:?}", cli.input, cli.format);

    let report = build_report(
        cli.input.as_deref(),
        cli.format.as_deref(),
        cli.categories(),
    )?;

    let renderer = Renderer::with_config(render_config);
    print!("{}", renderer.render(&report)?);
    Ok(())
}
