//! Command-line definition, shared by the binary and `build.rs`.
//!
//! Only `clap` may be used here: the build script compiles this file on its
//! own to generate shell completions.

use clap::{Arg, ArgAction, Command, ValueHint};

pub fn build_cli() -> Command {
    Command::new("markdown2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown file to HTML")
        .long_about(
            "markdown2html converts a small Markdown subset into HTML fragments.\n\n\
            Supported syntax:\n  \
            - # Heading (any number of #)\n  \
            - '- item' unordered lists, '* item' ordered lists\n  \
            - paragraphs separated by blank lines\n  \
            - **bold**, __emphasis__\n  \
            - [[text]] becomes the MD5 hex digest of text\n  \
            - ((text)) becomes text without any c or C\n\n\
            Examples:\n  \
            markdown2html README.md README.html\n  \
            markdown2html notes.md notes.html --verbose",
        )
        .arg(
            Arg::new("input")
                .help("Markdown file to read")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("HTML file to write (created or truncated)")
                .required(true)
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a markdown2html.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue),
        )
}
