use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Same definition the binary parses with, so completions cannot drift.
#[path = "src/cli.rs"]
mod cli;

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = cli::build_cli();

    generate_to(Bash, &mut cmd, "markdown2html", &outdir)?;
    generate_to(Zsh, &mut cmd, "markdown2html", &outdir)?;
    generate_to(Fish, &mut cmd, "markdown2html", &outdir)?;

    Ok(())
}
