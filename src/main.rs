use std::{fs, path::PathBuf, time::Instant};

use anyhow::Context;
use automata::{
    display_error,
    lexer::lexer::{lexemes, tokenize},
};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Scan a source file into tokens")]
struct Cli {
    /// Source file to scan
    source: PathBuf,

    /// Print every lexeme, including whitespace, newlines and unknown characters
    #[arg(long)]
    raw: bool,

    /// Do not print diagnostics
    #[arg(short, long)]
    quiet: bool,

    /// Print how long scanning took
    #[arg(long)]
    timings: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_contents = fs::read_to_string(&cli.source)
        .with_context(|| format!("source `{}`", cli.source.display()))?;
    let file_name = cli
        .source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let start = Instant::now();

    if cli.raw {
        for token in lexemes(&file_contents, file_name) {
            println!("{}", token);
        }
    } else {
        let result = tokenize(&file_contents, file_name);

        if !cli.quiet {
            for diagnostic in &result.diagnostics {
                display_error(diagnostic, &file_contents);
            }
        }

        for token in &result.tokens {
            token.debug();
        }
    }

    if cli.timings {
        eprintln!("Tokenized in {:?}", start.elapsed());
    }

    Ok(())
}
