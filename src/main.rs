//! dagbok - Diary to LaTeX compiler

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dagbok::Document;

#[derive(Parser)]
#[command(name = "dagbok")]
#[command(version, about = "Compile diary entries into a LaTeX document", long_about = None)]
#[command(after_help = "EXAMPLES:
    dagbok diary_2001/*.txt -o diary.tex     Compile entries into diary.tex
    dagbok diary_*/*.txt > diary.tex         Print the document to stdout
    dagbok -p custom.tex diary_2001/*.txt    Use a custom preamble")]
struct Cli {
    /// Entry files (sorted by file name before compilation)
    #[arg(value_name = "ENTRY", required = true)]
    entries: Vec<PathBuf>,

    /// Preamble file prepended to the document
    #[arg(short, long, value_name = "FILE", default_value = "preamble.tex")]
    preamble: PathBuf,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> dagbok::Result<()> {
    let mut entries = cli.entries;
    // Entry file names start with the date, so a name sort is a date sort.
    entries.sort_by_key(|path| path.file_stem().map(OsStr::to_os_string));

    let mut document = Document::new(entries, cli.preamble);

    match cli.output {
        Some(output) => {
            document = document.with_output(&output);
            document.save()?;
            if !cli.quiet {
                println!(
                    "Wrote {} ({} chapters)",
                    output.display(),
                    document.chapters().len()
                );
            }
        }
        None => print!("{}", document.generate()?),
    }

    Ok(())
}
