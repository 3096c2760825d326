//! colsplit CLI - expand structured text columns in a CSV file

use clap::Parser;
use colsplit::{NumAlphaSplitter, PhoneParser, PunctuationSplitter, Splitter, Table};
use std::path::PathBuf;
use std::process::ExitCode;

/// Expand composite text columns in a CSV file.
///
/// Runs three detectors over the columns of a headered CSV: phone numbers,
/// punctuation-delimited values, and alternating digit/letter runs. Each
/// detected column is decomposed into new columns appended after the
/// originals, and the augmented CSV is written to stdout or a file.
#[derive(Parser, Debug)]
#[command(name = "colsplit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file (must have a header row)
    input: PathBuf,

    /// Output CSV file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Comma-separated 0-based column indices to skip entirely
    #[arg(short, long, value_delimiter = ',')]
    ignore: Vec<usize>,

    /// Fraction of numeric cells above which a column is left alone
    #[arg(long, default_value_t = PunctuationSplitter::DEFAULT_NUM_THRESHOLD)]
    num_threshold: f64,

    /// Fraction of rows that must share a punctuation character
    #[arg(long, default_value_t = PunctuationSplitter::DEFAULT_COMMON_THRESHOLD)]
    common_threshold: f64,

    /// Fraction of rows that must open with a digit/letter alternation
    #[arg(long, default_value_t = NumAlphaSplitter::DEFAULT_NUM_ALPHA_THRESHOLD)]
    num_alpha_threshold: f64,

    /// Skip the phone number pass
    #[arg(long)]
    no_phone: bool,

    /// Skip the punctuation pass
    #[arg(long)]
    no_punctuation: bool,

    /// Skip the digit/letter pass
    #[arg(long)]
    no_num_alpha: bool,

    /// Report detected columns without writing output
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error processing {}: {}", args.input.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> colsplit::Result<()> {
    let mut table = Table::from_csv_path(&args.input)?;
    let ignore = || args.ignore.iter().copied();

    if !args.no_phone {
        let parser = PhoneParser::new(&table, ignore())?;
        let detected = parser.detection();
        report("phone", &table, &detected);
        if !args.dry_run && !detected.is_empty() {
            table = parser.performing(&detected)?;
        }
    }

    if !args.no_punctuation {
        let splitter =
            PunctuationSplitter::new(&table, ignore(), args.num_threshold, args.common_threshold)?;
        let detected = splitter.detection();
        report("punctuation", &table, &detected);
        if !args.dry_run && !detected.is_empty() {
            table = splitter.performing(&detected)?;
        }
    }

    if !args.no_num_alpha {
        let splitter = NumAlphaSplitter::new(
            &table,
            ignore(),
            args.num_threshold,
            args.num_alpha_threshold,
        )?;
        let detected = splitter.detection();
        report("num-alpha", &table, &detected);
        if !args.dry_run && !detected.is_empty() {
            table = splitter.performing(&detected)?;
        }
    }

    if args.dry_run {
        return Ok(());
    }

    match &args.output {
        Some(path) => table.write_csv_path(path)?,
        None => table.write_csv(std::io::stdout().lock())?,
    }

    Ok(())
}

/// Detection summaries go to stderr so piped CSV output stays clean.
fn report(label: &str, table: &Table, detected: &[usize]) {
    if detected.is_empty() {
        eprintln!("{label}: no columns detected");
        return;
    }

    let names: Vec<&str> = detected
        .iter()
        .filter_map(|&idx| table.column(idx).map(|c| c.name.as_str()))
        .collect();
    eprintln!("{label}: columns {detected:?} ({})", names.join(", "));
}
