use std::fs::File;
use std::path::PathBuf;

use clap::Parser;

use crate::ledger::io::ledger_csv::write_ledger_csv;
use crate::statement::parse::{StatementParseOptions, StatementParser};
use crate::util::rw::{DescribedReader, WriteHandle};

/// Flattens a brokerage activity statement export into a single
/// normalized transaction ledger csv.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Activity statement csv exported from the brokerage platform.
    #[arg(default_value = "data.csv")]
    input: PathBuf,

    /// Where to write the normalized ledger.
    #[arg(short = 'o', long, default_value = "output.csv")]
    output: PathBuf,

    /// Do not apply Commission Adjustments rows to trades.
    ///
    /// Some deployments' exports have no such section.
    #[arg(long, default_value_t = false)]
    no_commission_adjustments: bool,
}

pub fn run() -> Result<(), ()> {
    crate::tracing::setup_tracing();
    let args = Args::parse();

    let desc_reader = DescribedReader::from_file_path(args.input);
    let options = StatementParseOptions {
        commission_adjustments: !args.no_commission_adjustments,
    };
    let parser =
        StatementParser::new(&options, WriteHandle::stderr_write_handle());

    let txs = match parser.parse(&desc_reader) {
        Ok(txs) => txs,
        Err(e) => {
            eprintln!("{e}");
            return Err(());
        }
    };

    // The output handle lives only for the write, and is released on
    // every exit path when it drops.
    let mut out_file = match File::create(&args.output) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to create {}: {}", args.output.display(), e);
            return Err(());
        }
    };

    match write_ledger_csv(&txs, &mut out_file) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Failed to write {}: {}", args.output.display(), e);
            Err(())
        }
    }
}
