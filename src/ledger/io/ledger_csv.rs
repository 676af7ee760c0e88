use crate::ledger::Transaction;

pub const LEDGER_HEADER: [&str; crate::ledger::NUM_LEDGER_COLS] = [
    "Date",
    "Account",
    "Type",
    "Instrument Type",
    "Ticker Symbol",
    "Quantity",
    "Amount",
    "Currency",
    "Fees",
    "Fees Currency",
    "Taxes",
    "Taxes Currency",
    "Converted",
    "Converted Currency",
];

/// Writes the normalized ledger to `writer`, header row first. The caller
/// owns the underlying handle, so it is released (and flushed) on every
/// exit path by scope.
pub fn write_ledger_csv(
    txs: &[Transaction],
    writer: &mut dyn std::io::Write,
) -> Result<(), csv::Error> {
    let mut csv_w = csv::WriterBuilder::new().has_headers(true).from_writer(writer);
    csv_w.write_record(&LEDGER_HEADER)?;
    for tx in txs {
        csv_w.write_record(tx.render_row())?;
    }
    csv_w.flush()?;
    Ok(())
}
