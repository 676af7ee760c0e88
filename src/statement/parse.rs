use time::Date;

use crate::ledger::{Cash, Dividend, Forex, Trade, Transaction};
use crate::statement::build;
use crate::statement::classify::{is_header_row, Classifier, RecordType};
use crate::statement::fields::FieldBinder;
use crate::statement::reconcile;
use crate::util::basic::SError;
use crate::util::date::parse_statement_date;
use crate::util::rw::{DescribedReader, WriteHandle};
use crate::write_errln;

pub struct StatementParseOptions {
    pub commission_adjustments: bool,
}

impl Default for StatementParseOptions {
    fn default() -> Self {
        Self { commission_adjustments: true }
    }
}

/// Single-pass driver over the statement's row stream. Owns the
/// classifier, the field binder and the per-type accumulator lists;
/// secondary rows reconcile against the accumulated records in place.
///
/// Row-level failures are written to `err_stream` and never abort the
/// pass. Only unreadable input is fatal.
pub struct StatementParser {
    classifier: Classifier,
    binder: FieldBinder,
    report_end_date: Option<Date>,
    trades: Vec<Trade>,
    forexes: Vec<Forex>,
    cashes: Vec<Cash>,
    dividends: Vec<Dividend>,
    err_stream: WriteHandle,
}

impl StatementParser {
    pub fn new(
        options: &StatementParseOptions,
        err_stream: WriteHandle,
    ) -> StatementParser {
        StatementParser {
            classifier: Classifier::new(options.commission_adjustments),
            binder: FieldBinder::new(),
            report_end_date: None,
            trades: Vec::new(),
            forexes: Vec::new(),
            cashes: Vec::new(),
            dividends: Vec::new(),
            err_stream,
        }
    }

    /// Runs the pass and returns the merged ledger in the contract
    /// ordering: all trades, then forexes, then cashes, then dividends.
    pub fn parse(
        mut self,
        desc_reader: &DescribedReader,
    ) -> Result<Vec<Transaction>, SError> {
        let desc = desc_reader.desc().to_string();
        let reader = desc_reader
            .reader()
            .map_err(|e| format!("Failed to open {}: {}", desc, e))?;

        let mut csv_r = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        // The whole row set is materialized before the scan. Statements
        // are small; framing errors surface here and are fatal.
        let mut rows = Vec::<Vec<String>>::new();
        for (i, record_res) in csv_r.records().enumerate() {
            let record = record_res.map_err(|e| {
                format!("Error reading csv record in {} at row {}: {}",
                        desc, i + 1, e)
            })?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        for (i, row) in rows.iter().enumerate() {
            self.scan_row(row, i + 1);
        }

        tracing::debug!(
            "parsed {}: {} trades, {} forexes, {} cashes, {} dividends",
            desc,
            self.trades.len(),
            self.forexes.len(),
            self.cashes.len(),
            self.dividends.len()
        );

        let mut transactions = Vec::<Transaction>::with_capacity(
            self.trades.len()
                + self.forexes.len()
                + self.cashes.len()
                + self.dividends.len(),
        );
        transactions.extend(self.trades.into_iter().map(Transaction::Trade));
        transactions.extend(self.forexes.into_iter().map(Transaction::Forex));
        transactions.extend(self.cashes.into_iter().map(Transaction::Cash));
        transactions.extend(self.dividends.into_iter().map(Transaction::Dividend));
        Ok(transactions)
    }

    fn scan_row(&mut self, row: &[String], row_num: usize) {
        // Header rows start a new binding block, and are never
        // classified as records themselves.
        if is_header_row(row) {
            self.binder.rebind_header(row);
            return;
        }

        if let Err(e) = self.binder.bind_row(row) {
            self.report_row_failure(row, row_num, &e);
            return;
        }

        let record_type = match self.classifier.classify(row) {
            Some(rt) => rt,
            None => return,
        };

        match record_type {
            RecordType::Meta => self.scan_meta(row, row_num),
            RecordType::Trade => match build::build_trade(&self.binder) {
                Ok(trade) => self.trades.push(trade),
                Err(e) => self.report_row_failure(row, row_num, &e),
            },
            RecordType::Forex => {
                match build::build_forex(&self.binder, self.report_end_date) {
                    Ok(forex) => self.forexes.push(forex),
                    Err(e) => self.report_row_failure(row, row_num, &e),
                }
            }
            RecordType::Cash => match build::build_cash(&self.binder) {
                Ok(cash) => self.cashes.push(cash),
                Err(e) => self.report_row_failure(row, row_num, &e),
            },
            RecordType::Dividend => match build::build_dividend(&self.binder) {
                Ok(dividend) => self.dividends.push(dividend),
                Err(e) => self.report_row_failure(row, row_num, &e),
            },
            RecordType::TaxAdjustment => {
                if let Err(e) = reconcile::apply_tax_adjustment(
                    &mut self.dividends,
                    &self.binder,
                ) {
                    self.report_row_failure(row, row_num, &e);
                }
            }
            RecordType::FeeAdjustment => {
                if let Err(e) = reconcile::apply_fee_adjustment(
                    &mut self.trades,
                    &self.binder,
                ) {
                    self.report_row_failure(row, row_num, &e);
                }
            }
        }
    }

    // Statement metadata rows are field-name/value pairs in the third
    // and fourth cells. The "Period" value ("<start> - <end>") yields
    // the report end date that forex records are stamped with.
    fn scan_meta(&mut self, row: &[String], row_num: usize) {
        if row.get(2).map(|c| c.as_str()) != Some("Period") {
            return;
        }
        let value = match row.get(3) {
            Some(v) => v.as_str(),
            None => "",
        };
        let end = match value.split_once(" - ") {
            Some((_, end)) => end,
            None => value,
        };
        match parse_statement_date(end) {
            Ok(date) => self.report_end_date = Some(date),
            Err(e) => self.report_row_failure(
                row,
                row_num,
                &format!("Failed to parse statement period (\"{}\"): {}",
                         value, e),
            ),
        }
    }

    fn report_row_failure(&mut self, row: &[String], row_num: usize, msg: &str) {
        write_errln!(
            self.err_stream,
            "Warning: Row {}: {}: {}",
            row_num,
            msg,
            row.join(" ")
        );
    }
}
