use lazy_static::lazy_static;
use regex::Regex;

use crate::ledger::{Dividend, Trade};
use crate::statement::build::{dividend_symbol, StmtCol};
use crate::statement::fields::FieldBinder;
use crate::util::basic::SError;
use crate::util::date::parse_standard_date;
use crate::util::decimal::parse_decimal;

lazy_static! {
    // Commission adjustment descriptions carry the traded symbol in
    // parentheses, e.g. "ABC(US0000000001) fee rebilling".
    static ref PAREN_SYMBOL_RE: Regex = Regex::new(r"\((.*)\)").unwrap();
}

/// The parenthesized portion of a commission-adjustment `Description`,
/// if there is one and it is non-empty.
pub fn parenthesized_symbol(description: &str) -> Option<&str> {
    match PAREN_SYMBOL_RE.captures(description) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).filter(|s| !s.is_empty()),
        None => None,
    }
}

/// Sets the tax on the first previously built dividend matching the
/// withholding row's (date, symbol). Later rows for the same key
/// overwrite; they never accumulate.
pub fn apply_tax_adjustment(
    dividends: &mut [Dividend],
    fields: &FieldBinder,
) -> Result<(), SError> {
    let date_value = fields.value(StmtCol::DATE);
    let date = parse_standard_date(date_value).map_err(|e| {
        format!("Failed to parse {} (\"{}\"): {}", StmtCol::DATE, date_value, e)
    })?;
    let symbol = dividend_symbol(fields.value(StmtCol::DESCRIPTION)).to_string();
    let amount = parse_decimal(fields.value(StmtCol::AMOUNT), StmtCol::AMOUNT)?;

    match dividends
        .iter_mut()
        .find(|d| d.date == date && d.symbol == symbol)
    {
        Some(dividend) => {
            dividend.set_tax(amount);
            Ok(())
        }
        None => Err(format!(
            "No dividend matched withholding tax for '{}' on {}",
            symbol, date
        )),
    }
}

/// Adds the adjustment amount to the fee of the first previously built
/// trade matching (date, symbol); trade timestamps compare at calendar
/// day precision. Adjustments are additive, so several rows may land on
/// one trade.
pub fn apply_fee_adjustment(
    trades: &mut [Trade],
    fields: &FieldBinder,
) -> Result<(), SError> {
    let description = fields.value(StmtCol::DESCRIPTION);
    // Symbol text inside the parentheses is not guaranteed machine
    // parseable, so an unextractable one is handed back for manual
    // correction rather than guessed at.
    let symbol = parenthesized_symbol(description)
        .ok_or_else(|| {
            "Unrecognized commission adjustment; correct the source row \
             manually"
                .to_string()
        })?
        .to_string();

    let date_value = fields.value(StmtCol::DATE);
    let date = parse_standard_date(date_value).map_err(|e| {
        format!("Failed to parse {} (\"{}\"): {}", StmtCol::DATE, date_value, e)
    })?;
    let amount = parse_decimal(fields.value(StmtCol::AMOUNT), StmtCol::AMOUNT)?;

    match trades
        .iter_mut()
        .find(|t| t.timestamp.date() == date && t.symbol == symbol)
    {
        Some(trade) => {
            trade.fee += amount;
            Ok(())
        }
        None => Err(format!(
            "No trade matched commission adjustment for '{}' on {}",
            symbol, date
        )),
    }
}
