use time::Date;

use crate::ledger::{Cash, Currency, Dividend, Forex, Trade};
use crate::statement::fields::FieldBinder;
use crate::util::basic::SError;
use crate::util::date::{parse_activity_datetime, parse_standard_date};
use crate::util::decimal::parse_decimal;

/// Column names used by the statement's data blocks.
/// Change these if the export format ever renames its columns.
pub struct StmtCol();
impl StmtCol {
    pub const DATE_TIME: &'static str = "Date/Time";
    pub const CURRENCY: &'static str = "Currency";
    pub const SYMBOL: &'static str = "Symbol";
    pub const QUANTITY: &'static str = "Quantity";
    pub const PROCEEDS: &'static str = "Proceeds";
    pub const COMM_FEE: &'static str = "Comm/Fee";
    pub const COMM_IN_USD: &'static str = "Comm in USD";
    pub const SETTLE_DATE: &'static str = "Settle Date";
    pub const DATE: &'static str = "Date";
    pub const AMOUNT: &'static str = "Amount";
    pub const DESCRIPTION: &'static str = "Description";
}

fn parse_field_date(fields: &FieldBinder, col: &str) -> Result<Date, SError> {
    let value = fields.value(col);
    parse_standard_date(value)
        .map_err(|e| format!("Failed to parse {} (\"{}\"): {}", col, value, e))
}

fn parse_field_currency(fields: &FieldBinder, col: &str) -> Result<Currency, SError> {
    Currency::parse_iso(fields.value(col))
        .map_err(|e| format!("Failed to parse {}: {}", col, e))
}

/// The ticker prefix of a dividend-style `Description`, i.e. everything
/// before the first '('. Withholding-tax rows derive their symbol the
/// same way, so the two stay comparable verbatim (no trimming).
pub fn dividend_symbol(description: &str) -> &str {
    description.split('(').next().unwrap_or("")
}

pub fn build_trade(fields: &FieldBinder) -> Result<Trade, SError> {
    let dt_value = fields.value(StmtCol::DATE_TIME);
    let timestamp = parse_activity_datetime(dt_value).map_err(|e| {
        format!("Failed to parse {} (\"{}\"): {}", StmtCol::DATE_TIME, dt_value, e)
    })?;

    Ok(Trade {
        timestamp,
        currency: parse_field_currency(fields, StmtCol::CURRENCY)?,
        symbol: fields.value(StmtCol::SYMBOL).to_string(),
        quantity: parse_decimal(fields.value(StmtCol::QUANTITY), StmtCol::QUANTITY)?,
        amount: parse_decimal(fields.value(StmtCol::PROCEEDS), StmtCol::PROCEEDS)?,
        fee: parse_decimal(fields.value(StmtCol::COMM_FEE), StmtCol::COMM_FEE)?,
    })
}

/// Forex subtotal rows encode the converted pair as `"A.B"` in Symbol;
/// the target currency is whichever side differs from the row's Currency.
/// `report_date` is the statement period end captured by the driver, when
/// the statement provided one.
pub fn build_forex(
    fields: &FieldBinder,
    report_date: Option<Date>,
) -> Result<Forex, SError> {
    let currency_value = fields.value(StmtCol::CURRENCY);
    let symbol = fields.value(StmtCol::SYMBOL);
    let (first, second) = symbol.split_once('.').ok_or_else(|| {
        format!(
            "Failed to parse {} (\"{}\"): not a currency pair",
            StmtCol::SYMBOL, symbol
        )
    })?;
    let target = if first == currency_value { second } else { first };

    Ok(Forex {
        report_date,
        currency: parse_field_currency(fields, StmtCol::CURRENCY)?,
        target_currency: Currency::parse_iso(target).map_err(|e| {
            format!("Failed to parse {}: {}", StmtCol::SYMBOL, e)
        })?,
        quantity: parse_decimal(fields.value(StmtCol::QUANTITY), StmtCol::QUANTITY)?,
        amount: parse_decimal(fields.value(StmtCol::PROCEEDS), StmtCol::PROCEEDS)?,
        fee: parse_decimal(
            fields.value(StmtCol::COMM_IN_USD),
            StmtCol::COMM_IN_USD,
        )?,
    })
}

pub fn build_cash(fields: &FieldBinder) -> Result<Cash, SError> {
    Ok(Cash {
        settle_date: parse_field_date(fields, StmtCol::SETTLE_DATE)?,
        currency: parse_field_currency(fields, StmtCol::CURRENCY)?,
        amount: parse_decimal(fields.value(StmtCol::AMOUNT), StmtCol::AMOUNT)?,
    })
}

pub fn build_dividend(fields: &FieldBinder) -> Result<Dividend, SError> {
    Ok(Dividend {
        date: parse_field_date(fields, StmtCol::DATE)?,
        currency: parse_field_currency(fields, StmtCol::CURRENCY)?,
        symbol: dividend_symbol(fields.value(StmtCol::DESCRIPTION)).to_string(),
        amount: parse_decimal(fields.value(StmtCol::AMOUNT), StmtCol::AMOUNT)?,
        tax: rust_decimal::Decimal::ZERO,
    })
}
