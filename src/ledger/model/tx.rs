use rust_decimal::Decimal;
use time::{Date, PrimitiveDateTime};

use crate::ledger::Currency;
use crate::util::date::render_datetime;
use crate::util::decimal::is_positive;

/// Account label stamped into every output row.
pub const LEDGER_ACCOUNT: &str = "IBKR";

pub const NUM_LEDGER_COLS: usize = 14;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Trade {
    pub timestamp: PrimitiveDateTime,
    pub currency: Currency,
    pub symbol: String,
    pub quantity: Decimal,
    pub amount: Decimal,
    pub fee: Decimal,
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Forex {
    // End date of the statement's reporting period. The export does not
    // timestamp forex subtotal rows themselves, so this may be unknown.
    pub report_date: Option<Date>,
    pub currency: Currency,
    pub target_currency: Currency,
    pub quantity: Decimal,
    pub amount: Decimal,
    // Always charged in USD, regardless of the converted currencies.
    pub fee: Decimal,
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Cash {
    pub settle_date: Date,
    pub currency: Currency,
    // Negative amounts represent withdrawals.
    pub amount: Decimal,
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Dividend {
    pub date: Date,
    pub currency: Currency,
    pub symbol: String,
    pub amount: Decimal,
    pub tax: Decimal,
}

impl Trade {
    pub fn transaction_type(&self) -> &'static str {
        if is_positive(&self.quantity) {
            "BUY"
        } else {
            "SELL"
        }
    }

    fn render_row(&self) -> Vec<String> {
        vec![
            render_datetime(&self.timestamp),      // Date
            LEDGER_ACCOUNT.to_string(),            // Account
            self.transaction_type().to_string(),   // Type
            "SECURITY".to_string(),                // Instrument Type
            self.symbol.clone(),                   // Ticker Symbol
            self.quantity.abs().to_string(),       // Quantity
            self.amount.abs().to_string(),         // Amount
            self.currency.to_string(),             // Currency
            self.fee.abs().to_string(),            // Fees
            self.currency.to_string(),             // Fees Currency
            String::new(),                         // Taxes
            String::new(),                         // Taxes Currency
            String::new(),                         // Converted
            String::new(),                         // Converted Currency
        ]
    }
}

impl Forex {
    pub fn transaction_type(&self) -> &'static str {
        "CONVERSION"
    }

    fn render_row(&self) -> Vec<String> {
        let date = match &self.report_date {
            Some(d) => format!("{} 00:00:00", d),
            None => String::new(),
        };
        vec![
            date,                                  // Date
            LEDGER_ACCOUNT.to_string(),            // Account
            self.transaction_type().to_string(),   // Type
            String::new(),                         // Instrument Type
            String::new(),                         // Ticker Symbol
            String::new(),                         // Quantity
            self.amount.abs().to_string(),         // Amount
            self.currency.to_string(),             // Currency
            self.fee.abs().to_string(),            // Fees
            Currency::usd().to_string(),           // Fees Currency
            String::new(),                         // Taxes
            String::new(),                         // Taxes Currency
            self.quantity.to_string(),             // Converted
            self.target_currency.to_string(),      // Converted Currency
        ]
    }
}

impl Cash {
    pub fn transaction_type(&self) -> &'static str {
        if is_positive(&self.amount) {
            "DEPOSIT"
        } else {
            "WITHDRAWAL"
        }
    }

    fn render_row(&self) -> Vec<String> {
        vec![
            self.settle_date.to_string(),          // Date
            LEDGER_ACCOUNT.to_string(),            // Account
            self.transaction_type().to_string(),   // Type
            String::new(),                         // Instrument Type
            String::new(),                         // Ticker Symbol
            String::new(),                         // Quantity
            self.amount.abs().to_string(),         // Amount
            self.currency.to_string(),             // Currency
            String::new(),                         // Fees
            String::new(),                         // Fees Currency
            String::new(),                         // Taxes
            String::new(),                         // Taxes Currency
            String::new(),                         // Converted
            String::new(),                         // Converted Currency
        ]
    }
}

impl Dividend {
    pub fn transaction_type(&self) -> &'static str {
        "DIVIDEND"
    }

    pub fn set_tax(&mut self, tax: Decimal) {
        self.tax = tax;
    }

    fn render_row(&self) -> Vec<String> {
        vec![
            self.date.to_string(),                 // Date
            LEDGER_ACCOUNT.to_string(),            // Account
            self.transaction_type().to_string(),   // Type
            "SECURITY".to_string(),                // Instrument Type
            self.symbol.clone(),                   // Ticker Symbol
            String::new(),                         // Quantity
            self.amount.abs().to_string(),         // Amount
            self.currency.to_string(),             // Currency
            String::new(),                         // Fees
            String::new(),                         // Fees Currency
            self.tax.abs().to_string(),            // Taxes
            self.currency.to_string(),             // Taxes Currency
            String::new(),                         // Converted
            String::new(),                         // Converted Currency
        ]
    }
}

/// The closed set of normalized ledger records.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Transaction {
    Trade(Trade),
    Forex(Forex),
    Cash(Cash),
    Dividend(Dividend),
}

impl Transaction {
    pub fn transaction_type(&self) -> &'static str {
        match self {
            Transaction::Trade(t) => t.transaction_type(),
            Transaction::Forex(f) => f.transaction_type(),
            Transaction::Cash(c) => c.transaction_type(),
            Transaction::Dividend(d) => d.transaction_type(),
        }
    }

    /// Projects the record onto the fixed output row schema. Signs are
    /// carried by the Type column; the numeric cells hold absolute
    /// values, except Converted, which keeps the signed quantity.
    pub fn render_row(&self) -> Vec<String> {
        match self {
            Transaction::Trade(t) => t.render_row(),
            Transaction::Forex(f) => f.render_row(),
            Transaction::Cash(c) => c.render_row(),
            Transaction::Dividend(d) => d.render_row(),
        }
    }
}
