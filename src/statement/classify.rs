/// Semantic record types appearing in an activity statement. Rows that
/// match no template are unrecognized (`None` from [`Classifier::classify`])
/// and skipped by the driver.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum RecordType {
    Meta,
    Trade,
    Forex,
    Cash,
    Dividend,
    TaxAdjustment,
    FeeAdjustment,
}

/// Marker in the second cell of a row that begins a new column-header
/// block. Intercepted before template matching.
pub const HEADER_MARKER: &str = "Header";

impl RecordType {
    /// The leading cells identifying a row of this type. Positions may
    /// require an exact empty string (Forex's third cell, which is what
    /// distinguishes its subtotal rows from trade data rows).
    fn template(&self) -> &'static [&'static str] {
        match self {
            RecordType::Meta => &["Statement", "Data"],
            RecordType::Trade => &["Trades", "Data", "Order", "Stocks"],
            RecordType::Forex => &["Trades", "SubTotal", "", "Forex"],
            RecordType::Cash => &["Deposits & Withdrawals", "Data"],
            RecordType::Dividend => &["Dividends", "Data"],
            RecordType::TaxAdjustment => &["Withholding Tax", "Data", "USD"],
            RecordType::FeeAdjustment => {
                &["Commission Adjustments", "Data", "USD"]
            }
        }
    }
}

// Match order matters: first match wins.
const CLASSIFY_ORDER: [RecordType; 7] = [
    RecordType::Meta,
    RecordType::Trade,
    RecordType::Forex,
    RecordType::Cash,
    RecordType::Dividend,
    RecordType::TaxAdjustment,
    RecordType::FeeAdjustment,
];

fn matches_template(row: &[String], template: &[&str]) -> bool {
    if row.len() < template.len() {
        return false;
    }
    for (cell, expected) in row.iter().zip(template.iter()) {
        if cell != expected {
            return false;
        }
    }
    true
}

pub fn is_header_row(row: &[String]) -> bool {
    row.get(1).map(|c| c == HEADER_MARKER).unwrap_or(false)
}

pub struct Classifier {
    // Some deployments' exports have no Commission Adjustments section.
    fee_adjustments: bool,
}

impl Classifier {
    pub fn new(fee_adjustments: bool) -> Classifier {
        Classifier { fee_adjustments }
    }

    /// Returns the first record type whose template prefix-matches `row`,
    /// or None for blank/footer/otherwise irrelevant rows. Not an error:
    /// unrecognized rows are the steady state of a statement scan.
    pub fn classify(&self, row: &[String]) -> Option<RecordType> {
        for rt in CLASSIFY_ORDER {
            if rt == RecordType::FeeAdjustment && !self.fee_adjustments {
                continue;
            }
            if matches_template(row, rt.template()) {
                return Some(rt);
            }
        }
        None
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(true)
    }
}
