use std::fmt::Display;

use crate::util::basic::SError;

#[derive(Clone, Debug)]
enum CurrImpl {
    Static(&'static str),
    Dyn(String),
}

#[derive(Clone, Debug)]
pub struct Currency(CurrImpl);

impl Currency {
    /// Parses an ISO 4217 code: three ASCII letters, normalized to
    /// uppercase. The majors appearing in the statements are interned.
    pub fn parse_iso(s: &str) -> Result<Self, SError> {
        if s.len() != 3 || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("Invalid ISO 4217 currency code '{}'", s));
        }
        Ok(match s.to_uppercase().as_str() {
            "USD" => Currency::usd(),
            "EUR" => Currency::eur(),
            "CAD" => Currency::cad(),
            other => Currency(CurrImpl::Dyn(other.to_string())),
        })
    }

    pub fn usd() -> Self {
        Currency(CurrImpl::Static("USD"))
    }

    pub fn eur() -> Self {
        Currency(CurrImpl::Static("EUR"))
    }

    pub fn cad() -> Self {
        Currency(CurrImpl::Static("CAD"))
    }

    pub fn as_str(&self) -> &str {
        match &self.0 {
            CurrImpl::Static(s) => s,
            CurrImpl::Dyn(s) => s.as_str(),
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Currency {}

// Auto-implements to_string()
impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
