//! Common types and data structures

use crate::constants::EUR_TO_USD_RATE;

/// Currencies the converter knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Eur,
    Usd,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Currency::Eur => '€',
            Currency::Usd => '$',
        }
    }

    /// Phosphor glyph shown next to the currency code
    pub fn icon(self) -> &'static str {
        match self {
            Currency::Eur => egui_phosphor::regular::CURRENCY_EUR,
            Currency::Usd => egui_phosphor::regular::CURRENCY_DOLLAR,
        }
    }
}

/// Which way an amount is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionDirection {
    #[default]
    EurToUsd,
    UsdToEur,
}

impl ConversionDirection {
    /// Display order of the direction buttons
    pub const ALL: [ConversionDirection; 2] =
        [ConversionDirection::EurToUsd, ConversionDirection::UsdToEur];

    pub fn source(self) -> Currency {
        match self {
            ConversionDirection::EurToUsd => Currency::Eur,
            ConversionDirection::UsdToEur => Currency::Usd,
        }
    }

    pub fn target(self) -> Currency {
        match self {
            ConversionDirection::EurToUsd => Currency::Usd,
            ConversionDirection::UsdToEur => Currency::Eur,
        }
    }

    pub fn label(self) -> String {
        format!("{} to {}", self.source().code(), self.target().code())
    }

    /// Multiplicative factor applied to an amount in the source currency
    pub fn rate(self) -> f64 {
        match self {
            ConversionDirection::EurToUsd => EUR_TO_USD_RATE,
            ConversionDirection::UsdToEur => usd_to_eur_rate(),
        }
    }
}

/// USD -> EUR is always the inverse of the EUR -> USD literal
pub fn usd_to_eur_rate() -> f64 {
    1.0 / EUR_TO_USD_RATE
}
