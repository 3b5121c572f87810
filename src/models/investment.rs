//! Investment model
//!
//! Represents a recorded investment. Investments are immutable after
//! creation; there is no edit operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::InvestmentId;
use super::money::Money;

/// Kind of investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentKind {
    /// Fixed-income securities (bonds, CDs)
    FixedIncome,
    /// Variable-income securities (stocks, ETFs)
    VariableIncome,
    /// Cryptocurrencies
    Crypto,
    /// Fixed-income funds
    FixedIncomeFund,
}

impl InvestmentKind {
    /// Number of recognized investment kinds
    ///
    /// The diversification score divides by this fixed denominator; it must
    /// track the variant count of this enum.
    pub const COUNT: usize = 4;

    /// All recognized kinds, in declaration order
    pub const ALL: [InvestmentKind; Self::COUNT] = [
        Self::FixedIncome,
        Self::VariableIncome,
        Self::Crypto,
        Self::FixedIncomeFund,
    ];
}

impl fmt::Display for InvestmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedIncome => write!(f, "Fixed Income"),
            Self::VariableIncome => write!(f, "Variable Income"),
            Self::Crypto => write!(f, "Crypto"),
            Self::FixedIncomeFund => write!(f, "Fixed Income Fund"),
        }
    }
}

impl FromStr for InvestmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "fixed-income" | "fixed" => Ok(Self::FixedIncome),
            "variable-income" | "variable" => Ok(Self::VariableIncome),
            "crypto" | "cryptocurrency" => Ok(Self::Crypto),
            "fixed-income-fund" | "fund" => Ok(Self::FixedIncomeFund),
            other => Err(format!("Unknown investment kind: {}", other)),
        }
    }
}

/// A single investment record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    /// Unique identifier
    pub id: InvestmentId,

    /// Kind of investment
    pub kind: InvestmentKind,

    /// Amount invested
    pub amount: Money,

    /// Date the investment was made
    pub date: NaiveDate,
}

impl Investment {
    /// Create a new investment
    pub fn new(kind: InvestmentKind, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: InvestmentId::new(),
            kind,
            amount,
            date,
        }
    }
}
