//! Discrete periods and their granularities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity class of a period.
///
/// The lower-cased type name doubles as the membership column in period
/// predicates (`"ax"."monthly" in (…)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodType {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
    BiMonthly,
    Quarterly,
    SixMonthly,
    Yearly,
    FinancialApril,
    FinancialJuly,
    FinancialOctober,
}

impl PeriodType {
    /// Human name of this period type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::BiWeekly => "BiWeekly",
            Self::Monthly => "Monthly",
            Self::BiMonthly => "BiMonthly",
            Self::Quarterly => "Quarterly",
            Self::SixMonthly => "SixMonthly",
            Self::Yearly => "Yearly",
            Self::FinancialApril => "FinancialApril",
            Self::FinancialJuly => "FinancialJuly",
            Self::FinancialOctober => "FinancialOctober",
        }
    }

    /// Lower-cased name: the column this type's uids are matched against.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::BiWeekly => "biweekly",
            Self::Monthly => "monthly",
            Self::BiMonthly => "bimonthly",
            Self::Quarterly => "quarterly",
            Self::SixMonthly => "sixmonthly",
            Self::Yearly => "yearly",
            Self::FinancialApril => "financialapril",
            Self::FinancialJuly => "financialjuly",
            Self::FinancialOctober => "financialoctober",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A discrete temporal bucket: one concrete day, month, quarter, etc.
///
/// `uid` is the stable ISO identifier of the bucket (`"20200104"` for a day,
/// `"202001"` for a month, `"2020Q1"` for a quarter). Period predicates match
/// on uids, never on human-readable names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Granularity of this bucket
    pub period_type: PeriodType,
    /// Stable ISO identifier
    pub uid: String,
}

impl Period {
    /// Create a new period.
    pub fn new(period_type: PeriodType, uid: impl Into<String>) -> Self {
        Self {
            period_type,
            uid: uid.into(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.uid, self.period_type)
    }
}
