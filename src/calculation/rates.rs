//! Statutory rates for Ghana monthly payroll.
//!
//! This module holds the fixed PAYE bracket table, the SSNIT contribution
//! rates, the bonus tax rate and the overtime constants. They are compiled
//! in rather than loaded from configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tier of the monthly PAYE schedule.
///
/// Brackets are incremental: `width` is the amount of income the tier covers,
/// not a cumulative ceiling. A `width` of `None` covers all remaining income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The span of income taxed at `rate`, or `None` for the unbounded top tier.
    pub width: Option<Decimal>,
    /// The marginal rate for this tier (e.g., 0.175 for 17.5%).
    pub rate: Decimal,
}

/// Monthly PAYE brackets, applied in order.
///
/// | Width     | Rate  |
/// |-----------|-------|
/// | 490       | 0%    |
/// | 110       | 5%    |
/// | 130       | 10%   |
/// | 3,166.67  | 17.5% |
/// | 16,000    | 25%   |
/// | 30,520    | 30%   |
/// | remainder | 35%   |
pub const TAX_BRACKETS: [TaxBracket; 7] = [
    TaxBracket {
        width: Some(Decimal::from_parts(490, 0, 0, false, 0)),
        rate: Decimal::from_parts(0, 0, 0, false, 0),
    },
    TaxBracket {
        width: Some(Decimal::from_parts(110, 0, 0, false, 0)),
        rate: Decimal::from_parts(5, 0, 0, false, 2),
    },
    TaxBracket {
        width: Some(Decimal::from_parts(130, 0, 0, false, 0)),
        rate: Decimal::from_parts(10, 0, 0, false, 2),
    },
    TaxBracket {
        width: Some(Decimal::from_parts(316_667, 0, 0, false, 2)),
        rate: Decimal::from_parts(175, 0, 0, false, 3),
    },
    TaxBracket {
        width: Some(Decimal::from_parts(16_000, 0, 0, false, 0)),
        rate: Decimal::from_parts(25, 0, 0, false, 2),
    },
    TaxBracket {
        width: Some(Decimal::from_parts(30_520, 0, 0, false, 0)),
        rate: Decimal::from_parts(30, 0, 0, false, 2),
    },
    TaxBracket {
        width: None,
        rate: Decimal::from_parts(35, 0, 0, false, 2),
    },
];

/// Employee SSNIT contribution rate (5.5% of basic salary, Tier 1 + 2).
pub const SSNIT_EMPLOYEE_RATE: Decimal = Decimal::from_parts(55, 0, 0, false, 3);

/// Employer SSNIT contribution rate (13% of basic salary).
pub const SSNIT_EMPLOYER_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// Flat tax rate on bonuses (5%).
pub const BONUS_TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Standard working hours per month, used to derive an hourly rate.
pub const STANDARD_MONTHLY_HOURS: Decimal = Decimal::from_parts(176, 0, 0, false, 0);

/// Overtime pay multiplier applied to the hourly rate.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// A serialisable snapshot of every statutory constant.
///
/// Intended for collaborators that display the rates in use.
///
/// # Example
///
/// ```
/// use ghana_payroll::calculation::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::current();
/// assert_eq!(rates.tax_brackets.len(), 7);
/// assert_eq!(rates.ssnit_employee_rate, Decimal::new(55, 3));
/// assert_eq!(rates.standard_monthly_hours, Decimal::new(176, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// The PAYE schedule, in application order.
    pub tax_brackets: Vec<TaxBracket>,
    /// Employee SSNIT rate.
    pub ssnit_employee_rate: Decimal,
    /// Employer SSNIT rate.
    pub ssnit_employer_rate: Decimal,
    /// Flat bonus tax rate.
    pub bonus_tax_rate: Decimal,
    /// Standard monthly working hours.
    pub standard_monthly_hours: Decimal,
    /// Overtime multiplier.
    pub overtime_multiplier: Decimal,
}

impl StatutoryRates {
    /// Returns the rates compiled into this engine.
    pub fn current() -> Self {
        Self {
            tax_brackets: TAX_BRACKETS.to_vec(),
            ssnit_employee_rate: SSNIT_EMPLOYEE_RATE,
            ssnit_employer_rate: SSNIT_EMPLOYER_RATE,
            bonus_tax_rate: BONUS_TAX_RATE,
            standard_monthly_hours: STANDARD_MONTHLY_HOURS,
            overtime_multiplier: OVERTIME_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bracket_widths() {
        let widths: Vec<Option<Decimal>> = TAX_BRACKETS.iter().map(|b| b.width).collect();
        assert_eq!(
            widths,
            vec![
                Some(dec("490")),
                Some(dec("110")),
                Some(dec("130")),
                Some(dec("3166.67")),
                Some(dec("16000")),
                Some(dec("30520")),
                None,
            ]
        );
    }

    #[test]
    fn test_bracket_rates() {
        let rates: Vec<Decimal> = TAX_BRACKETS.iter().map(|b| b.rate).collect();
        assert_eq!(
            rates,
            vec![
                dec("0"),
                dec("0.05"),
                dec("0.10"),
                dec("0.175"),
                dec("0.25"),
                dec("0.30"),
                dec("0.35"),
            ]
        );
    }

    #[test]
    fn test_only_last_bracket_is_unbounded() {
        let (last, rest) = TAX_BRACKETS.split_last().unwrap();
        assert!(last.width.is_none());
        assert!(rest.iter().all(|b| b.width.is_some()));
    }

    #[test]
    fn test_rates_are_non_decreasing() {
        assert!(TAX_BRACKETS.windows(2).all(|w| w[0].rate <= w[1].rate));
    }

    #[test]
    fn test_contribution_and_overtime_constants() {
        assert_eq!(SSNIT_EMPLOYEE_RATE, dec("0.055"));
        assert_eq!(SSNIT_EMPLOYER_RATE, dec("0.13"));
        assert_eq!(BONUS_TAX_RATE, dec("0.05"));
        assert_eq!(STANDARD_MONTHLY_HOURS, dec("176"));
        assert_eq!(OVERTIME_MULTIPLIER, dec("1.5"));
    }

    #[test]
    fn test_statutory_rates_serialize() {
        let json = serde_json::to_value(StatutoryRates::current()).unwrap();
        assert_eq!(json["ssnit_employer_rate"], "0.13");
        assert_eq!(json["overtime_multiplier"], "1.5");
        assert_eq!(json["tax_brackets"][3]["width"], "3166.67");
        assert!(json["tax_brackets"][6]["width"].is_null());
    }
}
