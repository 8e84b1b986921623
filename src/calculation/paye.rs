//! Progressive income tax (PAYE) calculation.
//!
//! This module walks the incremental [`TAX_BRACKETS`] to compute the monthly
//! Pay-As-You-Earn tax on taxable income, and can report how much of the
//! income each bracket consumed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rates::TAX_BRACKETS;
use super::rounding::round_money;

/// The tax owed on the slice of income falling inside one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTax {
    /// Income level at which this bracket starts.
    pub lower: Decimal,
    /// The bracket width, or `None` for the unbounded top bracket.
    pub width: Option<Decimal>,
    /// The marginal rate of this bracket.
    pub rate: Decimal,
    /// The part of taxable income that fell inside this bracket.
    pub taxed_amount: Decimal,
    /// `taxed_amount * rate`, unrounded.
    pub tax: Decimal,
}

/// A bracket-by-bracket account of a PAYE calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeBreakdown {
    /// The taxable income the breakdown was computed for.
    pub taxable_income: Decimal,
    /// One line per bracket the income reached, in bracket order.
    pub lines: Vec<BracketTax>,
    /// Sum of all line taxes, rounded to 2 decimal places.
    pub total: Decimal,
}

/// Computes the PAYE breakdown for a monthly taxable income.
///
/// Each bracket taxes `min(remaining, width)` at its rate; the walk stops once
/// nothing remains. Taxable income of zero or less yields no lines and a zero
/// total, so a negative income never produces a refund.
///
/// # Examples
///
/// ```
/// use ghana_payroll::calculation::paye_breakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = paye_breakdown(Decimal::from_str("5225").unwrap());
///
/// assert_eq!(breakdown.lines.len(), 5);
/// assert_eq!(breakdown.lines[4].taxed_amount, Decimal::from_str("1328.33").unwrap());
/// assert_eq!(breakdown.total, Decimal::from_str("904.75").unwrap());
/// ```
pub fn paye_breakdown(taxable_income: Decimal) -> PayeBreakdown {
    let mut lines = Vec::new();

    if taxable_income <= Decimal::ZERO {
        return PayeBreakdown {
            taxable_income,
            lines,
            total: Decimal::ZERO,
        };
    }

    let mut remaining = taxable_income;
    let mut lower = Decimal::ZERO;

    for bracket in TAX_BRACKETS.iter() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxed_amount = match bracket.width {
            Some(width) => remaining.min(width),
            None => remaining,
        };

        lines.push(BracketTax {
            lower,
            width: bracket.width,
            rate: bracket.rate,
            taxed_amount,
            tax: taxed_amount * bracket.rate,
        });

        remaining -= taxed_amount;
        if let Some(width) = bracket.width {
            lower += width;
        }
    }

    let total = round_money(lines.iter().map(|line| line.tax).sum::<Decimal>());

    PayeBreakdown {
        taxable_income,
        lines,
        total,
    }
}

/// Calculates monthly PAYE on taxable income using the progressive brackets.
///
/// The bracket contributions are summed unrounded and the total is rounded
/// once to 2 decimal places. Returns zero for taxable income of zero or less.
///
/// # Examples
///
/// ```
/// use ghana_payroll::calculation::calculate_paye;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 0 + 5.50 + 13.00 + 554.16725 + 332.0825 = 904.74975
/// let paye = calculate_paye(Decimal::from_str("5225").unwrap());
/// assert_eq!(paye, Decimal::from_str("904.75").unwrap());
///
/// assert_eq!(calculate_paye(Decimal::from_str("-100").unwrap()), Decimal::ZERO);
/// ```
pub fn calculate_paye(taxable_income: Decimal) -> Decimal {
    paye_breakdown(taxable_income).total
}
