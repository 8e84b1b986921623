//! Property tests for the payroll calculation rules.
//!
//! Amounts are generated as whole pesewas so every input is an exact
//! two-decimal value, as it would be on a real payslip.

use proptest::prelude::*;
use rust_decimal::Decimal;

use ghana_payroll::calculation::{
    TAX_BRACKETS, calculate_bonus_tax, calculate_overtime_pay, calculate_paye, calculate_ssnit,
    calculate_summary_totals, is_consistent, paye_breakdown, process_employees, round_money,
};
use ghana_payroll::models::Employee;

const TOP_RATE: Decimal = Decimal::from_parts(35, 0, 0, false, 2);
const ONE_PESEWA: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

fn money(pesewas: i64) -> Decimal {
    Decimal::new(pesewas, 2)
}

/// Any amount from -1,000,000.00 to 1,000,000.00.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..=100_000_000).prop_map(money)
}

fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..=0).prop_map(money)
}

fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000_000).prop_map(money)
}

fn hours() -> impl Strategy<Value = Decimal> {
    (0i64..=20_000).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn employee() -> impl Strategy<Value = Employee> {
    (
        positive_amount(),
        (0i64..=5_000_000).prop_map(money),
        (0i64..=5_000_000).prop_map(money),
        hours(),
    )
        .prop_map(|(basic, allowances, bonus, overtime_hours)| Employee {
            employee_name: "Generated".to_string(),
            basic_salary: Some(basic),
            allowances: Some(allowances),
            bonus: Some(bonus),
            overtime_hours: Some(overtime_hours),
            ..Default::default()
        })
}

/// Cumulative income at which each bounded bracket ends.
fn bracket_boundaries() -> Vec<Decimal> {
    TAX_BRACKETS
        .iter()
        .filter_map(|bracket| bracket.width)
        .scan(Decimal::ZERO, |total, width| {
            *total += width;
            Some(*total)
        })
        .collect()
}

proptest! {
    #[test]
    fn paye_is_zero_for_non_positive_income(income in non_positive_amount()) {
        prop_assert_eq!(calculate_paye(income), Decimal::ZERO);
        prop_assert!(paye_breakdown(income).lines.is_empty());
    }

    #[test]
    fn paye_is_monotonic(a in any_amount(), b in any_amount()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(calculate_paye(low) <= calculate_paye(high));
    }

    #[test]
    fn paye_never_exceeds_top_rate(income in positive_amount()) {
        let paye = calculate_paye(income);
        prop_assert!(paye >= Decimal::ZERO);
        prop_assert!(paye <= round_money(income * TOP_RATE));
    }

    #[test]
    fn paye_is_continuous_at_bracket_boundaries(step in 1i64..=100) {
        let delta = money(step);
        for boundary in bracket_boundaries() {
            let below = calculate_paye(boundary - delta);
            let at = calculate_paye(boundary);
            let above = calculate_paye(boundary + delta);

            let limit = delta * TOP_RATE + ONE_PESEWA;
            prop_assert!(at - below <= limit, "jump below {}", boundary);
            prop_assert!(above - at <= limit, "jump above {}", boundary);
        }
    }

    #[test]
    fn paye_breakdown_accounts_for_all_income(income in positive_amount()) {
        let breakdown = paye_breakdown(income);
        let taxed: Decimal = breakdown.lines.iter().map(|line| line.taxed_amount).sum();
        let tax: Decimal = breakdown.lines.iter().map(|line| line.tax).sum();

        prop_assert_eq!(taxed, income);
        prop_assert_eq!(round_money(tax), breakdown.total);
        prop_assert_eq!(breakdown.total, calculate_paye(income));
    }

    #[test]
    fn ssnit_and_overtime_are_zero_for_non_positive_basic(
        basic in non_positive_amount(),
        overtime_hours in hours(),
    ) {
        let ssnit = calculate_ssnit(basic);
        prop_assert_eq!(ssnit.employee, Decimal::ZERO);
        prop_assert_eq!(ssnit.employer, Decimal::ZERO);
        prop_assert_eq!(ssnit.total, Decimal::ZERO);
        prop_assert_eq!(calculate_overtime_pay(basic, overtime_hours), Decimal::ZERO);
    }

    #[test]
    fn ssnit_total_is_sum_of_rounded_sides(basic in positive_amount()) {
        let ssnit = calculate_ssnit(basic);
        prop_assert_eq!(ssnit.total, ssnit.employee + ssnit.employer);
        prop_assert_eq!(ssnit.employee, round_money(ssnit.employee));
        prop_assert_eq!(ssnit.employer, round_money(ssnit.employer));
    }

    #[test]
    fn bonus_tax_is_zero_for_non_positive_bonus(bonus in non_positive_amount()) {
        prop_assert_eq!(calculate_bonus_tax(bonus), Decimal::ZERO);
    }

    #[test]
    fn results_are_internally_consistent(employee in employee()) {
        let results = process_employees(std::slice::from_ref(&employee));
        let result = &results[0];

        prop_assert!(is_consistent(result));
        prop_assert_eq!(&result.employee, &employee);
    }

    #[test]
    fn bonus_does_not_change_progressive_tax(employee in employee(), extra in positive_amount()) {
        let mut with_more_bonus = employee.clone();
        with_more_bonus.bonus = employee.bonus.map(|bonus| bonus + extra);

        let results = process_employees(&[employee, with_more_bonus]);
        prop_assert_eq!(results[0].taxable_income, results[1].taxable_income);
        prop_assert_eq!(results[0].paye, results[1].paye);
        prop_assert_eq!(results[0].ssnit_employee, results[1].ssnit_employee);
    }

    #[test]
    fn summary_totals_are_reconstructable(
        employees in proptest::collection::vec(employee(), 0..20),
    ) {
        let results = process_employees(&employees);
        let summary = calculate_summary_totals(&results);

        let net: Decimal = results.iter().map(|r| r.net_pay).sum();
        let gross: Decimal = results.iter().map(|r| r.gross_pay).sum();

        prop_assert_eq!(summary.employee_count, employees.len());
        prop_assert_eq!(summary.total_net_pay, net);
        prop_assert_eq!(summary.total_gross_pay, gross);
        prop_assert_eq!(
            summary.total_ssnit,
            round_money(summary.total_ssnit_employee + summary.total_ssnit_employer)
        );
        prop_assert_eq!(
            summary.total_deductions,
            summary.total_ssnit_employee + summary.total_paye + summary.total_bonus_tax
        );
    }

    #[test]
    fn summary_ignores_order(employees in proptest::collection::vec(employee(), 1..10)) {
        let forward = calculate_summary_totals(&process_employees(&employees));

        let mut reversed = employees.clone();
        reversed.reverse();
        let backward = calculate_summary_totals(&process_employees(&reversed));

        prop_assert_eq!(forward, backward);
    }
}
