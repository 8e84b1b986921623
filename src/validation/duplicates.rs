//! Duplicate identifier detection across a batch.

use std::collections::HashMap;

use crate::models::Employee;

use super::issue::ValidationIssue;

/// Groups 1-based row numbers by trimmed identifier, in order of first
/// appearance. Blank identifiers are skipped.
fn group_rows<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(&'a str, Vec<usize>)> {
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (position, value) in values.enumerate() {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let row = position + 1;
        match index.get(value) {
            Some(&slot) => groups[slot].1.push(row),
            None => {
                index.insert(value, groups.len());
                groups.push((value, vec![row]));
            }
        }
    }

    groups
}

fn duplicate_issues<'a>(
    values: impl Iterator<Item = &'a str>,
    field: &str,
    label: &str,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (value, rows) in group_rows(values) {
        if rows.len() < 2 {
            continue;
        }
        let plural = if rows.len() > 2 { "s" } else { "" };
        for &row in &rows {
            let others = rows
                .iter()
                .filter(|&&other| other != row)
                .map(|other| other.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            issues.push(ValidationIssue::new(
                row,
                field,
                format!("Duplicate {label}: {value} (also appears in row{plural} {others})"),
            ));
        }
    }

    issues
}

/// Reports every row whose TIN also appears on another row.
///
/// ## Example
/// ```
/// use ghana_payroll::models::Employee;
/// use ghana_payroll::validation::check_duplicate_tins;
///
/// let a = Employee { tin: "P0012345678".to_string(), ..Default::default() };
/// let b = Employee { tin: "P0012345678".to_string(), ..Default::default() };
///
/// let issues = check_duplicate_tins(&[a, b]);
/// assert_eq!(issues.len(), 2);
/// assert_eq!(issues[0].message, "Duplicate TIN: P0012345678 (also appears in row 2)");
/// ```
pub fn check_duplicate_tins(employees: &[Employee]) -> Vec<ValidationIssue> {
    duplicate_issues(employees.iter().map(|e| e.tin.as_str()), "tin", "TIN")
}

/// Reports every row whose SSNIT number also appears on another row.
pub fn check_duplicate_ssnit(employees: &[Employee]) -> Vec<ValidationIssue> {
    duplicate_issues(
        employees.iter().map(|e| e.ssnit_number.as_str()),
        "ssnit_number",
        "SSNIT number",
    )
}
