//! Staff compensation

use crate::config::OVERTIME_MULTIPLIER;
use crate::models::staff::StaffEntry;

/// Pay before bonus for one person in the entry
///
/// Hourly staff: `rate × annual_hours + rate × 1.5 × overtime_hours`.
/// Salaried staff: the annual salary.
pub fn base_pay(entry: &StaffEntry) -> f64 {
    if entry.is_hourly {
        let regular = entry.salary * entry.annual_hours as f64;
        let overtime = entry.salary * OVERTIME_MULTIPLIER * entry.overtime_hours as f64;
        regular + overtime
    } else {
        entry.salary
    }
}

/// Total annual compensation for all `count` people in the entry
///
/// Callers filter out disabled entries; this function does not look at
/// `enabled`.
pub fn staff_cost(entry: &StaffEntry) -> f64 {
    let base = base_pay(entry);
    let bonus = base * (entry.bonus_percent / 100.0);
    (base + bonus) * entry.count as f64
}

/// Payroll and headcount of a staff group
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupPayroll {
    pub payroll: f64,
    pub headcount: u32,
}

/// Sum payroll and headcount over the enabled entries of a group
pub fn group_payroll<'a>(staff: impl IntoIterator<Item = &'a StaffEntry>) -> GroupPayroll {
    staff
        .into_iter()
        .filter(|entry| entry.enabled)
        .fold(GroupPayroll::default(), |acc, entry| GroupPayroll {
            payroll: acc.payroll + staff_cost(entry),
            headcount: acc.headcount.saturating_add(entry.count),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salaried_with_bonus() {
        let entry = StaffEntry::salaried("CFO", 275_000.0, 1);
        assert!((staff_cost(&entry) - 302_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_hourly_with_overtime() {
        let entry = StaffEntry::hourly("Boarding Agent/Runner", 20.0, 3).with_overtime(100);
        assert_eq!(base_pay(&entry), 44_600.0);
        assert!((staff_cost(&entry) - 147_180.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_count_and_zero_bonus() {
        assert_eq!(staff_cost(&StaffEntry::salaried("CEO/President", 350_000.0, 0)), 0.0);
        let no_bonus = StaffEntry::salaried("Controller", 165_000.0, 2).with_bonus_percent(0.0);
        assert_eq!(staff_cost(&no_bonus), 330_000.0);
    }

    #[test]
    fn test_group_payroll_skips_disabled() {
        let staff = vec![
            StaffEntry::salaried("Ship Agent", 100_000.0, 2).with_bonus_percent(0.0),
            StaffEntry::salaried("Ship Agent", 100_000.0, 5).disabled(),
        ];
        let group = group_payroll(&staff);
        assert_eq!(group.payroll, 200_000.0);
        assert_eq!(group.headcount, 2);
    }
}
