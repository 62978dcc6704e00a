//! Listeners notified after every promotion.

use crate::models::Employee;

/// Receives the employee after each promotion.
///
/// The employee is passed live, after its salary and tier have been updated.
/// Any `Fn(&Employee)` closure is an observer.
pub trait EmployeeObserver {
    fn update(&self, employee: &Employee);
}

impl<F> EmployeeObserver for F
where
    F: Fn(&Employee),
{
    fn update(&self, employee: &Employee) {
        self(employee)
    }
}

/// Prints a [`promotion_notice`] line to stdout for every promotion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl EmployeeObserver for ConsoleObserver {
    fn update(&self, employee: &Employee) {
        println!("{}", promotion_notice(employee));
    }
}

/// Human-readable notice announcing an employee's promotion and new salary.
pub fn promotion_notice(employee: &Employee) -> String {
    format!(
        "Employee {} has been promoted. New salary: ${:.2}",
        employee.name(),
        employee.salary()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_before_promotion() {
        let employee = Employee::new("Jane Roe", 42000.0);
        assert_eq!(
            promotion_notice(&employee),
            "Employee Jane Roe has been promoted. New salary: $42000.00"
        );
    }

    #[test]
    fn test_notice_rounds_to_cents() {
        let mut employee = Employee::new("John Doe", 50000.0);
        employee.promote();
        employee.promote();
        assert_eq!(
            promotion_notice(&employee),
            "Employee John Doe has been promoted. New salary: $57750.00"
        );
    }
}
