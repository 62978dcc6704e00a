use std::fmt;

use uuid::Uuid;

use super::tier::PerformanceTier;
use crate::observer::EmployeeObserver;

/// Handle identifying a registered observer, returned by
/// [`Employee::add_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

impl ObserverId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// An employee whose salary and tier change through promotions.
///
/// The name is fixed at construction. Salary and tier only change through
/// [`Employee::promote`], which delegates to the current [`PerformanceTier`]
/// and then notifies every registered observer in registration order.
///
/// # Lifecycle
/// Employees start `Satisfactory`. The first promotion moves them to
/// `Exemplary`, where they stay; later promotions only raise the salary.
pub struct Employee {
    name: String,
    salary: f64,
    tier: PerformanceTier,
    observers: Vec<(ObserverId, Box<dyn EmployeeObserver>)>,
}

impl Employee {
    pub fn new(name: impl Into<String>, salary: f64) -> Self {
        Self {
            name: name.into(),
            salary,
            tier: PerformanceTier::Satisfactory,
            observers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn tier(&self) -> PerformanceTier {
        self.tier
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Register an observer. Observers are notified in the order they were added.
    pub fn add_observer<O>(&mut self, observer: O) -> ObserverId
    where
        O: EmployeeObserver + 'static,
    {
        let id = ObserverId::new();
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Unregister an observer. Returns `false` if `id` was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        match self.observers.iter().position(|(registered, _)| *registered == id) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Call every registered observer with the current state of this employee.
    ///
    /// The employee is borrowed immutably for the whole fan-out, so the
    /// observer list cannot change while it is being walked.
    pub fn notify_observers(&self) {
        for (_, observer) in &self.observers {
            observer.update(self);
        }
    }

    /// Promote the employee according to their current tier, then notify observers.
    pub fn promote(&mut self) {
        let (salary, tier) = self.tier.promote(self.salary);
        tracing::debug!(
            employee = %self.name,
            from = %self.tier,
            to = %tier,
            salary,
            "Promoted employee"
        );
        self.salary = salary;
        self.tier = tier;
        self.notify_observers();
    }
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Employee")
            .field("name", &self.name)
            .field("salary", &self.salary)
            .field("tier", &self.tier)
            .field("observers", &self.observers.len())
            .finish()
    }
}
