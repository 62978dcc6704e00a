//! Invocable requests and the processor that runs them.

use crate::models::Employee;

/// A unit of work that can be handed to a [`CommandProcessor`].
///
/// Any `FnMut()` closure is a command.
pub trait Command {
    fn execute(&mut self);
}

impl<F> Command for F
where
    F: FnMut(),
{
    fn execute(&mut self) {
        self()
    }
}

/// Promotes the wrapped employee when executed.
#[derive(Debug)]
pub struct PromotionCommand<'a> {
    employee: &'a mut Employee,
}

impl<'a> PromotionCommand<'a> {
    pub fn new(employee: &'a mut Employee) -> Self {
        Self { employee }
    }
}

impl Command for PromotionCommand<'_> {
    fn execute(&mut self) {
        self.employee.promote();
    }
}

/// Runs commands on behalf of callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProcessor;

impl CommandProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn process<C>(&self, command: &mut C)
    where
        C: Command + ?Sized,
    {
        tracing::debug!(command = std::any::type_name::<C>(), "Processing command");
        command.execute();
    }
}
