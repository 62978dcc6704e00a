use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use employee_promotions::command::{CommandProcessor, PromotionCommand};
use employee_promotions::models::Employee;
use employee_promotions::observer::ConsoleObserver;

#[derive(Parser)]
#[command(name = "promote")]
#[command(version)]
#[command(about = "Promote an employee once and report the new salary")]
struct Cli {}

/// Initialize tracing with output to stderr so stdout carries only notices
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "employee_promotions=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let mut employee = Employee::new("John Doe", 50000.0);
    employee.add_observer(ConsoleObserver);

    let mut command = PromotionCommand::new(&mut employee);
    CommandProcessor::new().process(&mut command);

    tracing::info!(
        employee = employee.name(),
        tier = %employee.tier(),
        "Promotion processed"
    );

    Ok(())
}
