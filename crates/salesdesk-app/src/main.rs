//! # SalesDesk
//!
//! Command line front end for the department and seller registrations.
//!
//! Wiring runs bottom up: configuration, SQLite pool and migrations,
//! repositories, services, then the command dispatch. Successful
//! mutations go through a [`ChangeNotifier`] so the listing views can
//! refresh themselves afterwards.

use salesdesk_config::ConfigLoader;
use salesdesk_core::{SalesDeskError, SalesDeskResult};
use salesdesk_repository::{create_pool, SqliteDepartmentRepository, SqliteSellerRepository};
use salesdesk_service::{
    DepartmentService, DepartmentServiceImpl, SellerService, SellerServiceImpl,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info};

mod commands;
mod notify;
mod render;

use commands::{department, seller, CommandLine, Commands};
use notify::ChangeNotifier;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    if let Err(e) = run().await {
        report_error(&e);
        std::process::exit(1);
    }
}

async fn run() -> SalesDeskResult<()> {
    let command_line = CommandLine::parse_args();

    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get();

    info!("Environment: {}", config.app.environment);
    info!("Database: {}", config.database.url);

    // Create database pool and bring the schema up to date
    let pool = create_pool(&config.database).await?;
    pool.health_check().await?;
    pool.run_migrations().await?;

    // Wire repositories and services
    let department_repository = Arc::new(SqliteDepartmentRepository::new(pool.clone()));
    let seller_repository = Arc::new(SqliteSellerRepository::new(pool.clone()));

    let department_service: Arc<dyn DepartmentService> =
        Arc::new(DepartmentServiceImpl::new(department_repository));
    let seller_service: Arc<dyn SellerService> =
        Arc::new(SellerServiceImpl::new(seller_repository));

    // The listing views subscribe for data changes; a successful save
    // or removal flips the flag and the fresh table is printed below.
    let mut notifier = ChangeNotifier::new();
    let data_changed = Arc::new(AtomicBool::new(false));
    let flag = data_changed.clone();
    notifier.subscribe(move || flag.store(true, Ordering::SeqCst));

    match command_line.command {
        Commands::Department { command } => {
            department::dispatch(command, department_service.as_ref(), &notifier).await?;

            if data_changed.load(Ordering::SeqCst) {
                let departments = department_service.find_all().await?;
                println!();
                println!("{}", render::department_table(&departments));
            }
        }
        Commands::Seller { command } => {
            seller::dispatch(
                command,
                seller_service.as_ref(),
                department_service.as_ref(),
                &notifier,
            )
            .await?;

            if data_changed.load(Ordering::SeqCst) {
                let sellers = seller_service.find_all().await?;
                println!();
                println!("{}", render::seller_table(&sellers));
            }
        }
    }

    pool.close().await;
    Ok(())
}

/// Prints a failure the way the form dialogs did: validation problems
/// field by field, anything else as a single line.
fn report_error(error: &SalesDeskError) {
    match error.field_errors() {
        Some(fields) => {
            error!("Validation failed:");
            for field in fields {
                error!("  {}: {}", field.field, field.message);
            }
        }
        None => error!("Application error: {}", error),
    }
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,salesdesk=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
