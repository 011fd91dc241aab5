//! Department subcommand handlers.

use crate::commands::DepartmentCommands;
use crate::notify::ChangeNotifier;
use crate::render;
use salesdesk_core::{DepartmentId, SalesDeskResult};
use salesdesk_service::{DepartmentForm, DepartmentService};
use tracing::debug;

pub async fn dispatch(
    command: DepartmentCommands,
    service: &dyn DepartmentService,
    notifier: &ChangeNotifier,
) -> SalesDeskResult<()> {
    match command {
        DepartmentCommands::List { json } => list(service, json).await,
        DepartmentCommands::Show { id } => show(service, id).await,
        DepartmentCommands::Save { id, name } => save(service, notifier, id, name).await,
        DepartmentCommands::Remove { id } => remove(service, notifier, id).await,
    }
}

async fn list(service: &dyn DepartmentService, json: bool) -> SalesDeskResult<()> {
    let departments = service.find_all().await?;

    if json {
        println!("{}", render::to_json(&departments)?);
    } else {
        println!("{}", render::department_table(&departments));
    }

    Ok(())
}

async fn show(service: &dyn DepartmentService, id: i64) -> SalesDeskResult<()> {
    let department = service.find_by_id(DepartmentId::new(id)).await?;

    println!(
        "{}",
        render::department_table(std::slice::from_ref(&department))
    );

    Ok(())
}

async fn save(
    service: &dyn DepartmentService,
    notifier: &ChangeNotifier,
    id: Option<i64>,
    name: Option<String>,
) -> SalesDeskResult<()> {
    let form = DepartmentForm { id, name };
    let department = form.into_department()?;

    debug!("Saving department: {:?}", department);
    let saved = service.save_or_update(department).await?;

    match saved.id {
        Some(id) => println!("Saved department {} ({})", id, saved.name),
        None => println!("Saved department {}", saved.name),
    }
    notifier.notify_all();

    Ok(())
}

async fn remove(
    service: &dyn DepartmentService,
    notifier: &ChangeNotifier,
    id: i64,
) -> SalesDeskResult<()> {
    let department = service.find_by_id(DepartmentId::new(id)).await?;
    service.remove(&department).await?;

    println!("Removed department {} ({})", id, department.name);
    notifier.notify_all();

    Ok(())
}
