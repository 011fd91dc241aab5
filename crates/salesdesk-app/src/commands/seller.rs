//! Seller subcommand handlers.

use crate::commands::SellerCommands;
use crate::notify::ChangeNotifier;
use crate::render;
use salesdesk_core::{DepartmentId, SalesDeskResult, SellerId};
use salesdesk_service::{DepartmentService, SellerForm, SellerService};
use tracing::debug;

pub async fn dispatch(
    command: SellerCommands,
    sellers: &dyn SellerService,
    departments: &dyn DepartmentService,
    notifier: &ChangeNotifier,
) -> SalesDeskResult<()> {
    match command {
        SellerCommands::List { department, json } => {
            list(sellers, departments, department, json).await
        }
        SellerCommands::Show { id } => show(sellers, id).await,
        SellerCommands::Save {
            id,
            name,
            email,
            birth_date,
            base_salary,
            department,
        } => {
            let form = SellerForm {
                id,
                name,
                email,
                birth_date,
                base_salary,
            };
            save(sellers, departments, notifier, form, department).await
        }
        SellerCommands::Remove { id } => remove(sellers, notifier, id).await,
    }
}

async fn list(
    sellers: &dyn SellerService,
    departments: &dyn DepartmentService,
    department_id: Option<i64>,
    json: bool,
) -> SalesDeskResult<()> {
    let rows = match department_id {
        Some(id) => {
            let department = departments.find_by_id(DepartmentId::new(id)).await?;
            sellers.find_by_department(&department).await?
        }
        None => sellers.find_all().await?,
    };

    if json {
        println!("{}", render::to_json(&rows)?);
    } else {
        println!("{}", render::seller_table(&rows));
    }

    Ok(())
}

async fn show(sellers: &dyn SellerService, id: i64) -> SalesDeskResult<()> {
    let seller = sellers.find_by_id(SellerId::new(id)).await?;

    println!("{}", render::seller_table(std::slice::from_ref(&seller)));

    Ok(())
}

async fn save(
    sellers: &dyn SellerService,
    departments: &dyn DepartmentService,
    notifier: &ChangeNotifier,
    form: SellerForm,
    department_id: i64,
) -> SalesDeskResult<()> {
    // The owning department is resolved up front, like the combo box on
    // the form. Field validation only runs against an existing one.
    let department = departments
        .find_by_id(DepartmentId::new(department_id))
        .await?;

    let seller = form.into_seller(department)?;

    debug!("Saving seller: {:?}", seller);
    let saved = sellers.save_or_update(seller).await?;

    match saved.id {
        Some(id) => println!("Saved seller {} ({})", id, saved.name),
        None => println!("Saved seller {}", saved.name),
    }
    notifier.notify_all();

    Ok(())
}

async fn remove(
    sellers: &dyn SellerService,
    notifier: &ChangeNotifier,
    id: i64,
) -> SalesDeskResult<()> {
    let seller = sellers.find_by_id(SellerId::new(id)).await?;
    sellers.remove(&seller).await?;

    println!("Removed seller {} ({})", id, seller.name);
    notifier.notify_all();

    Ok(())
}
