use anyhow::{Context, Result, bail};
use colored::Colorize;
use foodboard_application::DashboardController;
use foodboard_core::food::{FoodDraft, FoodEdits, FoodId};

pub async fn add(
    dashboard: &DashboardController,
    name: String,
    description: String,
    price: f64,
    image: String,
) -> Result<()> {
    dashboard.toggle_create_modal().await;
    let flow = dashboard.creation_flow();

    match flow.submit(FoodDraft::new(name, description, price, image)).await {
        Some(created) => println!(
            "{}",
            format!("Added #{} {}", created.id, created.name).green()
        ),
        // Already logged by the notifier.
        None => eprintln!("{}", "Food was not added".red()),
    }

    Ok(())
}

pub fn edits_from_args(
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    image: Option<String>,
    available: Option<bool>,
) -> FoodEdits {
    FoodEdits {
        name,
        description,
        price,
        available,
        image,
    }
}

pub async fn edit(dashboard: &DashboardController, id: FoodId, edits: FoodEdits) -> Result<()> {
    if edits.is_empty() {
        bail!("Nothing to edit: pass at least one of --name, --description, --price, --image, --available");
    }

    let food = dashboard
        .foods()
        .await
        .into_iter()
        .find(|f| f.id == id)
        .with_context(|| format!("Food #{} is not on the menu", id))?;

    dashboard.select_for_edit(&food).await?;
    let flow = dashboard.edit_flow();

    match flow.submit(edits).await {
        Some(updated) => println!(
            "{}",
            format!("Updated #{} {}", updated.id, updated.name).green()
        ),
        None => eprintln!("{}", format!("Food #{} was not updated", id).red()),
    }

    Ok(())
}

pub async fn delete(dashboard: &DashboardController, id: FoodId) -> Result<()> {
    dashboard
        .delete(id)
        .await
        .with_context(|| format!("Failed to delete food #{}", id))?;

    println!("{}", format!("Deleted #{}", id).green());
    Ok(())
}
