use colored::Colorize;
use foodboard_core::food::Food;

/// One plain-text line per food, without colors.
pub fn food_row(food: &Food) -> String {
    let status = if food.available {
        "available"
    } else {
        "unavailable"
    };
    format!(
        "#{:<4} {:<24} {:>8.2}  {:<11}  {}",
        food.id, food.name, food.price, status, food.description
    )
}

pub fn print_foods(foods: &[Food]) {
    if foods.is_empty() {
        println!("{}", "No foods on the menu".dimmed());
        return;
    }

    for food in foods {
        let row = food_row(food);
        if food.available {
            println!("{}", row);
        } else {
            println!("{}", row.dimmed());
        }
    }
}
