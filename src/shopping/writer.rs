use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::constants::SHOPPING_LIST_HEADER;
use crate::error::Result;
use crate::models::Ingredient;
use crate::shopping::aggregator::aggregate_ingredients;
use crate::state::load_menu;

/// Write shopping-list rows as CSV to any writer.
pub fn write_shopping_list<W: Write>(writer: W, ingredients: &[Ingredient]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(SHOPPING_LIST_HEADER)?;
    for ingredient in ingredients {
        wtr.write_record([
            ingredient.name.as_str(),
            ingredient.amount.to_string().as_str(),
            ingredient.unit.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write shopping-list rows to a CSV file.
pub fn save_shopping_list(path: &Path, ingredients: &[Ingredient]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_shopping_list(file, ingredients)?;
    info!(path = %path.display(), rows = ingredients.len(), "wrote shopping list");
    Ok(())
}

/// Load a menu file, aggregate it and write the CSV. Returns the rows written.
pub fn shopping_list_from_menu_file(menu_path: &Path, output: &Path) -> Result<Vec<Ingredient>> {
    let menu = load_menu(menu_path)?;
    let ingredients = aggregate_ingredients(&menu);
    save_shopping_list(output, &ingredients)?;
    Ok(ingredients)
}
