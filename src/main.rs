use std::path::Path;

use clap::Parser;
use tracing::info;

use meal_planner_rs::cli::{Cli, Command, PlanArgs};
use meal_planner_rs::error::{PlannerError, Result};
use meal_planner_rs::interface::{TerminalPrompt, display_course_list, display_macro_summary};
use meal_planner_rs::models::{Course, Ingredient};
use meal_planner_rs::nutrition::calculate_plan_macros;
use meal_planner_rs::planner::generate_plan;
use meal_planner_rs::shopping::shopping_list_from_menu_file;
use meal_planner_rs::state::{add_course, load_catalog, load_menu, save_menu};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Add {
            category,
            name,
            description,
            ingredients,
        } => cmd_add(&cli.courses, &category, &name, &description, &ingredients),
        Command::List { category } => cmd_list(&cli.courses, category.as_deref()),
        Command::Plan(args) => cmd_plan(&cli.courses, &args),
        Command::Ingredients { menu, output } => cmd_ingredients(&menu, &output),
        Command::Macros { menu } => cmd_macros(&menu),
    }
}

/// Add a course built from command-line flags.
fn cmd_add(
    courses_path: &Path,
    category: &str,
    name: &str,
    description: &str,
    ingredients: &[String],
) -> Result<()> {
    if name.trim().is_empty() || category.trim().is_empty() {
        return Err(PlannerError::InvalidInput(
            "--name and --type must not be empty".to_string(),
        ));
    }

    // Parse everything before touching the catalog file.
    let mut course = Course::new(name, category, description);
    for raw in ingredients {
        let ingredient: Ingredient = raw.parse()?;
        course.add_ingredient(ingredient);
    }

    let (category, name) = (course.category.clone(), course.name.clone());
    add_course(courses_path, course)?;
    println!("Added {} course: {}", category, name);
    Ok(())
}

/// List courses grouped by type.
fn cmd_list(courses_path: &Path, category: Option<&str>) -> Result<()> {
    let catalog = load_catalog(courses_path)?;
    display_course_list(&catalog.list_courses(category));
    Ok(())
}

/// Generate a plan, save it with nutrition totals, optionally write a shopping list.
fn cmd_plan(courses_path: &Path, args: &PlanArgs) -> Result<()> {
    let catalog = load_catalog(courses_path)?;
    info!(courses = catalog.len(), "loaded catalog");

    let options = args.to_options();
    let mut menu = generate_plan(&catalog, &options, &mut TerminalPrompt)?;
    menu.set_nutrition_totals(calculate_plan_macros(&menu));

    save_menu(&args.output, &menu)?;
    println!("Generated meal plan saved to {}", args.output.display());

    if let Some(shopping) = &args.shopping {
        shopping_list_from_menu_file(&args.output, shopping)?;
        println!("Shopping list saved to {}", shopping.display());
    }

    Ok(())
}

/// Write a shopping list from an existing menu file.
fn cmd_ingredients(menu_path: &Path, output: &Path) -> Result<()> {
    let ingredients = shopping_list_from_menu_file(menu_path, output)?;
    println!(
        "Shopping list with {} ingredients saved to {}",
        ingredients.len(),
        output.display()
    );
    Ok(())
}

/// Print stored nutrition totals, or compute them if the menu has none.
fn cmd_macros(menu_path: &Path) -> Result<()> {
    let menu = load_menu(menu_path)?;
    let totals = match menu.nutrition_totals() {
        Some(totals) => totals.clone(),
        None => calculate_plan_macros(&menu),
    };
    display_macro_summary(&totals);
    Ok(())
}
