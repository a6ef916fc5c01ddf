use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constants::{
    DEFAULT_COURSES_FILE, DEFAULT_DAYS, DEFAULT_MENU_FILE, DEFAULT_SERVINGS,
    DEFAULT_SHOPPING_FILE,
};
use crate::planner::PlanOptions;

/// Meal planner: store recipes, generate menus, build shopping lists and macro summaries.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the course catalog JSON file.
    #[arg(short, long, global = true, default_value = DEFAULT_COURSES_FILE)]
    pub courses: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new course to the catalog.
    Add {
        /// Course type (breakfast, lunch, dinner, etc.).
        #[arg(long = "type")]
        category: String,

        /// Course name.
        #[arg(long)]
        name: String,

        /// Course description.
        #[arg(long, default_value = "")]
        description: String,

        /// Ingredient as name,amount,unit[,calories,protein,fat,carbs]. Repeatable.
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<String>,
    },

    /// List courses, optionally of one type.
    List {
        /// Filter by course type.
        #[arg(long = "type")]
        category: Option<String>,
    },

    /// Generate a meal plan.
    Plan(PlanArgs),

    /// Generate a shopping list from an existing menu.
    Ingredients {
        /// Menu file to read.
        #[arg(long, default_value = DEFAULT_MENU_FILE)]
        menu: PathBuf,

        /// CSV file to write.
        #[arg(long, default_value = DEFAULT_SHOPPING_FILE)]
        output: PathBuf,
    },

    /// Display the nutrition summary of a menu.
    Macros {
        /// Menu file to read.
        #[arg(long, default_value = DEFAULT_MENU_FILE)]
        menu: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// Number of days.
    #[arg(
        long,
        default_value_t = DEFAULT_DAYS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub days: u32,

    /// Number of servings per course.
    #[arg(
        long,
        default_value_t = DEFAULT_SERVINGS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub servings: u32,

    /// Never use the same course twice within a type.
    #[arg(long)]
    pub no_reuse: bool,

    /// Maximum times a course can appear in the plan.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_repeats: Option<u32>,

    /// Random seed for reproducible plans.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Confirm, replace or skip each proposed course.
    #[arg(long)]
    pub interactive: bool,

    /// Only use these courses. Repeatable.
    #[arg(long)]
    pub include: Vec<String>,

    /// Never use these courses. Repeatable.
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Menu file to write.
    #[arg(long, default_value = DEFAULT_MENU_FILE)]
    pub output: PathBuf,

    /// Also write a shopping list to this file.
    #[arg(long)]
    pub shopping: Option<PathBuf>,
}

impl PlanArgs {
    pub fn to_options(&self) -> PlanOptions {
        PlanOptions {
            days: self.days,
            servings: self.servings,
            no_reuse: self.no_reuse,
            max_repeats: self.max_repeats,
            seed: self.seed,
            interactive: self.interactive,
            include: self.include.clone(),
            exclude: self.exclude.clone(),
        }
    }
}
