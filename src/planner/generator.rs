use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Course, Menu};
use crate::planner::filters::{apply_filters, warn_unknown_names};
use crate::planner::options::PlanOptions;
use crate::planner::selection::{Decision, SelectionPrompt};
use crate::state::Catalog;

/// One course placed on one day of the plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    /// 0-based day index.
    pub day: u32,
    pub course: &'a Course,
}

/// Random source for a generation run.
///
/// ChaCha8 has a fixed output stream, so a given seed yields the same plan
/// on every platform. Without a seed the generator draws from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn repeat_key(course: &Course) -> String {
    format!("{}:{}", course.category, course.name)
}

fn placed_count(counts: &HashMap<String, u32>, course: &Course) -> u32 {
    counts.get(&repeat_key(course)).copied().unwrap_or(0)
}

/// Generate a menu from the catalog.
///
/// Seeds a fresh generator from `options.seed`, so repeated calls with the
/// same seed and catalog produce identical menus.
pub fn generate_plan(
    catalog: &Catalog,
    options: &PlanOptions,
    prompt: &mut dyn SelectionPrompt,
) -> Result<Menu> {
    options.validate()?;

    let mut rng = seeded_rng(options.seed);
    let placements = plan_placements(catalog, options, prompt, &mut rng)?;
    let menu = build_menu(&placements, options.servings);

    info!(
        days = options.days,
        placements = placements.len(),
        courses = menu.course_count(),
        "generated meal plan"
    );
    Ok(menu)
}

/// Choose a course for every (category, day) slot.
///
/// Categories are visited in catalog order and days in order, drawing from
/// `rng` only. The result is the day-by-day assignment before it is folded
/// into a [`Menu`].
pub fn plan_placements<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    options: &PlanOptions,
    prompt: &mut dyn SelectionPrompt,
    rng: &mut R,
) -> Result<Vec<Placement<'a>>> {
    warn_unknown_names(catalog, &options.include, &options.exclude);

    let mut placements = Vec::new();
    let mut repeat_counts: HashMap<String, u32> = HashMap::new();

    for (category, courses) in catalog.courses_by_category() {
        let eligible = apply_filters(&courses, &options.include, &options.exclude);
        if eligible.is_empty() {
            debug!(category, "no eligible courses");
            continue;
        }

        let mut pool = eligible.clone();

        for day in 0..options.days {
            if pool.is_empty() {
                if options.no_reuse {
                    debug!(category, day, "category exhausted");
                    continue;
                }
                pool = eligible.clone();
            }

            let proposal = if options.interactive {
                match select_interactive(day, category, &pool, prompt, rng)? {
                    Some(course) => course,
                    None => {
                        debug!(category, day, "skipped by operator");
                        continue;
                    }
                }
            } else {
                match pool.choose(rng) {
                    Some(course) => *course,
                    None => continue,
                }
            };

            let mut course = proposal;
            if let Some(limit) = options.max_repeats {
                if placed_count(&repeat_counts, course) >= limit {
                    pool.retain(|c| c.name != course.name);
                    if pool.is_empty() {
                        if options.no_reuse {
                            continue;
                        }
                        pool = eligible.clone();
                    }

                    // A refilled pool can hold courses that are already at the cap.
                    let under_limit: Vec<&Course> = pool
                        .iter()
                        .copied()
                        .filter(|c| placed_count(&repeat_counts, c) < limit)
                        .collect();
                    match under_limit.choose(rng) {
                        Some(redrawn) => course = *redrawn,
                        None => {
                            debug!(category, day, "every course at repeat limit");
                            continue;
                        }
                    }
                }
            }

            debug!(category, day, course = %course.name, "placed course");
            placements.push(Placement { day, course });

            if options.no_reuse {
                pool.retain(|c| c.name != course.name);
            }
            *repeat_counts.entry(repeat_key(course)).or_insert(0) += 1;
        }
    }

    Ok(placements)
}

/// Ask the operator about random proposals until one is accepted or skipped.
fn select_interactive<'a, R: Rng + ?Sized>(
    day: u32,
    category: &str,
    pool: &[&'a Course],
    prompt: &mut dyn SelectionPrompt,
    rng: &mut R,
) -> Result<Option<&'a Course>> {
    let Some(mut proposal) = pool.choose(rng).copied() else {
        return Ok(None);
    };

    loop {
        match prompt.decide(day + 1, category, &proposal.name)? {
            Decision::Accept => return Ok(Some(proposal)),
            Decision::Skip => return Ok(None),
            Decision::Replace => {
                let others: Vec<&Course> = pool
                    .iter()
                    .copied()
                    .filter(|c| c.name != proposal.name)
                    .collect();
                match others.choose(rng) {
                    Some(next) => proposal = *next,
                    None => {
                        prompt.no_alternatives(category);
                        return Ok(Some(proposal));
                    }
                }
            }
        }
    }
}

/// Fold placements into a menu, scaling each course by `servings`.
///
/// The menu is keyed by course name, so a course placed on several days
/// appears once, at the position of its first placement.
pub fn build_menu(placements: &[Placement<'_>], servings: u32) -> Menu {
    let mut menu = Menu::new();
    for placement in placements {
        let course = placement.course;
        menu.insert_course(
            &course.category,
            &course.name,
            course.scale_servings(servings).to_record(),
        );
    }
    menu
}
