//! The `mesim generate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

use mesim_core::evaluate::Correction;
use mesim_core::format::round4;
use mesim_core::{Exercise, ExerciseGenerator, ExerciseKind, Solutions};

use super::{describe_solutions, make_rng};
use crate::config::load_config_from;

/// One exercise as printed by `--format json`.
#[derive(Debug, Serialize)]
struct ExerciseView {
    index: usize,
    equation: String,
    kind: ExerciseKind,
    a: f64,
    b: f64,
    c: f64,
    delta: f64,
    solutions: Solutions,
}

impl ExerciseView {
    fn new(index: usize, exercise: &Exercise) -> Self {
        let correction = Correction::for_exercise(exercise);
        Self {
            index,
            equation: exercise.equation(),
            kind: exercise.kind,
            a: exercise.a,
            b: exercise.b,
            c: exercise.c,
            delta: exercise.delta,
            solutions: correction.solutions,
        }
    }
}

pub fn execute(
    count: Option<usize>,
    seed: Option<u64>,
    kind: Option<ExerciseKind>,
    format: String,
    answers: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let count = count.unwrap_or(config.exercises);
    anyhow::ensure!(count >= 1, "count must be at least 1");

    let generator = ExerciseGenerator::new(config.generator)?;
    let mut rng = make_rng(seed.or(config.seed));
    let exercises: Vec<Exercise> = match kind {
        Some(kind) => (0..count)
            .map(|_| generator.generate_kind(kind, &mut rng))
            .collect(),
        None => generator.generate_batch(count, &mut rng),
    };

    match format.as_str() {
        "json" => {
            let views: Vec<ExerciseView> = exercises
                .iter()
                .enumerate()
                .map(|(i, ex)| ExerciseView::new(i + 1, ex))
                .collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        "text" => print_table(&exercises, answers),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}

fn print_table(exercises: &[Exercise], answers: bool) {
    let mut table = Table::new();
    if answers {
        table.set_header(vec!["#", "Equation", "Δ", "Solutions"]);
    } else {
        table.set_header(vec!["#", "Equation"]);
    }

    for (i, ex) in exercises.iter().enumerate() {
        let mut row = vec![Cell::new(i + 1), Cell::new(ex.equation())];
        if answers {
            let correction = Correction::for_exercise(ex);
            row.push(Cell::new(round4(correction.delta)));
            row.push(Cell::new(describe_solutions(&correction.solutions)));
        }
        table.add_row(row);
    }

    println!("{table}");
}
