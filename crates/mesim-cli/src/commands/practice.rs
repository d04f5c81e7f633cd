//! The `mesim practice` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use mesim_core::evaluate::{Answer, Correction, GradeResult};
use mesim_core::format::round4;
use mesim_core::session::PracticeSession;
use mesim_core::store::JsonStatsStore;
use mesim_core::{ExerciseGenerator, StatsStore};

use super::{describe_solutions, make_rng};
use crate::config::load_config_from;

/// Typed at the Δ prompt to give up on an exercise.
const SKIP_COMMAND: &str = "skip";

const COUNT_PROMPT: &str = "  Number of real solutions (0, 1 or 2) = ";

pub fn execute(
    count: Option<usize>,
    seed: Option<u64>,
    no_save: bool,
    export: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let count = count.unwrap_or(config.exercises);
    anyhow::ensure!(count >= 1, "count must be at least 1");

    let generator = ExerciseGenerator::new(config.generator)?;
    let mut rng = make_rng(seed.or(config.seed));
    let mut session = PracticeSession::generate(&generator, count, &mut rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut session, &mut stdin.lock(), &mut stdout.lock())?;

    let summary = session.summary();
    println!(
        "\nQuiz complete: {} / {} ({:.1}%)",
        round4(summary.score),
        summary.total,
        summary.percentage
    );
    println!("{}", summary.verdict);

    if !no_save {
        let store = JsonStatsStore::new(config.stats_path());
        let total = u32::try_from(summary.total).context("session too long to record")?;
        let stats = store.save_stats(summary.score, total)?;
        println!();
        super::stats::print_stats(&stats);
    }

    if let Some(path) = &export {
        session.into_report().save_json(path)?;
        println!("Session report: {}", path.display());
    }

    Ok(())
}

/// Drive `session` to the end, prompting on `output` and reading answers
/// from `input`. Closed input skips whatever is left.
pub(crate) fn run_session<R: BufRead, W: Write>(
    session: &mut PracticeSession,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    while let Some(exercise) = session.current().copied() {
        let (index, total) = session.position();
        writeln!(output, "\nExercise {} / {}", index + 1, total)?;
        writeln!(output, "  Solve: {}", exercise.equation())?;

        let Some(delta_text) = prompt(input, output, "  Δ = ")? else {
            skip_remaining(session, output)?;
            break;
        };

        let result = if delta_text.trim().eq_ignore_ascii_case(SKIP_COMMAND) {
            session.skip()?
        } else {
            let Some(count_text) = prompt(input, output, COUNT_PROMPT)? else {
                skip_remaining(session, output)?;
                break;
            };
            session.submit(Answer::parse(&delta_text, &count_text))?
        };

        write_correction(output, &Correction::for_exercise(&exercise), &result)?;
        writeln!(
            output,
            "  Running total: {} / {}",
            round4(session.score()),
            index + 1
        )?;
    }
    Ok(())
}

/// Print `label` and read one line; `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read answer")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn skip_remaining<W: Write>(session: &mut PracticeSession, output: &mut W) -> Result<()> {
    let (index, total) = session.position();
    tracing::warn!(remaining = total - index, "input closed, skipping remaining exercises");
    writeln!(output)?;
    while !session.is_finished() {
        session.skip()?;
    }
    Ok(())
}

fn write_correction<W: Write>(
    output: &mut W,
    correction: &Correction,
    result: &GradeResult,
) -> Result<()> {
    let mark = |ok: bool| if ok { "correct" } else { "wrong" };
    writeln!(
        output,
        "  Correction: Δ = {} ({}), {} real solution(s): {}",
        round4(correction.delta),
        mark(result.delta_correct()),
        correction.count,
        describe_solutions(&correction.solutions)
    )?;
    writeln!(
        output,
        "  Points: {} / 1 (count {})",
        result.total(),
        mark(result.count_correct())
    )?;
    Ok(())
}
