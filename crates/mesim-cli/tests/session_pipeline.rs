//! End-to-end tests of the library pipeline the CLI is built on.
//!
//! generate → answer → grade → summarize → report → stats, with seeded RNGs
//! and on-disk stores in temp directories.

use rand::rngs::StdRng;
use rand::SeedableRng;

use mesim_core::evaluate::{correct_count, solutions, Answer};
use mesim_core::factory::PositiveForm;
use mesim_core::generator::KindWeights;
use mesim_core::report::SessionReport;
use mesim_core::session::{PracticeSession, Verdict};
use mesim_core::store::JsonStatsStore;
use mesim_core::{ExerciseGenerator, ExerciseKind, GeneratorPolicy, Solutions, StatsStore};

fn session(seed: u64, n: usize) -> PracticeSession {
    let generator = ExerciseGenerator::with_default_policy().unwrap();
    PracticeSession::generate(&generator, n, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn perfect_session_is_excellent() {
    let mut session = session(42, 10);
    while let Some(ex) = session.current().copied() {
        let result = session
            .submit(Answer::new(ex.delta, i64::from(correct_count(ex.delta))))
            .unwrap();
        assert!(result.is_perfect(), "{ex} should grade perfect");
    }

    let summary = session.summary();
    assert_eq!(summary.score, 10.0);
    assert_eq!(summary.percentage, 100.0);
    assert_eq!(summary.verdict, Verdict::Excellent);
}

#[test]
fn every_generated_exercise_matches_its_kind() {
    let policy = GeneratorPolicy {
        kind_weights: KindWeights::uniform(),
        positive_form: PositiveForm::Integer,
    };
    let generator = ExerciseGenerator::new(policy).unwrap();
    let mut rng = StdRng::seed_from_u64(9);

    for ex in generator.generate_batch(2000, &mut rng) {
        assert_eq!(correct_count(ex.delta), ex.kind.root_count(), "{ex}");
        let roots = solutions(ex.a, ex.b, ex.delta);
        for x in roots.to_vec() {
            let residual = ex.a * x * x + ex.b * x + ex.c;
            assert!(residual.abs() < 1e-6, "{ex}: residual {residual} at {x}");
        }
        if ex.kind == ExerciseKind::Negative {
            assert_eq!(roots, Solutions::None);
        }
    }
}

#[test]
fn half_answered_session_is_good_effort() {
    let mut session = session(1, 4);
    for i in 0..4 {
        let ex = *session.current().unwrap();
        if i % 2 == 0 {
            session
                .submit(Answer::new(ex.delta, i64::from(correct_count(ex.delta))))
                .unwrap();
        } else {
            session.skip().unwrap();
        }
    }
    let summary = session.summary();
    assert_eq!(summary.score, 2.0);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.verdict, Verdict::GoodEffort);
}

#[test]
fn report_and_stats_persist_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStatsStore::new(dir.path().join("stats.json"));

    let mut first = session(3, 5);
    while !first.is_finished() {
        first.skip().unwrap();
    }
    let report_path = dir.path().join("first.json");
    SessionReport::from_session(&first)
        .save_json(&report_path)
        .unwrap();
    store.save_stats(first.score(), 5).unwrap();

    let mut second = session(4, 5);
    while let Some(ex) = second.current().copied() {
        second
            .submit(Answer::new(ex.delta, i64::from(correct_count(ex.delta))))
            .unwrap();
    }
    let stats = store.save_stats(second.score(), 5).unwrap();

    assert_eq!(stats.sessions, 2);
    assert_eq!(stats.total_exercises, 10);
    assert_eq!(stats.total_score, 5.0);
    assert_eq!(stats.best_pct, 100.0);
    assert_eq!(stats.average_pct(), 50.0);
    assert_eq!(store.load_stats().unwrap(), stats);

    let loaded = SessionReport::load_json(&report_path).unwrap();
    assert_eq!(loaded.summary.skipped, 5);
    assert!(loaded.to_markdown().contains("skipped"));
}
