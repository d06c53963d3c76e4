use super::*;
use crate::checker::test_support::check;
use crate::checker::{Category, Check, Grade};

fn sample(weight: u32) -> Check {
    check("S", Category::Gdpr, weight, |c, _| Ok(CheckResult::passed(c, "ok")))
}

#[test]
fn no_deductions_scores_100() {
    let c = sample(10);
    let results = vec![
        CheckResult::passed(&c, "ok"),
        CheckResult::skipped(&c, "n/a"),
    ];
    assert_eq!(compute_score(&results), 100);
    assert_eq!(compute_score(&[]), 100);
}

#[test]
fn failure_deducts_full_impact() {
    let c = sample(15);
    let results = vec![CheckResult::failed(&c, "no")];
    assert_eq!(compute_score(&results), 85);
}

#[test]
fn warning_deducts_half() {
    let c = sample(20);
    let results = vec![CheckResult::warning(&c, "partial", 20)];
    let score = compute_score(&results);
    assert_eq!(score, 90);
    assert_eq!(Grade::from_score(score), Grade::A);
}

#[test]
fn warning_plus_failure_straddles_a_boundary() {
    let c = sample(20);
    let results = vec![
        CheckResult::warning(&c, "partial", 20),
        CheckResult::failed(&sample(1), "no"),
    ];
    let score = compute_score(&results);
    assert_eq!(score, 89);
    assert_eq!(Grade::from_score(score), Grade::B);
}

#[test]
fn halves_round_only_at_the_end() {
    let c = sample(20);
    // 3 warnings of 3 points: 1.5 * 3 = 4.5, so 95.5 rounds to 96
    let results = vec![
        CheckResult::warning(&c, "a", 3),
        CheckResult::warning(&c, "b", 3),
        CheckResult::warning(&c, "c", 3),
    ];
    assert!((total_deductions(&results) - 4.5).abs() < f64::EPSILON);
    assert_eq!(compute_score(&results), 96);
}

#[test]
fn score_is_clamped_at_zero() {
    let c = sample(60);
    let results = vec![CheckResult::failed(&c, "a"), CheckResult::failed(&c, "b")];
    assert_eq!(compute_score(&results), 0);
    assert_eq!(Grade::from_score(0), Grade::F);
}

#[test]
fn counts_by_status() {
    let c = sample(10);
    let results = vec![
        CheckResult::passed(&c, "ok"),
        CheckResult::passed(&c, "ok"),
        CheckResult::warning(&c, "w", 2),
        CheckResult::failed(&c, "f"),
        CheckResult::skipped(&c, "s"),
    ];
    let counts = StatusCounts::from_results(&results);
    assert_eq!(
        counts,
        StatusCounts {
            passed: 2,
            warnings: 1,
            failed: 1,
            skipped: 1
        }
    );
    assert_eq!(counts.total(), results.len());
}
