mod common;
use common::rc;
use predicates::prelude::*;
use runcalc::core::Zone2Logic;
use runcalc::errors::AppError;

#[test]
fn zone2_for_age_30() {
    let est = Zone2Logic::estimate("Edson", "30").unwrap();
    assert_eq!(est.max_heart_rate, 190);
    assert_eq!(est.zone_low, 114);
    assert_eq!(est.zone_high, 133);
}

#[test]
fn zone2_for_age_45_rounds_half_to_even() {
    // 175 * 0.7 = 122.5 → 122
    let est = Zone2Logic::estimate("Ana", "45").unwrap();
    assert_eq!(est.max_heart_rate, 175);
    assert_eq!(est.zone_low, 105);
    assert_eq!(est.zone_high, 122);
}

#[test]
fn zone2_bounds_hold_for_human_ages() {
    for age in 1..=100u32 {
        let est = Zone2Logic::estimate("Runner", &age.to_string()).unwrap();
        assert_eq!(est.max_heart_rate, 220 - age);
        assert!(est.zone_low <= est.zone_high, "age {age}");
        assert!(est.zone_high <= est.max_heart_rate, "age {age}");
    }
}

#[test]
fn zone2_rejects_missing_or_bad_input() {
    for (name, age) in [("", "30"), ("   ", "30"), ("Ana", ""), ("Ana", "abc"), ("Ana", "-3"), ("Ana", "0"), ("Ana", "30.5"), ("Ana", "220")] {
        let result = Zone2Logic::estimate(name, age);
        assert!(
            matches!(result, Err(AppError::Validation(_))),
            "expected validation error for ({name:?}, {age:?})"
        );
    }
}

#[test]
fn zone2_message_mentions_the_numbers() {
    let est = Zone2Logic::estimate("  Edson ", " 30 ").unwrap();
    assert_eq!(est.name, "Edson");

    let msg = est.message(60);
    assert!(msg.starts_with("Dear Edson,"));
    assert!(msg.contains("190 bpm"));
    assert!(msg.contains("between 114 and 133 bpm"));
    assert!(msg.lines().all(|l| l.chars().count() <= 60));
}

#[test]
fn zone2_cli() {
    rc().args(["zone2", "--name", "Edson", "--age", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zone 2: 114-133 bpm"));

    rc().args(["zone2", "--name", "Edson"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("please fill in your age"));

    rc().args(["zone2", "--name", "Edson", "--age", "thirty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("age must be a whole number"));
}
