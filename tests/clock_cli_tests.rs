mod common;
use common::{setup_test_db, setup_test_state, spay};
use predicates::str::contains;

#[test]
fn clock_in_then_status_then_out() {
    let db = setup_test_db("clock_cli_roundtrip");
    let state = setup_test_state("clock_cli_roundtrip");

    spay()
        .args(["--db", &db, "--state", &state, "in"])
        .assert()
        .success()
        .stdout(contains("Clocked in"));

    spay()
        .args(["--db", &db, "--state", &state, "status"])
        .assert()
        .success()
        .stdout(contains("Clocked in since"));

    spay()
        .args(["--db", &db, "--state", &state, "out"])
        .assert()
        .success()
        .stdout(contains("Clocked out"));

    // the shift landed in the store
    spay()
        .args(["--db", &db, "--state", &state, "list"])
        .assert()
        .success()
        .stdout(contains("1 shifts"));
}

#[test]
fn double_clock_in_is_a_noop() {
    let db = setup_test_db("clock_cli_double_in");
    let state = setup_test_state("clock_cli_double_in");

    spay()
        .args(["--db", &db, "--state", &state, "in"])
        .assert()
        .success();

    spay()
        .args(["--db", &db, "--state", &state, "in"])
        .assert()
        .success()
        .stdout(contains("Already clocked in"));
}

#[test]
fn clock_out_while_idle_is_a_noop() {
    let db = setup_test_db("clock_cli_idle_out");
    let state = setup_test_state("clock_cli_idle_out");

    spay()
        .args(["--db", &db, "--state", &state, "out"])
        .assert()
        .success()
        .stdout(contains("Not clocked in"));
}
