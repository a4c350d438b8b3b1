mod common;

use common::TestEnv;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn estimate_prints_headline_metrics() {
    let env = TestEnv::new();
    env.cmd()
        .args(["estimate", "--project-name", "Plant-7"])
        .assert()
        .success()
        .stdout(contains("project: Plant-7"))
        .stdout(contains("per bus: ₹"))
        .stdout(contains("(78 buses)"))
        .stdout(contains("cost\tMeetings\t₹4,800"));
}

#[test]
fn catalog_lists_studies_and_factors() {
    let env = TestEnv::new();
    env.cmd()
        .arg("catalog")
        .assert()
        .success()
        .stdout(contains("study\tpdc\tProtection Coordination"))
        .stdout(contains("voltage\t220\t1.75"))
        .stdout(contains("region\tEurope\t2.00"));
}

#[test]
fn studies_table_lists_selected_studies() {
    let env = TestEnv::new();
    env.cmd()
        .args(["studies", "--study", "lf", "--study", "ts"])
        .assert()
        .success()
        .stdout(contains("Load Flow\t"))
        .stdout(contains("Transient Stability\t"))
        .stdout(contains("Arc Flash").not());
}

#[test]
fn empty_selection_prompts_instead_of_failing() {
    let env = TestEnv::new();
    env.cmd()
        .args(["estimate", "--no-default-studies"])
        .assert()
        .success()
        .stdout(contains("select at least one study"));
}

#[test]
fn out_of_range_input_fails_with_message() {
    let env = TestEnv::new();
    env.cmd()
        .args(["estimate", "--buffer-percent", "40"])
        .assert()
        .failure()
        .stderr(contains("buffer_percent = 40 is outside [5, 25]"));
}

#[test]
fn unknown_region_warns_but_computes() {
    let env = TestEnv::new();
    env.cmd()
        .args(["estimate", "--region", "Atlantis"])
        .assert()
        .success()
        .stdout(contains("total: ₹"))
        .stderr(contains("unknown region"));
}

#[test]
fn inactive_report_field_is_ignored() {
    let env = TestEnv::new();
    env.cmd()
        .args(["estimate", "--report-mode", "fixed", "--report-percent", "60"])
        .assert()
        .success()
        .stdout(contains("total: ₹"));

    env.cmd()
        .args(["estimate", "--report-percent", "60"])
        .assert()
        .failure()
        .stderr(contains("report_percent = 60 is outside [10, 50]"));
}
