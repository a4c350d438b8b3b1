mod common;

use common::{approx, TestEnv};
use std::fs;

#[test]
fn profile_init_then_show_json() {
    let env = TestEnv::new();

    let init = env.run_json(&["profile", "init"]);
    assert_eq!(init["ok"], true);
    assert!(env.profile_path().exists());
    assert_eq!(init["data"]["profile"]["studies"]["lf"]["base_hours"], 15.0);

    let show = env.run_json(&["profile", "show"]);
    assert_eq!(show["data"]["profile"]["team"]["L1"]["rate"], 2400.0);

    let again = env.run_json_failure(&["profile", "init"]);
    assert_eq!(again["ok"], false);
    assert_eq!(again["error"]["code"], "PROFILE_EXISTS");
}

#[test]
fn study_override_changes_the_estimate() {
    let env = TestEnv::new();
    let args = ["estimate", "--study", "lf"];

    let before = env.run_json(&args);
    let hours_before = before["data"]["output"]["total_study_hours"]
        .as_f64()
        .expect("hours");

    let set = env.run_json(&["profile", "set-study", "lf", "--base-hours", "30"]);
    assert_eq!(set["data"]["base_hours"], 30.0);
    assert_eq!(set["data"]["complexity"], 1.0);

    let after = env.run_json(&args);
    assert!(approx(
        &after["data"]["output"]["total_study_hours"],
        hours_before * 2.0
    ));
}

#[test]
fn team_override_changes_blended_rate() {
    let env = TestEnv::new();

    env.run_json(&["profile", "set-team", "L1", "--rate", "3000"]);
    let out = env.run_json(&["estimate", "--study", "lf"]);
    let rate = &out["data"]["output"]["studies"][0]["blended_rate"];
    assert!(approx(rate, 0.15 * 3000.0 + 0.35 * 1200.0 + 0.50 * 900.0));

    env.run_json(&["profile", "reset"]);
    let out = env.run_json(&["estimate", "--study", "lf"]);
    assert!(approx(&out["data"]["output"]["studies"][0]["blended_rate"], 1230.0));
}

#[test]
fn out_of_range_override_is_refused() {
    let env = TestEnv::new();
    let err = env.run_json_failure(&["profile", "set-team", "L3", "--allocation", "0.9"]);
    assert_eq!(err["error"]["code"], "OUT_OF_RANGE");
    assert!(!env.profile_path().exists());

    let err = env.run_json_failure(&["profile", "set-study", "xx", "--base-hours", "10"]);
    assert_eq!(err["error"]["code"], "UNKNOWN_STUDY");
}

#[test]
fn explicit_profile_flag_wins() {
    let env = TestEnv::new();
    let custom = env.work.join("alt.toml");
    fs::write(&custom, "[studies.lf]\nbase_hours = 45.0\ncomplexity = 1.0\n").expect("write profile");

    let out = env.run_json(&[
        "--profile",
        custom.to_str().expect("utf8 path"),
        "estimate",
        "--study",
        "lf",
        "--mv-buses",
        "8",
        "--lv-buses",
        "24",
    ]);
    // 45 h x 0.85 x 1.15 at baseline size
    assert!(approx(&out["data"]["output"]["total_study_hours"], 45.0 * 0.9775));
}

#[test]
fn export_writes_all_three_formats() {
    let env = TestEnv::new();

    let json = env.run_json(&["export", "--project-name", "Plant-7", "--remarks", "draft"]);
    assert_eq!(json["data"]["format"], "json");
    let written = fs::read_to_string(env.work.join("estimate-Plant-7.json")).expect("json file");
    let doc: serde_json::Value = serde_json::from_str(&written).expect("json export");
    assert_eq!(doc["projectName"], "Plant-7");
    assert_eq!(doc["remarks"], "draft");
    assert!(doc["timestamp"].as_str().is_some());

    let out = env.work.join("exports/summary.csv");
    env.run_json(&[
        "export",
        "--format",
        "csv",
        "--detail",
        "--out",
        out.to_str().expect("utf8 path"),
    ]);
    let csv = fs::read_to_string(&out).expect("csv file");
    assert!(csv.starts_with("Project,Project-Alpha\n"));
    assert!(csv.contains("Component,Total,Percent"));

    let mut cmd = env.cmd();
    let txt = cmd
        .args(["export", "--format", "txt", "--stdout"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let txt = String::from_utf8(txt).expect("utf8");
    assert!(txt.starts_with("PROJECT: Project-Alpha\nTOTAL: ₹"));
    assert!(txt.contains("BUSES: 78"));
}

#[test]
fn switching_report_mode_uses_the_other_formula() {
    let env = TestEnv::new();

    let pct = env.run_json(&["estimate", "--report-mode", "percentage"]);
    let hours = pct["data"]["output"]["total_report_hours"].as_f64().expect("hours");
    assert!(approx(
        &pct["data"]["output"]["total_reporting_cost"],
        hours * 1200.0
    ));

    let fixed = env.run_json(&[
        "estimate",
        "--report-mode",
        "fixed",
        "--report-fixed",
        "70000",
    ]);
    assert!(approx(
        &fixed["data"]["output"]["total_reporting_cost"],
        70_000.0 * 4.0 / 7.0
    ));
    assert_eq!(fixed["data"]["output"]["total_report_hours"], 0.0);
}

#[test]
fn unvalidated_bus_overflow_is_a_typed_error() {
    let env = TestEnv::new();
    let err = env.run_json_failure(&[
        "estimate",
        "--no-validate",
        "--mv-buses",
        "4294967295",
        "--lv-buses",
        "1",
    ]);
    assert_eq!(err["error"]["code"], "BUS_COUNT_OVERFLOW");
}
