use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("powerest");
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    // estimate commands
    run_help(&home, &["estimate"]);
    run_help(&home, &["breakdown"]);
    run_help(&home, &["studies"]);
    run_help(&home, &["export"]);
    run_help(&home, &["catalog"]);

    // grouped subcommands
    run_help(&home, &["profile"]);
    run_help(&home, &["profile", "show"]);
    run_help(&home, &["profile", "init"]);
    run_help(&home, &["profile", "set-study"]);
    run_help(&home, &["profile", "set-team"]);
    run_help(&home, &["profile", "reset"]);
}
