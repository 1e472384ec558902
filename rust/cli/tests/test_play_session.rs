mod helpers;

use helpers::CliRunner;

const ARGS: &[&str] = &["play", "--seed", "11", "--players", "Ada,Bot,Cy"];

#[test]
fn quit_returns_zero() {
    let cli = CliRunner::new().expect("cli runner");
    let res = cli.run_with_input(ARGS, "q\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("play: players=3 seed=11"));
    assert!(res.stdout.contains("Quit."));
}

#[test]
fn closed_input_is_interrupted() {
    let cli = CliRunner::new().expect("cli runner");
    let res = cli.run_with_input(ARGS, "status\n");
    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("Interrupted"));
}

#[test]
fn turns_wrap_around_the_table() {
    let cli = CliRunner::new().expect("cli runner");
    let res = cli.run_with_input(ARGS, "pass\npass\npass\nq\n");
    assert_eq!(res.exit_code, 0);
    let turns: Vec<&str> = res
        .stdout
        .lines()
        .filter(|l| l.starts_with("Turn: "))
        .collect();
    assert_eq!(
        turns,
        vec!["Turn: Ada (#0)", "Turn: Bot (#1)", "Turn: Cy (#2)", "Turn: Ada (#0)"]
    );
    assert!(res.stdout.contains("Turns played: 4"));
}

#[test]
fn budget_resets_on_new_turn() {
    let cli = CliRunner::new().expect("cli runner");
    let res = cli.run_with_input(ARGS, "draw 1\npass\ndraw 1\nq\n");
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout.matches("Drew 1 card(s)").count(), 2);
    assert!(!res.stderr.contains("Not allowed"));
}

#[test]
fn invalid_input_does_not_end_session() {
    let cli = CliRunner::new().expect("cli runner");
    let res = cli.run_with_input(ARGS, "fly\ngroup r1\nsteal 7\nq\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("Unrecognized command 'fly'"));
    assert!(res.stderr.contains("Not allowed: Cards do not form a valid group"));
    assert!(res.stderr.contains("Not allowed: Player 7 cannot be stolen from"));
    assert!(res.stdout.contains("Quit."));
}

#[test]
fn engine_debug_logs_go_to_stderr() {
    let cli = CliRunner::new().expect("cli runner");
    let res = cli.run_with_env(&["deal", "--seed", "3"], &[("NOTTY_LOG", "notty_engine=info")]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("game started"));
    assert!(!res.stdout.contains("game started"));
}
