mod helpers;

use helpers::CliRunner;
use notty_cli::config::{self, ValueSource};
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

fn clear_env() {
    for key in helpers::NOTTY_ENV {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
#[serial]
fn defaults_when_nothing_is_set() {
    clear_env();
    let resolved = config::load_with_sources().unwrap();
    assert_eq!(resolved.config.players.len(), 3);
    assert_eq!(resolved.config.max_draw, 3);
    assert_eq!(resolved.config.seed, None);
    assert_eq!(resolved.sources.players, ValueSource::Default);
    assert_eq!(resolved.sources.seed, ValueSource::Default);
}

#[test]
#[serial]
fn env_beats_file() {
    clear_env();
    let file = write_config("seed = 456\nmax_draw = 5\n");
    unsafe {
        std::env::set_var("NOTTY_CONFIG", file.path());
        std::env::set_var("NOTTY_SEED", "789");
    }
    let resolved = config::load_with_sources().unwrap();
    clear_env();

    assert_eq!(resolved.config.seed, Some(789));
    assert_eq!(resolved.sources.seed, ValueSource::Env);
    assert_eq!(resolved.config.max_draw, 5);
    assert_eq!(resolved.sources.max_draw, ValueSource::File);
}

#[test]
#[serial]
fn invalid_values_are_rejected() {
    clear_env();
    unsafe {
        std::env::set_var("NOTTY_MAX_DRAW", "0");
    }
    let result = config::load_with_sources();
    clear_env();
    assert!(result.is_err());

    unsafe {
        std::env::set_var("NOTTY_SEED", "abc");
    }
    let result = config::load_with_sources();
    clear_env();
    assert!(result.is_err());
}

#[test]
fn cfg_command_reports_file_players() {
    let file = write_config(
        "[[players]]\nname = \"Ada\"\nhuman = true\n[[players]]\nname = \"Bot\"\n",
    );
    let path = file.path().to_string_lossy().into_owned();
    let cli = CliRunner::new().expect("cli runner");
    let res = cli.run_with_env(&["cfg"], &[("NOTTY_CONFIG", path.as_str())]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["players"]["source"], "file");
    assert_eq!(json["players"]["value"][0]["name"], "Ada");
    assert_eq!(json["players"]["value"][1]["human"], false);
    assert_eq!(json["max_draw"]["source"], "default");
}

#[test]
fn missing_config_file_fails_cfg() {
    let cli = CliRunner::new().expect("cli runner");
    let res = cli.run_with_env(&["cfg"], &[("NOTTY_CONFIG", "/nonexistent/notty.toml")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot read config file"));
}

#[test]
fn cli_seed_beats_env_seed() {
    let cli = CliRunner::new().expect("cli runner");
    let res = cli.run_with_env(&["deal", "--seed", "1"], &[("NOTTY_SEED", "2")]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("Seed: 1\n"));

    let res = cli.run_with_env(&["deal"], &[("NOTTY_SEED", "2")]);
    assert!(res.stdout.starts_with("Seed: 2\n"));
}
