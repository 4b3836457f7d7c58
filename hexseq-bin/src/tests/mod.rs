use crate::run_subcommand;
use hexseq_app_config::{AppConfig, ExitCode, Setup, cli};

fn run(args: &[&str]) -> Result<String, ExitCode> {
    let mut argv = vec![cli::BIN_NAME];
    argv.extend_from_slice(args);
    let matches = cli::basic_app().try_get_matches_from(argv)?;
    let (cmd, sub) = matches.subcommand().ok_or(ExitCode::Cli)?;
    let setup = Setup {
        subcommand_name: cmd.to_owned(),
        config: AppConfig::default(),
    };
    run_subcommand(&setup, sub)
}

#[test]
fn encode_and_decode() {
    assert_eq!(run(&["encode", "--from", "ascii", "A"]).unwrap(), "0x41");
    assert_eq!(run(&["decode", "--to", "ascii", "0x41"]).unwrap(), "A");
    assert_eq!(run(&["encode", "--from", "number", "255"]).unwrap(), "0xff");
    assert_eq!(run(&["decode", "--to", "number", "0xFF"]).unwrap(), "255");
}

#[test]
fn number_round_trips_full_u128() {
    let max = u128::MAX.to_string();
    let encoded = run(&["encode", "--from", "number", &max]).unwrap();
    assert_eq!(encoded, format!("0x{}", "ff".repeat(16)));
    assert_eq!(run(&["decode", "--to", "number", &encoded]).unwrap(), max);
    assert_eq!(run(&["encode", "--from", "number", "-1"]), Err(ExitCode::Failure));
}

#[test]
fn array_with_empty_item_is_a_cli_error() {
    assert_eq!(run(&["encode", "--from", "array", "1,,2"]), Err(ExitCode::Cli));
    assert_eq!(run(&["encode", "--from", "array", "1,2"]).unwrap(), "0x0102");
}

#[test]
fn dispatch_follows_setup() {
    let matches = cli::basic_app()
        .try_get_matches_from([cli::BIN_NAME, "length", "0x0102"])
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    let setup = Setup {
        subcommand_name: "unknown".to_owned(),
        config: AppConfig::default(),
    };
    assert_eq!(run_subcommand(&setup, sub), Err(ExitCode::Cli));
}

#[test]
fn structural() {
    assert_eq!(run(&["length", "0x123456"]).unwrap(), "3");
    assert_eq!(run(&["concat", "0x1234", "0x56"]).unwrap(), "0x123456");
    assert_eq!(
        run(&["flatten", r#"["0x01", [["0x02"], "0x0304"], []]"#]).unwrap(),
        "0x01020304"
    );
    assert_eq!(run(&["flatten", "[]"]).unwrap(), "0x");
    assert_eq!(run(&["reverse", "0x010203"]).unwrap(), "0x030201");
    assert_eq!(run(&["pad", "0xab", "4"]).unwrap(), "0x000000ab");
    assert_eq!(run(&["pad", "0xab", "4", "--right"]).unwrap(), "0xab000000");
    assert_eq!(run(&["slice", "0x00112233", "1", "3"]).unwrap(), "0x1122");
}

#[test]
fn range_failures() {
    assert_eq!(run(&["pad", "0xabcd", "1"]), Err(ExitCode::Failure));
    assert_eq!(run(&["slice", "0x0011", "2", "1"]), Err(ExitCode::Failure));
    assert_eq!(run(&["slice", "0x0011", "0", "3"]), Err(ExitCode::Failure));
}

#[test]
fn malformed_hex_is_a_cli_error() {
    assert_eq!(run(&["reverse", "0x123"]), Err(ExitCode::Cli));
    assert_eq!(run(&["concat", "0x12", "34"]), Err(ExitCode::Cli));
}

#[test]
fn random_length() {
    let output = run(&["random", "4"]).unwrap();
    assert_eq!(output.len(), 10);
    assert!(output.starts_with("0x"));

    let output = run(&["random"]).unwrap();
    assert_eq!(output.len(), 2 + 2 * hexseq_app_config::DEFAULT_RANDOM_LENGTH);
}
