//! Drives the interactive calculator end to end through in-memory I/O.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tip_cli::config::parse_config;
use tip_cli::repl;
use tip_cli::TipSession;
use tip_core::TipConfig;

fn run_script(
    session: &mut TipSession,
    script: &str,
) -> String {
    let mut output = Vec::new();
    repl::run(session, Cursor::new(script), &mut output).expect("repl run failed");
    String::from_utf8(output).expect("repl output is not UTF-8")
}

#[test]
fn test_typing_a_full_form() {
    let mut session = TipSession::new(TipConfig::default());

    let output = run_script(&mut session, "bill 86.43\ntip 18\npeople 4\nquit\n");

    let inputs = session.state().inputs();
    assert_eq!(inputs.bill_amount, dec!(86.43));
    assert_eq!(inputs.tip_percent, dec!(18));
    assert_eq!(inputs.number_of_people, 4);
    assert!(output.contains("Each Person Pays           25.50"));
    assert!(output.contains("Total Amount              101.99"));
}

#[test]
fn test_bad_text_falls_back_to_defaults() {
    let mut session = TipSession::new(TipConfig::default());

    let output = run_script(&mut session, "bill abc\npeople 0\n");

    assert_eq!(session.state().inputs().bill_amount, dec!(0));
    assert_eq!(session.state().inputs().number_of_people, 1);
    assert!(output.contains("Each Person Pays            0.00"));
}

#[test]
fn test_presets_steppers_and_reset() {
    let mut session = TipSession::new(TipConfig::default());

    run_script(&mut session, "bill 40\npreset 4\ntip+\ntip+\npeople+\n");

    assert_eq!(session.state().inputs().tip_percent, dec!(22));
    assert_eq!(session.state().breakdown().each_person_pays, dec!(24.4));

    run_script(&mut session, "reset\n");

    assert_eq!(session.state().inputs().bill_amount, dec!(0));
    assert_eq!(session.state().inputs().tip_percent, dec!(15));
}

#[test]
fn test_unknown_commands_leave_state_alone() {
    let mut session = TipSession::new(TipConfig::default());

    let output = run_script(&mut session, "bill 10\ntotal 99\npreset 42\nquit\n");

    assert!(output.contains("unknown command 'total'"));
    assert!(output.contains("no preset 42"));
    assert_eq!(session.state().inputs().bill_amount, dec!(10));
    assert_eq!(session.state().inputs().tip_percent, dec!(15));
}

#[test]
fn test_reject_policy_from_config_file() {
    let config = parse_config(
        r#"
        bound_policy = "reject"
        max_tip_percent = 40
        "#,
    )
    .expect("config should parse");
    let mut session = TipSession::new(config);

    run_script(&mut session, "tip 25\ntip 45\npeople 3\npeople -1\n");

    assert_eq!(session.state().inputs().tip_percent, dec!(25));
    assert_eq!(session.state().inputs().number_of_people, 3);
}

#[test]
fn test_end_of_input_ends_session() {
    let mut session = TipSession::new(TipConfig::default());

    let output = run_script(&mut session, "help\npresets\n");

    assert!(output.contains("Commands:"));
    assert!(output.contains("  3. 18%"));
}

#[test]
fn test_log_command_reports_missing_subscriber() {
    let mut session = TipSession::new(TipConfig::default());

    let output = run_script(&mut session, "log debug\nlog\n");

    assert!(output.contains("logging not yet initialized"));
    assert!(output.contains("`log` needs a filter"));
}
