use assert_cmd::{assert::Assert, Command};
use predicates::prelude::*;

fn a4b_assert(args: &[&str]) -> Assert {
    let mut cmd = Command::cargo_bin("a4b").unwrap();
    cmd.env_remove("LOG_LEVEL")
        .env_remove("A4B_ENV_FILE")
        .args(args)
        .assert()
}

#[test]
fn lookup_known_token() {
    a4b_assert(&["lookup", "BusinessReportInterval", "THIRTY_DAYS"])
        .success()
        .stdout("THIRTY_DAYS\n");
}

#[test]
fn lookup_unrecognized_token_fails() {
    a4b_assert(&["lookup", "BusinessReportInterval", "THIRTY_YEARS"])
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "Error: cannot create BusinessReportInterval from unrecognized value 'THIRTY_YEARS'",
        ));
}

#[test]
fn lookup_empty_token_fails() {
    a4b_assert(&["lookup", "WakeWord", ""])
        .failure()
        .stderr(predicate::str::contains("value cannot be empty for WakeWord"));
}

#[test]
fn lookup_in_unknown_enumeration_fails() {
    a4b_assert(&["lookup", "Colour", "RED"])
        .failure()
        .stderr(predicate::str::contains("unknown enumeration 'Colour'"));
}

#[test]
fn enum_values_in_declaration_order() {
    a4b_assert(&["enum-values", "WakeWord"])
        .success()
        .stdout("ALEXA\nAMAZON\nECHO\nCOMPUTER\n");
}

#[test]
fn lists_enumerations() {
    a4b_assert(&["enums"])
        .success()
        .stdout(predicate::str::contains("BusinessReportFailureCode\n"))
        .stdout(predicate::str::contains("ServiceErrorCode\n"));
}

#[test]
fn lists_operations_with_targets() {
    a4b_assert(&["operations", "--targets"])
        .success()
        .stdout(predicate::str::starts_with(
            "ApproveSkill\tAlexaForBusiness.ApproveSkill\n",
        ))
        .stdout(predicate::str::contains(
            "UpdateSkillGroup\tAlexaForBusiness.UpdateSkillGroup\n",
        ));
}

#[test]
fn unknown_subcommand_fails() {
    a4b_assert(&["invoke"])
        .failure()
        .stderr(predicate::str::contains("Subcommand must be one of"));
}
