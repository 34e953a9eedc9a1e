//! Behavioural tests for the record CLI.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use fake_records::cli::{CliError, ParseOutcome, parse_args, render};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::Value;

/// What a CLI run produced.
#[derive(Debug, Clone)]
enum CliOutput {
    Help,
    Json(String),
}

#[derive(Default, ScenarioState)]
struct World {
    args: Slot<Vec<String>>,
    result: Slot<Result<CliOutput, CliError>>,
}

impl World {
    fn output(&self) -> CliOutput {
        self.result
            .get()
            .expect("CLI should have run")
            .expect("CLI should succeed")
    }

    fn json(&self) -> Value {
        match self.output() {
            CliOutput::Json(json) => serde_json::from_str(&json).expect("valid JSON"),
            CliOutput::Help => panic!("expected JSON output, got help"),
        }
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn run(args: Vec<String>) -> Result<CliOutput, CliError> {
    match parse_args(args.into_iter())? {
        ParseOutcome::Help => Ok(CliOutput::Help),
        ParseOutcome::Options(options) => render(&options).map(CliOutput::Json),
    }
}

#[given("the CLI arguments \"{line}\"")]
fn the_cli_arguments(world: &World, line: String) {
    world
        .args
        .set(line.split_whitespace().map(str::to_owned).collect());
}

#[when("the CLI runs")]
fn the_cli_runs(world: &World) {
    let args = world.args.get().unwrap_or_default();
    world.result.set(run(args));
}

#[then("help is requested")]
fn help_is_requested(world: &World) {
    assert!(matches!(world.output(), CliOutput::Help));
}

#[then("the output is a JSON object")]
fn the_output_is_a_json_object(world: &World) {
    let value = world.json();

    assert!(value.is_object(), "expected object, got {value}");
    assert_eq!(value.get("id"), Some(&Value::from(1)));
}

#[then("the output is a JSON array of {count:usize} records")]
fn the_output_is_a_json_array(world: &World, count: usize) {
    let value = world.json();
    let records = value.as_array().expect("array output");

    assert_eq!(records.len(), count);
    for (expected, record) in (1_u64..).zip(records) {
        assert_eq!(record.get("id"), Some(&Value::from(expected)));
    }
}

#[then("the CLI reports \"{message}\"")]
fn the_cli_reports(world: &World, message: String) {
    let err = world
        .result
        .get()
        .expect("CLI should have run")
        .expect_err("CLI should fail");

    assert_eq!(err.to_string(), message);
}

#[scenario(
    path = "tests/features/record_cli.feature",
    name = "Help is printed on request"
)]
fn help_is_printed_on_request(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/record_cli.feature",
    name = "A single record is printed as an object"
)]
fn a_single_record_is_printed_as_an_object(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/record_cli.feature",
    name = "Several records are printed as an array"
)]
fn several_records_are_printed_as_an_array(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/record_cli.feature",
    name = "Unsupported locales are reported"
)]
fn unsupported_locales_are_reported(world: World) {
    let _ = world;
}
