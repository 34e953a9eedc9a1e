//! Behavioural tests for record generation.
//!
//! These scenarios validate reproducibility, sequential numbering, email
//! consistency, locale selection and custom field handling.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use fake_records::{
    Category, GeneratorError, Locale, Record, RecordGenerator, local_part_from_name, pool,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use test_support::{is_well_formed_email, pinned_generator};

/// A custom field registered by a scenario.
#[derive(Debug, Clone)]
enum CustomField {
    Constant { name: String, value: String },
    Failing { name: String },
}

/// Test world holding generator configuration and generated batches.
#[derive(Default, ScenarioState)]
struct World {
    seed: Slot<u64>,
    second_seed: Slot<u64>,
    locale: Slot<Locale>,
    custom_fields: Slot<Vec<CustomField>>,
    batch: Slot<Result<Vec<Record>, GeneratorError>>,
    second_batch: Slot<Vec<Record>>,
}

impl World {
    /// Builds a generator from the configured seed, locale and custom fields.
    fn generator_for(&self, seed: u64) -> RecordGenerator {
        let locale = self.locale.get().unwrap_or_default();
        let mut generator = pinned_generator(&seed.to_string(), locale);
        for field in self.custom_fields.get().unwrap_or_default() {
            match field {
                CustomField::Constant { name, value } => {
                    generator.add_generator(name, move || value.clone());
                }
                CustomField::Failing { name } => {
                    generator.add_fallible_generator(name, || {
                        Err::<String, _>("custom generator failed")
                    });
                }
            }
        }
        generator
    }

    fn add_custom_field(&self, field: CustomField) {
        let mut fields = self.custom_fields.get().unwrap_or_default();
        fields.push(field);
        self.custom_fields.set(fields);
    }

    /// Extracts the generated batch, requiring success.
    fn records(&self) -> Vec<Record> {
        self.batch
            .get()
            .expect("batch should be generated")
            .expect("generation should succeed")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a generator seeded with {seed:u64}")]
fn a_generator_seeded_with(world: &World, seed: u64) {
    world.seed.set(seed);
}

#[given("a second generator seeded with {seed:u64}")]
fn a_second_generator_seeded_with(world: &World, seed: u64) {
    world.second_seed.set(seed);
}

#[given("a Spanish generator seeded with {seed:u64}")]
fn a_spanish_generator_seeded_with(world: &World, seed: u64) {
    world.seed.set(seed);
    world.locale.set(Locale::Es);
}

#[given("a custom generator for \"{name}\" returning \"{value}\"")]
fn a_custom_generator_returning(world: &World, name: String, value: String) {
    world.add_custom_field(CustomField::Constant { name, value });
}

#[given("a custom generator for \"{name}\" that fails")]
fn a_custom_generator_that_fails(world: &World, name: String) {
    world.add_custom_field(CustomField::Failing { name });
}

// ============================================================================
// When steps
// ============================================================================

#[when("{count:usize} records are generated")]
fn records_are_generated(world: &World, count: usize) {
    let seed = world.seed.get().expect("seed should be set");
    let result = world.generator_for(seed).create_records(count);
    world.batch.set(result);
}

#[when("both generators generate {count:usize} records")]
fn both_generators_generate_records(world: &World, count: usize) {
    let seed = world.seed.get().expect("seed should be set");
    let second_seed = world.second_seed.get().expect("second seed should be set");

    let first = world.generator_for(seed).create_records(count);
    let second = world
        .generator_for(second_seed)
        .create_records(count)
        .expect("second generation");

    world.batch.set(first);
    world.second_batch.set(second);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both batches are identical")]
fn both_batches_are_identical(world: &World) {
    let first = world.records();
    let second = world.second_batch.get().expect("second batch should be set");

    assert_eq!(first, second, "Generations should be deterministic");
}

#[then("the batch holds {count:usize} records numbered from 1")]
fn the_batch_holds_records_numbered_from_one(world: &World, count: usize) {
    let records = world.records();
    assert_eq!(records.len(), count);

    for (expected, record) in (1_u64..).zip(&records) {
        assert_eq!(record.id(), Some(expected));
    }
}

#[then("every email is derived from the record name")]
fn every_email_is_derived_from_the_record_name(world: &World) {
    for record in world.records() {
        let name = record.name().expect("name");
        let email = record.email().expect("email");
        let prefix = format!("{}@", local_part_from_name(name));
        assert!(email.starts_with(&prefix), "{name} produced {email}");
        assert!(is_well_formed_email(email), "{email} is malformed");
    }
}

#[then("every record has the name \"{name}\"")]
fn every_record_has_the_name(world: &World, name: String) {
    for record in world.records() {
        assert_eq!(record.name(), Some(name.as_str()));
    }
}

#[then("every city comes from the Spanish pool")]
fn every_city_comes_from_the_spanish_pool(world: &World) {
    let cities = pool(Category::City, Locale::Es).expect("spanish cities");
    for record in world.records() {
        let city = record.text("location").expect("location");
        assert!(cities.contains(&city), "{city} is not a Spanish city");
    }
}

#[then("generation fails for the field \"{field}\"")]
fn generation_fails_for_the_field(world: &World, field: String) {
    match world.batch.get().expect("batch should be generated") {
        Err(GeneratorError::Producer { field: failed, .. }) => assert_eq!(failed, field),
        other => panic!("Expected Producer error, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/record_generation.feature",
    name = "Equal seeds produce identical records"
)]
fn equal_seeds_produce_identical_records(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/record_generation.feature",
    name = "Batches are numbered sequentially"
)]
fn batches_are_numbered_sequentially(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/record_generation.feature",
    name = "Emails follow the generated name"
)]
fn emails_follow_the_generated_name(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/record_generation.feature",
    name = "Custom fields override built-in fields"
)]
fn custom_fields_override_built_in_fields(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/record_generation.feature",
    name = "Spanish records draw from Spanish pools"
)]
fn spanish_records_draw_from_spanish_pools(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/record_generation.feature",
    name = "Failing custom generators abort generation"
)]
fn failing_custom_generators_abort_generation(world: World) {
    let _ = world;
}
