//! Integration tests for the critter data model.
//!
//! These tests exercise the full scenario from the capability contracts:
//! construct a named dog, invoke both capabilities, and verify the exact
//! transcript written to the output stream.

use critter_core::{Dog, Species, Speaks, Walkable};

/// Run the greet scenario (speak, then walk) against any animal that
/// satisfies both capabilities, collecting the transcript.
fn greet<T: Walkable + Speaks>(animal: &T) -> Vec<u8> {
    let mut out = Vec::new();
    animal
        .speak_to(&mut out)
        .expect("writing to a Vec cannot fail");
    animal
        .walk_to(&mut out)
        .expect("writing to a Vec cannot fail");
    out
}

#[test]
fn test_greet_scenario_for_rex() {
    let dog = Dog::new("Rex");
    let transcript = greet(&dog);
    assert_eq!(transcript, b"Bark!!\nWalks on 4 legs on land!\n");
}

#[test]
fn test_transcript_is_stable_across_calls() {
    let dog = Dog::new("Fido");
    let first = greet(&dog);
    let second = greet(&dog);
    assert_eq!(first, second);
}

#[test]
fn test_species_resolves_to_constructible_variant() {
    let species: Species = "dog".parse().expect("dog is a known species");
    let dog = match species {
        Species::Dog => Dog::new("Rex"),
    };
    assert_eq!(dog.name(), "Rex");
}
