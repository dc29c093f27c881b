use harvest::acting::Activity;
use harvest::api::Event;
use harvest::interaction::Target;
use harvest::working::Working::{InputDelivered, ProductionCompleted, ProductionStarted};

use crate::testing::{crafting, GameTestScenario, BAKERY};

mod testing;

fn given_crafting(wheat: u32) -> GameTestScenario {
    GameTestScenario::new()
        .given_item_count("wheat", wheat)
        .when_actor_enters(Target::Factory(BAKERY))
        .then_activity_should_be(Activity::Idle)
        .when_actor_retries()
        .then_action_should_succeed()
}

#[test]
fn test_factory_requires_actor_to_stop() {
    given_crafting(3)
        .then_activity_should_be(crafting(BAKERY))
        .then_count_should_be("wheat", 2);
}

#[test]
fn test_delivery_once_per_period() {
    let scenario = given_crafting(3).when_time_passes(0.75);
    assert_eq!(scenario.factory().incoming, 1);
    assert_eq!(scenario.factory().stored, 0);
    let scenario = scenario
        .when_time_passes(0.25)
        .then_count_should_be("wheat", 1);
    assert_eq!(scenario.factory().incoming, 1);
    assert_eq!(scenario.factory().stored, 1);
    scenario.then_events_should_contain(|event| {
        matches!(event, Event::Working(events) if events.contains(&InputDelivered { factory: BAKERY, stored: 1 }))
    });
}

#[test]
fn test_production_starts_with_full_batch() {
    let scenario = given_crafting(3)
        .when_time_passes(3.0)
        .then_count_should_be("wheat", 0)
        .then_events_should_contain(|event| {
            matches!(event, Event::Working(events) if events.contains(&ProductionStarted { factory: BAKERY }))
        });
    assert!(scenario.factory().producing);
    assert_eq!(scenario.factory().stored, 0);
    assert_eq!(scenario.factory().incoming, 0);
}

#[test]
fn test_crafted_batch_reaches_ledger() {
    let scenario = given_crafting(3);
    let coin = scenario.item_key("coin");
    let scenario = scenario
        .when_time_passes(4.75)
        .then_count_should_be("coin", 0)
        .when_time_passes(0.25)
        .then_events_should_contain(|event| {
            matches!(event, Event::Working(events) if events.contains(&ProductionCompleted { factory: BAKERY, item: coin, quantity: 5 }))
        })
        .when_time_passes(2.0)
        .then_count_should_be("coin", 5)
        .then_count_should_be("wheat", 0)
        .then_activity_should_be(Activity::Idle);
    assert!(!scenario.factory().producing);
}

#[test]
fn test_in_flight_units_close_factory() {
    let scenario = given_crafting(5).when_time_passes(2.0);
    assert_eq!(scenario.factory().stored + scenario.factory().incoming, 3);
    let scenario = scenario.when_time_passes(1.0).then_count_should_be("wheat", 2);
    assert!(scenario.factory().producing);
}

#[test]
fn test_crafting_without_input_stays_idle() {
    given_crafting(0)
        .then_activity_should_be(Activity::Idle)
        .when_time_passes(2.0)
        .then_activity_should_be(Activity::Idle);
}

#[test]
fn test_running_out_of_input_stops_crafting() {
    let scenario = given_crafting(1)
        .then_activity_should_be(crafting(BAKERY))
        .then_count_should_be("wheat", 0)
        .when_time_passes(1.0)
        .then_activity_should_be(Activity::Idle);
    assert_eq!(scenario.factory().stored, 1);
    assert!(!scenario.factory().producing);
}

#[test]
fn test_moving_stops_crafting_and_stopping_resumes() {
    given_crafting(3)
        .when_actor_moves([1.0, 0.0])
        .then_action_should_succeed()
        .then_activity_should_be(Activity::Idle)
        .when_actor_moves([0.0, 0.0])
        .then_activity_should_be(crafting(BAKERY))
        .then_count_should_be("wheat", 1);
}

#[test]
fn test_leaving_factory_stops_crafting() {
    given_crafting(3)
        .when_actor_leaves(Target::Factory(BAKERY))
        .then_activity_should_be(Activity::Idle)
        .when_time_passes(2.0)
        .then_count_should_be("wheat", 2);
}
