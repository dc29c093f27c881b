use harvest::acting::Activity;
use harvest::interaction::Target;

use crate::testing::{crafting, farming, GameTestScenario, BAKERY, FIELD};

mod testing;

#[test]
fn test_sensing_disabled_without_radius() {
    GameTestScenario::new()
        .given_actor_at([3.5, 0.0, 0.0])
        .when_time_passes(1.0)
        .then_activity_should_be(Activity::Idle);
}

#[test]
fn test_actor_near_source_starts_farming() {
    let scenario = GameTestScenario::new()
        .given_trigger_radius(1.5)
        .given_actor_at([3.0, 0.0, 0.0])
        .when_time_passes(0.25)
        .then_activity_should_be(farming(FIELD));
    assert!(scenario.actor().nearby.contains(Target::Source(FIELD)));
    assert_eq!(scenario.actor().nearby.len(), 1);
}

#[test]
fn test_landed_items_collected_in_proximity() {
    GameTestScenario::new()
        .given_trigger_radius(1.5)
        .given_actor_at([3.0, 0.0, 0.0])
        .when_time_passes(3.0)
        .then_source_should_be_empty(FIELD, true)
        .then_landed_tokens_should_be(0)
        .then_count_should_be("wheat", 2);
}

#[test]
fn test_walking_away_stops_farming() {
    GameTestScenario::new()
        .given_trigger_radius(1.5)
        .given_actor_at([3.0, 0.0, 0.0])
        .when_time_passes(0.25)
        .when_actor_moves([-3.0, 0.0])
        .then_activity_should_be(farming(FIELD))
        .when_time_passes(0.25)
        .then_activity_should_be(Activity::Idle)
        .then_source_health_should_be(FIELD, 2);
}

#[test]
fn test_arriving_at_factory_crafts_after_stop() {
    let scenario = GameTestScenario::new()
        .given_trigger_radius(1.5)
        .given_item_count("wheat", 3)
        .given_actor_at([-2.0, 0.0, 0.0])
        .when_actor_moves([-1.0, 0.0])
        .when_time_passes(0.25)
        .then_activity_should_be(Activity::Idle);
    assert!(scenario.actor().nearby.contains(Target::Factory(BAKERY)));
    scenario
        .when_actor_moves([0.0, 0.0])
        .then_activity_should_be(crafting(BAKERY));
}
