use harvest::acting::Activity;
use harvest::api::Event;
use harvest::farming::Farming::{ItemDropped, RecoveryScheduled, SourceEmptied, SourceHit};
use harvest::interaction::Target;

use crate::testing::{farming, GameTestScenario, FIELD, OTHER_FIELD};

mod testing;

#[test]
fn test_enter_source_starts_farming() {
    GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .then_action_should_succeed()
        .then_activity_should_be(farming(FIELD))
        .then_source_health_should_be(FIELD, 2);
}

#[test]
fn test_first_strike_after_one_period() {
    GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_time_passes(0.25)
        .then_source_health_should_be(FIELD, 2)
        .when_time_passes(0.25)
        .then_source_health_should_be(FIELD, 1)
        .then_events_should_contain(|event| {
            matches!(event, Event::Farming(events) if events.contains(&SourceHit { source: FIELD, health: 1 }))
        });
}

#[test]
fn test_source_empties_after_max_hits() {
    let scenario = GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_time_passes(1.0)
        .then_source_health_should_be(FIELD, 0)
        .then_source_should_be_empty(FIELD, true)
        .then_activity_should_be(Activity::Idle)
        .then_events_should_contain(|event| {
            matches!(event, Event::Farming(events) if events.contains(&SourceEmptied { source: FIELD }))
        })
        .then_events_should_contain(|event| {
            matches!(event, Event::Farming(events) if events.contains(&RecoveryScheduled { source: FIELD, due: 11.0 }))
        });
    assert_eq!(scenario.actor().swing, 0.0);
    assert_eq!(scenario.actor().routine, None);
}

#[test]
fn test_every_hit_drops_items_into_world() {
    let scenario = GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_time_passes(1.5)
        .then_landed_tokens_should_be(2)
        .then_count_should_be("wheat", 0);
    let wheat = scenario.item_key("wheat");
    for token in scenario.landed_tokens() {
        assert_eq!(scenario.token(token).item, wheat);
    }
    let drops = scenario
        .game
        .dropping
        .transits
        .iter()
        .filter(|transit| transit.receiver.is_none())
        .count();
    assert_eq!(drops, 2);
}

#[test]
fn test_empty_source_ignores_further_farming() {
    GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_time_passes(1.0)
        .clear_events()
        .when_actor_leaves(Target::Source(FIELD))
        .when_actor_enters(Target::Source(FIELD))
        .then_action_should_succeed()
        .then_activity_should_be(Activity::Idle)
        .when_time_passes(1.0)
        .then_source_health_should_be(FIELD, 0)
        .then_events_should_contain(|event| matches!(event, Event::Dropping(_)));
}

#[test]
fn test_leave_source_stops_farming() {
    let scenario = GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_time_passes(0.25)
        .when_actor_leaves(Target::Source(FIELD))
        .then_action_should_succeed()
        .then_activity_should_be(Activity::Idle)
        .when_time_passes(1.0)
        .then_source_health_should_be(FIELD, 2);
    assert_eq!(scenario.actor().swing, 0.0);
}

#[test]
fn test_leave_other_source_keeps_farming() {
    GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_actor_enters(Target::Source(OTHER_FIELD))
        .then_activity_should_be(farming(FIELD))
        .when_actor_leaves(Target::Source(OTHER_FIELD))
        .then_activity_should_be(farming(FIELD))
        .when_time_passes(0.5)
        .then_source_health_should_be(FIELD, 1)
        .then_source_health_should_be(OTHER_FIELD, 2);
}

#[test]
fn test_farming_moves_to_next_source_when_emptied() {
    GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_actor_enters(Target::Source(OTHER_FIELD))
        .when_time_passes(1.0)
        .then_source_should_be_empty(FIELD, true)
        .then_activity_should_be(farming(OTHER_FIELD))
        .when_time_passes(1.0)
        .then_source_should_be_empty(OTHER_FIELD, true)
        .then_activity_should_be(Activity::Idle);
}

#[test]
fn test_swing_follows_strike_loop() {
    let scenario = GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_time_passes(0.25);
    assert_eq!(scenario.actor().swing, 0.5);
    let scenario = scenario
        .when_time_passes(0.25)
        .then_events_should_contain(|event| {
            matches!(event, Event::Farming(events) if events.iter().any(|event| matches!(event, ItemDropped { source, .. } if *source == FIELD)))
        });
    assert_eq!(scenario.actor().swing, 0.0);
}
