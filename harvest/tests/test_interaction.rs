use harvest::acting::ActingError::ActorNotFound;
use harvest::acting::{Activity, ActorId};
use harvest::api::{Action, ActionError, Event};
use harvest::dropping::TokenId;
use harvest::interaction::Target;

use crate::testing::{crafting, farming, GameTestScenario, BAKERY, FIELD, OTHER_FIELD};

mod testing;

#[test]
fn test_unknown_actor() {
    GameTestScenario::new()
        .when_actor_perform(|_| Action::RetryInteract { actor: ActorId(7) })
        .then_action_should_fail(|_| ActionError::Acting(ActorNotFound { id: ActorId(7) }));
}

#[test]
fn test_repeated_enter_does_not_engage_twice() {
    let scenario = GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_time_passes(0.25)
        .when_actor_enters(Target::Source(FIELD))
        .then_action_should_succeed();
    assert_eq!(scenario.actor().nearby.len(), 1);
    scenario
        .when_time_passes(0.25)
        .then_source_health_should_be(FIELD, 1);
}

#[test]
fn test_enter_while_busy_keeps_current_activity() {
    GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_actor_enters(Target::Source(OTHER_FIELD))
        .then_activity_should_be(farming(FIELD));
}

#[test]
fn test_retry_follows_proximity_order() {
    GameTestScenario::new()
        .given_item_count("wheat", 3)
        .when_actor_enters(Target::Factory(BAKERY))
        .when_actor_enters(Target::Source(FIELD))
        .then_activity_should_be(farming(FIELD))
        .when_time_passes(1.0)
        .then_source_should_be_empty(FIELD, true)
        .then_activity_should_be(crafting(BAKERY))
        .then_count_should_be("wheat", 2);
}

#[test]
fn test_retry_skips_factory_while_moving() {
    GameTestScenario::new()
        .given_item_count("wheat", 3)
        .when_actor_moves([0.0, 1.0])
        .when_actor_enters(Target::Factory(BAKERY))
        .when_actor_enters(Target::Source(FIELD))
        .when_actor_leaves(Target::Source(FIELD))
        .then_activity_should_be(Activity::Idle)
        .when_actor_retries()
        .then_action_should_succeed()
        .then_activity_should_be(Activity::Idle)
        .then_count_should_be("wheat", 3);
}

#[test]
fn test_stop_moving_engages_factory() {
    GameTestScenario::new()
        .given_item_count("wheat", 3)
        .when_actor_moves([0.0, 1.0])
        .when_actor_enters(Target::Factory(BAKERY))
        .then_activity_should_be(Activity::Idle)
        .when_actor_moves([0.0, 0.0])
        .then_action_events_should_contain(|event| matches!(event, Event::Working(_)))
        .then_activity_should_be(crafting(BAKERY));
}

#[test]
fn test_moving_does_not_stop_farming() {
    GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_actor_moves([1.0, 0.0])
        .then_activity_should_be(farming(FIELD))
        .when_time_passes(0.5)
        .then_source_health_should_be(FIELD, 1);
}

#[test]
fn test_farming_replaces_crafting() {
    GameTestScenario::new()
        .given_item_count("wheat", 3)
        .when_actor_enters(Target::Factory(BAKERY))
        .when_actor_retries()
        .then_activity_should_be(crafting(BAKERY))
        .when_actor_enters(Target::Source(FIELD))
        .then_activity_should_be(farming(FIELD))
        .then_count_should_be("wheat", 2)
        .when_time_passes(1.0)
        .then_source_should_be_empty(FIELD, true)
        .then_activity_should_be(crafting(BAKERY))
        .then_count_should_be("wheat", 1);
}

#[test]
fn test_leave_unknown_target_is_harmless() {
    GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_actor_leaves(Target::Factory(BAKERY))
        .then_action_should_succeed()
        .then_activity_should_be(farming(FIELD));
}

#[test]
fn test_retry_skips_missing_token() {
    GameTestScenario::new()
        .when_actor_enters(Target::Item(TokenId(42)))
        .when_actor_retries()
        .then_action_should_succeed()
        .then_activity_should_be(Activity::Idle);
}
