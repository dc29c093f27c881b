use std::cell::RefCell;
use std::rc::Rc;

use datamap::Storage;
use harvest::interaction::Target;
use harvest::inventory::ItemKey;
use harvest::{DataError, Game};

use crate::testing::{GameTestScenario, FIELD};

mod testing;

fn seeded_storage() -> Storage {
    let storage = Storage::memory().unwrap();
    storage
        .execute_script(include_str!("../../assets/database.sql"))
        .unwrap();
    storage
}

#[test]
fn test_load_game_knowledge() {
    let scenario = GameTestScenario::new();
    let known = &scenario.game.known;
    assert_eq!(known.items.len(), 2);
    assert_eq!(known.sources.len(), 1);
    assert_eq!(known.factories.len(), 1);

    let wheat = known.items.find("wheat").unwrap();
    assert_eq!(wheat.max_quantity, Some(10));
    assert!(wheat.backpack);
    let coin = known.items.find("coin").unwrap();
    assert_eq!(coin.max_quantity, None);

    let field = known.sources.find("wheat-field").unwrap();
    assert_eq!(field.item, wheat.id);
    assert_eq!(field.max_hits, 2);
    let bakery = known.factories.find("bakery").unwrap();
    assert_eq!(bakery.input, wheat.id);
    assert_eq!(bakery.output, coin.id);
    assert_eq!(bakery.input_quantity, 3);
    assert_eq!(bakery.output_quantity, 5);
    assert_eq!(known.settings.delivery_period, 1.0);
    assert_eq!(known.settings.scale_in_time, 0.2);
    assert_eq!(known.settings.hold_time, 0.2);
}

#[test]
fn test_load_game_state() {
    let scenario = GameTestScenario::new()
        .then_count_should_be("wheat", 0)
        .then_count_should_be("coin", 0);
    assert_eq!(scenario.game.farming.sources.len(), 2);
    assert_eq!(scenario.game.working.factories.len(), 1);
    assert_eq!(scenario.game.acting.actors.len(), 1);
    assert_eq!(scenario.source(FIELD).position, [4.0, 0.0, 0.0]);
    assert_eq!(scenario.source(FIELD).health, 2);
}

#[test]
fn test_stored_counts_clamped_on_load() {
    let storage = seeded_storage();
    storage
        .execute_script("insert into Inventory (item, count) values ('wheat', 12), ('coin', 40);")
        .unwrap();
    let scenario = GameTestScenario::open(storage)
        .then_count_should_be("wheat", 10)
        .then_count_should_be("coin", 40);
    assert_eq!(scenario.actor().backpack, 1.0);
}

#[test]
fn test_settings_required() {
    let storage = seeded_storage();
    storage.execute_script("delete from Settings;").unwrap();
    let mut game = Game::new(storage);
    assert!(matches!(
        game.load_game_knowledge(),
        Err(DataError::SettingsNotFound)
    ));
}

#[test]
fn test_unknown_item_reference() {
    let storage = seeded_storage();
    storage
        .execute_script("update FactoryKind set output = 'bread';")
        .unwrap();
    let mut game = Game::new(storage);
    assert!(matches!(
        game.load_game_knowledge(),
        Err(DataError::Inconsistency(_))
    ));
}

#[test]
fn test_credit_saved_immediately() {
    let scenario = GameTestScenario::new()
        .when_actor_enters(Target::Source(FIELD))
        .when_time_passes(1.5);
    let token = scenario.landed_tokens()[0];
    let scenario = scenario
        .when_actor_enters(Target::Item(token))
        .when_time_passes(0.5)
        .then_count_should_be("wheat", 1);
    assert_eq!(scenario.game.storage().get_item_count("wheat").unwrap(), 1);
}

#[test]
fn test_save_writes_all_counts() {
    let mut scenario = GameTestScenario::new()
        .given_item_count("wheat", 4)
        .given_item_count("coin", 7);
    scenario.game.save().unwrap();
    let storage = scenario.game.storage();
    assert_eq!(storage.get_item_count("wheat").unwrap(), 4);
    assert_eq!(storage.get_item_count("coin").unwrap(), 7);
}

#[test]
fn test_reactors_notified_of_changes() {
    let received: Rc<RefCell<Vec<(ItemKey, u32)>>> = Default::default();
    let mut scenario = GameTestScenario::new();
    let sink = received.clone();
    scenario
        .game
        .register_reactor(Box::new(move |item: ItemKey, count: u32| sink.borrow_mut().push((item, count))));
    let wheat = scenario.item_key("wheat");
    let scenario = scenario
        .when_actor_enters(Target::Source(FIELD))
        .when_time_passes(1.5);
    let token = scenario.landed_tokens()[0];
    let scenario = scenario
        .when_actor_enters(Target::Item(token))
        .when_time_passes(0.5);
    let coin = scenario.item_key("coin");
    assert_eq!(
        *received.borrow(),
        vec![(wheat, 0), (coin, 0), (wheat, 1)]
    );
}

#[test]
fn test_reactor_registered_before_loading_synced_once() {
    let received: Rc<RefCell<Vec<(ItemKey, u32)>>> = Default::default();
    let mut game = Game::new(seeded_storage());
    let sink = received.clone();
    game.register_reactor(Box::new(move |item: ItemKey, count: u32| sink.borrow_mut().push((item, count))));
    game.load_game_knowledge().unwrap();
    game.load_game_state().unwrap();
    let wheat = game.known.items.find("wheat").unwrap().id;
    let coin = game.known.items.find("coin").unwrap().id;
    assert_eq!(*received.borrow(), vec![(wheat, 0), (coin, 0)]);
}
