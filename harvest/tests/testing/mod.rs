#![allow(dead_code)]

use datamap::Storage;
use harvest::acting::{Activity, Actor, ActorId};
use harvest::api::{Action, ActionError, Event};
use harvest::dropping::{Token, TokenId};
use harvest::farming::{Source, SourceId};
use harvest::interaction::Target;
use harvest::inventory::ItemKey;
use harvest::working::{Factory, FactoryId};
use harvest::Game;

pub const ALICE: ActorId = ActorId(1);
pub const FIELD: SourceId = SourceId(1);
pub const OTHER_FIELD: SourceId = SourceId(2);
pub const BAKERY: FactoryId = FactoryId(1);

/// Simulation step, exactly representable so stage boundaries are hit precisely.
pub const STEP: f32 = 0.25;

pub struct GameTestScenario {
    pub game: Game,
    current_action_result: Result<Vec<Event>, ActionError>,
    events: Vec<Event>,
}

impl GameTestScenario {
    pub fn new() -> Self {
        let storage = Storage::memory().unwrap();
        storage
            .execute_script(include_str!("../../../assets/database.sql"))
            .unwrap();
        Self::open(storage)
    }

    pub fn open(storage: Storage) -> Self {
        let mut game = Game::new(storage);
        game.load_game_knowledge().unwrap();
        game.load_game_state().unwrap();
        game.seed(42);
        game.known.settings.random_offset = 0.0;
        game.known.settings.scale_in_time = STEP;
        game.known.settings.hold_time = STEP;
        game.known.settings.trigger_radius = None;
        Self {
            game,
            current_action_result: Ok(vec![]),
            events: vec![],
        }
    }

    pub fn item_key(&self, name: &str) -> ItemKey {
        self.game.known.items.find(name).unwrap().id
    }

    pub fn count(&self, item: &str) -> u32 {
        self.game.inventory.get_count(self.item_key(item)).unwrap()
    }

    pub fn actor(&self) -> &Actor {
        self.game.acting.get_actor(ALICE).unwrap()
    }

    pub fn source(&self, id: SourceId) -> &Source {
        self.game.farming.get_source(id).unwrap()
    }

    pub fn factory(&self) -> &Factory {
        self.game.working.get_factory(BAKERY).unwrap()
    }

    pub fn landed_tokens(&self) -> Vec<TokenId> {
        self.game.dropping.landed_tokens().map(|token| token.id).collect()
    }

    pub fn token(&self, id: TokenId) -> &Token {
        self.game.dropping.get_token(id).unwrap()
    }

    pub fn given_item_count(mut self, item: &str, count: u32) -> Self {
        let kind = self.game.known.items.find(item).unwrap();
        self.game.inventory.load_stock(kind, count);
        self
    }

    pub fn given_trigger_radius(mut self, radius: f32) -> Self {
        self.game.known.settings.trigger_radius = Some(radius);
        self
    }

    pub fn given_actor_at(mut self, position: [f32; 3]) -> Self {
        let actor = self.game.acting.get_actor_mut(ALICE).unwrap();
        actor.position = position;
        actor.destination = position;
        self
    }

    pub fn when_actor_perform<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&Self) -> Action,
    {
        let action = action(&self);
        self.current_action_result = self.game.perform_action(action);
        self
    }

    pub fn when_actor_enters(self, target: Target) -> Self {
        self.when_actor_perform(|_| Action::EnterProximity {
            actor: ALICE,
            target,
        })
    }

    pub fn when_actor_leaves(self, target: Target) -> Self {
        self.when_actor_perform(|_| Action::LeaveProximity {
            actor: ALICE,
            target,
        })
    }

    pub fn when_actor_moves(self, input: [f32; 2]) -> Self {
        self.when_actor_perform(|_| Action::MoveActor {
            actor: ALICE,
            input,
        })
    }

    pub fn when_actor_retries(self) -> Self {
        self.when_actor_perform(|_| Action::RetryInteract { actor: ALICE })
    }

    pub fn when_time_passes(mut self, seconds: f32) -> Self {
        let steps = (seconds / STEP).round() as usize;
        for _ in 0..steps {
            let events = self.game.update(STEP);
            self.events.extend(events);
        }
        self
    }

    pub fn then_action_should_succeed(self) -> Self {
        assert!(
            self.current_action_result.is_ok(),
            "{:?}",
            self.current_action_result
        );
        self
    }

    pub fn then_action_should_fail<F>(self, expected_error: F) -> Self
    where
        F: FnOnce(&Self) -> ActionError,
    {
        let expected_error = expected_error(&self);
        assert_eq!(self.current_action_result, Err(expected_error));
        self
    }

    pub fn then_action_events_should_contain<F>(self, expected: F) -> Self
    where
        F: Fn(&Event) -> bool,
    {
        let events = self.current_action_result.as_ref().unwrap();
        assert!(events.iter().any(expected), "{:?}", events);
        self
    }

    pub fn then_events_should_contain<F>(self, expected: F) -> Self
    where
        F: Fn(&Event) -> bool,
    {
        assert!(self.events.iter().any(expected), "{:?}", self.events);
        self
    }

    pub fn then_count_should_be(self, item: &str, expected: u32) -> Self {
        assert_eq!(self.count(item), expected, "{} count", item);
        self
    }

    pub fn then_activity_should_be(self, expected: Activity) -> Self {
        assert_eq!(self.actor().activity, expected);
        self
    }

    pub fn then_source_health_should_be(self, source: SourceId, expected: u32) -> Self {
        assert_eq!(self.source(source).health, expected);
        self
    }

    pub fn then_source_should_be_empty(self, source: SourceId, expected: bool) -> Self {
        assert_eq!(self.source(source).empty, expected);
        self
    }

    pub fn then_landed_tokens_should_be(self, expected: usize) -> Self {
        assert_eq!(self.landed_tokens().len(), expected);
        self
    }

    pub fn clear_events(mut self) -> Self {
        self.events.clear();
        self
    }
}

pub fn farming(source: SourceId) -> Activity {
    Activity::Farming { source }
}

pub fn crafting(factory: FactoryId) -> Activity {
    Activity::Crafting { factory }
}
