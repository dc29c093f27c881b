use datamap::Storage;
use harvest::acting::ActorId;
use harvest::api::Action;
use harvest::inventory::ItemKey;
use harvest::{DataError, Game};
use log::{error, info};

/// Fixed simulation step in seconds.
const STEP: f32 = 0.05;
const DURATION: f32 = 24.0;

fn main() {
    env_logger::init();
    info!("OS: {}", std::env::consts::OS);
    let storage = match std::env::args().nth(1) {
        Some(path) => Storage::open(path),
        None => Storage::memory().and_then(|storage| {
            storage
                .execute_script(include_str!("../../assets/database.sql"))
                .map(|_| storage)
        }),
    };
    let storage = match storage {
        Ok(storage) => storage,
        Err(error) => {
            error!("Unable to open storage, {:?}", error);
            return;
        }
    };
    if let Err(error) = simulate(storage) {
        error!("Simulation failed, {:?}", error);
    }
    info!("Bye!");
}

fn simulate(storage: Storage) -> Result<(), DataError> {
    let mut game = Game::new(storage);
    game.register_reactor(Box::new(|item: ItemKey, count: u32| {
        info!("Counter {:?} shows {}", item, count);
    }));
    game.load_game_knowledge()?;
    game.load_game_state()?;

    let actor = ActorId(1);
    let mut script = vec![
        (0.0, [3.0, 0.0]),
        (4.0, [0.0, 2.0]),
        (8.0, [-6.0, -2.0]),
        (10.0, [0.0, 0.0]),
    ]
    .into_iter()
    .peekable();

    let mut time = 0.0;
    while time < DURATION {
        while let Some((_, input)) = script.next_if(|(at, _)| *at <= time) {
            info!("Move {:?} at {:.2}", input, time);
            match game.perform_action(Action::MoveActor { actor, input }) {
                Ok(events) => info!("Events: {:?}", events),
                Err(error) => error!("Unable to move, {:?}", error),
            }
        }
        for event in game.update(STEP) {
            info!("{:.2}: {:?}", time, event);
        }
        time += STEP;
    }

    game.save()?;
    for kind in game.known.items.iter() {
        info!(
            "Final {} count {}",
            kind.name,
            game.inventory.get_count(kind.id).unwrap_or(0)
        );
    }
    Ok(())
}
