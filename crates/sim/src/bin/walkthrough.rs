//! Runs a navigation scenario on a canned map and logs every decision.
//!
//! Useful for eyeballing follower behavior: `RUST_LOG=debug cargo run
//! --bin walkthrough` shows the wall-following internals round by round.

use nav_core::{Direction, Navigator, Position};
use nav_sim::{GridWorld, MapError};
use tracing_subscriber::EnvFilter;

const CANYON: &str = "............
                      ..########..
                      ..#......#..
                      ...@.....#..
                      ..#......#..
                      ..########..
                      ............";

const MAX_ROUNDS: u64 = 60;

fn main() -> Result<(), MapError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut world = GridWorld::from_ascii(CANYON)?;
    // Starve the search so the reactive follower does all the work.
    world.set_budget(100);
    let target = Position::new(11, 3);
    let mut nav = Navigator::new();

    tracing::info!(agent = %world.agent(), %target, "walkthrough begins");
    while world.agent() != target && world.round() < MAX_ROUNDS {
        let source = world.agent();
        let dir = nav.pathfind(&world.env(), source, target);
        world.apply(dir);
        tracing::info!(
            round = world.round(),
            %source,
            %dir,
            following = nav.follower().is_wall_following(),
            "step"
        );
        if dir == Direction::Center {
            tracing::warn!("navigator stood still, aborting");
            break;
        }
    }

    if world.agent() == target {
        tracing::info!(rounds = world.round(), "target reached");
    } else {
        tracing::warn!(agent = %world.agent(), "target not reached");
    }
    Ok(())
}
