use std::io;
use std::path::PathBuf;

use colored::Colorize;

use vx_adventure::{AdventureCommand, GameMaster, WorldName, parse_command};

pub fn run(world: WorldName, world_file: Option<PathBuf>, name: Option<String>) -> Result<(), String> {
    let world = super::load_world(world, world_file)?;
    world.validate().map_err(|e| format!("invalid world: {e}"))?;

    let gm = GameMaster::new(world);
    let mut state = gm.start();
    if let Some(name) = name {
        state = state.with_player_name(name);
    }
    tracing::debug!(session = %state.session_id, world = gm.world().title(), "session started");

    println!("  {} {}", "Entering".bold(), gm.world().title().bold());
    if let Some(name) = &state.player_name {
        println!("  Welcome, {name}.");
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", gm.render(&state.current_scene));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while super::read_turn(&mut reader, &mut line)? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        // a scene may offer a choice literally keyed "quit"
        let quits = parse_command(input) == AdventureCommand::Quit
            && gm
                .world()
                .scene(&state.current_scene)
                .is_none_or(|s| s.choice(input).is_none());

        let steps = state.history.len();
        let output = gm.process(&mut state, input);
        if state.history.len() == steps && output.starts_with("I'm not sure") {
            println!("{}\n", output.yellow());
        } else {
            println!("{output}\n");
        }

        if quits {
            break;
        }
    }

    Ok(())
}
