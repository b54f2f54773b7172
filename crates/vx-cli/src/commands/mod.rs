pub mod adventure;
pub mod catalog;
pub mod last_order;
pub mod prompt;
pub mod scenes;
pub mod shop;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use vx_adventure::{AdventureConfig, World, WorldName};

/// Load a bundled world, or a world file when one is given.
fn load_world(world: WorldName, world_file: Option<PathBuf>) -> Result<Arc<World>, String> {
    let mut config = AdventureConfig::default().with_world(world);
    if let Some(path) = world_file {
        config = config.with_world_file(path);
    }
    config
        .load_world()
        .map_err(|e| format!("failed to load world: {e}"))
}

/// Prompt for and read one line. Returns false at end of input.
fn read_turn(reader: &mut impl BufRead, line: &mut String) -> Result<bool, String> {
    print!("> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    line.clear();
    match reader.read_line(line) {
        Ok(0) => Ok(false), // EOF
        Err(e) => Err(e.to_string()),
        _ => Ok(true),
    }
}
