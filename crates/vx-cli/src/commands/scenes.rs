use std::path::PathBuf;

use comfy_table::{ContentArrangement, Table};

use vx_adventure::WorldName;

pub fn run(world: WorldName, world_file: Option<PathBuf>) -> Result<(), String> {
    let world = super::load_world(world, world_file)?;
    world.validate().map_err(|e| format!("invalid world: {e}"))?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "Title", "Choices"]);

    for scene in world.scenes() {
        let choices = if scene.choices.is_empty() {
            "-".to_string()
        } else {
            scene
                .choices
                .iter()
                .map(|c| format!("{} -> {}", c.key, c.target))
                .collect::<Vec<_>>()
                .join("\n")
        };
        let key = if scene.key == world.initial() {
            format!("{} (start)", scene.key)
        } else {
            scene.key.clone()
        };
        table.add_row(vec![key, scene.title.clone(), choices]);
    }

    println!("  {}", world.title());
    println!("{table}");
    println!();
    println!("  {} scenes, every choice leads to a scene", world.len());

    Ok(())
}
