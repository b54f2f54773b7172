use std::io;
use std::path::PathBuf;

use colored::Colorize;

use vx_shop::{Shop, ShopCommand, ShopConfig, ShopState, parse_command};

pub fn run(orders: PathBuf) -> Result<(), String> {
    let shop = Shop::from_config(ShopConfig::default().with_orders_path(orders));
    shop.store()
        .ensure_exists()
        .map_err(|e| format!("cannot use order file {}: {e}", shop.config().orders_path.display()))?;

    let mut state = ShopState::new();
    tracing::debug!(session = %state.session_id, "shop session started");

    println!("  {} the shop with Jarvis", "Welcome to".bold());
    println!("  Orders go to {}", shop.config().orders_path.display());
    println!("  Try 'show catalog', 'add mug-001' or 'place my order'. Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while super::read_turn(&mut reader, &mut line)? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = parse_command(input);
        let quits = command == ShopCommand::Quit;
        let output = shop.execute(&mut state, command);
        if output.starts_with("Order placed") {
            println!("{}\n", output.green());
        } else if output.starts_with("Sorry") || output.starts_with("I couldn't") {
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
