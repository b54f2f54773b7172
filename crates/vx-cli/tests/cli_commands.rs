//! Integration tests for the vx CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vx() -> Command {
    let mut cmd = Command::cargo_bin("vx").unwrap();
    cmd.env_remove("VX_ORDERS_FILE").env_remove("RUST_LOG");
    cmd
}

/// A two-scene world file.
fn tiny_world(dir: &TempDir) -> String {
    let path = dir.path().join("world.json");
    fs::write(
        &path,
        r#"{
    "title": "The Lighthouse",
    "scenes": [
        {
            "key": "intro",
            "title": "The Shore",
            "description": "A lighthouse blinks over grey water.",
            "choices": [
                {
                    "key": "climb_tower",
                    "description": "Climb the lighthouse tower",
                    "target": "lamp_room",
                    "effects": [{ "kind": "add_journal", "entry": "Climbed the tower" }]
                }
            ]
        },
        {
            "key": "lamp_room",
            "title": "The Lamp Room",
            "description": "The great lamp turns slowly.",
            "choices": [
                { "key": "descend", "description": "Go back down to the shore", "target": "intro" }
            ]
        }
    ]
}"#,
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// adventure
// ---------------------------------------------------------------------------

#[test]
fn adventure_enters_the_temple() {
    vx().args(["adventure"])
        .write_stdin("I want to enter the temple\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Ruins of Aetherwyn")
                .and(predicate::str::contains("say exactly: enter_temple"))
                .and(predicate::str::contains("The Inner Hall"))
                .and(predicate::str::contains("What do you do next?")),
        );
}

#[test]
fn adventure_clarifies_nonsense() {
    vx().args(["adventure"])
        .write_stdin("xyzzy plugh\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not sure"));
}

#[test]
fn adventure_journal_and_restart() {
    vx().args(["adventure", "--name", "Mira"])
        .write_stdin("enter_temple\njournal\nrestart\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome, Mira.")
                .and(predicate::str::contains("Mira, you are at The Inner Hall."))
                .and(predicate::str::contains("Stepped beneath the archway"))
                .and(predicate::str::contains("you stand once more before the ruins")),
        );
}

#[test]
fn adventure_gita() {
    vx().args(["adventure", "--world", "gita"])
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Inner Realm")
                .and(predicate::str::contains("restart")),
        );
}

#[test]
fn adventure_from_world_file() {
    let dir = TempDir::new().unwrap();
    let world = tiny_world(&dir);
    vx().args(["adventure", "--world-file", &world])
        .write_stdin("climb the tower\ninventory\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Lamp Room")
                .and(predicate::str::contains("Climbed the tower")),
        );
}

#[test]
fn adventure_unknown_world() {
    vx().args(["adventure", "--world", "mars"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown world"));
}

#[test]
fn adventure_dangling_world_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{"title":"Broken","scenes":[{"key":"intro","title":"Start","description":"",
            "choices":[{"key":"go","description":"Go","target":"nowhere"}]}]}"#,
    )
    .unwrap();

    vx().args(["adventure", "--world-file", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load world").and(predicate::str::contains("nowhere")));
}

// ---------------------------------------------------------------------------
// scenes
// ---------------------------------------------------------------------------

#[test]
fn scenes_lists_bundled_world() {
    vx().args(["scenes"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("intro (start)")
                .and(predicate::str::contains("enter_temple -> inner_hall"))
                .and(predicate::str::contains("every choice leads to a scene")),
        );
}

#[test]
fn scenes_from_world_file() {
    let dir = TempDir::new().unwrap();
    let world = tiny_world(&dir);
    vx().args(["scenes", "--world-file", &world])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Lighthouse").and(predicate::str::contains("2 scenes")));
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_lists_everything() {
    vx().args(["catalog"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("mug-001")
                .and(predicate::str::contains("phone-006"))
                .and(predicate::str::contains("23 products")),
        );
}

#[test]
fn catalog_phone_category() {
    vx().args(["catalog", "--category", "phone"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("phone-001")
                .and(predicate::str::contains("6 products"))
                .and(predicate::str::contains("mug-001").not()),
        );
}

#[test]
fn catalog_price_window() {
    vx().args(["catalog", "--min-price", "500", "--max-price", "1000"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("mug-002")
                .and(predicate::str::contains("tee-004"))
                .and(predicate::str::contains("hoodie-001").not()),
        );
}

#[test]
fn catalog_json() {
    let output = vx()
        .args(["catalog", "--query", "mugs", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let products: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(products.as_array().map(Vec::len), Some(2));
}

#[test]
fn catalog_no_matches() {
    vx().args(["catalog", "--query", "spaceship"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found"));
}

// ---------------------------------------------------------------------------
// shop and last-order
// ---------------------------------------------------------------------------

#[test]
fn shop_places_an_order() {
    let dir = TempDir::new().unwrap();
    let orders = dir.path().join("orders.json");

    vx().args(["shop", "--orders", orders.to_str().unwrap()])
        .write_stdin("I want the second phone\nadd mug-001 to my cart, quantity 2\nshow my cart\nplace my order\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Added 1 x Oppo A-Series")
                .and(predicate::str::contains("Cart total: 18598 INR"))
                .and(predicate::str::contains("Order placed.")),
        );

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&orders).unwrap()).unwrap();
    let stored = stored.as_array().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["total"], 18598);
    assert_eq!(stored[0]["items"][0]["product_id"], "phone-002");

    vx().args(["last-order", "--orders", orders.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Oppo A-Series")
                .and(predicate::str::contains("Total: 18598 INR")),
        );
}

#[test]
fn shop_empty_cart_order_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let orders = dir.path().join("orders.json");

    vx().args(["shop", "--orders", orders.to_str().unwrap()])
        .write_stdin("place my order\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to place"));

    let content = fs::read_to_string(&orders).unwrap();
    assert_eq!(content.trim(), "[]");
}

#[test]
fn shop_reads_orders_file_from_env() {
    let dir = TempDir::new().unwrap();
    let orders = dir.path().join("env-orders.json");

    vx().arg("shop")
        .env("VX_ORDERS_FILE", &orders)
        .write_stdin("add hoodie-002 size m\ncheckout\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Order placed."));

    assert!(orders.exists());
}

#[test]
fn last_order_without_orders() {
    let dir = TempDir::new().unwrap();
    vx().args(["last-order", "--orders", dir.path().join("none.json").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No orders yet"));
}

#[test]
fn last_order_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let orders = dir.path().join("orders.json");
    fs::write(&orders, "not json").unwrap();

    vx().args(["last-order", "--orders", orders.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// prompt
// ---------------------------------------------------------------------------

#[test]
fn prompt_for_each_agent() {
    vx().args(["prompt", "jarvis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jarvis"));
    vx().args(["prompt", "aetherwyn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aetherwyn"));
    vx().args(["prompt", "Gita"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inner Realm"));
}

#[test]
fn prompt_unknown_agent() {
    vx().args(["prompt", "tutor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown agent"));
}
