//! Command parsing for shop turns.
//!
//! Each command corresponds to one of the shop assistant's tools.

use crate::filter::ProductFilter;

/// A parsed shop turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    /// List matching products.
    Browse(ProductFilter),
    /// Put a product in the cart.
    Add {
        /// Spoken product reference.
        reference: String,
        /// Units, at least one.
        quantity: u32,
        /// Requested size.
        size: Option<String>,
    },
    /// Read back the cart.
    ShowCart,
    /// Empty the cart.
    ClearCart,
    /// Check out.
    PlaceOrder,
    /// Read back the most recent stored order.
    LastOrder,
    /// Show help.
    Help,
    /// Leave the shop.
    Quit,
}

const SHOW_CART_PHRASES: &[&str] = &[
    "cart",
    "show cart",
    "show my cart",
    "my cart",
    "view cart",
    "what's in my cart",
    "whats in my cart",
];
const CLEAR_CART_PHRASES: &[&str] = &[
    "clear cart",
    "clear my cart",
    "empty cart",
    "empty my cart",
    "clear the cart",
];
const PLACE_ORDER_PHRASES: &[&str] = &[
    "checkout",
    "check out",
    "place order",
    "place my order",
    "place the order",
    "order",
    "confirm",
    "confirm order",
];
const LAST_ORDER_PHRASES: &[&str] = &[
    "last order",
    "my last order",
    "recent order",
    "my recent order",
    "show last order",
    "what did i order",
];
const HELP_PHRASES: &[&str] = &["help", "h", "?", "commands"];
const QUIT_PHRASES: &[&str] = &["quit", "q", "exit", "bye", "goodbye"];

const ADD_PREFIXES: &[&str] = &[
    "add ",
    "i want ",
    "i'd like ",
    "i would like ",
    "buy ",
    "get me ",
    "give me ",
];
const BROWSE_PREFIXES: &[&str] = &[
    "show me ",
    "show ",
    "browse ",
    "list ",
    "search for ",
    "search ",
    "find ",
    "do you have ",
    "catalog ",
];
const BROWSE_WORDS: &[&str] = &["catalog", "browse", "show catalog", "list", "products"];
const BROWSE_FILLER: &[&str] = &[
    "me", "the", "some", "all", "any", "your", "catalog", "items", "products", "things", "stuff",
    "in", "for", "of", "a", "an", "please",
];

/// Parse a customer utterance into a command.
pub fn parse_command(input: &str) -> ShopCommand {
    let lower = input
        .trim()
        .trim_end_matches(['.', '!', '?'])
        .trim()
        .to_lowercase();
    let is = |phrases: &[&str]| phrases.contains(&lower.as_str());

    if input.trim() == "?" || is(HELP_PHRASES) {
        return ShopCommand::Help;
    }
    if is(QUIT_PHRASES) {
        return ShopCommand::Quit;
    }
    if is(SHOW_CART_PHRASES) {
        return ShopCommand::ShowCart;
    }
    if is(CLEAR_CART_PHRASES) {
        return ShopCommand::ClearCart;
    }
    if is(PLACE_ORDER_PHRASES) {
        return ShopCommand::PlaceOrder;
    }
    if is(LAST_ORDER_PHRASES) {
        return ShopCommand::LastOrder;
    }
    if is(BROWSE_WORDS) {
        return ShopCommand::Browse(ProductFilter::new());
    }

    if let Some(rest) = strip_any(&lower, ADD_PREFIXES) {
        return parse_add(rest);
    }
    if let Some(rest) = strip_any(&lower, BROWSE_PREFIXES) {
        return ShopCommand::Browse(parse_browse(rest));
    }

    // A bare reference ("mug-001", "the second phone") is an add.
    parse_add(&lower)
}

fn strip_any<'a>(text: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|p| text.strip_prefix(p))
}

fn parse_add(text: &str) -> ShopCommand {
    let mut quantity = None;
    let mut size = None;
    let mut reference = Vec::new();

    let words: Vec<&str> = text
        .split_whitespace()
        .map(|w| w.trim_matches(','))
        .filter(|w| !w.is_empty())
        .collect();

    let mut i = 0;
    while i < words.len() {
        let word = words[i];
        let next = words.get(i + 1).copied();
        match (word, next) {
            ("quantity" | "qty" | "x", Some(n)) if n.parse::<u32>().is_ok() => {
                quantity = n.parse().ok();
                i += 2;
                continue;
            }
            ("size", Some(s)) => {
                size = Some(s.to_uppercase());
                if reference.last() == Some(&"in") {
                    reference.pop();
                }
                i += 2;
                continue;
            }
            ("to", Some("my" | "the" | "cart")) => {
                // skip "to my cart" / "to cart"
                let cart = words[i + 1..].iter().take(2).position(|w| *w == "cart");
                i += cart.map_or(1, |p| p + 2);
                continue;
            }
            ("please", _) => {}
            _ => reference.push(word),
        }
        i += 1;
    }

    // "2 black hoodies": a leading count
    if quantity.is_none()
        && reference.len() > 1
        && let Ok(n) = reference[0].parse::<u32>()
    {
        quantity = Some(n);
        reference.remove(0);
    }

    ShopCommand::Add {
        reference: reference.join(" "),
        quantity: quantity.unwrap_or(1).max(1),
        size,
    }
}

fn parse_browse(text: &str) -> ProductFilter {
    let mut filter = ProductFilter::new();
    let mut query = Vec::new();
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|w| w.trim_matches(','))
        .filter(|w| !w.is_empty())
        .collect();

    let mut i = 0;
    while i < words.len() {
        let word = words[i];
        let price = words.get(i + 1).and_then(|n| parse_price(n));
        match (word, price) {
            ("under" | "below" | "max" | "upto", Some(p)) => {
                filter.max_price = Some(p);
                i += 2;
                continue;
            }
            ("over" | "above" | "min" | "from", Some(p)) => {
                filter.min_price = Some(p);
                i += 2;
                continue;
            }
            ("between", Some(p)) => {
                filter.min_price = Some(p);
                if words.get(i + 2) == Some(&"and")
                    && let Some(hi) = words.get(i + 3).and_then(|n| parse_price(n))
                {
                    filter.max_price = Some(hi);
                    i += 4;
                } else {
                    i += 2;
                }
                continue;
            }
            ("to" | "and", Some(p)) if filter.min_price.is_some() && filter.max_price.is_none() => {
                filter.max_price = Some(p);
                i += 2;
                continue;
            }
            _ => {}
        }
        if word == "size"
            && let Some(s) = words.get(i + 1)
        {
            filter.size = Some(s.to_uppercase());
            i += 2;
            continue;
        }
        if !BROWSE_FILLER.contains(&word) {
            query.push(word);
        }
        i += 1;
    }

    if !query.is_empty() {
        filter.query = Some(query.join(" "));
    }
    filter
}

fn parse_price(word: &str) -> Option<u64> {
    let digits = word
        .trim_start_matches(['₹', '$'])
        .trim_start_matches("rs")
        .trim_end_matches("inr")
        .replace(',', "");
    if let Some(thousands) = digits.strip_suffix('k') {
        return thousands.parse::<u64>().ok().and_then(|n| n.checked_mul(1000));
    }
    digits.parse().ok()
}
