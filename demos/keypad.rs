//! Keypad Host
//!
//! This example plays the role of the host application: it reads key tokens
//! from stdin, feeds them to the engine, and prints the two display lines
//! after every event.
//!
//! Key concepts:
//! - The host owns the only `Calculator`
//! - Every event is followed by exactly one render
//! - Logging is opt-in through `RUST_LOG`
//!
//! Run with: echo "3 + 4 + 5 =" | cargo run --example keypad
//! Optional TOML config: cargo run --example keypad -- tally.toml
//!
//! Tokens are whitespace separated. `C` presses the Clear button; every
//! other token is dispatched as a key (`Enter`, `Backspace`, digits,
//! operators, `.`, `=`).

use std::io::{self, BufRead};
use tally::{Button, CalculatorBuilder, CalculatorConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => CalculatorConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => CalculatorConfig::default(),
    };
    let mut calc = CalculatorBuilder::new().config(config).build()?;

    for line in io::stdin().lock().lines() {
        for token in line?.split_whitespace() {
            if token == "C" {
                calc.press(Button::Clear);
            } else {
                calc.dispatch_key(token);
            }

            let display = calc.render_display();
            println!("[{token}]");
            println!("{display}");
        }
    }

    Ok(())
}
