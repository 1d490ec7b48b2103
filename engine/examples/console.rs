//! Line-oriented presentation shell.
//!
//! Drives the game controller from stdin the way a windowed shell would
//! from buttons and modal dialogs: collect raw input, hand it to the core,
//! print the narrative and the updated balance.
//!
//! Run with `cargo run --example console`; the per-round controller logs
//! are emitted at debug level.

use anyhow::Result;
use parlor_engine::{BalanceStore, GameController};
use std::io::{self, BufRead, Write};

fn prompt(line: &mut String, text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    line.clear();
    io::stdin().lock().read_line(line)?;
    Ok(line.trim().to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut controller = GameController::new(BalanceStore::default());
    let mut line = String::new();

    println!("Current balance: ${}", controller.balance());
    loop {
        let choice = prompt(&mut line, "[k]eno, [b]lackjack, or [x] to exit: ")?;
        match choice.as_str() {
            "k" => {
                let selection =
                    prompt(&mut line, "Choose up to 10 numbers (1-80), comma-separated: ")?;
                let bet = prompt(&mut line, "Enter bet amount: ")?;
                let report = controller.play_keno(&selection, &bet);
                println!("{}", report.narrative);
            }
            "b" => {
                let bet = prompt(&mut line, "Enter bet amount: ")?;
                match controller.deal_blackjack(&bet) {
                    Ok(round) => {
                        print!("{}", round.player_view());
                        let decision = prompt(&mut line, "Hit or stand? (h/s): ")?;
                        let report = controller.finish_blackjack(round, &decision);
                        println!("{}", report.narrative);
                    }
                    Err(report) => println!("{}", report.narrative),
                }
            }
            "x" => break,
            _ => continue,
        }
        println!("Current balance: ${}", controller.balance());
    }

    // An unwritable balance file should not stop the exit.
    if let Err(err) = controller.save() {
        eprintln!("could not save balance: {}", err);
    }
    println!(
        "Thanks for playing! Your final balance is: ${}",
        controller.balance()
    );
    Ok(())
}
