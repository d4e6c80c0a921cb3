//! # Commands Module
//!
//! The menu loop and the handlers behind each menu choice.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (Command, Session loop)
//! ├── product.rs  ◄─── List products, show total
//! └── order.rs    ◄─── Make an order
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  print menu ──► read line ──► Command::from_choice("3")                 │
//! │                                     │                                   │
//! │          ┌──────────────┬───────────┼──────────────┬──────────────┐    │
//! │          ▼              ▼           ▼              ▼              ▼    │
//! │    ListProducts     ShowTotal   MakeOrder        Quit       unknown    │
//! │    product.rs       product.rs  order.rs        return     "Error..."  │
//! │          │              │           │                          │       │
//! │          └──────────────┴───────────┴──────────────────────────┘       │
//! │                              back to menu                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod order;
pub mod product;

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::menu::{Menu, MenuLayout};
use crate::state::{AppConfig, StoreState};

// =============================================================================
// Command
// =============================================================================

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListProducts,
    ShowTotal,
    MakeOrder,
    Quit,
}

impl Command {
    /// Every command, in menu order. The menu number is the position + 1.
    pub const ALL: [Command; 4] = [
        Command::ListProducts,
        Command::ShowTotal,
        Command::MakeOrder,
        Command::Quit,
    ];

    /// Text shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            Command::ListProducts => "List all products in store",
            Command::ShowTotal => "show total amount in store",
            Command::MakeOrder => "Make an order",
            Command::Quit => "Quit",
        }
    }

    /// Parses a menu number ("1".."4"). Surrounding whitespace is ignored.
    pub fn from_choice(choice: &str) -> Option<Command> {
        match choice.trim() {
            "1" => Some(Command::ListProducts),
            "2" => Some(Command::ShowTotal),
            "3" => Some(Command::MakeOrder),
            "4" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Builds the main menu from the command list and configuration.
pub fn store_menu(config: &AppConfig) -> Menu {
    Menu::new(
        MenuLayout::new(Command::ALL.iter().map(|c| c.label()))
            .header(config.store_name.as_str())
            .separator(config.separator.as_str())
            .footer(config.prompt.as_str()),
    )
}

// =============================================================================
// Session
// =============================================================================

/// One interactive run of the menu over a reader and a writer.
pub struct Session<'a, R, W> {
    store: &'a StoreState,
    menu: &'a Menu,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a StoreState, menu: &'a Menu, input: R, output: W) -> Self {
        Session {
            store,
            menu,
            input,
            output,
        }
    }

    /// Runs until Quit is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let menu = self.menu.to_string();
        loop {
            let Some(choice) = self.prompt(&menu)? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            match Command::from_choice(&choice) {
                Some(Command::Quit) => {
                    debug!("Quit chosen");
                    return Ok(());
                }
                Some(command) => {
                    debug!(?command, "Dispatching command");
                    self.dispatch(command)?;
                }
                None => writeln!(self.output, "Error with your choice! Try again!")?,
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::ListProducts => self.list_products(),
            Command::ShowTotal => self.show_total(),
            Command::MakeOrder => self.make_order(),
            Command::Quit => Ok(()),
        }
    }

    /// Writes `text`, then reads one line without its line ending.
    /// Returns `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so such a line reads as an
    /// unrecognized answer instead of an I/O error.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
