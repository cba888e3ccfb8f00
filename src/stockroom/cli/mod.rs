//! # CLI Behavior
//!
//! This is **one possible UI client** for stockroom, not the application
//! itself. It stands in for the product, stock and supplier forms: each record
//! kind gets the same four actions.
//!
//! ```text
//! stockroom product add 1 Bolt S1 "steel, zinc plated"
//! stockroom product list
//! stockroom product search steel
//! stockroom stock --file old-stock.csv list
//! ```
//!
//! Store files live in the current directory unless `-g` selects the per-user
//! data directory. `stockroom.json` in the same place can rename them.

mod commands;
mod print;
mod setup;

pub use commands::run;
