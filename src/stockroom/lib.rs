//! # Stockroom Architecture
//!
//! Stockroom keeps product, stock and supplier records in flat comma-separated
//! files. It is a **library with a CLI client**: the store, validation and query
//! logic know nothing about terminals, so a desktop or web front-end could sit
//! on the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, one store per record kind     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Form validation (identifier required, field count)       │
//! │  - Result shaping ("empty file", "no matches" messages)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait: ensure, append, read_all, search      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Format
//!
//! One record per line, fields joined with `,`. Commas inside a field are
//! stored as `;` and line breaks as spaces, so every line of a store splits
//! back into exactly the field count of its [`model::RecordKind`].
//!
//! ## Errors
//!
//! The store reports one kind of failure, [`error::StockroomError::Io`], with
//! the file path and the underlying message. Validation problems are raised by
//! the command layer before a store is touched.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Validation and result shaping per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Record kinds, records and the line encoding
//! - [`config`]: `stockroom.json` configuration
//! - [`context`]: Builds an API for a working directory and scope
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod store;
