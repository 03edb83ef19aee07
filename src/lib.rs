// src/lib.rs
//! Client for The Perfect Gift Card portal: log in with a card number and
//! RSA-encrypted PIN, read back the card summary and statement.
//!
//! ```no_run
//! let client = perfect_giftcard::Client::new()?;
//! let lookup = client.get_card("5021000000000000", "1234")?;
//! println!("{}", lookup.card.available_balance);
//! # Ok::<(), perfect_giftcard::Error>(())
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod card;
pub mod client;
pub mod crypto;
pub mod csv;
pub mod error;
pub mod file;
pub mod form;

pub use card::{Card, Transaction};
pub use client::{Client, Lookup};
pub use crate::core::{Response, Transport};
pub use crypto::PublicKey;
pub use error::{Error, KeyError};
pub use specs::{Page, PageParser};
