// src/specs/mod.rs
//! # Page specs
//!
//! Knows *where the ground truth lives in the HTML* for the pages the login
//! POST can come back with, and nothing else. No HTTP, no logging spam, no
//! formatting.
//!
//! The login POST answers with one of three pages:
//! - the **card page**: summary labels plus the statement table;
//! - the **login page again**, with an error cell explaining the rejection;
//! - the site's **generic error page**.
//!
//! Classification precedence is fixed: authentication error, then application
//! error, then card. A page that somehow carries both error markers is an
//! authentication failure.
//!
//! ## Testing notes
//! Specs are pure functions of the HTML and are tested offline against the
//! fixtures under `tests/fixtures/`.
pub mod card;

use crate::card::Card;

/// What a response page turned out to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Card(Card),
    /// Login rejected; the site's message.
    AuthError(String),
    /// Generic "something went wrong" page.
    AppError,
}

/// Turns a response body into a [`Page`]. The seam for swapping in canned
/// pages or a different layout.
pub trait PageParser {
    fn parse(&self, html: &str) -> Page;
}

pub use card::CardPage;
