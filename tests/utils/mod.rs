// tests/utils/mod.rs
#![allow(dead_code)]

pub mod test_server;

use std::cell::RefCell;

use perfect_giftcard::{Error, Response, Transport};
use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};

pub const CARD_NO: &str = "5021234567890";
pub const PIN: &str = "0000";

pub fn fixture(name: &str) -> Vec<u8> {
    let path = format!("{}/tests/fixtures/{name}.html", env!("CARGO_MANIFEST_DIR"));
    std::fs::read(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

/// Fresh key pair; the public half goes into the client under test.
pub fn key_pair() -> (RsaPrivateKey, perfect_giftcard::PublicKey) {
    let private = RsaPrivateKey::new(&mut OsRng, 1024).unwrap();
    let public = perfect_giftcard::PublicKey::from(&RsaPublicKey::from(&private));
    (private, public)
}

/// Decode an `application/x-www-form-urlencoded` body.
pub fn parse_form(body: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(body.as_bytes()).into_owned().collect()
}

pub fn form_get<'a>(form: &'a [(String, String)], name: &str) -> Option<&'a str> {
    form.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
}

/// Records every form it is handed and answers with a fixed page.
pub struct Recorder {
    pub status: u16,
    pub body: Vec<u8>,
    pub calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl Recorder {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body, calls: RefCell::new(Vec::new()) }
    }
}

impl Transport for Recorder {
    fn post_form(&self, url: &str, form: &[(String, String)]) -> Result<Response, Error> {
        self.calls.borrow_mut().push((url.to_string(), form.to_vec()));
        Ok(Response::new(self.status, self.body.clone()))
    }
}
