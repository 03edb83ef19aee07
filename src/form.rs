// src/form.rs
use crate::config::consts::*;

/// The login form's fixed fields (view-state tokens, random number, button).
///
/// Never mutated after construction; each request gets its own copy via
/// [`FormTemplate::login`], so one `Client` can serve many callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormTemplate {
    fields: Vec<(String, String)>,
}

impl Default for FormTemplate {
    fn default() -> Self {
        Self::new([
            (FIELD_VIEWSTATE, VIEWSTATE),
            (FIELD_VIEWSTATE_GENERATOR, VIEWSTATE_GENERATOR),
            (FIELD_EVENT_VALIDATION, EVENT_VALIDATION),
            (FIELD_LOGIN_BUTTON, LOGIN_BUTTON),
            (FIELD_RANDOM_NO, RANDOM_NO),
        ])
    }
}

impl FormTemplate {
    pub fn new<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            fields: fields.into_iter().map(|(k, v)| (s!(k), s!(v))).collect(),
        }
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Fresh body for one login: the template plus card number and encrypted PIN.
    pub fn login(&self, card_no: &str, encrypted_pin_hex: &str) -> Vec<(String, String)> {
        let mut body = self.fields.clone();
        set(&mut body, FIELD_CARD_NO, card_no);
        set(&mut body, FIELD_ENCRYPTED_PIN, encrypted_pin_hex);
        body
    }
}

fn set(body: &mut Vec<(String, String)>, name: &str, value: &str) {
    match body.iter_mut().find(|(k, _)| k == name) {
        Some((_, v)) => *v = s!(value),
        None => body.push((s!(name), s!(value))),
    }
}
