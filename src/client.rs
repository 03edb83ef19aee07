// src/client.rs
use crate::{
    card::Card,
    config::options::ClientOptions,
    core::{sanitize::mask_card_no, HttpTransport, Response, Transport},
    crypto::{self, PublicKey},
    error::Error,
    form::FormTemplate,
    specs::{CardPage, Page, PageParser},
};

/// A successful lookup: the card, plus the exchange it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lookup {
    pub card: Card,
    pub response: Response,
}

/// Talks to the gift-card portal. One `get_card` = one login POST.
///
/// Holds no per-call state; the form template is copied for every request.
pub struct Client<T = HttpTransport, P = CardPage> {
    base_url: String,
    public_key: PublicKey,
    form: FormTemplate,
    transport: T,
    parser: P,
}

impl Client {
    /// Client for the live site with the compiled-in key.
    pub fn new() -> Result<Self, Error> {
        Self::with_options(ClientOptions::default())
    }

    /// Like [`Client::new`], with `GIFTCARD_*` environment overrides applied.
    pub fn from_env() -> Result<Self, Error> {
        Self::with_options(ClientOptions::from_env()?)
    }

    pub fn with_options(opts: ClientOptions) -> Result<Self, Error> {
        let public_key = PublicKey::from_hex(&opts.modulus, &opts.exponent)?;
        let transport = HttpTransport::new(&opts.user_agent, opts.timeout)?;
        logd!("client ready for {}", opts.base_url);
        Ok(Client::with_parts(opts.base_url, public_key, transport, CardPage))
    }
}

impl<T: Transport, P: PageParser> Client<T, P> {
    pub fn with_parts(base_url: impl Into<String>, public_key: PublicKey, transport: T, parser: P) -> Self {
        Self {
            base_url: base_url.into(),
            public_key,
            form: FormTemplate::default(),
            transport,
            parser,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_public_key(&mut self, key: PublicKey) {
        self.public_key = key;
    }

    pub fn form(&self) -> &FormTemplate {
        &self.form
    }

    /// Log in with `card_no` / `pin` and read the card page.
    ///
    /// Page content decides the outcome before the HTTP status does: the
    /// login-error cell means [`Error::Authentication`] (status forced to 401),
    /// the site error page means [`Error::Application`] (forced to 500).
    pub fn get_card(&self, card_no: &str, pin: &str) -> Result<Lookup, Error> {
        let masked = mask_card_no(card_no);

        let encrypted_pin = crypto::encrypt_pin(&self.public_key, pin).inspect_err(|e| {
            loge!("card {masked}: PIN encryption failed: {e}");
        })?;

        let body = self.form.login(card_no, &encrypted_pin);
        let response = self.transport.post_form(&self.base_url, &body).inspect_err(|e| {
            loge!("card {masked}: request failed: {e}");
        })?;

        let page = self.parser.parse(&response.text());
        match page {
            Page::AuthError(message) => {
                logf!("card {masked}: rejected ({message})");
                Err(Error::Authentication { message, response: response.with_status(401) })
            }
            Page::AppError => {
                loge!("card {masked}: site error page (HTTP {})", response.status);
                Err(Error::Application { response: response.with_status(500) })
            }
            Page::Card(_) if !response.is_success() => {
                loge!("card {masked}: HTTP {}", response.status);
                Err(Error::Status { response })
            }
            Page::Card(card) => {
                logf!("card {masked}: {} transactions", card.transactions.len());
                Ok(Lookup { card, response })
            }
        }
    }
}
