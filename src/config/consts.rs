// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://giftcards.indue.com.au/theperfectgiftcard/";
pub const USER_AGENT: &str = concat!("perfect_giftcard/", env!("CARGO_PKG_VERSION"));

// Login key (hex). Published in the login page script.
pub const MODULUS: &str = "D4229AD35AE3FE60E192948079DFEE523E018CE5931E6FF68A70C20A2A91D80FF09604DE9F4100C5B91A8433712428B35F3CC6C4CA814715BE470D811E73BE497788CA38494CADAF4825E78A508FAB023F65FC4722306FE7ECF1AC41C19AE5C4EFD3ACFE99EE08B60794EC19D57EA0E3556EE53F8DAECAB67DB47AFBC0F856AD";
pub const EXPONENT: &str = "010001";

// Sent in the clear and appended to the PIN before encryption.
pub const RANDOM_NO: &str = "7464663221746466322174646632217464663221";

// Login form
pub const FIELD_VIEWSTATE: &str = "__VIEWSTATE";
pub const FIELD_VIEWSTATE_GENERATOR: &str = "__VIEWSTATEGENERATOR";
pub const FIELD_EVENT_VALIDATION: &str = "__EVENTVALIDATION";
pub const FIELD_LOGIN_BUTTON: &str = "cmdLogin";
pub const FIELD_RANDOM_NO: &str = "hdnrandomnumber";
pub const FIELD_CARD_NO: &str = "txtCardNumber";
pub const FIELD_ENCRYPTED_PIN: &str = "hdnrequest";

pub const VIEWSTATE: &str = "/wEPDwUJODY3MDYzNzgzD2QWAgIDD2QWBmYPFgIeB1Zpc2libGVoZAIDDw9kFgIeB29uY2xpY2sFFXJldHVybiBnZXRwYXNzd29yZCgpO2QCBg8WAh8AaGRkXcXstETbLhPK3PqD3TU7Io+Xaw4=";
pub const VIEWSTATE_GENERATOR: &str = "5898F960";
pub const EVENT_VALIDATION: &str = "/wEWBgKuoL7TCwLi0uqnCgK1qbSRCwKFoZPNAwLQvbH7BAL8yZzMCZCDAp2k+4wbYm+6XCicWxiA53iU";
// Byte-for-byte what the site's own form posts.
pub const LOGIN_BUTTON: &str = "Â Log+in ";

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "transactions";
