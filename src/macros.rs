// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Parse a CSS selector once and keep it for the life of the process.
/// Only for literal selectors known to be valid.
#[macro_export]
macro_rules! selector {
    ($sel:literal) => {{
        static SELECTOR: ::std::sync::OnceLock<::scraper::Selector> = ::std::sync::OnceLock::new();
        SELECTOR.get_or_init(|| {
            ::scraper::Selector::parse($sel).expect(concat!("invalid selector: ", $sel))
        })
    }};
}
