// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use std::time::Duration;

use envconfig::Envconfig;

use super::consts::*;

/// Everything a `Client` needs to reach the site.
/// `Default` is the live site; tests and the CLI override pieces of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    pub base_url: String,
    pub modulus: String,  // hex
    pub exponent: String, // hex
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            modulus: s!(MODULUS),
            exponent: s!(EXPONENT),
            user_agent: s!(USER_AGENT),
            timeout: None,
        }
    }
}

/// Environment overrides, all optional.
#[derive(Envconfig, Clone, Debug)]
pub struct EnvOverrides {
    #[envconfig(from = "GIFTCARD_BASE_URL")]
    pub base_url: Option<String>,

    #[envconfig(from = "GIFTCARD_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[envconfig(from = "GIFTCARD_USER_AGENT")]
    pub user_agent: Option<String>,
}

impl ClientOptions {
    /// Defaults with `GIFTCARD_*` environment variables applied.
    pub fn from_env() -> Result<Self, envconfig::Error> {
        let env = EnvOverrides::init_from_env()?;
        let mut opts = Self::default();
        opts.apply(env);
        Ok(opts)
    }

    pub fn apply(&mut self, env: EnvOverrides) {
        if let Some(url) = env.base_url {
            self.base_url = url;
        }
        if let Some(secs) = env.timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(ua) = env.user_agent {
            self.user_agent = ua;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Summary => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }

    /// Field separator; only the tabular formats have one.
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub include_headers: bool,
    out_path: Option<OutputPath>, // None → stdout
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Summary,
            include_headers: false,
            out_path: None,
        }
    }
}

impl OutputOptions {
    /// Target file, or `None` for stdout.
    pub fn out_path(&self) -> Option<PathBuf> {
        let out = self.out_path.as_ref()?;
        let mut path = out.dir.clone();
        let stem = out.file_stem.to_string_lossy();
        path.push(join!(stem, ".", self.format.ext()));
        Some(path)
    }

    /// Parse user text into dir + stem. Ignores the extension; format controls it.
    /// A bare directory (trailing separator) gets the default file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = None;
            return;
        }

        let mut out = OutputPath::default();
        if s.ends_with('/') || s.ends_with(std::path::MAIN_SEPARATOR) {
            out.dir = PathBuf::from(s);
        } else {
            let p = Path::new(s);
            if let Some(parent) = p.parent() {
                out.dir = parent.to_path_buf();
            }
            if let Some(stem) = p.file_stem() {
                out.file_stem = stem.to_os_string();
            }
        }
        self.out_path = Some(out);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
