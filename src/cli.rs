// src/cli.rs
use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::client::Client;
use crate::config::options::{ClientOptions, OutputFormat, OutputOptions};
use crate::file::export_card;

/// Look up a Perfect Gift Card balance and statement.
#[derive(Parser, Debug)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Card number as printed on the card
    #[arg(short, long)]
    pub card: String,

    /// Card PIN
    #[arg(short, long, env = "GIFTCARD_PIN", hide_env_values = true)]
    pub pin: String,

    #[arg(short, long, value_enum, default_value_t = Format::Summary)]
    pub format: Format,

    /// Emit a header row (csv/tsv only)
    #[arg(long)]
    pub include_headers: bool,

    /// Write to this file instead of stdout; the format picks the extension
    #[arg(short, long)]
    pub out: Option<String>,

    /// Override the login endpoint
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Mirror log output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Summary,
    Csv,
    Tsv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Summary => OutputFormat::Summary,
            Format::Csv => OutputFormat::Csv,
            Format::Tsv => OutputFormat::Tsv,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Args {
    /// Environment first, then flags on top.
    pub fn client_options(&self) -> Result<ClientOptions> {
        let opts = ClientOptions::from_env().wrap_err("reading GIFTCARD_* environment")?;
        Ok(self.apply_flags(opts))
    }

    /// Flags win over whatever `opts` already holds.
    pub fn apply_flags(&self, mut opts: ClientOptions) -> ClientOptions {
        if let Some(url) = &self.base_url {
            opts.base_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            opts.timeout = Some(std::time::Duration::from_secs(secs));
        }
        opts
    }

    pub fn output_options(&self) -> OutputOptions {
        let mut out = OutputOptions::default();
        out.format = self.format.into();
        out.include_headers = self.include_headers;
        if let Some(path) = &self.out {
            out.set_path(path);
        }
        out
    }
}

pub fn run(args: Args) -> Result<()> {
    if let Err(e) = crate::log::init(args.verbose) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let client = Client::with_options(args.client_options()?)?;
    let lookup = client.get_card(&args.card, &args.pin)?;

    if let Some(path) = export_card(&lookup.card, &args.output_options())
        .map_err(|e| color_eyre::eyre::eyre!("{e}"))?
    {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let args = Args::parse_from([
            "cli", "--card", "5021", "--pin", "0000",
            "--format", "tsv", "--include-headers", "--out", "out/mine.txt",
            "--base-url", "http://localhost:9/", "--timeout", "5",
        ]);
        let out = args.output_options();
        assert_eq!(out.format, OutputFormat::Tsv);
        assert!(out.include_headers);
        assert!(out.out_path().unwrap().to_string_lossy().ends_with("mine.tsv"));

        let opts = args.apply_flags(ClientOptions::default());
        assert_eq!(opts.base_url, "http://localhost:9/");
        assert_eq!(opts.timeout, Some(std::time::Duration::from_secs(5)));
    }

    #[test]
    fn absent_flags_keep_options() {
        let args = Args::parse_from(["cli", "-c", "5021", "-p", "0000"]);
        let base = ClientOptions { base_url: s!("http://env/"), ..ClientOptions::default() };
        let opts = args.apply_flags(base);
        assert_eq!(opts.base_url, "http://env/");
        assert_eq!(opts.timeout, None);
    }

    #[test]
    fn default_format_is_summary_to_stdout() {
        let args = Args::parse_from(["cli", "-c", "5021", "-p", "0000"]);
        let out = args.output_options();
        assert_eq!(out.format, OutputFormat::Summary);
        assert_eq!(out.out_path(), None);
    }
}
