//! PayNow SIMCard Wallet - localization command line
//!
//! Inspect the language catalogs and manage the persisted display language.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use paynow_wallet_lib::core::Config;
use paynow_wallet_lib::i18n::{Catalog, ConfigPreferenceStore, I18n, LogEnvironment};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paynow-wallet", version, about = "PayNow SIMCard Wallet localization tools")]
struct Cli {
    /// Config file holding the language preference
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List supported languages
    Languages,
    /// Show the active language
    Current,
    /// Change and persist the active language
    Set { code: String },
    /// Translate one or more keys in the active language
    T {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print every string available in the active language
    Dump,
    /// Report site catalog entries missing a language
    Check,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path().context("Failed to locate config directory")?,
    };
    log::debug!("Using config {}", config_path.display());

    let mut i18n = I18n::new(ConfigPreferenceStore::new(&config_path), LogEnvironment::new());

    match cli.command {
        Command::Languages => {
            for lang in i18n.available_languages() {
                let marker = if lang.code == i18n.current_language() { "*" } else { " " };
                let direction = if lang.is_right_to_left { "rtl" } else { "ltr" };
                println!("{} {}  {:<8} {:<10} {}", marker, lang.code, lang.display_name, lang.native_name, direction);
            }
        }
        Command::Current => {
            let lang = i18n.current_descriptor();
            println!("{} ({}, {})", lang.code, lang.native_name, i18n.direction());
        }
        Command::Set { code } => {
            if !i18n.set_language(&code) {
                let codes: Vec<_> = i18n.available_languages().iter().map(|l| l.code).collect();
                bail!("Unsupported language '{}' (expected one of: {})", code, codes.join(", "));
            }
            println!("{}: {}", i18n.get("currentLanguage"), i18n.current_descriptor().native_name);
        }
        Command::T { keys } => {
            for key in keys {
                println!("{}", i18n.get(&key));
            }
        }
        Command::Dump => {
            let all = i18n.get_all();
            let mut keys: Vec<_> = all.keys().collect();
            keys.sort();
            for key in keys {
                println!("{} = {}", key, all[key]);
            }
        }
        Command::Check => {
            let missing = Catalog::new().missing_values();
            if missing.is_empty() {
                println!("Site catalog complete");
            } else {
                for (key, code) in &missing {
                    println!("missing: {} [{}]", key, code);
                }
                bail!("{} translation(s) missing", missing.len());
            }
        }
    }

    Ok(())
}
