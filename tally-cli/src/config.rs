use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use tally_core::{Category, DEFAULT_CURRENCY_SYMBOL};
use tally_finance::PipelineOptions;
use tally_ingest::{DateOrder, Field};

use crate::state::{ensure_tally_home, tally_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplaySection,
    pub dates: DatesSection,
    pub columns: ColumnsSection,
    /// Extra keywords per category display name, e.g. `"Rent" = ["nobroker"]`
    pub keywords: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub currency_symbol: String,
    /// Cap on printed transaction rows (all rows when unset)
    pub transaction_limit: Option<usize>,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            transaction_limit: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatesSection {
    /// Read `05/03/2024` as March 5th instead of May 3rd
    pub day_first: bool,
}

/// Extra column aliases, tried after the built-in names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsSection {
    pub narration: Vec<String>,
    pub date: Vec<String>,
    pub debit: Vec<String>,
    pub credit: Vec<String>,
}

impl Config {
    /// Pipeline settings with this config's aliases and keywords merged
    /// into the built-in tables.
    pub fn pipeline_options(&self) -> Result<PipelineOptions> {
        let mut options = PipelineOptions {
            date_order: DateOrder::from_day_first(self.dates.day_first),
            ..PipelineOptions::default()
        };

        options.aliases.extend(Field::Narration, self.columns.narration.iter().cloned());
        options.aliases.extend(Field::Date, self.columns.date.iter().cloned());
        options.aliases.extend(Field::Debit, self.columns.debit.iter().cloned());
        options.aliases.extend(Field::Credit, self.columns.credit.iter().cloned());

        for (name, keywords) in &self.keywords {
            let category: Category = name.parse().context("[keywords] in config")?;
            options.rules.add_keywords(category, keywords);
        }

        Ok(options)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(tally_home()?.join("config.toml"))
}

/// Load `path`, or `~/.tally/config.toml` when no path is given. Only the
/// default location may be absent, in which case defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = config_path()?;
            if !p.exists() {
                debug!(path = %p.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            p
        }
    };
    debug!(path = %p.display(), "loading config");
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: Option<&Path>) -> Result<()> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => ensure_tally_home()?.join("config.toml"),
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
