/*
 * config.rs
 *
 * mwcompat-cli - Read-only access to MediaWiki compatibility data
 * Copyright (C) 2020 Ammon Smith
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use crate::{Error, Result};
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use structopt::StructOpt;

use crate::command::Command;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mwcompat",
    about = "Read-only queries against a MediaWiki database"
)]
struct Options {
    /// TOML file to read settings from. Flags take precedence over it.
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Path of the wiki's SQLite database.
    #[structopt(short, long)]
    database_url: Option<String>,

    /// Base URL for page links, such as "https://wiki.example.org/".
    #[structopt(short, long)]
    wiki_url: Option<String>,

    /// One of "off", "error", "warn", "info", "debug", or "trace".
    #[structopt(short, long)]
    log_level: Option<String>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct ConfigFile {
    database_url: Option<String>,
    wiki_url: Option<String>,
    log_level: Option<String>,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let file = toml::from_str(&contents)?;

        Ok(file)
    }
}

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    pub wiki_url: String,
    pub log_level: LevelFilter,
    pub command: Command,
}

impl Config {
    pub fn parse_args() -> Result<Self> {
        let options = Options::from_args();
        let file = match options.config {
            Some(ref path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        Self::merge(options, file)
    }

    fn merge(options: Options, file: ConfigFile) -> Result<Self> {
        let database_url = options
            .database_url
            .or(file.database_url)
            .ok_or(Error::MissingDatabaseUrl)?;

        let wiki_url = options.wiki_url.or(file.wiki_url).unwrap_or_default();

        let log_level = match options.log_level.or(file.log_level) {
            Some(level) => LevelFilter::from_str(&level).map_err(|_| Error::LogLevel(level))?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Config {
            database_url,
            wiki_url,
            log_level,
            command: options.command,
        })
    }
}
