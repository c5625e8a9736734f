/*
 * main.rs
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

//! Command-line queries against a MediaWiki database.

extern crate color_backtrace;

#[macro_use]
extern crate log;
extern crate mwcompat;
extern crate pretty_env_logger;

#[macro_use]
extern crate serde;
extern crate structopt;

#[macro_use]
extern crate thiserror;
extern crate toml;

mod command;
mod config;
mod error;

use self::config::Config;
use self::error::Error;
use mwcompat::{Config as ServerConfig, Server};
use std::io;
use std::process;

pub type StdResult<T, E> = std::result::Result<T, E>;
pub type Result<T> = StdResult<T, Error>;

fn main() {
    color_backtrace::install();

    let config = match Config::parse_args() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Unable to load configuration: {}", error);
            process::exit(1);
        }
    };

    pretty_env_logger::formatted_builder()
        .filter_level(config.log_level)
        .init();

    if !config.wiki_url.ends_with('/') {
        warn!(
            "Wiki URL '{}' has no trailing slash, page links will be malformed",
            config.wiki_url,
        );
    }

    if let Err(error) = run(config) {
        error!("{} ({})", error, error.fixed_name());
        process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let Config {
        database_url,
        wiki_url,
        command,
        ..
    } = config;

    debug!("Building mwcompat server configuration");
    let server = Server::new(ServerConfig {
        database_url: &database_url,
        wiki_url: &wiki_url,
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    command.run(&server, &mut out)
}
