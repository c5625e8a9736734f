/*
 * error.rs
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

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Mwcompat(#[from] mwcompat::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid log level: {0}")]
    LogLevel(String),

    #[error("no database URL was given")]
    MissingDatabaseUrl,
}

impl Error {
    pub fn fixed_name(&self) -> &'static str {
        use self::Error::*;

        match *self {
            Mwcompat(ref error) => error.fixed_name(),
            Io(_) => "io",
            ConfigParse(_) => "config-parse",
            LogLevel(_) => "log-level",
            MissingDatabaseUrl => "missing-database-url",
        }
    }
}
