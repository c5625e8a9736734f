/*
 * error.rs
 *
 * mwcompat-core - Read-only access to MediaWiki compatibility data
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

use diesel::result::{ConnectionError, Error as DieselError};
use std::str::Utf8Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] DieselError),

    #[error("error connecting to database: {0}")]
    DatabaseConnection(#[from] ConnectionError),

    #[error("stored text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("invalid revision timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("namespace id {0} is not a built-in namespace")]
    InvalidNamespace(i32),

    #[error("unknown namespace name: {0}")]
    UnknownNamespace(String),

    #[error("the given page was not found")]
    PageNotFound,
}

impl Error {
    pub fn fixed_name(&self) -> &'static str {
        use self::Error::*;

        match *self {
            Database(_) => "database",
            DatabaseConnection(_) => "database-connection",
            InvalidUtf8(_) => "invalid-utf8",
            InvalidTimestamp(_) => "invalid-timestamp",
            InvalidNamespace(_) => "invalid-namespace",
            UnknownNamespace(_) => "unknown-namespace",
            PageNotFound => "page-not-found",
        }
    }
}
