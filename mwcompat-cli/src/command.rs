/*
 * command.rs
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

use crate::Result;
use mwcompat::{Error, Namespace, Page, Server, MAX_RATING, MIN_RATING};
use std::io::Write;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Counts the rating templates currently set to a value.
    RatingCount { rating: i64 },

    /// Counts the rating templates for every value.
    Ratings,

    /// Prints the ID of a category, or 0 if it does not exist.
    CategoryId { name: String },

    /// Shows a page along with its latest revision.
    Page {
        #[structopt(short, long, default_value = "main")]
        namespace: Namespace,

        title: String,
    },

    /// Lists the categories a page belongs to.
    Categories {
        #[structopt(short, long, default_value = "main")]
        namespace: Namespace,

        title: String,
    },
}

impl Command {
    pub fn run<W: Write>(self, server: &Server, out: &mut W) -> Result<()> {
        match self {
            Command::RatingCount { rating } => {
                writeln!(out, "{}", server.get_rating_count(rating)?)?;
            }
            Command::Ratings => {
                for rating in MIN_RATING..=MAX_RATING {
                    let count = server.get_rating_count(rating)?;
                    writeln!(out, "{}: {}", rating, count)?;
                }
            }
            Command::CategoryId { name } => {
                writeln!(out, "{}", server.get_category_id(&name)?)?;
            }
            Command::Page { namespace, title } => {
                let page = find_page(server, namespace, &title)?;

                writeln!(out, "{} ({})", page, server.page_url(&page))?;
                writeln!(out, "Page ID: {}", page.id())?;
                writeln!(out, "Length: {}", page.len())?;

                if page.is_redirect() {
                    writeln!(out, "Redirect")?;
                }

                match server.get_latest_revision(&page)? {
                    Some(revision) => {
                        let text = server.get_text(&revision)?;

                        writeln!(out, "Latest revision: {}", revision.id())?;
                        writeln!(out, "Timestamp: {}", revision.timestamp()?)?;

                        if let Some(text) = text {
                            writeln!(out)?;
                            writeln!(out, "{}", text.data_lossy())?;
                        }
                    }
                    None => warn!("Page {} has no latest revision", page.id()),
                }
            }
            Command::Categories { namespace, title } => {
                let page = find_page(server, namespace, &title)?;

                for link in server.get_page_categories(page.id())? {
                    writeln!(out, "{}", String::from_utf8_lossy(link.category_raw()))?;
                }
            }
        }

        Ok(())
    }
}

fn find_page(server: &Server, namespace: Namespace, title: &str) -> Result<Page> {
    match server.get_page_by_title(namespace, title)? {
        Some(page) => Ok(page),
        None => {
            warn!("No page titled '{}' in namespace {}", title, namespace);

            Err(Error::PageNotFound.into())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error as CliError;
    use diesel::connection::SimpleConnection;
    use diesel::prelude::*;
    use diesel::sqlite::SqliteConnection;
    use mwcompat::Config;
    use tempfile::{tempdir, TempDir};

    // Just enough of a wiki: one rating template in one category.
    const DATABASE: &str = "
        CREATE TABLE mw_text (old_id INTEGER PRIMARY KEY, old_text BLOB NOT NULL);
        CREATE TABLE mw_revision (
            rev_id INTEGER PRIMARY KEY,
            rev_page INTEGER NOT NULL,
            rev_text_id INTEGER NOT NULL,
            rev_timestamp BLOB NOT NULL
        );
        CREATE TABLE mw_page (
            page_id INTEGER PRIMARY KEY,
            page_namespace INTEGER NOT NULL,
            page_title BLOB NOT NULL,
            page_len INTEGER NOT NULL,
            page_latest INTEGER NOT NULL,
            page_is_redirect INTEGER NOT NULL DEFAULT 0
        );
        CREATE TABLE mw_category (cat_id INTEGER PRIMARY KEY, cat_title BLOB NOT NULL);
        CREATE TABLE mw_categorylinks (
            cl_from INTEGER NOT NULL,
            cl_to BLOB NOT NULL,
            cl_sortkey BLOB NOT NULL,
            PRIMARY KEY (cl_from, cl_to)
        );

        INSERT INTO mw_text VALUES (1, CAST('3' AS BLOB));
        INSERT INTO mw_revision VALUES (2, 3, 1, CAST('20230115143022' AS BLOB));
        INSERT INTO mw_page VALUES (3, 10, CAST('Ratings/Metroid_Prime' AS BLOB), 1, 2, 0);
        INSERT INTO mw_category VALUES (4, CAST('Platformers' AS BLOB));
        INSERT INTO mw_categorylinks VALUES (3, CAST('Platformers' AS BLOB), CAST('M' AS BLOB));
    ";

    fn create_server() -> (Server, TempDir) {
        let dir = tempdir().expect("Unable to create temp dir");
        let path = dir.path().join("wiki.sqlite");
        let database_url = path.to_str().expect("Temp path is not UTF-8");

        SqliteConnection::establish(database_url)
            .expect("Unable to create database")
            .batch_execute(DATABASE)
            .expect("Unable to populate database");

        let config = Config {
            database_url,
            wiki_url: "https://wiki.example.org/",
        };

        let server = Server::new(config).expect("Unable to create server");
        (server, dir)
    }

    fn run(server: &Server, command: Command) -> String {
        let mut out = Vec::new();
        command.run(server, &mut out).expect("Command failed");
        String::from_utf8(out).expect("Output is not UTF-8")
    }

    #[test]
    fn rating_commands() {
        let (server, _dir) = create_server();

        assert_eq!(run(&server, Command::RatingCount { rating: 3 }), "1\n");
        assert_eq!(run(&server, Command::RatingCount { rating: 7 }), "0\n");
        assert_eq!(
            run(&server, Command::Ratings),
            "1: 0\n2: 0\n3: 1\n4: 0\n5: 0\n",
        );
    }

    #[test]
    fn category_id_command() {
        let name = |name: &str| Command::CategoryId { name: String::from(name) };
        let (server, _dir) = create_server();

        assert_eq!(run(&server, name("Platformers")), "4\n");
        assert_eq!(run(&server, name("Racing")), "0\n");
    }

    #[test]
    fn page_commands() {
        let (server, _dir) = create_server();

        let output = run(
            &server,
            Command::Page {
                namespace: Namespace::Template,
                title: String::from("Ratings/Metroid Prime"),
            },
        );

        assert!(output.starts_with(
            "Metroid Prime (https://wiki.example.org/index.php?title=Metroid_Prime)\n",
        ));
        assert!(output.contains("Timestamp: 2023-01-15 14:30:22\n"));
        assert!(output.ends_with("\n3\n"));

        let output = run(
            &server,
            Command::Categories {
                namespace: Namespace::Template,
                title: String::from("Ratings/Metroid_Prime"),
            },
        );

        assert_eq!(output, "Platformers\n");
    }

    #[test]
    fn missing_page() {
        let (server, _dir) = create_server();
        let command = Command::Page {
            namespace: Namespace::Main,
            title: String::from("Ratings/Metroid Prime"),
        };

        match command.run(&server, &mut Vec::new()) {
            Err(CliError::Mwcompat(Error::PageNotFound)) => (),
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
