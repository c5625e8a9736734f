/*
 * test/revision.rs
 *
 * mwcompat - Read-only access to MediaWiki compatibility data
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

use super::chrono::prelude::*;
use super::prelude::*;

#[test]
fn latest_revision() {
    let wiki = create_wiki();
    let (page_id, first) = wiki.add_page(
        Namespace::Template,
        "Ratings/Metroid_Prime",
        "4",
        "20230115143022",
    );
    let second = wiki.edit_page(page_id, "5", "20230220080000");

    let page = wiki.server.get_page(page_id).unwrap().expect("Page not found");
    assert_eq!(page.latest(), second);

    let revision = wiki
        .server
        .get_latest_revision(&page)
        .expect("Unable to get latest revision")
        .expect("Latest revision not found");

    assert_eq!(revision.id(), second);
    assert_eq!(revision.page_id(), page_id);
    assert_eq!(revision.timestamp_raw(), "20230220080000");

    let timestamp = revision.timestamp().expect("Invalid timestamp");
    assert_eq!(timestamp.year(), 2023);
    assert_eq!(timestamp.month(), 2);
    assert_eq!(timestamp.day(), 20);
    assert_eq!(timestamp.hour(), 8);

    let text = wiki
        .server
        .get_text(&revision)
        .expect("Unable to get text")
        .expect("Text not found");

    assert_eq!(text.id(), revision.text_id());
    assert_eq!(text.data().unwrap(), "5");

    let latest_text = wiki.server.get_page_text(&page).unwrap();
    assert_eq!(latest_text.as_ref(), Some(&text));

    let old = wiki
        .server
        .get_revision(first)
        .unwrap()
        .expect("First revision not found");

    let old_text = wiki.server.get_text(&old).unwrap().expect("Text not found");
    assert_eq!(old_text.data().unwrap(), "4");
    assert_eq!(old.to_string(), format!("20230115143022 for page {}", page_id));

    let owner = wiki
        .server
        .get_revision_page(&old)
        .unwrap()
        .expect("Revision page not found");

    assert_eq!(owner, page);
}

#[test]
fn revision_history() {
    let wiki = create_wiki();
    let (page_id, first) = wiki.add_page(Namespace::Main, "Pikmin", "v1", "20200101000000");
    let third = wiki.edit_page(page_id, "v3", "20200301000000");
    let second = wiki.edit_page(page_id, "v2", "20200201000000");
    wiki.add_page(Namespace::Main, "Pikmin_2", "other", "20200401000000");

    let ids = wiki
        .server
        .get_page_history(page_id)
        .expect("Unable to get history")
        .iter()
        .map(Revision::id)
        .collect::<Vec<_>>();

    assert_eq!(ids, vec![third, second, first]);
    assert!(wiki.server.get_page_history(PageId::from_raw(9999)).unwrap().is_empty());
}

#[test]
fn missing_text() {
    let wiki = create_wiki();
    let (page_id, revision_id) = wiki.add_page(Namespace::Main, "Pikmin", "Plants.", DEFAULT_TIMESTAMP);

    let page = wiki.server.get_page(page_id).unwrap().expect("Page not found");
    let revision = wiki.server.get_revision(revision_id).unwrap().expect("Revision not found");
    wiki.delete_text(&revision);

    assert!(wiki.server.get_text(&revision).unwrap().is_none());
    assert!(wiki.server.get_page_text(&page).unwrap().is_none());
    assert!(wiki.server.get_revision(RevisionId::from_raw(9999)).unwrap().is_none());
}
