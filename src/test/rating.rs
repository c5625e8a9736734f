/*
 * test/rating.rs
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

use super::prelude::*;
use std::time::Duration;

fn populate(wiki: &TestWiki) {
    wiki.add_rating("Super_Mario_Sunshine", "3");
    wiki.add_rating("Metroid_Prime", "3");
    wiki.add_rating("Wind_Waker", "5");
    wiki.add_rating("Zero_Game", "0");
    wiki.add_rating("Six_Game", "6");
    wiki.add_rating("Trailing_Newline", "3\n");

    // Right value, wrong place
    wiki.add_page(Namespace::Template, "Other_Template", "3", DEFAULT_TIMESTAMP);
    wiki.add_page(Namespace::Main, "Ratings/Not_A_Template", "3", DEFAULT_TIMESTAMP);
    wiki.add_page(Namespace::Template, "Ratings", "3", DEFAULT_TIMESTAMP);

    // Only the latest revision counts
    let page_id = wiki.add_rating("Twilight_Princess", "3");
    wiki.edit_page(page_id, "4", "20200202000000");
}

#[test]
fn rating_count() {
    let wiki = create_wiki();
    populate(&wiki);

    let expected = [(1, 0), (2, 0), (3, 2), (4, 1), (5, 1)];
    for &(rating, count) in &expected {
        let actual = wiki
            .server
            .get_rating_count(rating)
            .expect("Unable to get rating count");

        assert_eq!(actual, count, "Wrong count for rating {}", rating);
    }

    assert_eq!(wiki.cache.get("rating_count_3"), Some(2));
    assert_eq!(wiki.cache.get("rating_count_1"), Some(0));
    assert_eq!(wiki.cache.len(), 5);
}

#[test]
fn rating_count_out_of_range() {
    let wiki = create_wiki();
    populate(&wiki);

    for &rating in &[0, 6, -1, 100, i64::MIN, i64::MAX] {
        let count = wiki
            .server
            .get_rating_count(rating)
            .expect("Unable to get rating count");

        assert_eq!(count, 0, "Out of range rating {} was counted", rating);
    }

    assert!(wiki.cache.is_empty(), "Out of range rating was cached");
    assert_eq!(wiki.cache.get("rating_count_0"), None);
    assert_eq!(wiki.cache.get("rating_count_6"), None);
}

#[test]
fn rating_count_cached() {
    let wiki = create_wiki();
    wiki.add_rating("F-Zero_GX", "2");

    assert_eq!(wiki.server.get_rating_count(2).unwrap(), 1);

    // Not seen until the cached count is dropped
    wiki.add_rating("Pikmin", "2");
    assert_eq!(wiki.server.get_rating_count(2).unwrap(), 1);

    wiki.server.invalidate_rating_counts();
    assert_eq!(wiki.cache.get("rating_count_2"), None);
    assert_eq!(wiki.server.get_rating_count(2).unwrap(), 2);
}

#[test]
fn rating_count_expired() {
    let wiki = create_wiki();
    wiki.add_rating("Pikmin", "4");

    // Pretend an earlier count was stored and has already run out
    wiki.cache.set("rating_count_4", 99, Some(Duration::from_secs(0)));
    assert_eq!(wiki.server.get_rating_count(4).unwrap(), 1);

    wiki.cache.set("rating_count_4", 99, Some(RATING_COUNT_TTL));
    assert_eq!(wiki.server.get_rating_count(4).unwrap(), 99);
}

#[test]
fn rating_pages() {
    let wiki = create_wiki();
    populate(&wiki);

    let pages = wiki
        .server
        .get_rating_pages(3)
        .expect("Unable to get rating pages");

    let titles = pages
        .iter()
        .map(|page| page.title().expect("Title is not UTF-8"))
        .collect::<Vec<_>>();

    assert_eq!(titles, vec!["Metroid Prime", "Super Mario Sunshine"]);

    for page in &pages {
        assert!(page.is_rating());
        assert_eq!(page.namespace(), Some(Namespace::Template));

        let text = wiki
            .server
            .get_page_text(page)
            .expect("Unable to get page text")
            .expect("Rating page has no text");

        assert_eq!(text.data().unwrap(), "3");
    }

    let pages = wiki.server.get_rating_pages(4).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(
        wiki.server.page_url(&pages[0]),
        "https://wiki.example.org/index.php?title=Twilight_Princess",
    );
}

#[test]
fn rating_count_ttl() {
    let (wiki, cache) = create_recorded_wiki();
    populate(&wiki);

    for rating in MIN_RATING..=MAX_RATING {
        wiki.server
            .get_rating_count(rating)
            .expect("Unable to get rating count");
    }

    // Neither a cache hit nor an out of range value writes anything
    wiki.server.get_rating_count(3).unwrap();
    wiki.server.get_rating_count(9).unwrap();

    let writes = cache.writes();
    assert_eq!(writes.len(), 5);

    for (write, rating) in writes.iter().zip(MIN_RATING..=MAX_RATING) {
        assert_eq!(write.key, format!("rating_count_{}", rating));
        assert_eq!(write.ttl, Some(Duration::from_secs(300)));
    }

    assert_eq!(writes[2].value, 2);
    assert_eq!(writes[3].value, 1);
}
