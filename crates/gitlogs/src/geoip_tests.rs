// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::io::Cursor;

const DB: &str = r#""16777216","16777471","AU","Australia","Queensland","Brisbane"
"3405803776","3405804031","AU","Australia","New South Wales","Sydney"
"3221225984","3221226239","US","United States","California","Los Angeles","extra"
"#;

fn db() -> Ip2LocationCsv {
    Ip2LocationCsv::from_reader(Cursor::new(DB), Path::new("db.csv")).unwrap()
}

#[test]
fn loads_all_ranges() {
    assert_eq!(db().len(), 3);
}

#[test]
fn locates_inside_range() {
    let loc = db().locate(Ipv4Addr::new(1, 0, 0, 7));
    assert_eq!(loc.country, "AU");
    assert_eq!(loc.region, "Queensland");
    assert_eq!(loc.key(), "country=AU, city=Brisbane");
}

#[test]
fn range_ends_are_inclusive() {
    let db = db();
    assert_eq!(db.locate(Ipv4Addr::new(1, 0, 0, 255)).city, "Brisbane");
    assert_eq!(db.locate(Ipv4Addr::new(192, 0, 2, 0)).city, "Los Angeles");
}

#[test]
fn gaps_are_unknown() {
    let db = db();
    assert_eq!(db.locate(Ipv4Addr::new(0, 0, 0, 1)), Location::unknown());
    assert_eq!(db.locate(Ipv4Addr::new(1, 0, 1, 0)), Location::unknown());
    assert_eq!(db.locate(Ipv4Addr::new(255, 255, 255, 255)), Location::unknown());
}

#[test]
fn short_rows_are_rejected_with_line_number() {
    let err = Ip2LocationCsv::from_reader(Cursor::new("\"1\",\"2\",\"AU\"\n"), Path::new("db.csv"))
        .unwrap_err();
    assert!(matches!(err, Error::GeoIp { line: 1, .. }));
}

#[test]
fn quoted_fields_may_contain_commas() {
    assert_eq!(
        split_quoted(r#""1","2","KR","Korea, Republic of","Seoul","Seoul""#),
        vec!["1", "2", "KR", "Korea, Republic of", "Seoul", "Seoul"]
    );
}

#[test]
fn no_locator_is_unknown() {
    assert_eq!(NoLocator.locate(Ipv4Addr::LOCALHOST).key(), "country=-, city=-");
}
