// SPDX-License-Identifier: Apache-2.0 OR MIT
use lithos_alpine_core::HELPERS;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct JsonFixture {
    #[serde(default)]
    helper: Option<String>,
}

#[test]
fn every_helper_has_fixture() {
    let registered: BTreeSet<&str> = HELPERS.iter().map(|spec| spec.name).collect();

    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-cases/lithos-alpine-hbs.json");
    let file = fs::File::open(&path).expect("fixture file missing");
    let fixtures: Vec<JsonFixture> = serde_json::from_reader(std::io::BufReader::new(file))
        .expect("failed to parse lithos-alpine-hbs.json");
    let covered: BTreeSet<String> = fixtures.into_iter().filter_map(|f| f.helper).collect();

    let missing: Vec<&&str> = registered
        .iter()
        .filter(|name| !covered.contains(**name))
        .collect();
    assert!(
        missing.is_empty(),
        "fixtures missing for helpers: {:?}",
        missing
    );
}
