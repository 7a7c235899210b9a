use std::fs;

use serde_json::json;
use url::Url;

use crate::extractor::{Character, ExtractError, FieldValue, NO_IMAGE, extract, extract_html};
use crate::fetcher::types::PageResponse;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}.html"))
        .expect("Failed to read test fixture")
}

fn extract_fixture(name: &str, url: &str) -> Character {
    let response = PageResponse::from_html(fixture(name), Url::parse(url).unwrap());
    extract(&response).expect("fixture should extract")
}

fn list(items: &[&str]) -> FieldValue {
    FieldValue::List(items.iter().map(|s| s.to_string()).collect())
}

fn scalar(text: &str) -> FieldValue {
    FieldValue::Scalar(text.to_string())
}

fn field<'a>(character: &'a Character, name: &str) -> &'a FieldValue {
    character
        .get(name)
        .unwrap_or_else(|| panic!("field {name} not registered"))
}

#[test]
fn test_klein_moretti_record() {
    let klein = extract_fixture(
        "klein_moretti",
        "https://lordofthemysteries.fandom.com/wiki/Klein_Moretti",
    );

    assert_eq!(klein.name(), "Klein Moretti");
    assert_eq!(
        klein.url(),
        "https://lordofthemysteries.fandom.com/wiki/Klein_Moretti"
    );
    assert!(klein.image().contains("Klein_Moretti_Official.jpg"));
    assert!(klein.image().ends_with("cb=20201017102316"));

    assert_eq!(
        field(&klein, "chinese_name"),
        &FieldValue::PairList(vec![
            ("克莱恩·莫雷蒂".to_string(), "Klein Moretti".to_string()),
            ("周明瑞".to_string(), "Zhou Mingrui".to_string()),
        ])
    );
    assert_eq!(field(&klein, "birth"), &scalar("March 4th, 1327"));
    assert_eq!(field(&klein, "gender"), &scalar("Male"));
    assert_eq!(
        field(&klein, "species"),
        &list(&["Mythical Creature ", "Human (Former)"])
    );
    assert_eq!(
        field(&klein, "height"),
        &list(&["1.72 meters (Debut)", "1.80 meters (Chapter 1268)"])
    );
    assert_eq!(field(&klein, "eye_colour"), &list(&["Black", "Brown (Former)"]));
    assert_eq!(field(&klein, "hair_colour"), &scalar("Black"));
    assert_eq!(
        field(&klein, "aliases"),
        &list(&[
            "The Fool\u{a0}(愚者)",
            "Sherlock Moriarty\u{a0}(夏洛克·莫里亚蒂)",
            "Gehrman Sparrow\u{a0}(格尔曼·斯帕罗)",
            "Blasphemer (By Steph)",
        ])
    );
    assert_eq!(
        field(&klein, "titles"),
        &list(&[
            "Sea God ()",
            "Angel of Redemption (As Gehrman Sparrow) ((As Gehrman Sparrow))",
            "Miracle Magician show",
        ])
    );
    assert_eq!(field(&klein, "pathways"), &list(&["Fool"]));
    assert_eq!(field(&klein, "authorities"), &list(&["Fool", "Door", "Error"]));
    assert_eq!(
        field(&klein, "masters"),
        &list(&["Azik Eggers", "Old Neil†"])
    );
    assert_eq!(
        field(&klein, "affiliation"),
        &list(&[
            "Tarot Club",
            "Church of the Evernight GoddessNighthawks (Former)",
            "Nighthawks (Former)",
        ])
    );
    assert_eq!(field(&klein, "origin"), &scalar("Tingen City, Loen Kingdom"));
    assert_eq!(field(&klein, "residence"), &FieldValue::Absent);
}

#[test]
fn test_klein_moretti_prose_fields() {
    let klein = extract_fixture("klein_moretti", "https://example.com/wiki/Klein_Moretti");

    assert_eq!(
        field(&klein, "intro"),
        &list(&[
            "Klein Moretti is the main protagonist of Lord of Mysteries.[8]",
            "He is a transmigrator from Earth, originally named Zhou Mingrui.",
            "He founded the Tarot Club under the alias The Fool.",
            "He later became a Nighthawk in Tingen City.",
            "Eventually he ascended to become the Lord of Mysteries.",
        ])
    );

    assert_eq!(
        field(&klein, "honorific_name"),
        &list(&[
            "",
            "The Fool that doesn't belong to this era",
            "",
            "The mysterious ruler above the gray fog",
            "",
            "The King of Yellow and Black who wields good luck",
            "",
            "",
        ])
    );
}

#[test]
fn test_fors_wall_record() {
    let fors = extract_fixture("fors_wall", "https://example.com/wiki/Fors_Wall");

    assert_eq!(fors.name(), "Fors Wall");
    assert_eq!(field(&fors, "chinese_name"), &FieldValue::PairList(vec![]));
    assert_eq!(field(&fors, "birth"), &scalar("13 April 1326"));
    assert_eq!(field(&fors, "species"), &scalar("Human"));
    assert_eq!(field(&fors, "height"), &scalar("1.65 meters"));
    assert_eq!(field(&fors, "eye_colour"), &scalar("Light Blue"));
    assert_eq!(field(&fors, "titles"), &scalar("Angel of Stars"));
    assert_eq!(field(&fors, "pathways"), &list(&["Door"]));
    assert_eq!(field(&fors, "authorities"), &FieldValue::Absent);
    assert_eq!(field(&fors, "allies"), &FieldValue::Absent);
    assert_eq!(field(&fors, "religion"), &FieldValue::Absent);
    assert_eq!(field(&fors, "residence"), &scalar("Backlund"));
    assert_eq!(field(&fors, "honorific_name"), &list(&[]));
    assert_eq!(
        field(&fors, "intro"),
        &list(&[
            "Fors Wall is a member of the Tarot Club.",
            "She is a Beyonder of the Door Pathway.",
        ])
    );
}

#[test]
fn test_record_serializes_in_field_order() {
    let fors = extract_fixture("fors_wall", "https://example.com/wiki/Fors_Wall");
    let value = serde_json::to_value(&fors).unwrap();

    assert_eq!(value["name"], json!("Fors Wall"));
    assert_eq!(value["chinese_name"], json!([]));
    assert_eq!(value["gender"], json!("Female"));
    assert_eq!(value["aliases"], json!(["The Magician", "Margaret Taylor", "Slacker Without a Dream"]));
    assert_eq!(value["authorities"], json!(null));
    assert!(value["image"].as_str().unwrap().contains("Fors_Wall_Official.jpg"));

    let text = serde_json::to_string(&fors).unwrap();
    let positions: Vec<usize> = ["\"chinese_name\"", "\"birth\"", "\"titles\"", "\"honorific_name\""]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_scenario_gender_scalar() {
    let html = r#"<html><body><aside class="portable-infobox"><h2 class="pi-title">X</h2>
        <div><h3>Gender</h3><div>Male</div></div></aside></body></html>"#;
    let record = extract_html(html, "https://example.com/X").unwrap();
    assert_eq!(record.get("gender"), Some(&scalar("Male")));
}

#[test]
fn test_scenario_species_list() {
    let html = r#"<html><body><h2 class="pi-title">X</h2>
        <div><h3>Species</h3><div><li>Human</li><li>Spirit [1]</li></div></div></body></html>"#;
    let record = extract_html(html, "https://example.com/X").unwrap();
    assert_eq!(record.get("species"), Some(&list(&["Human", "Spirit "])));
}

#[test]
fn test_scenario_allies_absent() {
    let html = r#"<html><body><h2 class="pi-title">X</h2></body></html>"#;
    let record = extract_html(html, "https://example.com/X").unwrap();
    assert_eq!(record.get("allies"), Some(&FieldValue::Absent));
    assert_eq!(record.image(), NO_IMAGE);
}

#[test]
fn test_page_without_title_is_malformed() {
    let html = fixture("fors_wall").replace("pi-title", "pi-heading");
    let err = extract_html(&html, "https://example.com/wiki/Fors_Wall").unwrap_err();
    assert!(matches!(err, ExtractError::MalformedDocument(_)));
}

#[test]
fn test_empty_body_is_malformed() {
    let err = extract_html("", "https://example.com/wiki/Nobody").unwrap_err();
    assert!(matches!(err, ExtractError::MalformedDocument(_)));
}

#[test]
fn test_malformed_html() {
    let html = r#"<html><body><h2 class="pi-title">Broken<div><h3>Hair</h3><div>Blond"#;
    // Recovered markup still yields whatever sections survive
    let record = extract_html(html, "https://example.com/broken").unwrap();
    assert!(record.name().starts_with("Broken"));
    assert_eq!(record.fields().count(), crate::extractor::assembler::FIELDS.len());
    assert_eq!(field(&record, "hair_colour"), &FieldValue::Scalar("Blond".to_string()));
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract_html(&html, "https://example.com");
        }

        #[test]
        fn test_sections_never_panic(label in "[A-Za-z()]{1,12}", value in ".*") {
            let html = format!(
                r#"<h2 class="pi-title">P</h2><div><h3>{label}</h3><div>{value}</div></div>"#
            );
            let record = extract_html(&html, "https://example.com").unwrap();
            prop_assert_eq!(record.name(), "P");
        }
    }
}
