//! Fields that follow the generic section rule, and the rule itself.

use crate::extractor::{
    cardinality::{ItemSelector, normalize, qualifying_anchors},
    document::Document,
    model::FieldValue,
    section::locate,
};

/// What a field becomes when its section (or every qualifying item) is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    Absent,
    EmptyList,
}

impl EmptyPolicy {
    fn value(self) -> FieldValue {
        match self {
            Self::Absent => FieldValue::Absent,
            Self::EmptyList => FieldValue::List(Vec::new()),
        }
    }
}

/// Static description of one generically extracted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub item: ItemSelector,
    pub cleaning: bool,
    pub empty: EmptyPolicy,
}

impl FieldSpec {
    /// List-item field, footnote-cleaned, absent when missing.
    pub const fn items(label: &'static str) -> Self {
        Self {
            label,
            item: ItemSelector::ListItem,
            cleaning: true,
            empty: EmptyPolicy::Absent,
        }
    }

    /// Anchor field: only titled anchors count, and there is no scalar fallback.
    pub const fn anchors(label: &'static str, empty: EmptyPolicy) -> Self {
        Self {
            label,
            item: ItemSelector::Anchor,
            cleaning: true,
            empty,
        }
    }

    pub const fn raw(self) -> Self {
        Self {
            cleaning: false,
            ..self
        }
    }
}

pub const BIRTH: FieldSpec = FieldSpec::items("Birth").raw();
pub const GENDER: FieldSpec = FieldSpec::items("Gender");
pub const SPECIES: FieldSpec = FieldSpec::items("Species");
pub const HEIGHT: FieldSpec = FieldSpec::items("Height");
pub const EYE_COLOUR: FieldSpec = FieldSpec::items("Eye");
pub const HAIR_COLOUR: FieldSpec = FieldSpec::items("Hair");
pub const ALIASES: FieldSpec = FieldSpec::items("Aliases");
pub const PATHWAYS: FieldSpec = FieldSpec::anchors("Pathway(s)", EmptyPolicy::EmptyList);
pub const AUTHORITIES: FieldSpec = FieldSpec::anchors("Authorities", EmptyPolicy::Absent);
pub const RELATIVES: FieldSpec = FieldSpec::items("Relative(s)");
pub const MASTERS: FieldSpec = FieldSpec::items("Master(s)");
pub const ENEMIES: FieldSpec = FieldSpec::items("Enemie(s)");
pub const ALLIES: FieldSpec = FieldSpec::items("Allies");
pub const AFFILIATION: FieldSpec = FieldSpec::items("Affiliation(s)");
pub const OCCUPATION: FieldSpec = FieldSpec::items("Occupation(s)");
pub const RELIGION: FieldSpec = FieldSpec::items("Religion(s)");
pub const RESIDENCE: FieldSpec = FieldSpec::items("Residence");
pub const ORIGIN: FieldSpec = FieldSpec::items("Origin");

/// Locate the section, then normalize its items.
pub fn extract(doc: &Document, spec: &FieldSpec) -> FieldValue {
    let Some(region) = locate(doc, spec.label) else {
        return spec.empty.value();
    };

    match spec.item {
        ItemSelector::Anchor => {
            let anchors = qualifying_anchors(&region, spec.cleaning);
            if anchors.is_empty() {
                spec.empty.value()
            } else {
                FieldValue::List(anchors)
            }
        }
        item => normalize(&region, item, spec.cleaning),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(sections: &[(&str, &str)]) -> Document {
        let body: String = sections
            .iter()
            .map(|(label, value)| {
                format!(
                    r#"<div class="pi-item pi-data"><h3 class="pi-data-label">{label}</h3><div class="pi-data-value">{value}</div></div>"#
                )
            })
            .collect();
        Document::parse(&format!("<html><body><aside>{body}</aside></body></html>")).unwrap()
    }

    #[test]
    fn gender_scalar() {
        let doc = doc(&[("Gender", "Male")]);
        assert_eq!(extract(&doc, &GENDER), FieldValue::Scalar("Male".to_string()));
    }

    #[test]
    fn species_list_is_cleaned() {
        let doc = doc(&[("Species", "<li>Human</li><li>Spirit [1]</li>")]);
        assert_eq!(
            extract(&doc, &SPECIES),
            FieldValue::List(vec!["Human".to_string(), "Spirit ".to_string()])
        );
    }

    #[test]
    fn missing_section_is_absent() {
        let doc = doc(&[("Gender", "Male")]);
        assert_eq!(extract(&doc, &ALLIES), FieldValue::Absent);
    }

    #[test]
    fn birth_is_not_cleaned() {
        let doc = doc(&[("Birth", "13 April 1326[1]")]);
        assert_eq!(
            extract(&doc, &BIRTH),
            FieldValue::Scalar("13 April 1326[1]".to_string())
        );
    }

    #[test]
    fn authorities_without_anchors_are_absent() {
        let doc = doc(&[("Authorities", "None known")]);
        assert_eq!(extract(&doc, &AUTHORITIES), FieldValue::Absent);
    }

    #[test]
    fn authorities_are_never_scalar() {
        let doc = doc(&[(
            "Authorities",
            r#"<a title="Fool">Fool</a>, <a title="Door">Door</a><a href="/c">x</a>"#,
        )]);
        assert_eq!(
            extract(&doc, &AUTHORITIES),
            FieldValue::List(vec!["Fool".to_string(), "Door".to_string()])
        );
    }

    #[test]
    fn pathways_default_to_empty_list() {
        let missing = doc(&[("Gender", "Female")]);
        assert_eq!(extract(&missing, &PATHWAYS), FieldValue::List(vec![]));

        let unlinked = doc(&[("Pathway(s)", "Unknown")]);
        assert_eq!(extract(&unlinked, &PATHWAYS), FieldValue::List(vec![]));
    }

    #[test]
    fn same_field_changes_shape_with_markup() {
        let single = doc(&[("Height", "1.65 meters")]);
        let many = doc(&[("Height", "<ul><li>1.72 meters</li><li>1.80 meters</li></ul>")]);
        assert!(extract(&single, &HEIGHT).as_scalar().is_some());
        assert_eq!(extract(&many, &HEIGHT).as_list().map(<[_]>::len), Some(2));
    }

    #[test]
    fn specs_are_wired_to_their_labels() {
        assert_eq!(EYE_COLOUR.label, "Eye");
        assert_eq!(ENEMIES.label, "Enemie(s)");
        assert!(!BIRTH.cleaning);
        assert_eq!(PATHWAYS.item, ItemSelector::Anchor);
    }
}
