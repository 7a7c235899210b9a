use tracing::{debug, instrument};

use crate::extractor::{
    document::Document,
    errors::ExtractError,
    fields::{self, FieldSpec},
    model::{Character, FieldValue},
    special,
};

/// Image value for pages whose infobox has no picture.
pub const NO_IMAGE: &str = "No Image exists yet.";

const TITLE_TAG: &str = "h2";
const TITLE_CLASS: &str = "pi-title";
const IMAGE_FIGURE_CLASS: &str = "pi-item pi-image";

/// How one output field is produced.
#[derive(Clone, Copy)]
pub enum Extractor {
    Generic(FieldSpec),
    Custom(fn(&Document) -> FieldValue),
}

impl Extractor {
    fn run(&self, doc: &Document) -> FieldValue {
        match self {
            Self::Generic(spec) => fields::extract(doc, spec),
            Self::Custom(extract) => extract(doc),
        }
    }
}

/// Output fields in record order. Adding a field means adding a row.
pub const FIELDS: &[(&str, Extractor)] = &[
    ("chinese_name", Extractor::Custom(special::chinese_name)),
    ("birth", Extractor::Generic(fields::BIRTH)),
    ("gender", Extractor::Generic(fields::GENDER)),
    ("species", Extractor::Generic(fields::SPECIES)),
    ("height", Extractor::Generic(fields::HEIGHT)),
    ("eye_colour", Extractor::Generic(fields::EYE_COLOUR)),
    ("hair_colour", Extractor::Generic(fields::HAIR_COLOUR)),
    ("aliases", Extractor::Generic(fields::ALIASES)),
    ("titles", Extractor::Custom(special::titles)),
    ("pathways", Extractor::Generic(fields::PATHWAYS)),
    ("authorities", Extractor::Generic(fields::AUTHORITIES)),
    ("relatives", Extractor::Generic(fields::RELATIVES)),
    ("masters", Extractor::Generic(fields::MASTERS)),
    ("enemies", Extractor::Generic(fields::ENEMIES)),
    ("allies", Extractor::Generic(fields::ALLIES)),
    ("affiliation", Extractor::Generic(fields::AFFILIATION)),
    ("occupation", Extractor::Generic(fields::OCCUPATION)),
    ("religion", Extractor::Generic(fields::RELIGION)),
    ("residence", Extractor::Generic(fields::RESIDENCE)),
    ("origin", Extractor::Generic(fields::ORIGIN)),
    ("intro", Extractor::Custom(special::intro)),
    ("honorific_name", Extractor::Custom(special::honorific_name)),
];

/// Display name from the infobox title. The only hard requirement of a page.
pub fn name(doc: &Document) -> Result<String, ExtractError> {
    doc.find_by_class(TITLE_TAG, TITLE_CLASS)
        .map(|title| title.text().trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ExtractError::MalformedDocument("infobox title not found".to_string()))
}

/// First image in the infobox figure, or [`NO_IMAGE`].
pub fn image(doc: &Document) -> String {
    doc.find_by_class("figure", IMAGE_FIGURE_CLASS)
        .and_then(|figure| figure.find("img"))
        .and_then(|img| img.attr("src"))
        .map(str::to_string)
        .unwrap_or_else(|| {
            debug!("infobox has no image");
            NO_IMAGE.to_string()
        })
}

/// Run every registered extractor over `doc`. Fails only when the page has
/// no name; every other field degrades to its empty value.
#[instrument(skip_all, fields(url = %url))]
pub fn assemble(doc: &Document, url: &str) -> Result<Character, ExtractError> {
    let name = name(doc)?;

    let fields = FIELDS
        .iter()
        .map(|(field, extractor)| (*field, extractor.run(doc)))
        .collect::<Vec<_>>();

    let absent = fields.iter().filter(|(_, value)| value.is_absent()).count();
    debug!(name = %name, absent, total = fields.len(), "record assembled");

    Ok(Character {
        name,
        url: url.to_string(),
        image: image(doc),
        fields,
    })
}
