//! Parses the `Phenotypes` column of genemap2
//!
//! The column lists phenotypes separated by `;`. Each phenotype is written
//! in one of two formats:
//!
//! ```text
//! Retinitis pigmentosa, 268000 (3), Autosomal recessive
//! Some syndrome(1)
//! ```
//!
//! The first format (with MIM number) is always tried first.
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::phenotype::Inheritance;
use crate::{MappingKey, MimNumber, PhenotypeAnnotation};

/// `<name>, <6 digit mim> (<key>)[, <inheritance>]`
///
/// The name is matched greedily, so the right-most `, NNNNNN (N)` is used
/// as MIM number and mapping key.
static WITH_MIM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*),\s([0-9]{6})\s\(([0-9])\)(?:, (.*))?$")
        .expect("phenotype pattern with MIM number is valid")
});

/// `<name>(<key>)[, <inheritance>]`
static WITHOUT_MIM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)\(([0-9])\)(?:, (.*))?$")
        .expect("phenotype pattern without MIM number is valid")
});

/// The result of matching a single phenotype entry
#[derive(Debug, PartialEq, Eq)]
enum SegmentMatch<'a> {
    WithMim {
        name: &'a str,
        mim_number: MimNumber,
        mapping_key: MappingKey,
        inheritance: Option<&'a str>,
    },
    WithoutMim {
        name: &'a str,
        mapping_key: MappingKey,
        inheritance: Option<&'a str>,
    },
    NoMatch,
}

impl<'a> SegmentMatch<'a> {
    fn new(segment: &'a str) -> Self {
        if let Some(caps) = WITH_MIM.captures(segment) {
            if let (Some(name), Ok(mim_number), Ok(mapping_key)) = (
                caps.get(1),
                MimNumber::try_from(group(&caps, 2)),
                MappingKey::try_from(group(&caps, 3)),
            ) {
                return SegmentMatch::WithMim {
                    name: name.as_str(),
                    mim_number,
                    mapping_key,
                    inheritance: caps.get(4).map(|m| m.as_str()),
                };
            }
        }

        if let Some(caps) = WITHOUT_MIM.captures(segment) {
            if let (Some(name), Ok(mapping_key)) =
                (caps.get(1), MappingKey::try_from(group(&caps, 2)))
            {
                return SegmentMatch::WithoutMim {
                    name: name.as_str(),
                    mapping_key,
                    inheritance: caps.get(3).map(|m| m.as_str()),
                };
            }
        }

        SegmentMatch::NoMatch
    }

    fn into_annotation(self) -> Option<PhenotypeAnnotation> {
        match self {
            SegmentMatch::WithMim {
                name,
                mim_number,
                mapping_key,
                inheritance,
            } => Some(PhenotypeAnnotation::new(
                name,
                Some(mim_number),
                mapping_key,
                split_inheritance(inheritance),
            )),
            SegmentMatch::WithoutMim {
                name,
                mapping_key,
                inheritance,
            } => Some(PhenotypeAnnotation::new(
                name,
                None,
                mapping_key,
                split_inheritance(inheritance),
            )),
            SegmentMatch::NoMatch => None,
        }
    }
}

fn group<'a>(caps: &Captures<'a>, idx: usize) -> &'a str {
    caps.get(idx).map_or("", |m| m.as_str())
}

fn split_inheritance(text: Option<&str>) -> Inheritance {
    match text {
        Some(text) if !text.is_empty() => text.split(", ").map(str::to_string).collect(),
        _ => Inheritance::new(),
    }
}

/// Parses all phenotypes of the `Phenotypes` column
///
/// Entries that don't follow either phenotype format are dropped,
/// so the result can be empty even for a non-empty column.
///
/// # Examples
///
/// ```
/// use genemap2::parser::parse_phenotypes;
///
/// let phenotypes = parse_phenotypes(
///     "Retinitis pigmentosa, 268000 (3), Autosomal recessive; Some syndrome(1)"
/// );
/// assert_eq!(phenotypes.len(), 2);
///
/// assert_eq!(phenotypes[0].name(), "Retinitis pigmentosa");
/// assert_eq!(phenotypes[0].mim_number().unwrap().to_string(), "268000");
/// assert_eq!(phenotypes[0].mapping_key().as_u8(), 3);
/// assert_eq!(phenotypes[0].inheritance(), ["Autosomal recessive"]);
///
/// assert_eq!(phenotypes[1].name(), "Some syndrome");
/// assert!(phenotypes[1].mim_number().is_none());
/// assert!(phenotypes[1].inheritance().is_empty());
/// ```
pub fn parse_phenotypes(field: &str) -> Vec<PhenotypeAnnotation> {
    field
        .split(';')
        .map(str::trim)
        .filter_map(|segment| {
            let annotation = SegmentMatch::new(segment).into_annotation();
            if annotation.is_none() {
                trace!("Dropping phenotype: {}", segment);
            }
            annotation
        })
        .collect()
}
