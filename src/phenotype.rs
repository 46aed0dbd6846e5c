//! Phenotypes are linked to genes through the `Phenotypes` column of genemap2
//!
//! Each gene row can list any number of [`PhenotypeAnnotation`]s. An annotation
//! has a name, an optional [`MimNumber`], a [`MappingKey`] and a list
//! of inheritance modes.
use core::fmt::Debug;
use std::fmt::Display;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::{Genemap2Error, Genemap2Result};

/// The inheritance modes of a single phenotype
///
/// Most phenotypes list one or two modes, so they are stored inline.
pub type Inheritance = SmallVec<[String; 2]>;

/// The OMIM MIM number of a phenotype
///
/// MIM numbers are always 6 digits long.
#[derive(Clone, Copy, Default, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct MimNumber {
    inner: u32,
}

impl MimNumber {
    /// Returns the integer representation of the MIM number
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl TryFrom<&str> for MimNumber {
    type Error = Genemap2Error;
    /// Parses a MIM number from exactly 6 ASCII digits
    ///
    /// # Errors
    ///
    /// [`Genemap2Error::InvalidInput`] if `value` is not 6 ASCII digits
    fn try_from(value: &str) -> Genemap2Result<Self> {
        if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Genemap2Error::InvalidInput(format!(
                "MIM number must have 6 digits: {value}"
            )));
        }
        Ok(MimNumber {
            inner: value.parse::<u32>()?,
        })
    }
}

impl Debug for MimNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MimNumber({self})")
    }
}

impl Display for MimNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06}", self.inner)
    }
}

impl PartialEq<&str> for MimNumber {
    fn eq(&self, other: &&str) -> bool {
        MimNumber::try_from(*other).map_or(false, |other| *self == other)
    }
}

impl Serialize for MimNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The phenotype mapping key
///
/// The key states how the phenotype was mapped to the gene:
///
/// | Key | Meaning |
/// | --- | --- |
/// | 1 | the disorder is placed on the map based on its association to a gene, but the underlying defect is not known |
/// | 2 | the disorder has been placed on the map by linkage or other statistical method |
/// | 3 | the molecular basis for the disorder is known |
/// | 4 | a contiguous gene deletion or duplication syndrome |
///
/// Any other digit is accepted as well, it just has no known meaning.
#[derive(Clone, Copy, Default, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct MappingKey {
    inner: u8,
}

impl MappingKey {
    /// Returns the numerical value of the key
    pub fn as_u8(&self) -> u8 {
        self.inner
    }

    /// Returns the meaning of the mapping key, if it is one of the known keys
    ///
    /// # Examples
    ///
    /// ```
    /// use genemap2::MappingKey;
    ///
    /// let key = MappingKey::try_from("3").unwrap();
    /// assert_eq!(key.description(), Some("molecular basis known"));
    ///
    /// let key = MappingKey::try_from("7").unwrap();
    /// assert!(key.description().is_none());
    /// ```
    pub fn description(&self) -> Option<&'static str> {
        match self.inner {
            1 => Some("chromosome suspected"),
            2 => Some("linkage or family study"),
            3 => Some("molecular basis known"),
            4 => Some("contiguous gene deletion or duplication"),
            _ => None,
        }
    }
}

impl TryFrom<&str> for MappingKey {
    type Error = Genemap2Error;
    /// Parses a mapping key from a single ASCII digit
    ///
    /// # Errors
    ///
    /// [`Genemap2Error::InvalidInput`] if `value` is not a single ASCII digit
    fn try_from(value: &str) -> Genemap2Result<Self> {
        match value.as_bytes() {
            [digit] if digit.is_ascii_digit() => Ok(MappingKey {
                inner: digit - b'0',
            }),
            _ => Err(Genemap2Error::InvalidInput(format!(
                "mapping key must be a single digit: {value}"
            ))),
        }
    }
}

impl Debug for MappingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MappingKey({self})")
    }
}

impl Display for MappingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl PartialEq<&str> for MappingKey {
    fn eq(&self, other: &&str) -> bool {
        MappingKey::try_from(*other).map_or(false, |other| *self == other)
    }
}

impl Serialize for MappingKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single phenotype of a gene
///
/// Phenotypes are listed in the `Phenotypes` column of genemap2, e.g.
///
/// ```text
/// Retinitis pigmentosa, 268000 (3), Autosomal recessive
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhenotypeAnnotation {
    name: String,
    mim_number: Option<MimNumber>,
    mapping_key: MappingKey,
    inheritance: Inheritance,
}

impl PhenotypeAnnotation {
    /// Initializes a new phenotype annotation
    ///
    /// Clients will rarely need this, phenotypes are created by the
    /// parser when reading a genemap2 file.
    pub fn new(
        name: &str,
        mim_number: Option<MimNumber>,
        mapping_key: MappingKey,
        inheritance: Inheritance,
    ) -> Self {
        Self {
            name: name.to_string(),
            mim_number,
            mapping_key,
            inheritance,
        }
    }

    /// The phenotype name, as written in the source file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The [`MimNumber`] of the phenotype, if present
    pub fn mim_number(&self) -> Option<MimNumber> {
        self.mim_number
    }

    /// The [`MappingKey`] of the phenotype
    pub fn mapping_key(&self) -> MappingKey {
        self.mapping_key
    }

    /// The inheritance modes of the phenotype, in source order
    pub fn inheritance(&self) -> &[String] {
        &self.inheritance
    }
}


#[cfg(test)]
mod test_mapping_key {
    use super::*;

    #[test]
    fn parse_valid() {
        let key = MappingKey::try_from("3").expect("single digit is valid");
        assert_eq!(key.as_u8(), 3);
        assert_eq!(key.to_string(), "3");
        assert_eq!(key, "3");
    }

    #[test]
    fn unknown_digit_is_accepted() {
        let key = MappingKey::try_from("9").expect("any digit is valid");
        assert!(key.description().is_none());
    }

    #[test]
    fn known_descriptions() {
        for k in ["1", "2", "3", "4"] {
            assert!(MappingKey::try_from(k).unwrap().description().is_some());
        }
    }

    #[test]
    fn invalid() {
        assert!(MappingKey::try_from("").is_err());
        assert!(MappingKey::try_from("12").is_err());
        assert!(MappingKey::try_from("x").is_err());
    }
}
