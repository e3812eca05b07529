//! Catalog data model and loading
//!
//! The three tables (countries, courses, universities) are read-only input:
//! parsed once at startup, validated, and never mutated. Default data ships
//! embedded in the binary; `--data-dir` points at replacement JSON files.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use studydeck_core::{Keyed, Record};

/// Unranked records sort after every ranked one.
pub const RANK_SENTINEL: u32 = 999;

/// Two-letter uppercase country code (ISO 3166-1 alpha-2 shaped).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, String> {
        let raw = raw.as_ref();
        if raw.len() == 2 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(raw.to_ascii_uppercase()))
        } else {
            Err(format!("invalid country code {raw:?}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The flag image for a country, addressed by lowercase code. Computed,
/// never fetched.
pub fn flag_url(code: &CountryCode) -> String {
    format!(
        "https://flagcdn.com/w40/{}.png",
        code.as_str().to_ascii_lowercase()
    )
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: CountryCode,
}

impl Keyed for Country {
    type Key = CountryCode;

    fn key(&self) -> Self::Key {
        self.code.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Level {
    Undergraduate,
    Postgraduate,
    #[serde(rename = "PhD")]
    Phd,
    Diploma,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Undergraduate => "Undergraduate",
            Level::Postgraduate => "Postgraduate",
            Level::Phd => "PhD",
            Level::Diploma => "Diploma",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Mode {
    #[serde(rename = "Full time")]
    FullTime,
    #[serde(rename = "Part time")]
    PartTime,
    #[serde(rename = "Online / Distance")]
    Online,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::FullTime => "Full time",
            Mode::PartTime => "Part time",
            Mode::Online => "Online / Distance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub university: String,
    pub location: String,
    pub duration: String,
    pub intake: String,
    /// Display string ("$24,000 / year"); the filterable value is
    /// `numeric_fee`.
    pub fees: String,
    #[serde(default)]
    pub numeric_fee: Option<u32>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub ranking: Option<u32>,
    pub level: Level,
    pub mode: Mode,
    #[serde(default)]
    pub scholarship: bool,
}

impl Course {
    /// Fee for filtering and sorting; absent means 0.
    pub fn fee(&self) -> u32 {
        self.numeric_fee.unwrap_or(0)
    }
}

impl Record for Course {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.university.as_str()].into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct University {
    pub id: u32,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub ranking: Option<u32>,
}

impl Record for University {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.location.as_str()].into_iter()
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io { path: PathBuf, source: io::Error },
    Parse { table: String, source: serde_json::Error },
    DuplicateCountry(CountryCode),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            CatalogError::Parse { table, source } => {
                write!(f, "invalid {table} data: {source}")
            }
            CatalogError::DuplicateCountry(code) => {
                write!(f, "duplicate country code {code}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Parse { source, .. } => Some(source),
            CatalogError::DuplicateCountry(_) => None,
        }
    }
}

/// All three read-only tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub countries: Vec<Country>,
    pub courses: Vec<Course>,
    pub universities: Vec<University>,
}

impl Catalog {
    /// Parse the data shipped in the binary.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_json(
            include_str!("../data/countries.json"),
            include_str!("../data/courses.json"),
            include_str!("../data/universities.json"),
        )
    }

    /// Parse `countries.json`, `courses.json` and `universities.json` from
    /// a directory.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let read = |name: &str| -> Result<String, CatalogError> {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
        };
        Self::from_json(
            &read("countries.json")?,
            &read("courses.json")?,
            &read("universities.json")?,
        )
    }

    pub fn from_json(
        countries: &str,
        courses: &str,
        universities: &str,
    ) -> Result<Self, CatalogError> {
        fn parse<T: for<'de> Deserialize<'de>>(
            table: &str,
            json: &str,
        ) -> Result<T, CatalogError> {
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                table: table.to_string(),
                source,
            })
        }

        let catalog = Self {
            countries: parse("countries", countries)?,
            courses: parse("courses", courses)?,
            universities: parse("universities", universities)?,
        };
        catalog.validate()
    }

    fn validate(self) -> Result<Self, CatalogError> {
        for (i, country) in self.countries.iter().enumerate() {
            if self.countries[..i].iter().any(|c| c.code == country.code) {
                return Err(CatalogError::DuplicateCountry(country.code.clone()));
            }
        }
        tracing::info!(
            countries = self.countries.len(),
            courses = self.courses.len(),
            universities = self.universities.len(),
            "catalog loaded"
        );
        Ok(self)
    }
}
