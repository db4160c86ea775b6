//! Domain value objects: titles, slugs, category names, colors, dates and the
//! two user-facing choice enums.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Every
//! user-typed string passes through a `FromStr` parser here before it reaches
//! a path or a front-matter line, so sanitization happens in exactly one place.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::domain::error::DomainError;

/// Characters removed from a title before it is written into front matter.
const FRONT_MATTER_UNSAFE: &[char] = &[':', '/'];

/// Characters removed from anything that becomes a path component.
const PATH_UNSAFE: &[char] = &['/', '\\', '?', '=', '|'];

fn strip(input: &str, unsafe_chars: &[char]) -> String {
    input.chars().filter(|c| !unsafe_chars.contains(c)).collect()
}

// ── HexColor ──────────────────────────────────────────────────────────────────

/// A 24-bit color rendered as `#rrggbb`.
///
/// Always lowercase, always six digits. Values above `0xffffff` are masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexColor(u32);

impl HexColor {
    pub const MAX: u32 = 0x00ff_ffff;

    pub const fn from_rgb(value: u32) -> Self {
        Self(value & Self::MAX)
    }

    pub const fn rgb(self) -> u32 {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidColor { value: s.into() };

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_rgb)
            .map_err(|_| invalid())
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── PostDate ──────────────────────────────────────────────────────────────────

/// The `update` date of a post, rendered `YYYY/MM/DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostDate(NaiveDate);

impl PostDate {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for PostDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y/%m/%d"))
    }
}

// ── Slug ──────────────────────────────────────────────────────────────────────

/// File-system and URL safe identifier derived from a post title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug: drop `:`, turn spaces into hyphens, strip path-unsafe
    /// characters.
    pub fn from_title(title: &str) -> Self {
        let hyphenated: String = title
            .chars()
            .filter(|c| *c != ':')
            .map(|c| if c == ' ' { '-' } else { c })
            .collect();
        Self(strip(&hyphenated, PATH_UNSAFE))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── PostTitle ─────────────────────────────────────────────────────────────────

/// A validated post title together with the slug its file is named after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle {
    title: String,
    slug: Slug,
}

impl PostTitle {
    /// Title as written into the `title:` front-matter field.
    pub fn as_str(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl FromStr for PostTitle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let title = strip(raw, FRONT_MATTER_UNSAFE).trim().to_string();
        let slug = Slug::from_title(raw);

        if title.is_empty() || slug.is_empty() {
            return Err(DomainError::InvalidTitle {
                title: raw.into(),
                reason: "nothing is left after removing unsafe characters".into(),
            });
        }

        Ok(Self { title, slug })
    }
}

// ── CategoryName ──────────────────────────────────────────────────────────────

/// Directory name of a category under the contents directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CategoryName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let name = strip(raw, PATH_UNSAFE).trim().to_string();
        let invalid = |reason: &str| DomainError::InvalidCategoryName {
            name: raw.into(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(invalid(
                "nothing is left after removing '/', '\\', '?', '=', '|'",
            ));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }

        Ok(Self(name))
    }
}

// ── DescriptionFormat ─────────────────────────────────────────────────────────

/// Serialization used for a category's description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DescriptionFormat {
    #[default]
    Json,
    Text,
}

impl DescriptionFormat {
    pub const ALL: [Self; 2] = [Self::Json, Self::Text];

    /// File extension, also used as the label in the format prompt.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

impl fmt::Display for DescriptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DescriptionFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "txt" | "text" => Ok(Self::Text),
            other => Err(DomainError::UnknownChoice {
                subject: "description format".into(),
                choice: other.into(),
            }),
        }
    }
}

// ── PostingType ───────────────────────────────────────────────────────────────

/// Whether the new post goes into an existing category or a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostingType {
    CurrentCategory,
    NewCategory,
}

impl PostingType {
    pub const ALL: [Self; 2] = [Self::CurrentCategory, Self::NewCategory];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::CurrentCategory => "Current Category",
            Self::NewCategory => "New Category",
        }
    }
}

impl fmt::Display for PostingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PostingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownChoice {
                subject: "posting type".into(),
                choice: s.into(),
            })
    }
}
