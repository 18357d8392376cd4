//! Game record types.
//!
//! - [`AppId`] - Positive identifier of a catalog entry
//! - [`GameRecord`] - Fields extracted from one storefront page

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use super::price::Price;
use crate::error::CoreError;

/// Canonical storefront location of every app page.
pub const STORE_APP_URL: &str = "https://store.steampowered.com/app";

// ============================================================================
// App Id
// ============================================================================

/// Identifier of one catalog entry (a Steam app id).
///
/// Always positive; zero is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(NonZeroU32);

impl AppId {
    /// Creates an id, rejecting zero.
    pub fn new(raw: u32) -> Result<Self, CoreError> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidAppId(raw.to_string()))
    }

    /// Returns the numeric value.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AppId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidAppId(s.to_string()))?;
        Self::new(raw)
    }
}

impl TryFrom<u32> for AppId {
    type Error = CoreError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

// ============================================================================
// Extracted Fields
// ============================================================================

/// Optional fields pulled out of a storefront document.
///
/// Every field may be absent; an all-`None` value means the page loaded but
/// carried none of the expected markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameFields {
    /// Title text.
    pub name: Option<String>,
    /// Release date exactly as printed on the page.
    pub release_date: Option<String>,
    /// Price label.
    pub price: Option<Price>,
    /// Review score, conventionally 0-100.
    pub review_score: Option<u32>,
}

// ============================================================================
// Game Record
// ============================================================================

/// One fetched storefront entry.
///
/// Built once from an id and its extracted fields; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    id: AppId,
    name: Option<String>,
    release_date: Option<String>,
    price: Option<Price>,
    review_score: Option<u32>,
    url: String,
}

impl GameRecord {
    /// Creates a record from an id and the fields parsed for it.
    pub fn new(id: AppId, fields: GameFields) -> Self {
        Self {
            id,
            name: fields.name,
            release_date: fields.release_date,
            price: fields.price,
            review_score: fields.review_score,
            url: Self::canonical_url(id),
        }
    }

    /// Creates a record with no extracted fields.
    pub fn empty(id: AppId) -> Self {
        Self::new(id, GameFields::default())
    }

    /// Returns the storefront URL for an id.
    pub fn canonical_url(id: AppId) -> String {
        format!("{STORE_APP_URL}/{id}")
    }

    /// The app id.
    pub fn id(&self) -> AppId {
        self.id
    }

    /// The title, if found.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The release date text, if found.
    pub fn release_date(&self) -> Option<&str> {
        self.release_date.as_deref()
    }

    /// The price, if any price signal was found.
    pub fn price(&self) -> Option<&Price> {
        self.price.as_ref()
    }

    /// The review score, if a numeric one was found.
    pub fn review_score(&self) -> Option<u32> {
        self.review_score
    }

    /// The canonical storefront URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns true if no optional field was extracted.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.release_date.is_none()
            && self.price.is_none()
            && self.review_score.is_none()
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.id),
            None => write!(f, "<unnamed> ({})", self.id),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
