//! Source traits.
//!
//! A [`TopListSource`] yields the ranked app ids; a [`DetailSource`] turns
//! one app id into a [`GameRecord`]. The pipeline and coordinator only see
//! these traits, so tests can swap in fakes.

use async_trait::async_trait;
use steamtop_core::{AppId, GameRecord};

use crate::error::{FetchError, UpstreamError};

/// Source of the ranked app id list.
///
/// ## Implementing a Source
///
/// ```ignore
/// struct FixedTopList(Vec<AppId>);
///
/// #[async_trait]
/// impl TopListSource for FixedTopList {
///     fn id(&self) -> &str {
///         "fixed"
///     }
///
///     async fn top_ids(&self, count: usize) -> Result<Vec<AppId>, UpstreamError> {
///         Ok(self.0.iter().copied().take(count).collect())
///     }
/// }
/// ```
#[async_trait]
pub trait TopListSource: Send + Sync {
    /// Short identifier used in logs (e.g. `"steamspy"`).
    fn id(&self) -> &str;

    /// Returns at most `count` ids in ranking order.
    async fn top_ids(&self, count: usize) -> Result<Vec<AppId>, UpstreamError>;
}

/// Source of one record per app id.
///
/// Implementations hold no per-call mutable state and are called from many
/// tasks at once.
#[async_trait]
pub trait DetailSource: Send + Sync {
    /// Short identifier used in logs (e.g. `"storefront"`).
    fn id(&self) -> &str;

    /// Fetches and parses the page for one app.
    async fn fetch_record(&self, app_id: AppId) -> Result<GameRecord, FetchError>;
}
