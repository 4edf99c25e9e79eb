//! Wire types for the channel statistics query endpoint.

#[cfg(test)]
#[path = "series_test.rs"]
mod series_test;

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Which statistic a chart shows.
///
/// Wire names match the server's daily-statistics identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// Subscriber count.
    #[serde(rename = "subscribersStatDay")]
    Subscribers,
    /// Views per post.
    #[serde(rename = "viewsStatDay")]
    Views,
    /// Cumulative view count.
    #[serde(rename = "totalViewsStatDay")]
    TotalViews,
    /// Engagement rate, in percent.
    #[serde(rename = "eRRStatDay")]
    EngagementRate,
    /// Posts published.
    #[serde(rename = "postsStatDay")]
    Posts,
    /// Involvement, in percent.
    #[serde(rename = "involvementStatDay")]
    Involvement,
}

impl Metric {
    /// Every metric, in display order.
    pub const VALUES: [Self; 6] = [
        Self::Subscribers,
        Self::Views,
        Self::TotalViews,
        Self::EngagementRate,
        Self::Posts,
        Self::Involvement,
    ];

    /// Wire identifier sent to the stats endpoint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subscribers => "subscribersStatDay",
            Self::Views => "viewsStatDay",
            Self::TotalViews => "totalViewsStatDay",
            Self::EngagementRate => "eRRStatDay",
            Self::Posts => "postsStatDay",
            Self::Involvement => "involvementStatDay",
        }
    }

    /// Short key used for dataset ids and localization lookups.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Subscribers => "subscribers",
            Self::Views => "views",
            Self::TotalViews => "total_views",
            Self::EngagementRate => "err",
            Self::Posts => "posts",
            Self::Involvement => "involvement",
        }
    }
}

/// Total time window queried for a chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Range {
    /// Last seven days.
    Week,
    /// Last month.
    #[default]
    Month,
    /// Last year.
    Year,
    /// Everything the server has.
    All,
}

impl Range {
    /// Every range, in display order.
    pub const VALUES: [Self; 4] = [Self::Week, Self::Month, Self::Year, Self::All];

    /// Wire identifier sent to the stats endpoint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

/// Bucket granularity one display point covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// One point per calendar day.
    #[default]
    Day,
    /// One point per Sunday-to-Saturday week.
    Week,
    /// One point per calendar month.
    Month,
}

impl Step {
    /// Every step, in display order.
    pub const VALUES: [Self; 3] = [Self::Day, Self::Week, Self::Month];

    /// Wire identifier sent to the stats endpoint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Bucket label for a sample taken at `at`.
    ///
    /// The week label spans the Sunday-to-Saturday week containing `at`,
    /// independent of which weekday the sample itself falls on.
    #[must_use]
    pub fn label(self, at: DateTime<Utc>) -> String {
        match self {
            Self::Day => at.format("%B %-d %Y").to_string(),
            Self::Week => {
                let start = at - Duration::days(i64::from(at.weekday().num_days_from_sunday()));
                let end = start + Duration::days(6);
                format!("{} - {}", start.format("%B %-d %Y"), end.format("%B %-d %Y"))
            }
            Self::Month => at.format("%B %Y").to_string(),
        }
    }
}

/// Requested ordering of the returned samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    #[default]
    Asc,
    /// Newest first.
    Desc,
}

impl SortOrder {
    /// Wire identifier sent to the stats endpoint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// One timestamped sample as returned by the stats endpoint.
///
/// Samples arrive pre-aggregated to the requested step and sorted ascending
/// by timestamp; nothing client-side reorders them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// When the bucket this sample describes was recorded.
    pub created_at: DateTime<Utc>,
    /// Numeric value of the statistic for that bucket.
    pub amount: f64,
}

/// Parameters for one stats query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsQuery {
    /// Channel the statistics belong to.
    pub channel_id: String,
    /// Which statistic to fetch.
    pub metric: Metric,
    /// Total time window.
    pub range: Range,
    /// Bucket granularity.
    pub step: Step,
    /// Sample ordering.
    pub order: SortOrder,
}
