//! Circular wellbeing gauge.

use crate::model::health::{Trend, WellbeingStats, MAX_WELLBEING_SCORE};
use chrono::TimeZone;

pub const GAUGE_RADIUS: f64 = 36.0;
pub const LAST_UPDATE_FORMAT: &str = "%-d %b %Y";
const NO_UPDATE_PLACEHOLDER: &str = "\u{2014}";

#[derive(Debug, Clone, PartialEq)]
pub struct TrendBadge {
    pub trend: Trend,
    /// Signed percentage, e.g. `+5%`, `-3%`, `0%`; `None` when the change
    /// cannot be expressed as a percentage (previous score of 0).
    pub label: Option<String>,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    /// Missing scores render as 0.
    pub score: u8,
    pub circumference: f64,
    /// Stroke dash offset of the progress arc.
    pub dash_offset: f64,
    pub trend: Option<TrendBadge>,
    pub last_update_label: String,
    pub open_issues_count: u32,
}

impl GaugeView {
    pub fn from_stats<Tz: TimeZone>(stats: &WellbeingStats, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let score = stats.current_score.unwrap_or(0).min(MAX_WELLBEING_SCORE);
        let circumference = 2.0 * std::f64::consts::PI * GAUGE_RADIUS;
        let dash_offset =
            circumference - f64::from(score) / f64::from(MAX_WELLBEING_SCORE) * circumference;

        let trend = stats.trend.map(|trend| TrendBadge {
            trend,
            label: stats.trend_percentage.map(|percentage| {
                if percentage > 0 {
                    format!("+{percentage}%")
                } else {
                    format!("{percentage}%")
                }
            }),
            description: match trend {
                Trend::Up => "improving",
                Trend::Down => "declining",
                Trend::Stable => "stable",
            },
        });

        let last_update_label = match stats.last_update {
            Some(at) => at.with_timezone(tz).format(LAST_UPDATE_FORMAT).to_string(),
            None => NO_UPDATE_PLACEHOLDER.to_string(),
        };

        Self {
            score,
            circumference,
            dash_offset,
            trend,
            last_update_label,
            open_issues_count: stats.open_issues_count,
        }
    }

    /// The issue counter is hidden when nothing is open.
    pub fn shows_issue_count(&self) -> bool {
        self.open_issues_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::GaugeView;
    use crate::model::health::{Trend, WellbeingStats};
    use chrono::{TimeZone, Utc};

    #[test]
    fn empty_stats_render_an_empty_gauge() {
        let gauge = GaugeView::from_stats(&WellbeingStats::default(), &Utc);
        assert_eq!(gauge.score, 0);
        assert!((gauge.dash_offset - gauge.circumference).abs() < 1e-9);
        assert_eq!(gauge.trend, None);
        assert_eq!(gauge.last_update_label, "\u{2014}");
        assert!(!gauge.shows_issue_count());
    }

    #[test]
    fn score_and_trend_are_rendered() {
        let stats = WellbeingStats {
            current_score: Some(75),
            trend: Some(Trend::Up),
            trend_percentage: Some(5),
            last_update: Some(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()),
            open_issues_count: 2,
        };
        let gauge = GaugeView::from_stats(&stats, &Utc);
        assert!((gauge.dash_offset - gauge.circumference * 0.25).abs() < 1e-9);
        let trend = gauge.trend.as_ref().expect("trend badge");
        assert_eq!(trend.label.as_deref(), Some("+5%"));
        assert_eq!(trend.description, "improving");
        assert_eq!(gauge.last_update_label, "16 Oct 2026");
        assert!(gauge.shows_issue_count());
    }

    #[test]
    fn trend_from_zero_has_no_percentage_label() {
        let stats = WellbeingStats {
            current_score: Some(40),
            trend: Some(Trend::Up),
            trend_percentage: None,
            ..WellbeingStats::default()
        };
        let trend = GaugeView::from_stats(&stats, &Utc)
            .trend
            .expect("trend badge");
        assert_eq!(trend.label, None);
        assert_eq!(trend.description, "improving");
    }
}
