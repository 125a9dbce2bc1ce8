//! Wellbeing and issue use-case service.
//!
//! # Responsibility
//! - Aggregate wellbeing logs and open issues into gauge statistics.
//! - Provide report/resolve/log entry points.
//!
//! # Invariants
//! - Stats with no logs carry no score and no trend; only the open issue
//!   count is always set.
//! - Trend compares the latest log with the one before it.

use crate::model::health::{
    validate_score, validate_symptom, Issue, Severity, Trend, WellbeingLog, WellbeingStats,
};
use crate::model::pet::PetId;
use crate::repo::error::{DataError, DataResult};
use crate::repo::health_repo::HealthRepository;
use crate::service::{log_mutation, log_read};
use std::collections::BTreeMap;
use std::time::Instant;
use uuid::Uuid;

pub struct WellbeingService<R: HealthRepository> {
    repo: R,
}

impl<R: HealthRepository> WellbeingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Gauge statistics for one pet.
    pub fn pet_stats(&self, pet_id: PetId) -> DataResult<WellbeingStats> {
        let logs = log_read("wellbeing_logs", self.repo.list_wellbeing_logs(pet_id))?;
        let issues = log_read("issue_list", self.repo.list_issues(pet_id))?;
        let open_issues = issues.iter().filter(|issue| !issue.resolved).count();
        Ok(pet_wellbeing_stats(&logs, open_issues))
    }

    /// Gauge statistics across every pet.
    pub fn overall_stats(&self) -> DataResult<WellbeingStats> {
        let logs = log_read("wellbeing_logs", self.repo.list_all_wellbeing_logs())?;
        let open_issues = log_read("issue_list_open", self.repo.list_open_issues())?;
        Ok(overall_wellbeing_stats(&logs, open_issues.len()))
    }

    pub fn list_wellbeing_logs(&self, pet_id: PetId) -> DataResult<Vec<WellbeingLog>> {
        log_read("wellbeing_logs", self.repo.list_wellbeing_logs(pet_id))
    }

    pub fn log_wellbeing(
        &self,
        pet_id: PetId,
        score: u8,
        note: Option<&str>,
    ) -> DataResult<WellbeingLog> {
        let started_at = Instant::now();
        let result = validate_score(score)
            .map_err(DataError::from)
            .and_then(|()| self.repo.log_wellbeing(pet_id, score, note));
        log_mutation("wellbeing_log", started_at, result)
    }

    pub fn list_issues(&self, pet_id: PetId) -> DataResult<Vec<Issue>> {
        log_read("issue_list", self.repo.list_issues(pet_id))
    }

    pub fn list_open_issues(&self) -> DataResult<Vec<Issue>> {
        log_read("issue_list_open", self.repo.list_open_issues())
    }

    pub fn report_issue(
        &self,
        pet_id: PetId,
        severity: Severity,
        symptom: &str,
    ) -> DataResult<Issue> {
        let started_at = Instant::now();
        let result = validate_symptom(symptom)
            .map_err(DataError::from)
            .and_then(|()| self.repo.report_issue(pet_id, severity, symptom));
        log_mutation("issue_report", started_at, result)
    }

    pub fn resolve_issue(&self, id: Uuid) -> DataResult<Issue> {
        let started_at = Instant::now();
        log_mutation("issue_resolve", started_at, self.repo.resolve_issue(id))
    }
}

/// Stats of one pet from its logs (any order).
pub fn pet_wellbeing_stats(logs: &[WellbeingLog], open_issues: usize) -> WellbeingStats {
    let mut ordered: Vec<&WellbeingLog> = logs.iter().collect();
    ordered.sort_by_key(|log| log.logged_at);

    let mut stats = WellbeingStats {
        open_issues_count: count_u32(open_issues),
        ..WellbeingStats::default()
    };
    let Some(latest) = ordered.last() else {
        return stats;
    };
    stats.current_score = Some(latest.score);
    stats.last_update = Some(latest.logged_at);
    if ordered.len() >= 2 {
        let previous = ordered[ordered.len() - 2];
        let (trend, percentage) = trend_between(f64::from(previous.score), f64::from(latest.score));
        stats.trend = Some(trend);
        stats.trend_percentage = percentage;
    }
    stats
}

/// Stats across pets: the score is the rounded mean of each pet's latest
/// log, compared with the mean of each pet's log before that (a pet with a
/// single log contributes the same score to both).
pub fn overall_wellbeing_stats(logs: &[WellbeingLog], open_issues: usize) -> WellbeingStats {
    let mut per_pet: BTreeMap<PetId, Vec<&WellbeingLog>> = BTreeMap::new();
    for log in logs {
        per_pet.entry(log.pet_id).or_default().push(log);
    }

    let mut stats = WellbeingStats {
        open_issues_count: count_u32(open_issues),
        ..WellbeingStats::default()
    };
    if per_pet.is_empty() {
        return stats;
    }

    let mut latest_sum = 0.0;
    let mut previous_sum = 0.0;
    let mut has_history = false;
    for pet_logs in per_pet.values_mut() {
        pet_logs.sort_by_key(|log| log.logged_at);
        let latest = pet_logs[pet_logs.len() - 1];
        let previous = if pet_logs.len() >= 2 {
            has_history = true;
            pet_logs[pet_logs.len() - 2]
        } else {
            latest
        };
        latest_sum += f64::from(latest.score);
        previous_sum += f64::from(previous.score);
        stats.last_update = stats.last_update.max(Some(latest.logged_at));
    }

    let pets = per_pet.len() as f64;
    let current = latest_sum / pets;
    stats.current_score = Some(current.round() as u8);
    if has_history {
        let (trend, percentage) = trend_between(previous_sum / pets, current);
        stats.trend = Some(trend);
        stats.trend_percentage = percentage;
    }
    stats
}

fn trend_between(previous: f64, current: f64) -> (Trend, Option<i32>) {
    let trend = if current > previous {
        Trend::Up
    } else if current < previous {
        Trend::Down
    } else {
        Trend::Stable
    };
    let percentage = if previous > 0.0 {
        Some(((current - previous) / previous * 100.0).round() as i32)
    } else if current == previous {
        Some(0)
    } else {
        None
    };
    (trend, percentage)
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
