//! Issue, weight and wellbeing data-access contract.

use crate::model::health::{Issue, Severity, Weight, WellbeingLog};
use crate::model::pet::PetId;
use crate::repo::error::DataResult;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Repository interface for health tracking records.
pub trait HealthRepository {
    fn list_issues(&self, pet_id: PetId) -> DataResult<Vec<Issue>>;
    /// Unresolved issues across all pets.
    fn list_open_issues(&self) -> DataResult<Vec<Issue>>;
    fn report_issue(&self, pet_id: PetId, severity: Severity, symptom: &str) -> DataResult<Issue>;
    fn resolve_issue(&self, id: Uuid) -> DataResult<Issue>;

    /// Weights of one pet, oldest measurement first.
    fn list_weights(&self, pet_id: PetId) -> DataResult<Vec<Weight>>;
    fn latest_weight(&self, pet_id: PetId) -> DataResult<Option<Weight>>;
    /// `measured_at` defaults to now when `None`.
    fn add_weight(
        &self,
        pet_id: PetId,
        kg: f64,
        measured_at: Option<DateTime<Utc>>,
    ) -> DataResult<Weight>;
    fn delete_weight(&self, id: Uuid) -> DataResult<()>;

    /// Wellbeing logs of one pet, oldest first.
    fn list_wellbeing_logs(&self, pet_id: PetId) -> DataResult<Vec<WellbeingLog>>;
    /// Wellbeing logs of every pet, oldest first.
    fn list_all_wellbeing_logs(&self) -> DataResult<Vec<WellbeingLog>>;
    fn log_wellbeing(&self, pet_id: PetId, score: u8, note: Option<&str>)
        -> DataResult<WellbeingLog>;
}

impl<T: HealthRepository + ?Sized> HealthRepository for &T {
    fn list_issues(&self, pet_id: PetId) -> DataResult<Vec<Issue>> {
        (**self).list_issues(pet_id)
    }

    fn list_open_issues(&self) -> DataResult<Vec<Issue>> {
        (**self).list_open_issues()
    }

    fn report_issue(&self, pet_id: PetId, severity: Severity, symptom: &str) -> DataResult<Issue> {
        (**self).report_issue(pet_id, severity, symptom)
    }

    fn resolve_issue(&self, id: Uuid) -> DataResult<Issue> {
        (**self).resolve_issue(id)
    }

    fn list_weights(&self, pet_id: PetId) -> DataResult<Vec<Weight>> {
        (**self).list_weights(pet_id)
    }

    fn latest_weight(&self, pet_id: PetId) -> DataResult<Option<Weight>> {
        (**self).latest_weight(pet_id)
    }

    fn add_weight(
        &self,
        pet_id: PetId,
        kg: f64,
        measured_at: Option<DateTime<Utc>>,
    ) -> DataResult<Weight> {
        (**self).add_weight(pet_id, kg, measured_at)
    }

    fn delete_weight(&self, id: Uuid) -> DataResult<()> {
        (**self).delete_weight(id)
    }

    fn list_wellbeing_logs(&self, pet_id: PetId) -> DataResult<Vec<WellbeingLog>> {
        (**self).list_wellbeing_logs(pet_id)
    }

    fn list_all_wellbeing_logs(&self) -> DataResult<Vec<WellbeingLog>> {
        (**self).list_all_wellbeing_logs()
    }

    fn log_wellbeing(
        &self,
        pet_id: PetId,
        score: u8,
        note: Option<&str>,
    ) -> DataResult<WellbeingLog> {
        (**self).log_wellbeing(pet_id, score, note)
    }
}
