//! Rows written to the `waitlist` and `profiles` tables

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::form::{FormState, FormVariant, WaitlistField};

/// Urgency stored when the user leaves the field untouched
pub const DEFAULT_URGENCY: &str = "medium";

/// Waitlist row produced by the survey-style forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub job_title: String,
    pub primary_use_case: String,
    pub company_size: String,
    pub first_task: String,
    pub current_tools: String,
    pub pain_points: String,
    pub how_did_you_hear: String,
    pub monthly_budget: String,
    pub urgency: String,
}

/// Waitlist row produced by the individual/company form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedRecord {
    pub user_id: Option<Uuid>,
    pub email: String,
    pub full_name: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub company: Option<String>,
    pub job_role: Option<String>,
    pub primary_use_case: String,
    pub budget_rupees: Option<String>,
}

/// One waitlist row, shaped per form variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WaitlistRecord {
    Survey(SurveyRecord),
    Typed(TypedRecord),
}

impl WaitlistRecord {
    /// Build the row for `variant` from validated form values
    pub fn from_form(variant: FormVariant, state: &FormState, user_id: Option<Uuid>) -> Option<Self> {
        use WaitlistField::*;

        match variant {
            FormVariant::Staged | FormVariant::Compact => {
                let urgency = state
                    .optional(Urgency)
                    .unwrap_or_else(|| DEFAULT_URGENCY.to_string());
                Some(WaitlistRecord::Survey(SurveyRecord {
                    user_id: user_id?,
                    full_name: state.get(FullName).to_string(),
                    email: state.get(Email).to_string(),
                    company: state.get(Company).to_string(),
                    job_title: state.get(JobTitle).to_string(),
                    primary_use_case: state.get(PrimaryUseCase).to_string(),
                    company_size: state.get(CompanySize).to_string(),
                    first_task: state.get(FirstTask).to_string(),
                    current_tools: state.get(CurrentTools).to_string(),
                    pain_points: state.get(PainPoints).to_string(),
                    how_did_you_hear: state.get(HowDidYouHear).to_string(),
                    monthly_budget: state.get(MonthlyBudget).to_string(),
                    urgency,
                }))
            }
            FormVariant::Typed => {
                let entry_type = state.get(EntryType).to_string();
                let is_company = entry_type == "company";
                Some(WaitlistRecord::Typed(TypedRecord {
                    user_id,
                    email: state.get(Email).to_lowercase(),
                    full_name: state.get(FullName).to_string(),
                    company: if is_company { state.optional(Company) } else { None },
                    job_role: if is_company { None } else { state.optional(JobTitle) },
                    entry_type,
                    primary_use_case: state.get(PrimaryUseCase).to_string(),
                    budget_rupees: state.optional(MonthlyBudget),
                }))
            }
        }
    }

    pub fn email(&self) -> &str {
        match self {
            WaitlistRecord::Survey(r) => &r.email,
            WaitlistRecord::Typed(r) => &r.email,
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            WaitlistRecord::Survey(r) => Some(r.user_id),
            WaitlistRecord::Typed(r) => r.user_id,
        }
    }
}

/// Patch applied to the signed-in user's profile row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileWaitlistPatch {
    pub is_on_waitlist: bool,
}

impl Default for ProfileWaitlistPatch {
    fn default() -> Self {
        Self {
            is_on_waitlist: true,
        }
    }
}

/// Existing waitlist row as returned by a lookup. The id is kept as raw
/// JSON since only the row's existence matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    #[serde(default)]
    pub id: serde_json::Value,
}

impl WaitlistEntry {
    /// First row of a PostgREST select, whatever its column types
    pub fn first_of(rows: Vec<serde_json::Value>) -> Option<Self> {
        rows.into_iter().next().map(|row| Self {
            id: row.get("id").cloned().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed_state(entry_type: &str) -> FormState {
        let mut state = FormState::new();
        state.set(WaitlistField::FullName, "Grace Hopper");
        state.set(WaitlistField::Email, "Grace@Navy.mil");
        state.set(WaitlistField::EntryType, entry_type);
        state.set(WaitlistField::Company, "Navy");
        state.set(WaitlistField::JobTitle, "Admiral");
        state.set(WaitlistField::PrimaryUseCase, "data_processing");
        state
    }

    #[test]
    fn test_typed_individual_nulls_company() {
        let record = WaitlistRecord::from_form(FormVariant::Typed, &typed_state("individual"), None)
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["company"], serde_json::Value::Null);
        assert_eq!(json["job_role"], "Admiral");
        assert_eq!(json["type"], "individual");
        assert_eq!(json["email"], "grace@navy.mil");
        assert_eq!(json["budget_rupees"], serde_json::Value::Null);
    }

    #[test]
    fn test_typed_company_nulls_job_role() {
        let record =
            WaitlistRecord::from_form(FormVariant::Typed, &typed_state("company"), None).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["company"], "Navy");
        assert_eq!(json["job_role"], serde_json::Value::Null);
    }

    #[test]
    fn test_survey_needs_user_id() {
        let state = FormState::new();
        assert!(WaitlistRecord::from_form(FormVariant::Staged, &state, None).is_none());
    }

    #[test]
    fn test_survey_defaults_urgency() {
        let user_id = Uuid::new_v4();
        let record =
            WaitlistRecord::from_form(FormVariant::Compact, &FormState::new(), Some(user_id))
                .unwrap();

        match record {
            WaitlistRecord::Survey(survey) => {
                assert_eq!(survey.urgency, DEFAULT_URGENCY);
                assert_eq!(survey.user_id, user_id);
            }
            WaitlistRecord::Typed(_) => panic!("expected survey record"),
        }
    }

    #[test]
    fn test_lookup_row_with_numeric_id_counts_as_found() {
        let rows: Vec<serde_json::Value> = serde_json::from_str(r#"[{"id": 42}]"#).unwrap();
        let entry = WaitlistEntry::first_of(rows).unwrap();
        assert_eq!(entry.id, serde_json::json!(42));

        let rows: Vec<serde_json::Value> =
            serde_json::from_str(r#"[{"id": "6f1c2a9e-5d0b-4c38-9d5e-1f2a3b4c5d6e"}]"#).unwrap();
        assert!(WaitlistEntry::first_of(rows).is_some());

        assert_eq!(WaitlistEntry::first_of(Vec::new()), None);
    }

    #[test]
    fn test_untagged_deserialize_picks_shape() {
        let json = r#"{
            "user_id": null,
            "email": "a@b.co",
            "full_name": "A",
            "type": "company",
            "company": "B",
            "job_role": null,
            "primary_use_case": "other",
            "budget_rupees": "50000+"
        }"#;
        let record: WaitlistRecord = serde_json::from_str(json).unwrap();
        assert!(matches!(record, WaitlistRecord::Typed(_)));
        assert_eq!(record.email(), "a@b.co");
        assert_eq!(record.user_id(), None);
    }
}
