//! Waitlist form state
//!
//! Holds the field values of the waitlist questionnaire, the step pointer of
//! the multi-page layout and the required-field rules of every form variant.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A single input of the waitlist questionnaire
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitlistField {
    #[display("full_name")]
    FullName,
    #[display("email")]
    Email,
    #[display("company")]
    Company,
    /// Job title in the survey forms, job role in the typed form
    #[display("job_title")]
    JobTitle,
    /// "individual" or "company"
    #[display("type")]
    #[serde(rename = "type")]
    EntryType,
    #[display("primary_use_case")]
    PrimaryUseCase,
    #[display("company_size")]
    CompanySize,
    #[display("first_task")]
    FirstTask,
    #[display("current_tools")]
    CurrentTools,
    #[display("pain_points")]
    PainPoints,
    #[display("how_did_you_hear")]
    HowDidYouHear,
    #[display("monthly_budget")]
    MonthlyBudget,
    #[display("urgency")]
    Urgency,
}

impl WaitlistField {
    pub const COUNT: usize = 13;

    /// All fields in display order
    pub const ALL: [WaitlistField; Self::COUNT] = [
        WaitlistField::FullName,
        WaitlistField::Email,
        WaitlistField::Company,
        WaitlistField::JobTitle,
        WaitlistField::EntryType,
        WaitlistField::PrimaryUseCase,
        WaitlistField::CompanySize,
        WaitlistField::FirstTask,
        WaitlistField::CurrentTools,
        WaitlistField::PainPoints,
        WaitlistField::HowDidYouHear,
        WaitlistField::MonthlyBudget,
        WaitlistField::Urgency,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Human readable label used in forms and validation messages
    pub fn label(self) -> &'static str {
        match self {
            WaitlistField::FullName => "Full Name",
            WaitlistField::Email => "Email",
            WaitlistField::Company => "Company",
            WaitlistField::JobTitle => "Job Title",
            WaitlistField::EntryType => "Joining As",
            WaitlistField::PrimaryUseCase => "Primary Use Case",
            WaitlistField::CompanySize => "Company Size",
            WaitlistField::FirstTask => "First Task to Automate",
            WaitlistField::CurrentTools => "Current Tools",
            WaitlistField::PainPoints => "Pain Points",
            WaitlistField::HowDidYouHear => "How Did You Hear About Us",
            WaitlistField::MonthlyBudget => "Budget Range",
            WaitlistField::Urgency => "Urgency",
        }
    }
}

/// Who is joining in the typed variant
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    #[display("individual")]
    Individual,
    #[display("company")]
    Company,
}

impl EntryType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "individual" => Some(EntryType::Individual),
            "company" => Some(EntryType::Company),
            _ => None,
        }
    }
}

/// Field values of one form instance. Empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: [String; WaitlistField::COUNT],
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: WaitlistField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: WaitlistField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn is_filled(&self, field: WaitlistField) -> bool {
        !self.get(field).is_empty()
    }

    /// Value as `Some` when non-empty
    pub fn optional(&self, field: WaitlistField) -> Option<String> {
        let value = self.get(field);
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
    }

    /// Fields and values in display order
    pub fn iter(&self) -> impl Iterator<Item = (WaitlistField, &str)> {
        WaitlistField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

/// Current page of a multi-page form, always within `1..=total`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPointer {
    current: u8,
    total: u8,
}

impl StepPointer {
    pub fn new(total: u8) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    pub fn advance(&mut self) {
        if self.current < self.total {
            self.current += 1;
        }
    }

    pub fn retreat(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Progress bar width in percent
    pub fn progress_percent(&self) -> u32 {
        u32::from(self.current) * 100 / u32::from(self.total)
    }
}

/// Which waitlist questionnaire is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    /// Three pages, needs a signed-in user
    #[default]
    Staged,
    /// Single page with the same questions, needs a signed-in user
    Compact,
    /// Single page, individual/company split, works without an account
    Typed,
}

impl FormVariant {
    /// Number of pages, `None` for single-page variants
    pub fn step_count(self) -> Option<u8> {
        match self {
            FormVariant::Staged => Some(3),
            FormVariant::Compact | FormVariant::Typed => None,
        }
    }

    pub fn requires_identity(self) -> bool {
        !matches!(self, FormVariant::Typed)
    }

    /// Fields rendered on a page. Single-page variants render everything on page 1.
    pub fn fields_for_step(self, step: u8) -> &'static [WaitlistField] {
        use WaitlistField::*;
        match (self, step) {
            (FormVariant::Staged, 1) => &[FullName, Email, Company, JobTitle],
            (FormVariant::Staged, 2) => &[PrimaryUseCase, CompanySize, FirstTask, CurrentTools],
            (FormVariant::Staged, 3) => &[PainPoints, HowDidYouHear, MonthlyBudget, Urgency],
            (FormVariant::Compact, 1) => &[
                FullName,
                Email,
                Company,
                JobTitle,
                PrimaryUseCase,
                CompanySize,
                FirstTask,
                CurrentTools,
                PainPoints,
                HowDidYouHear,
                MonthlyBudget,
            ],
            (FormVariant::Typed, 1) => &[
                FullName,
                Email,
                EntryType,
                Company,
                JobTitle,
                PrimaryUseCase,
                MonthlyBudget,
            ],
            _ => &[],
        }
    }

    /// Fields that must be non-empty before leaving `step`
    pub fn required_for_step(self, step: u8, state: &FormState) -> Vec<WaitlistField> {
        use WaitlistField::*;
        match (self, step) {
            (FormVariant::Staged, 1) => vec![FullName, Email],
            (FormVariant::Staged, 2) => vec![PrimaryUseCase, CompanySize, FirstTask],
            (FormVariant::Compact, 1) => vec![FullName, PrimaryUseCase, CompanySize, FirstTask],
            (FormVariant::Typed, 1) => {
                let mut required = vec![FullName, Email, EntryType, PrimaryUseCase];
                match self::EntryType::parse(state.get(EntryType)) {
                    Some(self::EntryType::Individual) => required.push(JobTitle),
                    Some(self::EntryType::Company) => required.push(Company),
                    None => {}
                }
                required
            }
            _ => Vec::new(),
        }
    }

    /// Required fields across every step, in step order
    pub fn required_fields(self, state: &FormState) -> Vec<WaitlistField> {
        let steps = self.step_count().unwrap_or(1);
        (1..=steps)
            .flat_map(|step| self.required_for_step(step, state))
            .collect()
    }

    /// Whether `field` is currently required on any page
    pub fn is_required(self, field: WaitlistField, state: &FormState) -> bool {
        self.required_fields(state).contains(&field)
    }

    /// Whether `field` is rendered. The typed variant shows either the job
    /// role or the company input depending on the entry type.
    pub fn is_visible(self, field: WaitlistField, state: &FormState) -> bool {
        if self != FormVariant::Typed {
            return true;
        }
        match field {
            WaitlistField::JobTitle => {
                EntryType::parse(state.get(WaitlistField::EntryType)) == Some(EntryType::Individual)
            }
            WaitlistField::Company => {
                EntryType::parse(state.get(WaitlistField::EntryType)) == Some(EntryType::Company)
            }
            _ => true,
        }
    }
}

/// Options for a select field as `(value, label)` pairs
pub fn select_options(variant: FormVariant, field: WaitlistField) -> &'static [(&'static str, &'static str)] {
    match (variant, field) {
        (_, WaitlistField::PrimaryUseCase) => &[
            ("workflow_automation", "Workflow Automation"),
            ("data_processing", "Data Processing"),
            ("customer_support", "Customer Support"),
            ("content_creation", "Content Creation"),
            ("team_collaboration", "Team Collaboration"),
            ("other", "Other"),
        ],
        (FormVariant::Staged, WaitlistField::CompanySize) => &[
            ("solo", "Solo"),
            ("2-10", "2-10 employees"),
            ("11-50", "11-50 employees"),
            ("51-200", "51-200 employees"),
            ("200+", "200+ employees"),
        ],
        (_, WaitlistField::CompanySize) => &[
            ("individual", "Individual"),
            ("2-10", "2-10 employees"),
            ("11-50", "11-50 employees"),
            ("51-200", "51-200 employees"),
            ("200+", "200+ employees"),
        ],
        (_, WaitlistField::HowDidYouHear) => &[
            ("twitter", "Twitter"),
            ("linkedin", "LinkedIn"),
            ("friend", "Friend/Colleague"),
            ("google", "Google Search"),
            ("newsletter", "Newsletter"),
            ("other", "Other"),
        ],
        (FormVariant::Typed, WaitlistField::MonthlyBudget) => &[
            ("under_5000", "Under ₹5,000"),
            ("5000-10000", "₹5,000 - ₹10,000"),
            ("10000-25000", "₹10,000 - ₹25,000"),
            ("25000-50000", "₹25,000 - ₹50,000"),
            ("50000+", "₹50,000+"),
        ],
        (_, WaitlistField::MonthlyBudget) => &[
            ("under_50", "Under $50"),
            ("50-100", "$50 - $100"),
            ("100-250", "$100 - $250"),
            ("250-500", "$250 - $500"),
            ("500+", "$500+"),
        ],
        (_, WaitlistField::Urgency) => &[
            ("low", "Low - Nice to have"),
            ("medium", "Medium - Would be helpful"),
            ("high", "High - Critical need"),
        ],
        (_, WaitlistField::EntryType) => &[("individual", "Individual"), ("company", "Company")],
        _ => &[],
    }
}
