use serde::{Deserialize, Serialize};

use crate::model::error::{ModelError, ModelResult};
use crate::model::repo::ResourceTyped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Finance,
    Health,
    Education,
    Manufacturing,
    Retail,
    Services,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Programming,
    DataAnalysis,
    ProjectManagement,
    Design,
    Marketing,
    Sales,
    CustomerService,
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CareerGoal {
    CareerChange,
    IntegrateInCurrentRole,
    Employability,
    Entrepreneurship,
    UnderstandImpact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    /// Free content only
    FreeOnly,
    /// Up to 100 USD
    Low,
    /// Up to 500 USD
    Medium,
    /// More than 500 USD
    High,
}

/// Answers of the diagnostic questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DiagnosticProfile {
    name: String,
    years_experience: u32,
    industry: Industry,
    #[serde(default)]
    skills: Vec<Skill>,
    #[serde(default)]
    goals: Vec<CareerGoal>,
    budget: Budget,
}

impl ResourceTyped for DiagnosticProfile {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Diagnostic
    }
}

impl DiagnosticProfile {
    pub fn new<S: Into<String>>(
        name: S,
        years_experience: u32,
        industry: Industry,
        skills: Vec<Skill>,
        goals: Vec<CareerGoal>,
        budget: Budget,
    ) -> Self {
        Self {
            name: name.into(),
            years_experience,
            industry,
            skills,
            goals,
            budget,
        }
    }

    /// Trims the name and drops repeated checkbox answers.
    pub fn normalized(mut self) -> ModelResult<Self> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ModelError::InvalidInput("name must not be blank"));
        }
        self.name = name.to_string();

        let mut seen = std::collections::HashSet::new();
        self.skills.retain(|s| seen.insert(*s));
        let mut seen = std::collections::HashSet::new();
        self.goals.retain(|g| seen.insert(*g));

        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn years_experience(&self) -> u32 {
        self.years_experience
    }

    pub fn industry(&self) -> Industry {
        self.industry
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn goals(&self) -> &[CareerGoal] {
        &self.goals
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let profile = DiagnosticProfile::new("   ", 3, Industry::Retail, vec![], vec![], Budget::Low);
        assert!(matches!(
            profile.normalized(),
            Err(ModelError::InvalidInput(_))
        ));
    }

    #[test]
    fn duplicates_are_dropped() {
        let profile = DiagnosticProfile::new(
            " Ana ",
            3,
            Industry::Finance,
            vec![Skill::Design, Skill::Design, Skill::Sales],
            vec![CareerGoal::Employability, CareerGoal::Employability],
            Budget::Medium,
        )
        .normalized()
        .unwrap();

        assert_eq!(profile.name(), "Ana");
        assert_eq!(profile.skills(), &[Skill::Design, Skill::Sales]);
        assert_eq!(profile.goals(), &[CareerGoal::Employability]);
    }

    #[test]
    fn parses_snake_case_options() {
        let profile: DiagnosticProfile = serde_json::from_value(serde_json::json!({
            "name": "Luis",
            "years_experience": 7,
            "industry": "technology",
            "skills": ["data_analysis"],
            "goals": ["integrate_in_current_role"],
            "budget": "free_only"
        }))
        .unwrap();

        assert_eq!(profile.industry(), Industry::Technology);
        assert_eq!(profile.budget(), Budget::FreeOnly);
        assert_eq!(profile.skills(), &[Skill::DataAnalysis]);
    }
}
