pub mod schema;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Audience segment used for targeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCohort {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub signup_from: Option<NaiveDate>,
    #[serde(default)]
    pub signup_to: Option<NaiveDate>,
    #[serde(default)]
    pub age_min: Option<u32>,
    #[serde(default)]
    pub age_max: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub audience_size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortUpsert {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_max: Option<u32>,
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCohortArgs {
    pub id: String,
    pub body: CohortUpsert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_skips_unset_bounds() {
        let body = CohortUpsert {
            name: "Teens".into(),
            platforms: vec!["ios".into()],
            age_min: Some(13),
            gender: "any".into(),
            ..CohortUpsert::default()
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Teens", "platforms": ["ios"], "ageMin": 13, "gender": "any" })
        );
    }

    #[test]
    fn test_cohort_dates() {
        let cohort: UserCohort = serde_json::from_str(
            r#"{"id":"k1","name":"Spring","signupFrom":"2024-03-01","signupTo":"2024-05-31"}"#,
        )
        .unwrap();
        assert_eq!(cohort.signup_from, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert!(cohort.platforms.is_empty());
    }
}
