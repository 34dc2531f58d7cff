use contracts::domain::a006_user_cohort::{CohortUpsert, UpdateCohortArgs, UserCohort};
use contracts::shared::list::{ListResponse, Pagination};
use serde_json::Value;

use crate::shared::query::{MutationEndpoint, QueryEndpoint, QueryParams, RequestSpec, Tag};

const COHORTS: &str = "/admin/user/cohorts";

pub struct GetCohorts;

impl QueryEndpoint for GetCohorts {
    const NAME: &'static str = "getCohorts";
    type Args = Pagination;
    type Output = ListResponse<UserCohort>;

    fn request(pagination: &Self::Args) -> RequestSpec {
        RequestSpec::get(QueryParams::new().page(*pagination).append_to(COHORTS))
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Cohorts]
    }
}

pub struct GetCohort;

impl QueryEndpoint for GetCohort {
    const NAME: &'static str = "getCohort";
    type Args = String;
    type Output = UserCohort;

    fn request(cohort_id: &Self::Args) -> RequestSpec {
        RequestSpec::get(format!("{COHORTS}/{cohort_id}"))
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Cohorts]
    }
}

pub struct CreateCohort;

impl MutationEndpoint for CreateCohort {
    const NAME: &'static str = "createCohort";
    type Args = CohortUpsert;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::post(COHORTS, args)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Cohorts]
    }
}

pub struct UpdateCohort;

impl MutationEndpoint for UpdateCohort {
    const NAME: &'static str = "updateCohort";
    type Args = UpdateCohortArgs;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::put(format!("{COHORTS}/{}", args.id), &args.body)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Cohorts]
    }
}

pub struct DeleteCohort;

impl MutationEndpoint for DeleteCohort {
    const NAME: &'static str = "deleteCohort";
    type Args = String;
    type Output = Value;

    fn request(cohort_id: &Self::Args) -> RequestSpec {
        RequestSpec::delete(format!("{COHORTS}/{cohort_id}"))
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Cohorts]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::Method;

    #[test]
    fn test_cohort_urls() {
        assert_eq!(
            GetCohorts::request(&Pagination::default()).url,
            "/admin/user/cohorts?page=1&limit=10"
        );
        assert_eq!(GetCohort::request(&"k1".to_string()).url, "/admin/user/cohorts/k1");
        let spec = DeleteCohort::request(&"k1".to_string());
        assert_eq!(spec.method, Method::Delete);
        assert_eq!(spec.url, "/admin/user/cohorts/k1");
    }

    #[test]
    fn test_update_sends_body_only() {
        let args = UpdateCohortArgs {
            id: "k1".into(),
            body: CohortUpsert {
                name: "Teens".into(),
                platforms: vec!["web".into()],
                gender: "any".into(),
                ..CohortUpsert::default()
            },
        };
        let spec = UpdateCohort::request(&args);
        assert_eq!(spec.method, Method::Put);
        let body = spec.body.unwrap();
        assert_eq!(body["name"], "Teens");
        assert!(body.get("id").is_none());
    }
}
