//! Search fields, facets, and table columns of each job board collection.

use super::collection::{Collection, Listing};
use super::domain::{Company, Job, JobPosting, ModerationReport, Resource, UserAccount};
use crate::filtering::{join_cell, FacetMatch, RecordSchema, TableRow};

impl Listing for Job {
    const COLLECTION: Collection = Collection::Jobs;

    fn schema() -> RecordSchema<Self> {
        RecordSchema::<Self>::new(Self::COLLECTION.key(), "Job", "Jobs")
            .text("title", |job| job.title)
            .text("company", |job| job.company)
            .text("description", |job| job.description)
            .text_list("tags", |job| job.tags.as_slice())
            .facet("type", FacetMatch::Exact, |job| job.employment_type.label())
            // Selector offers "San Francisco" while listings read "San Francisco, CA".
            .facet("location", FacetMatch::Contains, |job| job.location)
    }

    fn id(&self) -> u32 {
        self.id
    }
}

impl TableRow for Job {
    const COLUMNS: &'static [&'static str] = &[
        "id", "title", "company", "location", "salary", "type", "posted", "tags",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.to_string(),
            self.company.to_string(),
            self.location.to_string(),
            self.salary.to_string(),
            self.employment_type.label().to_string(),
            self.posted.to_string(),
            join_cell(&self.tags),
        ]
    }
}

impl Listing for Company {
    const COLLECTION: Collection = Collection::Companies;

    fn schema() -> RecordSchema<Self> {
        RecordSchema::<Self>::new(Self::COLLECTION.key(), "Company", "Companies")
            .text("name", |company| company.name)
            .text("description", |company| company.description)
            .text("industry", |company| company.industry)
            .facet("industry", FacetMatch::IgnoreCase, |company| company.industry)
            .facet("featured", FacetMatch::Exact, |company| {
                if company.featured {
                    "true"
                } else {
                    "false"
                }
            })
    }

    fn id(&self) -> u32 {
        self.id
    }
}

impl TableRow for Company {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "industry",
        "location",
        "size",
        "founded",
        "open_positions",
        "featured",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.to_string(),
            self.industry.to_string(),
            self.location.to_string(),
            self.size.to_string(),
            self.founded.to_string(),
            self.open_positions.to_string(),
            self.featured.to_string(),
        ]
    }
}

impl Listing for UserAccount {
    const COLLECTION: Collection = Collection::Users;

    fn schema() -> RecordSchema<Self> {
        RecordSchema::<Self>::new(Self::COLLECTION.key(), "User", "Users")
            .text("name", |user| user.name)
            .text("email", |user| user.email)
            .facet("status", FacetMatch::Exact, |user| user.status.label())
            .facet("role", FacetMatch::Exact, |user| user.role.label())
    }

    fn id(&self) -> u32 {
        self.id
    }
}

impl TableRow for UserAccount {
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "email", "role", "status", "last_active"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.to_string(),
            self.email.to_string(),
            self.role.label().to_string(),
            self.status.label().to_string(),
            self.last_active.to_string(),
        ]
    }
}

impl Listing for JobPosting {
    const COLLECTION: Collection = Collection::Postings;

    fn schema() -> RecordSchema<Self> {
        RecordSchema::<Self>::new(Self::COLLECTION.key(), "Posting", "Postings")
            .text("title", |posting| posting.title)
            .text("company", |posting| posting.company)
            .facet("status", FacetMatch::Exact, |posting| posting.status.label())
    }

    fn id(&self) -> u32 {
        self.id
    }
}

impl TableRow for JobPosting {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "company",
        "location",
        "status",
        "applicants",
        "posted",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.to_string(),
            self.company.to_string(),
            self.location.to_string(),
            self.status.label().to_string(),
            self.applicants.to_string(),
            self.posted.to_string(),
        ]
    }
}

impl Listing for ModerationReport {
    const COLLECTION: Collection = Collection::Reports;

    fn schema() -> RecordSchema<Self> {
        RecordSchema::<Self>::new(Self::COLLECTION.key(), "Report", "Reports")
            .text("title", |report| report.title)
            .text("reported_by", |report| report.reported_by)
            .facet("status", FacetMatch::Exact, |report| report.status.label())
            .facet("type", FacetMatch::Exact, |report| report.subject.label())
    }

    fn id(&self) -> u32 {
        self.id
    }
}

impl TableRow for ModerationReport {
    const COLUMNS: &'static [&'static str] =
        &["id", "type", "title", "status", "reported_by", "reported"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.subject.label().to_string(),
            self.title.to_string(),
            self.status.label().to_string(),
            self.reported_by.to_string(),
            self.reported.to_string(),
        ]
    }
}

impl Listing for Resource {
    const COLLECTION: Collection = Collection::Resources;

    fn schema() -> RecordSchema<Self> {
        RecordSchema::<Self>::new(Self::COLLECTION.key(), "Resource", "Resources")
            .text("title", |resource| resource.title)
            .text("description", |resource| resource.description)
            .text("category", |resource| resource.category)
            .facet("type", FacetMatch::Exact, |resource| resource.kind.label())
            .facet("category", FacetMatch::Exact, |resource| resource.category)
    }

    fn id(&self) -> u32 {
        self.id
    }
}

impl TableRow for Resource {
    const COLUMNS: &'static [&'static str] =
        &["id", "type", "category", "title", "published", "length"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.kind.label().to_string(),
            self.category.to_string(),
            self.title.to_string(),
            self.published_on()
                .map(|date| date.to_string())
                .unwrap_or_default(),
            self.length_hint(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardFixture;
    use crate::filtering::{derive_view, FilterCriteria};

    #[test]
    fn every_row_has_one_cell_per_column() {
        let fixture = BoardFixture::sample();

        for job in fixture.jobs() {
            assert_eq!(job.cells().len(), Job::COLUMNS.len());
        }
        for company in fixture.companies() {
            assert_eq!(company.cells().len(), Company::COLUMNS.len());
        }
        for user in fixture.users() {
            assert_eq!(user.cells().len(), UserAccount::COLUMNS.len());
        }
        for posting in fixture.postings() {
            assert_eq!(posting.cells().len(), JobPosting::COLUMNS.len());
        }
        for report in fixture.reports() {
            assert_eq!(report.cells().len(), ModerationReport::COLUMNS.len());
        }
        for resource in fixture.resources() {
            assert_eq!(resource.cells().len(), Resource::COLUMNS.len());
        }
    }

    #[test]
    fn industry_facet_ignores_case() {
        let fixture = BoardFixture::sample();
        let criteria = FilterCriteria::new().with_facet("industry", "data analytics");

        let derived = derive_view(fixture.companies(), &Company::schema(), &criteria);
        let names: Vec<&str> = derived.iter().map(|company| company.name).collect();
        assert_eq!(names, vec!["DataInsights Corp"]);
    }

    #[test]
    fn featured_facet_selects_the_featured_companies() {
        let fixture = BoardFixture::sample();
        let criteria = FilterCriteria::new().with_facet("featured", "true");

        let derived = derive_view(fixture.companies(), &Company::schema(), &criteria);
        let names: Vec<&str> = derived.iter().map(|company| company.name).collect();
        assert_eq!(
            names,
            vec!["TechCorp Inc.", "CreativeDesign Studio", "DataInsights Corp"]
        );
    }

    #[test]
    fn admin_status_facet_is_case_sensitive() {
        let fixture = BoardFixture::sample();
        let lower = FilterCriteria::new().with_facet("status", "pending");
        let upper = FilterCriteria::new().with_facet("status", "Pending");

        assert_eq!(derive_view(fixture.users(), &UserAccount::schema(), &lower).len(), 1);
        assert!(derive_view(fixture.users(), &UserAccount::schema(), &upper).is_empty());
    }

    #[test]
    fn posting_search_covers_title_and_company() {
        let fixture = BoardFixture::sample();
        let criteria = FilterCriteria::new().with_search("design");

        let derived = derive_view(fixture.postings(), &JobPosting::schema(), &criteria);
        let ids: Vec<u32> = derived.iter().map(|posting| posting.id()).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn report_facets_combine() {
        let fixture = BoardFixture::sample();
        let criteria = FilterCriteria::new()
            .with_facet("type", "User")
            .with_facet("status", "pending");

        let derived = derive_view(fixture.reports(), &ModerationReport::schema(), &criteria);
        let titles: Vec<&str> = derived.iter().map(|report| report.title).collect();
        assert_eq!(titles, vec!["Spam messages from user"]);
    }

    #[test]
    fn resources_filter_by_kind_and_category() {
        let fixture = BoardFixture::sample();
        let criteria = FilterCriteria::new()
            .with_facet("type", "Video")
            .with_facet("category", "Interview");

        let derived = derive_view(fixture.resources(), &Resource::schema(), &criteria);
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].length_hint(), "22 minutes");
        assert_eq!(
            derived[0].published_on(),
            chrono::NaiveDate::from_ymd_opt(2025, 4, 12)
        );
    }
}
