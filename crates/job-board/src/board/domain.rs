use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub const fn ordered() -> [Self; 4] {
        [Self::FullTime, Self::PartTime, Self::Contract, Self::Internship]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccountRole {
    #[serde(rename = "Job Seeker")]
    JobSeeker,
    Recruiter,
    Admin,
}

impl AccountRole {
    pub const fn ordered() -> [Self; 3] {
        [Self::JobSeeker, Self::Recruiter, Self::Admin]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::JobSeeker => "Job Seeker",
            Self::Recruiter => "Recruiter",
            Self::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Inactive,
    Pending,
}

impl AccountStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Active, Self::Inactive, Self::Pending]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

/// Moderation state of a job posting in the admin queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingStatus {
    Approved,
    Pending,
    Rejected,
}

impl PostingStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Approved, Self::Pending, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Investigating,
    Resolved,
}

impl ReportStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Pending, Self::Investigating, Self::Resolved]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Investigating => "investigating",
            Self::Resolved => "resolved",
        }
    }
}

/// What a moderation report was filed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReportSubject {
    #[serde(rename = "Job Posting")]
    JobPosting,
    User,
    Company,
}

impl ReportSubject {
    pub const fn ordered() -> [Self; 3] {
        [Self::JobPosting, Self::User, Self::Company]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::JobPosting => "Job Posting",
            Self::User => "User",
            Self::Company => "Company",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceKind {
    Article,
    Template,
    Video,
}

impl ResourceKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Article, Self::Template, Self::Video]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Template => "Template",
            Self::Video => "Video",
        }
    }
}

/// Public job listing.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub posted: &'static str,
    pub description: &'static str,
    pub tags: Vec<&'static str>,
}

/// Employer profile from the company directory.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub id: u32,
    pub name: &'static str,
    pub industry: &'static str,
    pub location: &'static str,
    pub size: &'static str,
    pub description: &'static str,
    pub founded: u16,
    pub website: &'static str,
    pub open_positions: u32,
    pub benefits: Vec<&'static str>,
    pub featured: bool,
}

/// Platform account shown in the admin users table.
#[derive(Debug, Clone, Serialize)]
pub struct UserAccount {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub role: AccountRole,
    pub status: AccountStatus,
    pub last_active: &'static str,
}

/// Job posting awaiting or past moderation in the admin jobs table.
#[derive(Debug, Clone, Serialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub status: PostingStatus,
    pub applicants: u32,
    pub posted: &'static str,
}

/// Content or account report raised by a platform user.
#[derive(Debug, Clone, Serialize)]
pub struct ModerationReport {
    pub id: u32,
    #[serde(rename = "type")]
    pub subject: ReportSubject,
    pub title: &'static str,
    pub status: ReportStatus,
    pub reported_by: &'static str,
    pub reported: &'static str,
}

/// Career resource from the resources library.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub id: u32,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub category: &'static str,
    pub description: &'static str,
    pub detail: ResourceDetail,
}

/// Kind-specific presentation details of a resource.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceDetail {
    Article {
        read_time: &'static str,
        published: &'static str,
    },
    Template {
        formats: Vec<&'static str>,
        downloads: &'static str,
    },
    Video {
        duration: &'static str,
        published: &'static str,
    },
}

impl Resource {
    /// Publication date for articles and videos; templates carry none.
    pub fn published_on(&self) -> Option<NaiveDate> {
        match self.detail {
            ResourceDetail::Article { published, .. } | ResourceDetail::Video { published, .. } => {
                NaiveDate::parse_from_str(published, "%b %d, %Y").ok()
            }
            ResourceDetail::Template { .. } => None,
        }
    }

    /// Reading time, running time, or available formats, depending on the kind.
    pub fn length_hint(&self) -> String {
        match &self.detail {
            ResourceDetail::Article { read_time, .. } => read_time.to_string(),
            ResourceDetail::Video { duration, .. } => duration.to_string(),
            ResourceDetail::Template {
                formats, downloads, ..
            } => format!("{} ({} downloads)", formats.join(", "), downloads),
        }
    }
}
