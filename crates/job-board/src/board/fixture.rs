use super::domain::{
    AccountRole, AccountStatus, Company, EmploymentType, Job, JobPosting, ModerationReport,
    PostingStatus, ReportStatus, ReportSubject, Resource, ResourceDetail, ResourceKind,
    UserAccount,
};

/// Immutable sample data backing every collection for the session.
#[derive(Debug, Clone)]
pub struct BoardFixture {
    jobs: Vec<Job>,
    companies: Vec<Company>,
    users: Vec<UserAccount>,
    postings: Vec<JobPosting>,
    reports: Vec<ModerationReport>,
    resources: Vec<Resource>,
}

impl BoardFixture {
    pub fn sample() -> Self {
        Self {
            jobs: sample_jobs(),
            companies: sample_companies(),
            users: sample_users(),
            postings: sample_postings(),
            reports: sample_reports(),
            resources: sample_resources(),
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn reports(&self) -> &[ModerationReport] {
        &self.reports
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

fn sample_jobs() -> Vec<Job> {
    vec![
        Job {
            id: 1,
            title: "Front-End Developer",
            company: "TechCorp Inc.",
            location: "San Francisco, CA",
            salary: "$90,000 - $120,000",
            employment_type: EmploymentType::FullTime,
            posted: "2 days ago",
            description: "We're looking for an experienced Front-End Developer to join our team. You'll be responsible for building user interfaces using React, TypeScript, and modern CSS frameworks.",
            tags: vec!["React", "TypeScript", "CSS", "JavaScript"],
        },
        Job {
            id: 2,
            title: "Product Manager",
            company: "InnovateSoft",
            location: "New York, NY",
            salary: "$110,000 - $140,000",
            employment_type: EmploymentType::FullTime,
            posted: "1 week ago",
            description: "Join our product team to lead the development of innovative software solutions. You'll work closely with designers, developers, and stakeholders to deliver exceptional products.",
            tags: vec!["Product Management", "Agile", "User Research", "Roadmapping"],
        },
        Job {
            id: 3,
            title: "UX/UI Designer",
            company: "DesignHub Agency",
            location: "Remote",
            salary: "$80,000 - $100,000",
            employment_type: EmploymentType::Contract,
            posted: "3 days ago",
            description: "We're seeking a creative UX/UI Designer to create intuitive and engaging digital experiences. You'll collaborate with our team on projects for various clients.",
            tags: vec!["Figma", "User Research", "Wireframing", "Prototyping"],
        },
        Job {
            id: 4,
            title: "Data Scientist",
            company: "DataInsights Corp",
            location: "Chicago, IL",
            salary: "$100,000 - $130,000",
            employment_type: EmploymentType::FullTime,
            posted: "Just now",
            description: "Looking for a Data Scientist to help us analyze large datasets and extract valuable insights. Experience with machine learning and statistical analysis required.",
            tags: vec!["Python", "Machine Learning", "SQL", "Data Analysis"],
        },
        Job {
            id: 5,
            title: "Marketing Specialist",
            company: "GrowthMarketing",
            location: "Austin, TX",
            salary: "$65,000 - $85,000",
            employment_type: EmploymentType::FullTime,
            posted: "5 days ago",
            description: "Join our marketing team to develop and implement effective marketing strategies. You'll work on digital campaigns, content creation, and social media management.",
            tags: vec!["Digital Marketing", "Content Strategy", "Social Media", "Analytics"],
        },
        Job {
            id: 6,
            title: "DevOps Engineer",
            company: "CloudSystems",
            location: "Seattle, WA",
            salary: "$95,000 - $125,000",
            employment_type: EmploymentType::FullTime,
            posted: "1 day ago",
            description: "We're looking for a DevOps Engineer to help us build and maintain our cloud infrastructure. Experience with AWS, Docker, and CI/CD pipelines is required.",
            tags: vec!["AWS", "Docker", "Kubernetes", "CI/CD"],
        },
    ]
}

fn sample_companies() -> Vec<Company> {
    vec![
        Company {
            id: 1,
            name: "TechCorp Inc.",
            industry: "Technology",
            location: "San Francisco, CA",
            size: "500-1000 employees",
            description: "Leading technology company specializing in software development and cloud services. TechCorp aims to innovate and transform the digital landscape with cutting-edge solutions.",
            founded: 2008,
            website: "techcorp.example.com",
            open_positions: 12,
            benefits: vec![
                "Remote Work",
                "Health Insurance",
                "401(k)",
                "Flexible Hours",
                "Professional Development",
            ],
            featured: true,
        },
        Company {
            id: 2,
            name: "CreativeDesign Studio",
            industry: "Design",
            location: "New York, NY",
            size: "50-200 employees",
            description: "Design studio focused on creating memorable brand experiences. We combine art and technology to deliver exceptional design solutions for global clients.",
            founded: 2015,
            website: "creativedesign.example.com",
            open_positions: 5,
            benefits: vec![
                "Creative Environment",
                "Health Benefits",
                "Team Events",
                "Learning Budget",
            ],
            featured: true,
        },
        Company {
            id: 3,
            name: "FinTech Solutions",
            industry: "Finance",
            location: "Chicago, IL",
            size: "200-500 employees",
            description: "Innovative financial technology company revolutionizing the way people and businesses manage their finances through smart, accessible solutions.",
            founded: 2011,
            website: "fintechsolutions.example.com",
            open_positions: 8,
            benefits: vec![
                "Competitive Salary",
                "Health & Dental",
                "Parental Leave",
                "Stock Options",
            ],
            featured: false,
        },
        Company {
            id: 4,
            name: "GreenEco Innovations",
            industry: "Sustainability",
            location: "Portland, OR",
            size: "50-200 employees",
            description: "Sustainable product company committed to creating eco-friendly solutions. We believe in business as a force for good and environmental stewardship.",
            founded: 2016,
            website: "greeneco.example.com",
            open_positions: 3,
            benefits: vec![
                "Sustainable Workplace",
                "Volunteer Time",
                "Health Insurance",
                "Eco-Bonus",
            ],
            featured: false,
        },
        Company {
            id: 5,
            name: "DataInsights Corp",
            industry: "Data Analytics",
            location: "Boston, MA",
            size: "200-500 employees",
            description: "Data analytics company specializing in turning complex data into actionable insights. We help businesses make smarter decisions through data.",
            founded: 2013,
            website: "datainsights.example.com",
            open_positions: 6,
            benefits: vec![
                "Flexible Work",
                "Health Coverage",
                "Continuing Education",
                "International Offices",
            ],
            featured: true,
        },
        Company {
            id: 6,
            name: "HealthTech Innovations",
            industry: "Healthcare",
            location: "Austin, TX",
            size: "50-200 employees",
            description: "Healthcare technology company focused on improving patient outcomes and healthcare delivery through innovative digital solutions.",
            founded: 2017,
            website: "healthtech.example.com",
            open_positions: 4,
            benefits: vec![
                "Medical Benefits",
                "Work-Life Balance",
                "Professional Growth",
                "Innovation Days",
            ],
            featured: false,
        },
    ]
}

fn sample_users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: 1,
            name: "Emma Wilson",
            email: "emma.w@example.com",
            role: AccountRole::JobSeeker,
            status: AccountStatus::Active,
            last_active: "2 hours ago",
        },
        UserAccount {
            id: 2,
            name: "Richard Moore",
            email: "richard.m@example.com",
            role: AccountRole::Recruiter,
            status: AccountStatus::Active,
            last_active: "1 day ago",
        },
        UserAccount {
            id: 3,
            name: "Sarah Johnson",
            email: "sarah.j@example.com",
            role: AccountRole::JobSeeker,
            status: AccountStatus::Inactive,
            last_active: "3 days ago",
        },
        UserAccount {
            id: 4,
            name: "Michael Chen",
            email: "michael.c@example.com",
            role: AccountRole::Recruiter,
            status: AccountStatus::Pending,
            last_active: "5 days ago",
        },
        UserAccount {
            id: 5,
            name: "Jennifer Lee",
            email: "jennifer.l@example.com",
            role: AccountRole::JobSeeker,
            status: AccountStatus::Active,
            last_active: "1 week ago",
        },
    ]
}

fn sample_postings() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: 1,
            title: "Senior React Developer",
            company: "TechCorp Inc.",
            location: "San Francisco, CA",
            status: PostingStatus::Approved,
            applicants: 18,
            posted: "2 days ago",
        },
        JobPosting {
            id: 2,
            title: "Marketing Manager",
            company: "Creative Solutions",
            location: "New York, NY",
            status: PostingStatus::Pending,
            applicants: 7,
            posted: "1 day ago",
        },
        JobPosting {
            id: 3,
            title: "UX Designer",
            company: "DesignHub",
            location: "Remote",
            status: PostingStatus::Approved,
            applicants: 12,
            posted: "3 days ago",
        },
        JobPosting {
            id: 4,
            title: "Financial Analyst",
            company: "InvestGrow",
            location: "Chicago, IL",
            status: PostingStatus::Rejected,
            applicants: 5,
            posted: "5 days ago",
        },
        JobPosting {
            id: 5,
            title: "HR Specialist",
            company: "GlobalHR",
            location: "Austin, TX",
            status: PostingStatus::Approved,
            applicants: 9,
            posted: "1 week ago",
        },
    ]
}

fn sample_reports() -> Vec<ModerationReport> {
    vec![
        ModerationReport {
            id: 1,
            subject: ReportSubject::JobPosting,
            title: "Inappropriate content in job description",
            status: ReportStatus::Pending,
            reported_by: "Alex T.",
            reported: "1 day ago",
        },
        ModerationReport {
            id: 2,
            subject: ReportSubject::User,
            title: "Fake recruiter profile",
            status: ReportStatus::Resolved,
            reported_by: "Maria G.",
            reported: "3 days ago",
        },
        ModerationReport {
            id: 3,
            subject: ReportSubject::JobPosting,
            title: "Misleading salary information",
            status: ReportStatus::Investigating,
            reported_by: "John D.",
            reported: "5 days ago",
        },
        ModerationReport {
            id: 4,
            subject: ReportSubject::Company,
            title: "Company information is inaccurate",
            status: ReportStatus::Resolved,
            reported_by: "Robert K.",
            reported: "1 week ago",
        },
        ModerationReport {
            id: 5,
            subject: ReportSubject::User,
            title: "Spam messages from user",
            status: ReportStatus::Pending,
            reported_by: "Lisa W.",
            reported: "1 week ago",
        },
    ]
}

fn sample_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: 1,
            title: "How to Write a Resume That Stands Out",
            kind: ResourceKind::Article,
            category: "Resume",
            description: "Learn the key elements of a modern resume and how to highlight your achievements effectively.",
            detail: ResourceDetail::Article {
                read_time: "8 min read",
                published: "Apr 15, 2025",
            },
        },
        Resource {
            id: 2,
            title: "Mastering the Art of Salary Negotiation",
            kind: ResourceKind::Article,
            category: "Career Growth",
            description: "Effective strategies to negotiate your salary with confidence and secure the compensation you deserve.",
            detail: ResourceDetail::Article {
                read_time: "12 min read",
                published: "Apr 10, 2025",
            },
        },
        Resource {
            id: 3,
            title: "Navigating Career Transitions Successfully",
            kind: ResourceKind::Article,
            category: "Career Change",
            description: "A comprehensive guide to making smooth career transitions, including skills assessment and industry research.",
            detail: ResourceDetail::Article {
                read_time: "15 min read",
                published: "Apr 5, 2025",
            },
        },
        Resource {
            id: 4,
            title: "Building Your Personal Brand Online",
            kind: ResourceKind::Article,
            category: "Personal Branding",
            description: "How to develop and maintain a strong professional presence online to attract career opportunities.",
            detail: ResourceDetail::Article {
                read_time: "10 min read",
                published: "Mar 28, 2025",
            },
        },
        Resource {
            id: 5,
            title: "Modern Professional Resume Template",
            kind: ResourceKind::Template,
            category: "Resume",
            description: "A clean, professional resume template designed to highlight your skills and experience effectively.",
            detail: ResourceDetail::Template {
                formats: vec!["DOCX", "PDF"],
                downloads: "2.5k",
            },
        },
        Resource {
            id: 6,
            title: "Creative Cover Letter Template",
            kind: ResourceKind::Template,
            category: "Cover Letter",
            description: "Stand out with this creative yet professional cover letter template that showcases your personality.",
            detail: ResourceDetail::Template {
                formats: vec!["DOCX", "PDF"],
                downloads: "1.8k",
            },
        },
        Resource {
            id: 7,
            title: "Interview Thank You Email Template",
            kind: ResourceKind::Template,
            category: "Interview",
            description: "A well-crafted thank you email template to send after job interviews to leave a positive impression.",
            detail: ResourceDetail::Template {
                formats: vec!["DOCX", "TXT"],
                downloads: "3.2k",
            },
        },
        Resource {
            id: 8,
            title: "Job Application Tracker Spreadsheet",
            kind: ResourceKind::Template,
            category: "Organization",
            description: "Keep track of your job applications, interviews, and follow-ups with this comprehensive spreadsheet.",
            detail: ResourceDetail::Template {
                formats: vec!["XLSX", "Google Sheets"],
                downloads: "5.1k",
            },
        },
        Resource {
            id: 9,
            title: "Ace Your Next Job Interview: Expert Tips and Techniques",
            kind: ResourceKind::Video,
            category: "Interview",
            description: "Learn proven strategies and techniques to perform your best in job interviews from career experts.",
            detail: ResourceDetail::Video {
                duration: "22 minutes",
                published: "Apr 12, 2025",
            },
        },
        Resource {
            id: 10,
            title: "LinkedIn Profile Optimization Workshop",
            kind: ResourceKind::Video,
            category: "Personal Branding",
            description: "A step-by-step guide to creating an attention-grabbing LinkedIn profile that attracts recruiters.",
            detail: ResourceDetail::Video {
                duration: "35 minutes",
                published: "Apr 8, 2025",
            },
        },
        Resource {
            id: 11,
            title: "Remote Work Success Strategies",
            kind: ResourceKind::Video,
            category: "Work-Life Balance",
            description: "Tips and best practices for thriving in remote work environments and maintaining productivity.",
            detail: ResourceDetail::Video {
                duration: "18 minutes",
                published: "Mar 25, 2025",
            },
        },
        Resource {
            id: 12,
            title: "Networking Strategies for Career Growth",
            kind: ResourceKind::Video,
            category: "Networking",
            description: "How to build and leverage professional relationships to advance your career and find opportunities.",
            detail: ResourceDetail::Video {
                duration: "28 minutes",
                published: "Mar 18, 2025",
            },
        },
    ]
}
