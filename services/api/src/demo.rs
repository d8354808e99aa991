use clap::Args;
use job_board::board::{
    BoardFixture, Bookmarks, Company, Job, JobPosting, Listing, ModerationReport, UserAccount,
};
use job_board::error::AppError;
use job_board::filtering::{FilterCriteria, FilterableView};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the admin dashboard portion of the demo.
    #[arg(long)]
    pub(crate) skip_admin: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let fixture = BoardFixture::sample();

    println!("Job board filtering demo");
    job_seeker_walkthrough(&fixture)?;
    company_walkthrough(&fixture)?;

    if !args.skip_admin {
        admin_walkthrough(&fixture)?;
    }

    Ok(())
}

fn job_seeker_walkthrough(fixture: &BoardFixture) -> Result<(), AppError> {
    println!("\nJob listings");
    let schema = Job::schema();
    for option in schema.facet_options(fixture.jobs(), "type")? {
        println!("  type option {} ({} jobs)", option.value, option.count);
    }

    let mut view = FilterableView::new(fixture.jobs(), schema);
    view.subscribe(|criteria, derived| render_step(criteria, derived));

    view.select_facet("type", "Full-time")?;
    view.reset();
    view.set_search_term("design");
    view.select_facet("location", "Remote")?;
    view.reset();

    let mut bookmarks = Bookmarks::new();
    bookmarks.toggle(3);
    bookmarks.toggle(6);
    let derived = view.results();
    let saved: Vec<&str> = bookmarks.filter(&derived).iter().map(|job| job.title).collect();
    println!("  bookmarked: {}", saved.join(", "));
    Ok(())
}

fn company_walkthrough(fixture: &BoardFixture) -> Result<(), AppError> {
    println!("\nCompany directory");
    let mut view = FilterableView::new(fixture.companies(), Company::schema());
    view.subscribe(|criteria, derived| render_step(criteria, derived));

    view.select_facet("industry", "technology")?;
    view.clear_facet("industry")?;
    view.set_search_term("innovations");
    Ok(())
}

fn admin_walkthrough(fixture: &BoardFixture) -> Result<(), AppError> {
    println!("\nAdmin dashboard");

    let mut users = FilterableView::new(fixture.users(), UserAccount::schema());
    users.subscribe(|criteria, derived| render_step(criteria, derived));
    users.select_facet("status", "pending")?;

    let mut postings = FilterableView::new(fixture.postings(), JobPosting::schema());
    postings.subscribe(|criteria, derived| render_step(criteria, derived));
    postings.select_facet("status", "approved")?;

    let mut reports = FilterableView::new(fixture.reports(), ModerationReport::schema());
    reports.subscribe(|criteria, derived| render_step(criteria, derived));
    reports.select_facet("status", "pending")?;
    reports.set_search_term("spam");

    let summary = reports.summary();
    if let Some(empty) = summary.empty_state {
        println!("  {} | {}", empty.message, empty.hint);
    }
    Ok(())
}

fn render_step<L: Listing>(criteria: &FilterCriteria, derived: &[&L]) {
    let ids: Vec<String> = derived.iter().map(|record| record.id().to_string()).collect();
    println!(
        "  [{}] {} -> {} match(es) [{}]",
        L::COLLECTION,
        describe_criteria(criteria),
        derived.len(),
        ids.join(", ")
    );
}

fn describe_criteria(criteria: &FilterCriteria) -> String {
    if criteria.is_default() {
        return "no filters".to_string();
    }

    let mut parts = Vec::new();
    if !criteria.search_term().is_empty() {
        parts.push(format!("search \"{}\"", criteria.search_term()));
    }
    for (facet, value) in criteria.active_facets() {
        parts.push(format!("{facet}={value}"));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_description_lists_search_and_facets() {
        let criteria = FilterCriteria::new()
            .with_search("design")
            .with_facet("location", "Remote");
        assert_eq!(
            describe_criteria(&criteria),
            "search \"design\", location=Remote"
        );
        assert_eq!(describe_criteria(&FilterCriteria::new()), "no filters");
    }

    #[test]
    fn demo_runs_every_walkthrough() {
        run_demo(DemoArgs::default()).expect("demo completes");
    }
}
