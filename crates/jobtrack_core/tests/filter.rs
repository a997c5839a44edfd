use jobtrack_core::{project, ApplicationId, JobApplication, Status, StatusFilter};
use pretty_assertions::assert_eq;

fn record(id: &str, status: Status) -> JobApplication {
    JobApplication {
        id: ApplicationId::new(id),
        company: format!("Company {id}"),
        title: "Engineer".to_string(),
        date: "2024-01-05".to_string(),
        link: None,
        notes: None,
        status,
    }
}

fn collection() -> Vec<JobApplication> {
    vec![
        record("5", Status::Offer),
        record("4", Status::Applied),
        record("3", Status::Offer),
        record("2", Status::Rejected),
        record("1", Status::Applied),
    ]
}

fn ids(projection: &[&JobApplication]) -> Vec<String> {
    projection.iter().map(|app| app.id.to_string()).collect()
}

#[test]
fn all_returns_collection_unchanged() {
    let apps = collection();
    let projected: Vec<JobApplication> = project(&apps, StatusFilter::All)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(projected, apps);
}

#[test]
fn status_filter_keeps_matching_subsequence_in_order() {
    let apps = collection();
    assert_eq!(ids(&project(&apps, StatusFilter::Only(Status::Offer))), vec!["5", "3"]);
    assert_eq!(ids(&project(&apps, StatusFilter::Only(Status::Applied))), vec!["4", "1"]);
    assert_eq!(ids(&project(&apps, StatusFilter::Only(Status::Rejected))), vec!["2"]);
    assert!(project(&apps, StatusFilter::Only(Status::Interviewing)).is_empty());
}

#[test]
fn projection_is_idempotent_and_leaves_source_alone() {
    let apps = collection();
    let snapshot = apps.clone();
    let filter = StatusFilter::Only(Status::Applied);

    let first = ids(&project(&apps, filter));
    let second = ids(&project(&apps, filter));
    assert_eq!(first, second);
    assert_eq!(apps, snapshot);
}

#[test]
fn projection_of_empty_collection_is_empty() {
    assert!(project(&[], StatusFilter::All).is_empty());
    assert!(project(&[], StatusFilter::Only(Status::Offer)).is_empty());
}
