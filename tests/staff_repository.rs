use tempfile::TempDir;
use tinyreg::staff::{StaffRepository, Worker};

fn open_repo(dir: &TempDir) -> StaffRepository {
    StaffRepository::open(dir.path().join("workers.db")).unwrap()
}

#[test]
fn schema_creation_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);
    repo.ensure_schema().unwrap();
    repo.ensure_schema().unwrap();

    // Reopening the same file runs schema creation again.
    let reopened = StaffRepository::open(dir.path().join("workers.db")).unwrap();
    assert!(reopened.get_all_workers().unwrap().is_empty());
}

#[test]
fn get_or_create_post_returns_the_same_id_twice() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    let first = repo.get_or_create_post("engineer").unwrap();
    let second = repo.get_or_create_post("engineer").unwrap();
    assert_eq!(first, second);

    // The UNIQUE constraint on the title means a lost get-or-create
    // race would surface as an error, never as a duplicate row.
    let conn = rusqlite::Connection::open(dir.path().join("workers.db")).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn distinct_titles_get_distinct_ids() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    let engineer = repo.get_or_create_post("engineer").unwrap();
    let manager = repo.get_or_create_post("manager").unwrap();
    assert_ne!(engineer, manager);
}

#[test]
fn find_post_reports_absence_as_none() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    assert!(repo.find_post("nobody").unwrap().is_none());

    repo.get_or_create_post("engineer").unwrap();
    let post = repo.find_post("engineer").unwrap().unwrap();
    assert_eq!(post.title, "engineer");
}

#[test]
fn added_workers_come_back_joined_with_their_post() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    repo.add_worker("Alice", "engineer", 2010).unwrap();
    repo.add_worker("Bob", "engineer", 2020).unwrap();
    repo.add_worker("Carol", "manager", 2015).unwrap();

    let mut workers = repo.get_all_workers().unwrap();
    workers.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(
        workers,
        vec![
            Worker {
                name: "Alice".to_string(),
                post: "engineer".to_string(),
                year: 2010,
            },
            Worker {
                name: "Bob".to_string(),
                post: "engineer".to_string(),
                year: 2020,
            },
            Worker {
                name: "Carol".to_string(),
                post: "manager".to_string(),
                year: 2015,
            },
        ]
    );
}

#[test]
fn period_filter_compares_against_the_reference_year() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    repo.add_worker("Alice", "engineer", 2010).unwrap();
    repo.add_worker("Bob", "engineer", 2020).unwrap();

    // 2024 - 2010 = 14 >= 10, 2024 - 2020 = 4 < 10.
    let selected = repo.select_by_period_as_of(2024, 10).unwrap();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "Alice");
}

#[test]
fn period_filter_boundary_is_inclusive() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    repo.add_worker("Dave", "engineer", 2014).unwrap();

    let selected = repo.select_by_period_as_of(2024, 10).unwrap();
    assert_eq!(selected.len(), 1);
}

#[test]
fn selects_on_an_empty_database_return_nothing() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    assert!(repo.get_all_workers().unwrap().is_empty());
    assert!(repo.select_by_period_as_of(2024, 0).unwrap().is_empty());
}
