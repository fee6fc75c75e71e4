// Integration tests for the seed routine against an on-disk database

use studyhall_store::repo::{QuizQuestionRepo, UserRepo};
use studyhall_store::{db, seed};

#[test]
fn test_seed_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studyhall.db");

    {
        let mut conn = db::open(&path).unwrap();
        let report = seed::run(&mut conn).unwrap();
        assert_eq!(report.users_created, 6);
        assert_eq!(report.questions_created, 3);
    }

    // Reopen and verify the data survived
    let conn = db::open(&path).unwrap();
    assert_eq!(UserRepo::count(&conn).unwrap(), 6);
    assert_eq!(QuizQuestionRepo::count(&conn).unwrap(), 3);

    let ada = UserRepo::find_by_email(&conn, "ada@example.com")
        .unwrap()
        .expect("seeded user should exist");
    assert!(!ada.posts.is_empty());
    assert!(ada.check_password("123qwerty"), "seed uses default password");
}

#[test]
fn test_seed_partial_overlap_skips_only_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studyhall.db");
    let mut conn = db::open(&path).unwrap();

    // Pre-create one of the seed users with a different name
    studyhall_store::migrations::apply_migrations(&mut conn).unwrap();
    let existing = studyhall_core::User::new("Pre Existing", "ada@example.com");
    UserRepo::create(&mut conn, &existing).unwrap().unwrap();

    let report = seed::run(&mut conn).unwrap();
    assert_eq!(report.users_created, 5, "One user collides and is skipped");
    assert_eq!(report.users_skipped, 1);
    assert_eq!(report.questions_created, 3);

    // The pre-existing row was not overwritten
    let ada = UserRepo::find_by_email(&conn, "ada@example.com")
        .unwrap()
        .unwrap();
    assert_eq!(ada.name, "Pre Existing");
}
