// Integration tests for the post read path: file read + base64 encoding

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rusqlite::Connection;
use studyhall_core::{Post, User};
use studyhall_store::repo::{PostRepo, UserRepo};
use studyhall_store::ImageStore;

fn setup_test_db() -> Connection {
    let mut conn = studyhall_store::db::open_in_memory().unwrap();
    studyhall_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

#[test]
fn test_post_read_embeds_base64_image() {
    let mut conn = setup_test_db();
    let upload_dir = tempfile::tempdir().unwrap();
    let image_bytes: &[u8] = b"\x89PNG\r\n\x1a\nfake image payload";
    std::fs::write(upload_dir.path().join("pic.png"), image_bytes).unwrap();
    let images = ImageStore::new(upload_dir.path());

    let user = User::new("Ada Lopez", "ada@example.com");
    let user = UserRepo::create(&mut conn, &user).unwrap().unwrap();
    let post = Post::for_user(user.id.unwrap(), "look at this", "pic.png");
    let post = PostRepo::create(&conn, &post).unwrap().unwrap();

    let snapshot = PostRepo::read(&post, &images).unwrap();
    assert_eq!(snapshot["note"], "look at this");
    assert_eq!(snapshot["image"], "pic.png");

    let encoded = snapshot["base64"].as_str().unwrap();
    assert_eq!(STANDARD.decode(encoded).unwrap(), image_bytes);
}

#[test]
fn test_user_read_embeds_post_payloads() {
    let mut conn = setup_test_db();
    let upload_dir = tempfile::tempdir().unwrap();
    std::fs::write(upload_dir.path().join("a.png"), b"aaa").unwrap();
    std::fs::write(upload_dir.path().join("b.png"), b"bbb").unwrap();
    let images = ImageStore::new(upload_dir.path());

    let mut user = User::new("Ben Carter", "ben@example.com");
    user.add_post(Post::new("first", "a.png"));
    user.add_post(Post::new("second", "b.png"));
    UserRepo::create(&mut conn, &user).unwrap().unwrap();

    let user = UserRepo::find_by_email(&conn, "ben@example.com")
        .unwrap()
        .unwrap();
    let snapshot = UserRepo::read(&user, &images).unwrap();

    let posts = snapshot["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(
        STANDARD
            .decode(posts[0]["base64"].as_str().unwrap())
            .unwrap(),
        b"aaa"
    );
    assert_eq!(
        STANDARD
            .decode(posts[1]["base64"].as_str().unwrap())
            .unwrap(),
        b"bbb"
    );
    // The snapshot never carries the password hash
    assert!(snapshot.get("password").is_none());
}

#[test]
fn test_missing_image_propagates_io_error() {
    let mut conn = setup_test_db();
    let upload_dir = tempfile::tempdir().unwrap();
    let images = ImageStore::new(upload_dir.path());

    let user = User::new("Cleo Nguyen", "cleo@example.com");
    let user = UserRepo::create(&mut conn, &user).unwrap().unwrap();
    let post = Post::for_user(user.id.unwrap(), "broken", "nonexistent.png");
    let post = PostRepo::create(&conn, &post).unwrap().unwrap();

    let err = PostRepo::read(&post, &images).unwrap_err();
    assert_eq!(err.code(), "ERR_IO");
}

#[test]
fn test_post_update_and_delete() {
    let mut conn = setup_test_db();

    let user = User::new("Dev Patel", "dev@example.com");
    let user = UserRepo::create(&mut conn, &user).unwrap().unwrap();
    let post = Post::for_user(user.id.unwrap(), "original", "old.png");
    let mut created = PostRepo::create(&conn, &post).unwrap().unwrap();

    PostRepo::update(&conn, &mut created, "", "new.png").unwrap();
    let found = PostRepo::find_by_id(&conn, created.id.unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(found.note, "original");
    assert_eq!(found.image, "new.png");

    PostRepo::delete(&conn, &created).unwrap();
    assert_eq!(PostRepo::count(&conn).unwrap(), 0);
}
