use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Helper struct to manage test environment
struct TestEnv {
    _temp_dir: TempDir,
    work_dir: PathBuf,
    binary_path: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work_dir = temp_dir.path().to_path_buf();

        // Get the path to the compiled binary
        let mut binary_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        binary_path.push("target");
        binary_path.push("debug");
        binary_path.push("plaza");

        Self {
            _temp_dir: temp_dir,
            work_dir,
            binary_path,
        }
    }

    /// Run a plaza command and return the output
    fn run(&self, args: &[&str]) -> Result<String, String> {
        let output = Command::new(&self.binary_path)
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .expect("Failed to execute plaza command");

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(String::from_utf8_lossy(&output.stderr).to_string())
        }
    }

    /// Create a post and return its id, going through --json output.
    fn create_post(&self, title: &str, content: &str) -> i64 {
        let output = self
            .run(&["post", "create", title, content, "--json"])
            .expect("Create post failed");
        let post: Value = serde_json::from_str(&output).expect("Invalid JSON from post create");
        post["id"].as_i64().expect("Post id missing")
    }

    fn plaza_dir_exists(&self) -> bool {
        self.work_dir.join(".plaza").exists()
    }

    fn db_exists(&self) -> bool {
        self.work_dir.join(".plaza").join("posts.json").exists()
            && self.work_dir.join(".plaza").join("favorites.json").exists()
    }
}

#[test]
fn test_init_creates_plaza_directory() {
    let env = TestEnv::new();

    assert!(
        !env.plaza_dir_exists(),
        "Plaza directory should not exist initially"
    );

    let output = env.run(&["init"]).expect("Init command failed");
    assert!(output.contains("Initialized"));

    assert!(
        env.plaza_dir_exists(),
        "Plaza directory should exist after init"
    );
    assert!(env.db_exists(), "Data files should exist after init");
}

#[test]
fn test_init_is_idempotent() {
    let env = TestEnv::new();

    env.run(&["init"]).expect("First init failed");
    let output = env.run(&["init"]).expect("Second init failed");

    assert!(output.contains("already initialized"));
}

#[test]
fn test_commands_fail_without_init() {
    let env = TestEnv::new();

    let result = env.run(&["post", "list"]);
    assert!(result.is_err(), "Commands should fail without init");
    assert!(result.unwrap_err().contains("not initialized"));
}

#[test]
fn test_create_and_list_posts() {
    let env = TestEnv::new();
    env.run(&["init"]).expect("Init failed");

    // Initially no posts
    let output = env.run(&["post", "list"]).expect("List failed");
    assert!(output.contains("No posts yet"));

    let output = env
        .run(&["post", "create", "Hello", "World"])
        .expect("Create post failed");
    assert!(output.contains("Created post:"));

    let output = env.run(&["post", "list"]).expect("List failed");
    assert!(output.contains("Hello"));
    assert!(output.contains("0 like(s), 0 comment(s)"));
}

#[test]
fn test_list_is_newest_first() {
    let env = TestEnv::new();
    env.run(&["init"]).expect("Init failed");

    env.create_post("First post", "body");
    env.create_post("Second post", "body");

    let output = env
        .run(&["post", "list", "--json"])
        .expect("List json failed");
    let posts: Value = serde_json::from_str(&output).expect("Invalid JSON from post list");
    let posts = posts.as_array().expect("Expected a JSON array");

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["title"], "Second post");
    assert_eq!(posts[1]["title"], "First post");
}

#[test]
fn test_create_post_rejects_blank_title() {
    let env = TestEnv::new();
    env.run(&["init"]).expect("Init failed");

    let result = env.run(&["post", "create", "   ", "body"]);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("title cannot be empty"));
}

#[test]
fn test_comment_like_and_show() {
    let env = TestEnv::new();
    env.run(&["init"]).expect("Init failed");

    let id = env.create_post("Hello", "World");
    let id_arg = id.to_string();

    let output = env
        .run(&["comment", &id_arg, "Nice!"])
        .expect("Comment failed");
    assert!(output.contains("Total comments: 1"));

    env.run(&["like", &id_arg]).expect("First like failed");
    let output = env.run(&["like", &id_arg]).expect("Second like failed");
    assert!(output.contains("Likes: 2"));

    // Each invocation is a fresh process, so this also proves the state
    // survived on disk.
    let output = env
        .run(&["post", "show", &id_arg, "--json"])
        .expect("Show failed");
    let post: Value = serde_json::from_str(&output).expect("Invalid JSON from post show");
    assert_eq!(post["likes"], 2);
    assert_eq!(post["comments"][0]["text"], "Nice!");
}

#[test]
fn test_show_unknown_post_fails() {
    let env = TestEnv::new();
    env.run(&["init"]).expect("Init failed");

    let result = env.run(&["post", "show", "12345"]);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Post not found"));
}

#[test]
fn test_favorite_toggles() {
    let env = TestEnv::new();
    env.run(&["init"]).expect("Init failed");

    let id = env.create_post("Hello", "World");
    let id_arg = id.to_string();

    let output = env.run(&["fav", &id_arg]).expect("First fav failed");
    assert!(output.contains("Saved post to favorites"));

    // A favorited post carries a marker in the list view.
    let output = env.run(&["post", "list"]).expect("List failed");
    assert!(output.contains('*'));

    let output = env.run(&["fav", &id_arg]).expect("Second fav failed");
    assert!(output.contains("Removed post from favorites"));

    let output = env.run(&["post", "list"]).expect("List failed");
    assert!(!output.contains('*'));
}

#[test]
fn test_search() {
    let env = TestEnv::new();
    env.run(&["init"]).expect("Init failed");

    env.create_post("Rust tips", "borrow checker tricks");
    env.create_post("Gardening", "tomatoes");

    // Case-insensitive, matches title or content.
    let output = env.run(&["search", "RUST"]).expect("Search failed");
    assert!(output.contains("Rust tips"));
    assert!(!output.contains("Gardening"));

    let output = env.run(&["search", "tomat"]).expect("Search failed");
    assert!(output.contains("Gardening"));

    let output = env.run(&["search", "zzz"]).expect("Search failed");
    assert!(output.contains("No posts matching"));
}

#[test]
fn test_corrupt_data_recovers_to_empty_board() {
    let env = TestEnv::new();
    env.run(&["init"]).expect("Init failed");
    env.create_post("Hello", "World");

    std::fs::write(env.work_dir.join(".plaza").join("posts.json"), "{garbage")
        .expect("Failed to corrupt data file");

    // The board comes up empty instead of failing.
    let output = env.run(&["post", "list"]).expect("List failed");
    assert!(output.contains("No posts yet"));
}
