//! Edge case and error handling tests for dirtree

#![cfg(unix)]


use harness::{TestDir, run_dirtree};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_directory_listed_as_file() {
    let dir = TestDir::new();
    dir.add_file("realdir/file.txt", "x");
    symlink(dir.path().join("realdir"), dir.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);
    assert!(success, "dirtree should succeed with directory symlink");
    assert!(stdout.contains("realdir"), "should show real directory");
    // The link is not descended into, so file.txt appears once
    assert_eq!(stdout.matches("file.txt").count(), 1, "{}", stdout);
    assert!(stdout.contains("├───linkdir ("), "link gets a size suffix: {}", stdout);
}

#[test]
fn test_symlink_hidden_in_dirs_only_mode() {
    let dir = TestDir::new();
    dir.add_dir("realdir");
    symlink(dir.path().join("realdir"), dir.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["."]);
    assert!(success);
    assert_eq!(stdout, "└───realdir\n");
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.txt", "data");
    symlink("..", dir.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);
    assert!(success, "dirtree should not hang on parent symlink");
    assert!(stdout.contains("file.txt (4b)"), "{}", stdout);
    assert!(stdout.contains("parent"), "{}", stdout);
}

#[test]
fn test_broken_symlink() {
    let dir = TestDir::new();
    dir.add_file("real.txt", "abc");
    symlink("nonexistent.txt", dir.path().join("broken_link"))
        .expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);
    assert!(success, "dirtree should handle broken symlinks");
    assert!(stdout.contains("broken_link"), "{}", stdout);
    assert!(stdout.contains("real.txt (3b)"), "{}", stdout);
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_missing_root_fails() {
    let dir = TestDir::new();

    let (stdout, stderr, success) = run_dirtree(dir.path(), &["does-not-exist", "-f"]);
    assert!(!success, "missing root should fail");
    assert!(stdout.is_empty());
    assert!(stderr.contains("does-not-exist"), "stderr: {}", stderr);
}

#[test]
fn test_file_as_root_fails() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "x");

    let (stdout, stderr, success) = run_dirtree(dir.path(), &["plain.txt"]);
    assert!(!success, "a file root should fail");
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("dirtree: "), "stderr: {}", stderr);
}

#[test]
fn test_no_arguments_is_usage_error() {
    let dir = TestDir::new();

    let (stdout, stderr, success) = run_dirtree(dir.path(), &[]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.to_lowercase().contains("usage"), "stderr: {}", stderr);
}

#[test]
fn test_too_many_arguments_is_usage_error() {
    let dir = TestDir::new();
    dir.add_dir("sub");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f", "extra"]);
    assert!(!success);
    assert!(stdout.is_empty(), "nothing rendered before usage check");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "one", "two"]);
    assert!(!success);
    assert!(stdout.is_empty());
}

#[test]
fn test_unreadable_directory_aborts_render() {
    let dir = TestDir::new();
    dir.add_file("a_dir/child.txt", "x");
    dir.add_dir("c_dir");
    let locked = dir.add_dir("b_locked");
    fs::write(locked.join("hidden.txt"), "secret").expect("Failed to write file");

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&locked, perms).expect("Failed to set permissions");

    // Permission bits do not apply to root; the walker's own tests cover
    // a directory vanishing mid-walk regardless of privileges
    let readable_anyway = fs::read_dir(&locked).is_ok();

    let (stdout, stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);

    // Restore permissions for cleanup
    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&locked, perms).expect("Failed to restore permissions");

    if readable_anyway {
        return;
    }

    assert!(!success, "unreadable directory should abort the render");
    assert_eq!(stdout, "├───a_dir\n│\t└───child.txt (1b)\n├───b_locked\n");
    assert!(!stdout.contains("c_dir"), "later siblings are not rendered");
    assert!(stderr.contains("b_locked"), "stderr names the path: {}", stderr);
}

#[test]
fn test_unreadable_file_still_listed_with_size() {
    let dir = TestDir::new();
    let file_path = dir.add_file("secret.txt", "12345678");

    let mut perms = fs::metadata(&file_path).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&file_path, perms).expect("Failed to set permissions");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);

    let mut perms = fs::metadata(&file_path).unwrap().permissions();
    perms.set_mode(0o644);
    fs::set_permissions(&file_path, perms).expect("Failed to restore permissions");

    // Listing only needs the directory's metadata, not the file's content
    assert!(success);
    assert_eq!(stdout, "└───secret.txt (8b)\n");
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("my file.txt", "ab");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);
    assert!(success);
    assert_eq!(stdout, "└───my file.txt (2b)\n");
}

#[test]
fn test_filename_with_unicode() {
    let dir = TestDir::new();
    dir.add_file("日本語/ファイル.txt", "");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);
    assert!(success);
    assert_eq!(stdout, "└───日本語\n\t└───ファイル.txt (empty)\n");
}

#[test]
fn test_hidden_files_are_listed() {
    let dir = TestDir::new();
    dir.add_file(".hidden", "h");
    dir.add_file("visible", "v");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);
    assert!(success);
    assert_eq!(stdout, "├───.hidden (1b)\n└───visible (1b)\n");
}

// ============================================================================
// Output Edge Cases
// ============================================================================

#[test]
fn test_very_deep_nesting() {
    let dir = TestDir::new();
    dir.add_file("a/b/c/d/e/f/g/h/deep.txt", "deep");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);
    assert!(success, "dirtree should handle deep nesting");
    let last = stdout.lines().last().unwrap();
    assert_eq!(last, format!("{}└───deep.txt (4b)", "\t".repeat(8)));
}

#[test]
fn test_sorting_is_case_sensitive_bytewise() {
    let dir = TestDir::new();
    dir.add_file("zebra", "");
    dir.add_file("Apple", "");
    dir.add_file("apple", "");
    dir.add_file("_under", "");
    dir.add_dir("Middle");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);
    assert!(success);

    let names: Vec<&str> = stdout
        .lines()
        .map(|l| l.trim_start_matches("├───").trim_start_matches("└───"))
        .map(|l| l.split(' ').next().unwrap())
        .collect();
    assert_eq!(names, vec!["Apple", "Middle", "_under", "apple", "zebra"]);
}

#[test]
fn test_only_last_sibling_uses_corner() {
    let dir = TestDir::new();
    for i in 0..50 {
        dir.add_file(&format!("file_{:02}", i), "x");
    }

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 50);
    assert!(lines[..49].iter().all(|l| l.starts_with("├───")));
    assert!(lines[49].starts_with("└───file_49"));
}

#[test]
fn test_dirs_only_has_no_size_suffix() {
    let dir = TestDir::new();
    dir.add_file("a/one.txt", "1");
    dir.add_file("a/b/two.txt", "");
    dir.add_file("three.txt", "333");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["."]);
    assert!(success);
    assert!(!stdout.contains(" ("), "{}", stdout);
    assert!(!stdout.contains(".txt"), "{}", stdout);
    assert_eq!(stdout, "└───a\n\t└───b\n");
}

#[test]
fn test_performance_1000_files() {
    use std::time::Instant;

    let dir = TestDir::new();
    for i in 0..1000 {
        let sub = format!("dir_{:02}", i / 100);
        dir.add_file(&format!("{}/file_{:04}.txt", sub, i), "content");
    }

    let start = Instant::now();
    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[".", "-f"]);
    let elapsed = start.elapsed();

    assert!(success, "dirtree should succeed with 1000 files");
    assert_eq!(stdout.lines().count(), 1010);

    // Generous threshold to avoid flaky tests
    assert!(
        elapsed.as_secs() < 10,
        "processing 1000 files took too long: {:?}",
        elapsed
    );
}
