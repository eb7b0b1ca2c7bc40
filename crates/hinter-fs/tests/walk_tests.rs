use assert_fs::prelude::*;
use hinter_fs::{NormalizedPath, remove_empty_directories, walk};
use pretty_assertions::assert_eq;

fn relative_files(root: &assert_fs::TempDir) -> Vec<String> {
    let base = NormalizedPath::new(root.path());
    walk(&base)
        .collect_files()
        .unwrap()
        .into_iter()
        .map(|f| f.strip_prefix(&base).unwrap().as_str().to_string())
        .collect()
}

#[test]
fn walk_returns_only_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("reports/2025/q1.md").write_str("q1").unwrap();
    temp.child("reports/notes.txt").write_str("n").unwrap();
    temp.child("empty").create_dir_all().unwrap();

    assert_eq!(
        relative_files(&temp),
        vec!["reports/2025/q1.md".to_string(), "reports/notes.txt".to_string()]
    );
}

#[test]
fn walk_after_prune_sees_same_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a/b/keep.md").write_str("k").unwrap();
    temp.child("a/c/d").create_dir_all().unwrap();
    let before = relative_files(&temp);

    let removed = remove_empty_directories(&NormalizedPath::new(temp.path())).unwrap();

    assert_eq!(removed, 2);
    assert_eq!(relative_files(&temp), before);
    temp.child("a/c").assert(predicates::path::missing());
    temp.child("a/b").assert(predicates::path::is_dir());
}

#[cfg(unix)]
#[test]
fn walk_does_not_follow_symlinks() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("real/file.md").write_str("x").unwrap();
    std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();

    assert_eq!(relative_files(&temp), vec!["real/file.md".to_string()]);
}
