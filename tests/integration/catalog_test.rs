//! Integration tests for the `catalog` command

use predicates::prelude::*;
use tempfile::TempDir;

use super::{CASUAL, STRIPED, WARDROBE, fitcheck, write};

fn catalog_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "wardrobes/alex.toml", WARDROBE);
    write(temp.path(), "outfits/casual.toml", CASUAL);
    write(temp.path(), "outfits/striped.toml", STRIPED);
    temp
}

#[test]
fn test_catalog_scores_in_requested_order() {
    let temp = catalog_dir();

    let output = fitcheck(temp.path())
        .args(["--json", "catalog", "--user", "alex", "striped", "casual"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["owner"], "alex");
    assert_eq!(json["wardrobe_found"], true);
    assert_eq!(json["results"][0]["id"], "striped");
    assert_eq!(json["results"][0]["percentage"], 25);
    assert_eq!(json["results"][1]["id"], "casual");
    assert_eq!(json["results"][1]["percentage"], 100);
}

#[test]
fn test_catalog_with_explicit_root() {
    let temp = catalog_dir();
    let elsewhere = TempDir::new().unwrap();

    fitcheck(elsewhere.path())
        .arg("catalog")
        .arg("--root")
        .arg(temp.path())
        .args(["-u", "alex", "casual"])
        .assert()
        .success()
        .stdout(predicate::str::contains("casual"))
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn test_catalog_missing_outfit_scores_zero() {
    let temp = catalog_dir();

    fitcheck(temp.path())
        .args(["catalog", "-u", "alex", "casual", "gala"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gala"))
        .stdout(predicate::str::contains("(not found)"));
}

#[test]
fn test_catalog_unknown_user_scores_zero() {
    let temp = catalog_dir();

    fitcheck(temp.path())
        .args(["catalog", "-u", "nobody", "casual"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No wardrobe found for nobody"))
        .stdout(predicate::str::contains("0%"));
}

#[test]
fn test_catalog_requires_outfits() {
    let temp = catalog_dir();

    fitcheck(temp.path())
        .args(["catalog", "-u", "alex"])
        .assert()
        .failure();
}

#[test]
fn test_catalog_broken_outfit_fails() {
    let temp = catalog_dir();
    write(temp.path(), "outfits/broken.json", "{not json");

    fitcheck(temp.path())
        .args(["catalog", "-u", "alex", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.json"));
}
