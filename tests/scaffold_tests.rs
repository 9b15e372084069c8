//! init and mod command tests

mod common;

use common::{TestProject, shapez_mod_cmd};
use predicates::prelude::*;

#[test]
fn test_init_default_directory() {
    let parent = TestProject::new();

    shapez_mod_cmd()
        .current_dir(&parent.path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project ready"))
        .stdout(predicate::str::contains("yarn typings"))
        .stdout(predicate::str::contains("yarn build").not());

    assert!(parent.file_exists("shapezio-mods/package.json"));
    assert!(parent.file_exists("shapezio-mods/.gitignore"));
    assert!(parent.file_exists("shapezio-mods/src/mod/js/main.js"));

    let manifest: serde_json::Value =
        serde_json::from_str(&parent.read_file("shapezio-mods/src/mod/mod.json")).unwrap();
    assert_eq!(manifest["id"], "mod");
    assert_eq!(manifest["name"], "shapezio-mod");
    assert_eq!(manifest["version"], "1.0.0");

    let options: serde_json::Value =
        serde_json::from_str(&parent.read_file("shapezio-mods/.shapez")).unwrap();
    assert_eq!(options["packageManager"], "yarn");
}

#[test]
fn test_init_package_scripts_only_use_shipped_tools() {
    let parent = TestProject::new();
    shapez_mod_cmd()
        .current_dir(&parent.path)
        .arg("init")
        .assert()
        .success();

    let package: serde_json::Value =
        serde_json::from_str(&parent.read_file("shapezio-mods/package.json")).unwrap();
    let scripts = package["scripts"].as_object().unwrap();
    assert_eq!(scripts["typings"], "shapez-mod typings --generate");
    for command in scripts.values() {
        assert!(!command.as_str().unwrap().contains("gulp"), "{command}");
    }
    assert!(!parent.file_exists("shapezio-mods/gulp"));
}

#[test]
fn test_init_with_metadata_and_git() {
    let parent = TestProject::new();

    shapez_mod_cmd()
        .current_dir(&parent.path)
        .args([
            "init",
            "my-mods",
            "--mod-id",
            "flipper",
            "--name",
            "Flipper",
            "--description",
            "Flips \"shapes\"",
            "--author",
            "someone",
            "--package-manager",
            "npm",
            "--git",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("npm run typings"));

    assert!(parent.file_exists("my-mods/.git"));

    let manifest: serde_json::Value =
        serde_json::from_str(&parent.read_file("my-mods/src/flipper/mod.json")).unwrap();
    assert_eq!(manifest["id"], "flipper");
    assert_eq!(manifest["description"], "Flips \"shapes\"");
    assert_eq!(manifest["author"], "someone");

    let options = parent.read_file("my-mods/.shapez");
    assert!(options.contains("    \"packageManager\": \"npm\""));
}

#[test]
fn test_init_refuses_existing_directory() {
    let parent = TestProject::new();
    parent.write_file("shapezio-mods/keep.txt", "mine");

    shapez_mod_cmd()
        .current_dir(&parent.path)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A folder with the name 'shapezio-mods' already exists",
        ));

    assert_eq!(parent.read_file("shapezio-mods/keep.txt"), "mine");
    assert!(!parent.file_exists("shapezio-mods/package.json"));
}

#[test]
fn test_init_rejects_invalid_mod_id() {
    let parent = TestProject::new();

    shapez_mod_cmd()
        .current_dir(&parent.path)
        .args(["init", "--mod-id", "my mod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mod id 'my mod'"));

    assert!(!parent.file_exists("shapezio-mods"));
}

#[test]
fn test_mod_adds_package_without_touching_project_files() {
    let project = TestProject::new();
    project.write_file("package.json", "{\"name\": \"mine\"}");

    project
        .cmd()
        .args(["mod", "--mod-id", "rotator", "--name", "Rotator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mod ready"));

    assert_eq!(project.read_file("package.json"), "{\"name\": \"mine\"}");
    let manifest: serde_json::Value =
        serde_json::from_str(&project.read_file("src/rotator/mod.json")).unwrap();
    assert_eq!(manifest["name"], "Rotator");
    assert!(project.file_exists(".shapez"));
}

#[test]
fn test_mod_never_overwrites_existing_files() {
    let project = TestProject::new();
    project.write_file("src/rotator/js/main.js", "// hand written");

    project
        .cmd()
        .args(["mod", "--mod-id", "rotator"])
        .assert()
        .success();

    assert_eq!(
        project.read_file("src/rotator/js/main.js"),
        "// hand written"
    );
    assert!(project.file_exists("src/rotator/mod.json"));
}

#[test]
fn test_mod_updates_typings_when_host_present() {
    let project = TestProject::with_host();
    project.add_shared_dir("shared");

    project
        .cmd()
        .args(["mod", "--mod-id", "rotator"])
        .assert()
        .success();

    assert!(project.file_exists("shapez/types_formatted.d.ts"));
    assert!(project.file_exists("src/shared/js/types.d.ts"));
    assert!(!project.file_exists("src/rotator/js/types.d.ts"));
}

#[test]
fn test_mod_keeps_saved_package_manager() {
    let project = TestProject::new();
    project.write_file(".shapez", "{\n    \"packageManager\": \"npm\"\n}");

    project
        .cmd()
        .args(["mod", "--mod-id", "extra"])
        .assert()
        .success();

    assert!(project.read_file(".shapez").contains("\"npm\""));
}
