//! End-to-end tests for the `stencil` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command running in `dir` with an isolated config file.
fn stencil(dir: &Path) -> Command {
    let config = dir.join("stencil.toml");
    if !config.exists() {
        fs::write(&config, "[defaults]\nforce = false\n").unwrap();
    }

    let mut cmd = Command::cargo_bin("stencil").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config);
    cmd
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn frontend_reference(root: &Path) {
    write(
        root,
        "package.json",
        r#"{ "name": "frontend-template", "author": "Your Name" }"#,
    );
    write(root, "README.md", "# Frontend Template\n");
    write(root, "index.html", "<title>Frontend Template</title>");
    write(root, "src/main.tsx", "console.log('{{ untouched }}');\n");
    write(root, "node_modules/react/index.js", "module.exports = {};");
}

fn extract_frontend(dir: &TempDir) -> std::path::PathBuf {
    frontend_reference(&dir.path().join("frontend-template"));
    let schema = dir.path().join("frontend.json");
    stencil(dir.path())
        .args(["extract", "frontend-template", "--type", "frontend", "-o"])
        .arg(&schema)
        .assert()
        .success();
    schema
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    stencil(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    stencil(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    stencil(dir.path()).arg("frobnicate").assert().code(2);
}

#[test]
fn no_color_env_accepts_any_value() {
    let dir = TempDir::new().unwrap();
    for value in ["1", "yes", "0", ""] {
        stencil(dir.path())
            .env("NO_COLOR", value)
            .args(["list", "--format", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("go-api"));
    }
}

#[test]
fn list_names_builtin_types() {
    let dir = TempDir::new().unwrap();
    stencil(dir.path())
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout("frontend\nfullstack\ngo-api\n");
}

#[test]
fn list_json_includes_variables() {
    let dir = TempDir::new().unwrap();
    let assert = stencil(dir.path())
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let types: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(types[0]["name"], "frontend");
    assert_eq!(types[0]["variables"]["ProjectName"]["required"], true);
}

#[test]
fn extract_reports_counts() {
    let dir = TempDir::new().unwrap();
    frontend_reference(&dir.path().join("ref"));

    stencil(dir.path())
        .args(["extract", "ref", "--type", "frontend", "-o", "out/t.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template extracted successfully to out/t.json"))
        .stdout(predicate::str::contains("Found 4 files (3 templated)"))
        .stdout(predicate::str::contains("Total size: "));

    let schema: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("out/t.json")).unwrap()).unwrap();
    assert_eq!(schema["type"], "frontend");
    assert_eq!(schema["name"], "frontend-react-template");
}

#[test]
fn extract_unknown_type_is_not_found() {
    let dir = TempDir::new().unwrap();
    frontend_reference(&dir.path().join("ref"));

    stencil(dir.path())
        .args(["extract", "ref", "--type", "rails"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rails"));
}

#[test]
fn generate_substitutes_variables() {
    let dir = TempDir::new().unwrap();
    let schema = extract_frontend(&dir);

    stencil(dir.path())
        .arg("generate")
        .arg(&schema)
        .args(["--project-name", "My App", "--github-repo", "acme/my-app"])
        .args(["--author", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project generated successfully!"))
        .stdout(predicate::str::contains("Files processed: 4"));

    let out = dir.path().join("my-app");
    assert_eq!(
        fs::read_to_string(out.join("package.json")).unwrap(),
        r#"{ "name": "My App", "author": "Ada" }"#
    );
    assert_eq!(fs::read_to_string(out.join("README.md")).unwrap(), "# My App\n");
    assert_eq!(
        fs::read_to_string(out.join("src/main.tsx")).unwrap(),
        "console.log('{{ untouched }}');\n"
    );
    assert!(!out.join("node_modules").exists());
}

#[test]
fn generate_refuses_existing_directory() {
    let dir = TempDir::new().unwrap();
    let schema = extract_frontend(&dir);
    fs::create_dir_all(dir.path().join("taken")).unwrap();

    let run = |force: bool| {
        let mut cmd = stencil(dir.path());
        cmd.arg("generate")
            .arg(&schema)
            .args(["--project-name", "x", "--github-repo", "a/x", "-o", "taken"]);
        if force {
            cmd.arg("--force");
        }
        cmd.assert()
    };

    run(false)
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
    run(true).success();
    assert!(dir.path().join("taken/package.json").exists());
}

#[test]
fn generate_missing_schema_is_not_found() {
    let dir = TempDir::new().unwrap();
    stencil(dir.path())
        .args(["generate", "nope.json", "--project-name", "x", "--github-repo", "a/x"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn generate_json_summary() {
    let dir = TempDir::new().unwrap();
    let schema = extract_frontend(&dir);

    let assert = stencil(dir.path())
        .args(["--output-format", "json", "generate"])
        .arg(&schema)
        .args(["--project-name", "shop", "--github-repo", "acme/shop"])
        .assert()
        .success();

    let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(summary["files_written"], 4);
    assert_eq!(summary["templated_files"], 3);
    assert_eq!(summary["hooks"][0], "npm install");
}

#[test]
fn validate_detects_tampering() {
    let dir = TempDir::new().unwrap();
    let schema = extract_frontend(&dir);

    stencil(dir.path())
        .arg("validate")
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid frontend schema"));

    let json = fs::read_to_string(&schema).unwrap();
    fs::write(&schema, json.replace("# Frontend Template", "# Tampered Template")).unwrap();

    stencil(dir.path())
        .arg("validate")
        .arg(&schema)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("hash mismatch"));
}

#[test]
fn inspect_shows_env_table() {
    let dir = TempDir::new().unwrap();
    let reference = dir.path().join("ref");
    frontend_reference(&reference);
    write(&reference, ".env.example", "# API base URL\nVITE_API_URL=http://localhost:8080\n");

    stencil(dir.path())
        .args(["extract", "ref", "--type", "frontend", "-o", "t.json"])
        .assert()
        .success();

    stencil(dir.path())
        .args(["inspect", "t.json", "--env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frontend-react-template (frontend)"))
        .stdout(predicate::str::contains("Environment variables: 1"))
        .stdout(predicate::str::contains("VITE_API_URL"))
        .stdout(predicate::str::contains("# API base URL"));
}

#[test]
fn new_uses_configured_reference() {
    let dir = TempDir::new().unwrap();
    frontend_reference(&dir.path().join("refs/fe"));
    fs::write(
        dir.path().join("stencil.toml"),
        "[references.frontend]\npath = \"refs/fe\"\ndescription = \"Local frontend\"\n",
    )
    .unwrap();

    stencil(dir.path())
        .args(["new", "frontend", "Cool Shop", "acme/cool-shop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating frontend project..."))
        .stdout(predicate::str::contains("Project created successfully!"))
        .stdout(predicate::str::contains("cd cool-shop"))
        .stdout(predicate::str::contains("npm install"));

    assert_eq!(
        fs::read_to_string(dir.path().join("cool-shop/index.html")).unwrap(),
        "<title>Cool Shop</title>"
    );
}

#[test]
fn new_with_unconfigured_type_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("stencil.toml"),
        "[references.frontend]\npath = \"refs/fe\"\ndescription = \"Local frontend\"\n",
    )
    .unwrap();

    stencil(dir.path())
        .args(["new", "go-api", "api", "acme/api"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No reference project configured for 'go-api'"));

    stencil(dir.path())
        .args(["new", "frontend", "shop", "acme/shop"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_add_get_remove() {
    let dir = TempDir::new().unwrap();

    stencil(dir.path())
        .args(["config", "add", "svc", "/srv/svc", "Service template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added reference project 'svc' at /srv/svc"));

    stencil(dir.path())
        .args(["config", "get", "references.svc.description"])
        .assert()
        .success()
        .stdout("Service template\n");

    stencil(dir.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("• svc"))
        .stdout(predicate::str::contains("Path: /srv/svc"));

    stencil(dir.path())
        .args(["config", "remove", "svc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed reference project 'svc'"));

    stencil(dir.path())
        .args(["config", "remove", "svc"])
        .assert()
        .code(3);
}

#[test]
fn config_path_and_unknown_key() {
    let dir = TempDir::new().unwrap();

    stencil(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stencil.toml"));

    stencil(dir.path())
        .args(["config", "get", "defaults.nope"])
        .assert()
        .code(2);
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("stencil")
        .unwrap()
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .args(["--config", "absent.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn init_writes_default_references() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("fresh/config.toml");

    Command::cargo_bin("stencil")
        .unwrap()
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();

    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("[references.go-api]"));
    assert!(written.contains("../api-template"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    stencil(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_stencil"));
}
