#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TODO_MANIFEST: &str = r#"
namespace: my-app
actions:
  - type: todos
    subactions: [LOADING]
    children:
      - type: CREATE
        subactions: [ERROR, SUCCESS]
"#;

fn actionkey(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("actionkey").unwrap();
    cmd.current_dir(dir.path()).env_remove("ACTIONKEY_MANIFEST");
    cmd
}

fn write_manifest(dir: &TempDir, contents: &str) {
    std::fs::write(dir.path().join("actions.yaml"), contents).unwrap();
}

// ---------------------------------------------------------------------------
// actionkey define
// ---------------------------------------------------------------------------

#[test]
fn define_bare_action() {
    let dir = TempDir::new().unwrap();
    actionkey(&dir)
        .args(["define", "CREATE"])
        .assert()
        .success()
        .stdout("CREATE\n");
}

#[test]
fn define_with_subactions_and_namespace() {
    let dir = TempDir::new().unwrap();
    actionkey(&dir)
        .args([
            "define",
            "CREATE",
            "--sub",
            "ERROR",
            "--sub",
            "SUCCESS",
            "--namespace",
            "my-app/todos",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("my-app/todos/CREATE\n"))
        .stdout(predicate::str::contains("my-app/todos/CREATE_ERROR"))
        .stdout(predicate::str::contains("my-app/todos/CREATE_SUCCESS"));
}

#[test]
fn define_json_output() {
    let dir = TempDir::new().unwrap();
    let output = actionkey(&dir)
        .args(["define", "todos", "--sub", "LOADING", "-n", "my-app", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "my-app/todos");
    assert_eq!(value["subactions"]["LOADING"], "my-app/todos_LOADING");
}

#[test]
fn define_rejects_blank_type() {
    let dir = TempDir::new().unwrap();
    actionkey(&dir)
        .args(["define", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

// ---------------------------------------------------------------------------
// actionkey expand / keys
// ---------------------------------------------------------------------------

#[test]
fn expand_prints_every_action() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, TODO_MANIFEST);

    actionkey(&dir)
        .arg("expand")
        .assert()
        .success()
        .stdout(predicate::str::contains("my-app/todos_LOADING"))
        .stdout(predicate::str::contains("my-app/todos/CREATE_SUCCESS"));
}

#[test]
fn expand_json_keeps_subactions_per_token() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, TODO_MANIFEST);

    let output = actionkey(&dir).args(["expand", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let actions = value["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[1]["name"], "my-app/todos/CREATE");
    assert!(actions[1]["subactions"].get("LOADING").is_none());
}

#[test]
fn keys_lists_dispatch_keys_in_order() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, TODO_MANIFEST);

    actionkey(&dir).arg("keys").assert().success().stdout(
        "my-app/todos\n\
         my-app/todos_LOADING\n\
         my-app/todos/CREATE\n\
         my-app/todos/CREATE_ERROR\n\
         my-app/todos/CREATE_SUCCESS\n",
    );
}

#[test]
fn keys_found_from_subdirectory() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, TODO_MANIFEST);
    let nested = dir.path().join("src/store");
    std::fs::create_dir_all(&nested).unwrap();

    let mut cmd = actionkey(&dir);
    cmd.current_dir(&nested)
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("my-app/todos/CREATE"));
}

#[test]
fn manifest_env_var_selects_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");
    std::fs::write(&path, r#"{"actions":[{"type":"PING","subactions":["ACK"]}]}"#).unwrap();

    actionkey(&dir)
        .env("ACTIONKEY_MANIFEST", &path)
        .args(["keys", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"PING_ACK\""));
}

#[test]
fn missing_manifest_fails() {
    let dir = TempDir::new().unwrap();
    actionkey(&dir)
        .args(["--manifest", "nope.yaml", "keys"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest not found"));
}

#[test]
fn keys_accepts_positional_manifest() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("m.yaml");
    std::fs::write(&path, TODO_MANIFEST).unwrap();

    actionkey(&dir)
        .arg("keys")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("my-app/todos/CREATE_ERROR"));
}

#[test]
fn positional_manifest_overrides_env_and_flag() {
    let dir = TempDir::new().unwrap();
    let chosen = dir.path().join("chosen.yaml");
    std::fs::write(&chosen, "actions:\n  - type: PING\n").unwrap();
    let other = dir.path().join("other.yaml");
    std::fs::write(&other, "actions:\n  - type: PONG\n").unwrap();

    actionkey(&dir)
        .env("ACTIONKEY_MANIFEST", &other)
        .arg("keys")
        .arg(&chosen)
        .assert()
        .success()
        .stdout("PING\n");

    actionkey(&dir)
        .arg("--manifest")
        .arg(&other)
        .arg("expand")
        .arg(&chosen)
        .assert()
        .success()
        .stdout(predicate::str::contains("PING"))
        .stdout(predicate::str::contains("PONG").not());
}

#[test]
fn check_accepts_positional_manifest() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "actions:\n  - type: \"\"\n").unwrap();

    actionkey(&dir)
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] empty action type"));
}

// ---------------------------------------------------------------------------
// actionkey check
// ---------------------------------------------------------------------------

#[test]
fn check_clean_manifest() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, TODO_MANIFEST);

    actionkey(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No warnings"));
}

#[test]
fn check_warnings_do_not_fail() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, "actions:\n  - type: CREATE\n    subactions: [ERROR, ERROR]\n");

    actionkey(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("[warning] duplicate sub-action 'ERROR'"));
}

#[test]
fn check_errors_fail() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, "actions:\n  - type: \"\"\n");

    actionkey(&dir)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] empty action type"))
        .stderr(predicate::str::contains("manifest validation found errors"));
}
