use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const CATALOG: &str = r#"
organizations:
  - id: 10
    name: Org10
  - id: 20
    name: Org20
applications:
  - id: 1
    name: orders-db
    category: db
    type: mysql
    org_id: 10
    attrs:
      host: 10.0.0.5
      port: 3306
  - id: 2
    name: admin-portal
    category: remote_app
    type: chrome
    org_id: 10
    attrs:
      asset: 5d2c
      chrome_target: https://intranet
      chrome_username: ops
      chrome_password: hunter2
  - id: 3
    name: prod-cluster
    category: cloud
    type: k8s
    org_id: 20
    attrs:
      cluster: https://k8s.internal:6443
"#;

fn write_catalog(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("catalog.yaml");
    fs::write(&path, contents).expect("failed to write catalog");
    path
}

/// Command with isolated config/catalog env so the user's setup never leaks in.
fn apptree(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("apptree"));
    cmd.env("APPTREE_CONFIG", dir.join("config.yaml"))
        .env_remove("APPTREE_CATALOG")
        .env_remove("APPTREE_FORMAT")
        .env_remove("APPTREE_DEBUG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn tree_raw_emits_orgs_then_apps() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(temp.path(), CATALOG);

    let assert = apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["tree", "--raw"])
        .assert()
        .success();

    let nodes = stdout_json(assert.get_output());
    let nodes = nodes.as_array().expect("array of nodes");

    assert_eq!(nodes.len(), 5);
    assert_eq!(nodes[0]["id"], "10");
    assert_eq!(nodes[0]["pId"], "");
    assert_eq!(nodes[0]["isParent"], true);
    assert_eq!(nodes[1]["id"], "20");
    assert_eq!(nodes[2]["iconSkin"], "database");
    assert_eq!(nodes[2]["pId"], "10");
    assert!(nodes[2].get("isParent").is_none());
    assert_eq!(nodes[3]["iconSkin"], "chrome");
    assert_eq!(nodes[3]["isParent"], false);
    assert_eq!(nodes[4]["meta"]["type"], "k8s_app");
    assert_eq!(nodes[4]["org_name"], "Org20");

    Ok(())
}

#[test]
fn tree_filters_by_category() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(temp.path(), CATALOG);

    let assert = apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["tree", "--raw", "--category", "cloud"])
        .assert()
        .success();

    let nodes = stdout_json(assert.get_output());
    let ids: Vec<&str> = nodes
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["20", "3"]);

    Ok(())
}

#[test]
fn tree_rejects_unknown_type() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(temp.path(), CATALOG);

    apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["tree", "--type", "telnet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid query parameter `type`"));

    Ok(())
}

#[test]
fn tree_fails_on_unsupported_category() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(
        temp.path(),
        "applications:\n  - id: 1\n    name: odd\n    category: unknown\n",
    );

    apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("tree")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported application category: unknown"));

    Ok(())
}

#[test]
fn tree_fails_on_missing_org() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(
        temp.path(),
        "applications:\n  - id: 1\n    name: lost\n    category: db\n    org_id: 404\n",
    );

    apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("tree")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Organization not found: 404"));

    Ok(())
}

#[test]
fn tree_table_output_lists_nodes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(temp.path(), CATALOG);

    apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("organization"))
        .stdout(predicate::str::contains("orders-db"))
        .stdout(predicate::str::contains("kubernetes"));

    Ok(())
}

#[test]
fn schema_write_action_requires_type() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    apptree(temp.path())
        .args(["schema", "--action", "create"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The `create` action must take the `type` query parameter",
        ));

    Ok(())
}

#[test]
fn schema_defaults_to_no_password() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let assert = apptree(temp.path())
        .args(["--format", "json", "schema"])
        .assert()
        .success();

    let output = stdout_json(assert.get_output());
    assert_eq!(output["data"]["action"], "list");
    assert_eq!(output["data"]["attrs"]["name"], "NoPasswordAttrsSerializer");
    let fields = output["data"]["attrs"]["fields"].as_array().unwrap();
    assert!(fields.iter().all(|f| f["secret"] == false));

    Ok(())
}

#[test]
fn schema_accepts_query_string() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    apptree(temp.path())
        .args(["schema", "--query", "type=vmware_client", "--action", "update"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VMwareClientAttrsSerializer"))
        .stdout(predicate::str::contains("vmware_password"));

    Ok(())
}

#[test]
fn app_list_json_hides_passwords() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(temp.path(), CATALOG);

    let assert = apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "json", "app", "list", "--type", "chrome"])
        .assert()
        .success();

    let output = stdout_json(assert.get_output());
    let apps = output["data"].as_array().unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0]["attrs"]["chrome_username"], "ops");
    assert!(apps[0]["attrs"].get("chrome_password").is_none());

    Ok(())
}

#[test]
fn app_validate_applies_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let assert = apptree(temp.path())
        .args([
            "app",
            "validate",
            "--type",
            "postgresql",
            "--attrs",
            r#"{"host": "pg.local"}"#,
        ])
        .assert()
        .success();

    let cleaned = stdout_json(assert.get_output());
    assert_eq!(cleaned["host"], "pg.local");
    assert_eq!(cleaned["port"], 5432);

    Ok(())
}

#[test]
fn app_validate_reports_missing_fields() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    apptree(temp.path())
        .args(["app", "validate", "--type", "k8s", "--attrs", "{}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("`cluster` is required"));

    Ok(())
}

#[test]
fn org_get_resolves_builtin_and_catalog_orgs() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(temp.path(), CATALOG);

    apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["org", "get", "Org20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applications: 1"));

    apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["org", "get", "00000000-0000-0000-0000-000000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GLOBAL"));

    Ok(())
}

#[test]
fn init_then_status_uses_saved_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(temp.path(), CATALOG);

    apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["init", "--default-format", "json"])
        .assert()
        .success();

    let config = fs::read_to_string(temp.path().join("config.yaml"))?;
    assert!(config.contains("catalog.yaml"));
    assert!(config.contains("json"));

    apptree(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Applications:  3"));

    // Saved catalog and format are picked up without flags
    let assert = apptree(temp.path()).args(["org", "list"]).assert().success();
    let output = stdout_json(assert.get_output());
    assert_eq!(output["data"].as_array().unwrap().len(), 2);

    Ok(())
}

#[test]
fn missing_catalog_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    apptree(temp.path())
        .arg("tree")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog not configured"));

    Ok(())
}

#[test]
fn category_list_filters_by_category() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    apptree(temp.path())
        .args(["category", "list", "--category", "remote_app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mysql_workbench"))
        .stdout(predicate::str::contains("postgresql").not());

    Ok(())
}

#[test]
fn tree_links_builtin_and_named_orgs_to_one_node() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(
        temp.path(),
        r#"
organizations:
  - id: 10
    name: Org10
applications:
  - id: 1
    name: no-org
    category: db
  - id: 2
    name: default-org
    category: cloud
    org_id: 00000000-0000-0000-0000-000000000002
  - id: 3
    name: by-name
    category: db
    org_id: Org10
  - id: 4
    name: by-id
    category: remote_app
    org_id: 10
"#,
    );

    let assert = apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["tree", "--raw"])
        .assert()
        .success();

    let nodes = stdout_json(assert.get_output());
    let nodes = nodes.as_array().expect("array of nodes");
    let parent = |id: &str| {
        nodes
            .iter()
            .find(|n| n["id"] == id && n["meta"]["type"] != "node")
            .map(|n| n["pId"].as_str().unwrap().to_string())
    };

    let roots: Vec<&str> = nodes
        .iter()
        .filter(|n| n["meta"]["type"] == "node")
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    assert_eq!(roots, vec!["00000000-0000-0000-0000-000000000002", "10"]);

    assert_eq!(parent("1").as_deref(), Some("00000000-0000-0000-0000-000000000002"));
    assert_eq!(parent("2").as_deref(), Some("00000000-0000-0000-0000-000000000002"));
    assert_eq!(parent("3").as_deref(), Some("10"));
    assert_eq!(parent("4").as_deref(), Some("10"));

    Ok(())
}

#[test]
fn org_get_counts_apps_without_org_under_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(
        temp.path(),
        "applications:\n  - id: 1\n    name: a\n    category: db\n  - id: 2\n    name: b\n    category: db\n",
    );

    apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["org", "get", "00000000-0000-0000-0000-000000000002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applications: 2"));

    Ok(())
}

#[test]
fn app_get_reports_missing_application() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let catalog = write_catalog(temp.path(), CATALOG);

    apptree(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["app", "get", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application not found: 42"));

    Ok(())
}

#[test]
fn schema_query_string_is_percent_decoded() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    apptree(temp.path())
        .args(["schema", "--query", "category=remote%5Fapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RemoteAppAttrsSerializer"));

    Ok(())
}
