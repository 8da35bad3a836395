//! Work order resolution output.

use predicates::prelude::*;

use super::{PICKING_GOALS, shelfmap, temp_file};

#[test]
fn work_order_lists_position_and_slot() {
    let goals = temp_file(PICKING_GOALS);
    shelfmap()
        .arg("--color=never")
        .arg("--work-order")
        .arg(goals.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "bin_A champion_copper_plus_spark_plug -> 0 0 1",
        ))
        .stdout(predicate::str::contains(
            "bin_C genuine_joe_plastic_stir_sticks -> 2 0 2",
        ))
        .stdout(predicate::str::contains("bin_D mommys_helper_outlet_plugs -> 0 1 0"));
}

#[test]
fn missing_item_resolves_without_slot() {
    let goals = temp_file(
        r#"{"bin_contents":{"bin_A":["a"]},"work_order":[{"bin":"bin_A","item":"zzz"}]}"#,
    );
    shelfmap()
        .arg("--color=never")
        .arg("--work-order")
        .arg(goals.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("bin_A zzz -> 0 0 -"))
        .stderr(predicate::str::contains("not listed"));
}

#[test]
fn unknown_bin_fails_only_when_requested() {
    let goals = temp_file(
        r#"{"bin_contents":{"bin_A":["a"]},"work_order":[{"bin":"bin_X","item":"a"}]}"#,
    );
    shelfmap().arg(goals.path()).assert().success();
    shelfmap()
        .arg("--work-order")
        .arg(goals.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown bin 'bin_X'"));
}

#[test]
fn work_order_json() {
    let goals = temp_file(PICKING_GOALS);
    let output = shelfmap()
        .arg("--json")
        .arg("--work-order")
        .arg(goals.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["bin"], "bin_D");
    assert_eq!(last["column"], 1);
    assert_eq!(last["slot"], 0);
}

#[test]
fn listing_ignores_work_order_shape() {
    for work_order in ["{}", "null", r#"["bin_A"]"#] {
        let goals = temp_file(&format!(
            r#"{{"bin_contents":{{"bin_A":["a"]}},"work_order":{work_order}}}"#
        ));
        let output = shelfmap()
            .arg("--color=never")
            .arg(goals.path())
            .output()
            .unwrap();
        assert!(output.status.success(), "work_order {work_order} should not fail the listing");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.lines().count(), 5);
        assert!(stdout.starts_with("0 0 0 a\n"));
    }
}

#[test]
fn malformed_work_order_fails_when_requested() {
    let goals = temp_file(r#"{"bin_contents":{"bin_A":["a"]},"work_order":{}}"#);
    shelfmap()
        .arg("--work-order")
        .arg(goals.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("work_order must be a list"));
}
