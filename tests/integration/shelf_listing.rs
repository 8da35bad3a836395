//! Slot listing: one `row column index item` line per slot.

use predicates::prelude::*;

use super::{PICKING_GOALS, shelfmap, temp_file};

#[test]
fn prints_five_slots_per_bin_in_rank_order() {
    let goals = temp_file(PICKING_GOALS);
    let output = shelfmap()
        .arg("--color=never")
        .arg(goals.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 20, "4 bins x 5 slots");
    assert_eq!(lines[0], "0 0 0 oreo_mega_stuf");
    assert_eq!(lines[1], "0 0 1 champion_copper_plus_spark_plug");
    assert_eq!(lines[2], "0 0 2 None");
    assert_eq!(lines[5], "1 0 0 None");
    assert_eq!(lines[12], "2 0 2 genuine_joe_plastic_stir_sticks");
    assert_eq!(lines[15], "0 1 0 mommys_helper_outlet_plugs");
    assert_eq!(lines[19], "0 1 4 None");
}

#[test]
fn key_order_in_file_does_not_matter() {
    let shuffled = temp_file(
        r#"{"work_order":[],"bin_contents":{"bin_B":["b"],"bin_A":["a"]}}"#,
    );
    shelfmap()
        .arg("--color=never")
        .arg(shuffled.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0 0 0 a\n"))
        .stdout(predicate::str::contains("1 0 0 b\n"));
}

#[test]
fn empty_bin_contents_prints_nothing() {
    let goals = temp_file(r#"{"bin_contents":{},"work_order":[]}"#);
    shelfmap().arg(goals.path()).assert().success().stdout("");
}

#[test]
fn custom_empty_marker() {
    let goals = temp_file(r#"{"bin_contents":{"bin_A":[]},"work_order":[]}"#);
    shelfmap()
        .arg("--color=never")
        .arg("--empty-marker=-")
        .arg(goals.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 0 0 -"))
        .stdout(predicate::str::contains("None").not());
}

#[test]
fn custom_rows_and_slots() {
    let goals = temp_file(
        r#"{"bin_contents":{"bin_A":["a"],"bin_B":["b"]},"work_order":[]}"#,
    );
    let output = shelfmap()
        .arg("--color=never")
        .arg("--rows=1")
        .arg("--slots=2")
        .arg(goals.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "0 0 0 a\n0 0 1 None\n0 1 0 b\n0 1 1 None\n");
}

#[test]
fn json_output_one_object_per_slot() {
    let goals = temp_file(r#"{"bin_contents":{"bin_A":["glue"]},"work_order":[]}"#);
    let output = shelfmap()
        .arg("--json")
        .arg(goals.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["item"], "glue");
    assert!(records[1]["item"].is_null());
    assert_eq!(records[4]["index"], 4);
}

#[test]
fn poses_follow_listing() {
    let goals = temp_file(PICKING_GOALS);
    shelfmap()
        .arg("--color=never")
        .arg("--poses")
        .arg(goals.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "bin_A 0 0 pose=(0.000, 0.000, 1.000, 0.000, 0.000, 0.000) \
             safe=(-0.150, 0.000, 1.000, 0.000, 0.000, 0.000)",
        ))
        .stdout(predicate::str::contains(
            "bin_D 0 1 pose=(0.000, -0.200, 1.000",
        ));
}

#[test]
fn huge_row_count_does_not_overflow() {
    let goals = temp_file(r#"{"bin_contents":{"bin_A":["a"],"bin_B":[]},"work_order":[]}"#);
    let output = shelfmap()
        .arg("--color=never")
        .arg(format!("--rows={}", usize::MAX))
        .arg(goals.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 10);
    assert!(stdout.contains("1 0 0 None\n"));
}

#[cfg(unix)]
#[test]
fn closed_stdout_ends_quietly() {
    use std::io::{BufRead, BufReader};
    use std::os::unix::process::ExitStatusExt;
    use std::process::{Command, Stdio};

    let mut bins = String::new();
    for b in 0..5_000 {
        if b > 0 {
            bins.push(',');
        }
        bins.push_str(&format!(r#""bin_{b:05}":["item_{b}"]"#));
    }
    let goals = temp_file(&format!(r#"{{"bin_contents":{{{bins}}},"work_order":[]}}"#));

    #[allow(deprecated)]
    let bin = assert_cmd::cargo::cargo_bin("shelfmap");
    let mut child = Command::new(bin)
        .env("XDG_CONFIG_HOME", "/tmp/shelfmap-test-no-config")
        .arg("--color=never")
        .arg(goals.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let stdout = child.stdout.take().unwrap();
    let mut first = String::new();
    BufReader::new(stdout).read_line(&mut first).unwrap();
    assert_eq!(first, "0 0 0 item_0\n");

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success() || output.status.signal() == Some(libc::SIGPIPE),
        "unexpected exit status {:?}",
        output.status
    );
    assert!(!stderr.contains("write error"), "stderr: {stderr}");
}
