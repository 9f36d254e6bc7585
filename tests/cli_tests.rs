use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SUMMARY: &str = "x\t1\nSectionFoo\n---\na\tb\nc\td\n";
const SUMMARY_REORDERED: &str = "x\t1\nSectionFoo\n---\nc\td\na\tb\n";
const SUMMARY_SHORT: &str = "x\t1\nSectionFoo\n---\na\tb\n";

fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn begum_compare() -> Command {
    Command::cargo_bin("begum-compare").unwrap()
}

fn begum_regression() -> Command {
    Command::cargo_bin("begum-regression").unwrap()
}

#[test]
fn test_compare_identical_runs_succeeds() {
    let dir = TempDir::new().unwrap();
    let s1 = write(dir.path(), "a.summaryCounts", SUMMARY);
    let s2 = write(dir.path(), "b.summaryCounts", SUMMARY_REORDERED);
    let t1 = write(dir.path(), "a.tagInfo", "H1\nL1\nL2\n");
    let t2 = write(dir.path(), "b.tagInfo", "H1\nL2\nL1\n");

    begum_compare()
        .arg("--summary-files")
        .arg(&s1)
        .arg(&s2)
        .arg("--tag-info-files")
        .arg(&t1)
        .arg(&t2)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary files contain the same data."))
        .stdout(predicate::str::contains("Tag info files contain the same data."))
        .stdout(predicate::str::contains("All comparisons resulted in identical data."));
}

#[test]
fn test_compare_mismatch_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let s1 = write(dir.path(), "a.summaryCounts", SUMMARY);
    let s2 = write(dir.path(), "b.summaryCounts", SUMMARY_SHORT);
    let t1 = write(dir.path(), "a.tagInfo", "H1\nL1\nL2\n");
    let t2 = write(dir.path(), "b.tagInfo", "L1\nH1\nL2\n");

    begum_compare()
        .arg("--summary-files")
        .arg(&s1)
        .arg(&s2)
        .arg("--tag-info-files")
        .arg(&t1)
        .arg(&t2)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("SectionFoo"))
        .stdout(predicate::str::contains("has header"));
}

#[test]
fn test_compare_json_output() {
    let dir = TempDir::new().unwrap();
    let s1 = write(dir.path(), "a.summaryCounts", SUMMARY);
    let s2 = write(dir.path(), "b.summaryCounts", SUMMARY_SHORT);
    let t1 = write(dir.path(), "a.tagInfo", "H1\n");
    let t2 = write(dir.path(), "b.tagInfo", "H1\n");

    let output = begum_compare()
        .arg("--json")
        .arg("--summary-files")
        .arg(&s1)
        .arg(&s2)
        .arg("--tag-info-files")
        .arg(&t1)
        .arg(&t2)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["status"], "mismatch");
    assert_eq!(json["summary"]["mismatch"]["kind"], "section-content");
    assert_eq!(json["summary"]["mismatch"]["section"], "SectionFoo");
    assert_eq!(json["tag_info"]["status"], "passed");
}

#[test]
fn test_compare_unequal_file_counts_fail() {
    let dir = TempDir::new().unwrap();
    let s1 = write(dir.path(), "a.summaryCounts", SUMMARY);
    let s2 = write(dir.path(), "b.summaryCounts", SUMMARY);
    let t1 = write(dir.path(), "a.tagInfo", "H1\n");

    begum_compare()
        .arg("--summary-files")
        .arg(&s1)
        .arg(&s2)
        .arg("--tag-info-files")
        .arg(&t1)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("differs from number of tag info files"));
}

#[test]
fn test_compare_unreadable_file_fails() {
    let dir = TempDir::new().unwrap();
    let s1 = write(dir.path(), "a.summaryCounts", SUMMARY);
    let t1 = write(dir.path(), "a.tagInfo", "H1\n");
    let t2 = write(dir.path(), "b.tagInfo", "H1\n");

    begum_compare()
        .arg("--summary-files")
        .arg(&s1)
        .arg(dir.path().join("missing.summaryCounts"))
        .arg("--tag-info-files")
        .arg(&t1)
        .arg(&t2)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unable to read"));
}

#[test]
fn test_regression_discovers_runs() {
    let dir = TempDir::new().unwrap();
    for run in ["py310", "py312"] {
        write(dir.path(), &format!("{run}/out.summaryCounts"), SUMMARY);
        write(dir.path(), &format!("{run}/out.tagInfo"), "H1\nL1\n");
    }

    begum_regression()
        .arg("--results-directory")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All comparisons resulted in identical data."));
}

#[test]
fn test_regression_dry_run_lists_runs() {
    let dir = TempDir::new().unwrap();
    for run in ["run1", "run2"] {
        write(dir.path(), &format!("{run}/out.summaryCounts"), SUMMARY);
        write(dir.path(), &format!("{run}/out.tagInfo"), "H1\n");
    }

    begum_regression()
        .arg("--results-directory")
        .arg(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Discovered 2 runs"))
        .stdout(predicate::str::contains("Comparing").not());
}

#[test]
fn test_regression_writes_report_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "results/run1/out.summaryCounts", SUMMARY);
    write(dir.path(), "results/run2/out.summaryCounts", SUMMARY_SHORT);
    write(dir.path(), "results/run1/out.tagInfo", "H1\n");
    write(dir.path(), "results/run2/out.tagInfo", "H1\n");
    let report_path = dir.path().join("report.json");

    begum_regression()
        .arg("--results-directory")
        .arg(dir.path().join("results"))
        .arg("--report-file")
        .arg(&report_path)
        .assert()
        .code(1);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["passed"], false);
}

#[test]
fn test_regression_reads_config_file() {
    let dir = TempDir::new().unwrap();
    for run in ["run1", "run2"] {
        write(dir.path(), &format!("results/{run}/out.counts"), SUMMARY);
        write(dir.path(), &format!("results/{run}/out.tags"), "H1\n");
    }
    let config = write(
        dir.path(),
        "regression.toml",
        &format!(
            "[discovery]\nresults_directory = \"{}\"\nsummary_extension = \"counts\"\ntag_info_extension = \"tags\"\n\n[report]\nformat = \"json\"\n",
            dir.path().join("results").display().to_string().replace('\\', "/")
        ),
    );

    let output = begum_regression().arg("--config").arg(&config).output().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["runs"], 2);
}

#[test]
fn test_regression_requires_results_directory() {
    begum_regression()
        .assert()
        .code(3)
        .stderr(predicate::str::contains("results_directory"));
}

#[test]
fn test_regression_min_runs_from_config() {
    let dir = TempDir::new().unwrap();
    for run in ["run1", "run2"] {
        write(dir.path(), &format!("{run}/out.summaryCounts"), SUMMARY);
        write(dir.path(), &format!("{run}/out.tagInfo"), "H1\n");
    }
    let config = write(dir.path(), "cfg/regression.toml", "[comparison]\nmin_runs = 3\n");

    begum_regression()
        .arg("--config")
        .arg(&config)
        .arg("--results-directory")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("At least 3"));
}
