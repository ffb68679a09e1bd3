//! CLI integration tests for sound event extraction
//!
//! These tests invoke the binary the way a file drop does: bare paths as
//! arguments, plus the explicit `extract` and `info` subcommands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const RIFLE_EXPORT: &str = r#"[
    {
        "Type": "AnimSequence",
        "Name": "AS_Rifle_Fire",
        "Outer": "AS_Rifle_Fire",
        "Properties": {
            "NumFrames": 45,
            "SequenceLength": 1.5,
            "Notifies": [
                {
                    "NotifyName": "WeaponSound",
                    "Time": 0.1,
                    "Notify": {"ObjectName": "AnimNotify_WeaponSound'AS_Rifle_Fire:AnimNotify_WeaponSound_0'"}
                },
                {
                    "NotifyName": "WeaponSound",
                    "LinkValue": 0.9,
                    "Notify": {"ObjectName": "AnimNotify_WeaponSound'AS_Rifle_Fire:AnimNotify_WeaponSound_1'"}
                }
            ]
        }
    },
    {
        "Type": "AnimNotify_WeaponSound",
        "Name": "AnimNotify_WeaponSound_0",
        "Outer": "AS_Rifle_Fire",
        "Properties": {"Event_FP": {"ObjectName": "AkAudioEvent'Play_Rifle_Fire'"}}
    },
    {
        "Type": "AnimNotify_WeaponSound",
        "Name": "AnimNotify_WeaponSound_1",
        "Outer": "AS_Rifle_Fire",
        "Properties": {"Event_TP": {"ObjectName": "AkAudioEvent'Play_Rifle_Mech'"}}
    }
]"#;

const EXPECTED_CSV: &str = "Time (sec)\tFrame\tSound\r\n0.1\t3\tPlay_Rifle_Fire\r\n0.9\t27\tPlay_Rifle_Mech\r\n";

fn ue_sound_extract() -> Command {
    Command::cargo_bin("ue-sound-extract").unwrap()
}

fn write_export(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn read_csv(path: &Path) -> String {
    let bytes = fs::read(path).unwrap();
    let text = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);
    String::from_utf8(text.to_vec()).unwrap()
}

#[test]
fn test_dropped_files_are_extracted() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_export(temp_dir.path(), "AS_Rifle_Fire.json", RIFLE_EXPORT);

    ue_sound_extract()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing 1 files..."))
        .stdout(predicate::str::contains("Success: 1 files processed"))
        .stdout(predicate::str::contains("Processed 1 files"));

    let output = temp_dir.path().join("AS_Rifle_Fire_sounds.csv");
    assert!(fs::read(&output).unwrap().starts_with(b"\xEF\xBB\xBF"));
    assert_eq!(read_csv(&output), EXPECTED_CSV);
}

#[test]
fn test_non_json_inputs_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_export(temp_dir.path(), "notes.txt", RIFLE_EXPORT);

    ue_sound_extract()
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("No JSON files found"));
}

#[test]
fn test_bad_files_do_not_stop_the_batch() {
    let temp_dir = TempDir::new().unwrap();
    let broken = write_export(temp_dir.path(), "AS_Broken.json", "[{\"Type\": ");
    let no_sequence = write_export(
        temp_dir.path(),
        "AS_NoSequence.json",
        r#"[{"Type": "AnimNotify_WeaponSound", "Name": "N", "Outer": "O"}]"#,
    );
    let good = write_export(temp_dir.path(), "AS_Rifle_Fire.json", RIFLE_EXPORT);

    ue_sound_extract()
        .args([&broken, &no_sequence, &good])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing 3 files..."))
        .stdout(predicate::str::contains("Success: 1 files processed"))
        .stderr(predicate::str::contains("AnimSequence not found in JSON"));

    assert!(temp_dir.path().join("AS_Rifle_Fire_sounds.csv").exists());
    assert!(!temp_dir.path().join("AS_Broken_sounds.csv").exists());
}

#[test]
fn test_nothing_processed_fails() {
    let temp_dir = TempDir::new().unwrap();
    let idle = write_export(
        temp_dir.path(),
        "AS_Idle.json",
        r#"[{"Type": "AnimSequence", "Properties": {"NumFrames": 30, "SequenceLength": 1.0, "Notifies": []}}]"#,
    );

    ue_sound_extract()
        .arg(&idle)
        .assert()
        .failure()
        .stdout(predicate::str::contains("No valid files processed"));

    assert!(!temp_dir.path().join("AS_Idle_sounds.csv").exists());
}

#[test]
fn test_extract_subcommand_options() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("anims");
    let output_dir = temp_dir.path().join("out");
    fs::create_dir_all(input_dir.join("rifle")).unwrap();
    write_export(&input_dir.join("rifle"), "AS_Rifle_Fire.json", RIFLE_EXPORT);

    ue_sound_extract()
        .arg("extract")
        .arg(&input_dir)
        .arg("--recursive")
        .args(["--delimiter", ",", "--no-bom", "--suffix", "_sfx"])
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success();

    let output = output_dir.join("AS_Rifle_Fire_sfx.csv");
    let bytes = fs::read(&output).unwrap();
    assert!(!bytes.starts_with(b"\xEF\xBB\xBF"));
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "Time (sec),Frame,Sound\r\n0.1,3,Play_Rifle_Fire\r\n0.9,27,Play_Rifle_Mech\r\n"
    );
}

#[test]
fn test_quiet_suppresses_status() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_export(temp_dir.path(), "AS_Rifle_Fire.json", RIFLE_EXPORT);

    ue_sound_extract()
        .arg("--quiet")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        read_csv(&temp_dir.path().join("AS_Rifle_Fire_sounds.csv")),
        EXPECTED_CSV
    );
}

#[test]
fn test_info_lists_sound_events() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_export(temp_dir.path(), "AS_Rifle_Fire.json", RIFLE_EXPORT);

    ue_sound_extract()
        .arg("info")
        .arg(&input)
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("AS_Rifle_Fire"))
        .stdout(predicate::str::contains("30 fps"))
        .stdout(predicate::str::contains("Play_Rifle_Mech"));

    // info never writes output files
    assert!(!temp_dir.path().join("AS_Rifle_Fire_sounds.csv").exists());
}

#[test]
fn test_info_missing_sequence_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_export(temp_dir.path(), "AS_Empty.json", "[]");

    ue_sound_extract()
        .arg("info")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("AnimSequence not found"));
}

#[test]
fn test_no_arguments_prints_help() {
    ue_sound_extract()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_output_dir_same_stem_not_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("exports/a");
    let second = temp_dir.path().join("exports/b");
    fs::create_dir_all(&first).unwrap();
    fs::create_dir_all(&second).unwrap();
    write_export(&first, "AS_Rifle_Fire.json", RIFLE_EXPORT);
    write_export(
        &second,
        "AS_Rifle_Fire.json",
        &RIFLE_EXPORT.replace("Play_Rifle_Fire", "Play_Rifle_Other"),
    );
    let out_dir = temp_dir.path().join("out");

    ue_sound_extract()
        .arg("extract")
        .arg(temp_dir.path().join("exports"))
        .arg("--recursive")
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: 1 files processed"))
        .stderr(predicate::str::contains("would overwrite the output of"));

    assert_eq!(read_csv(&out_dir.join("AS_Rifle_Fire_sounds.csv")), EXPECTED_CSV);
}
