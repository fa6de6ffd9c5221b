use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_jniheaders")));
    cmd.current_dir(dir);
    cmd
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

// -- header from a saved report --

#[test]
fn header_from_stdin_to_stdout() {
    let dir = TempDir::new().unwrap();

    let assert = cmd(dir.path())
        .args(["header", "--class", "com.example.jni.Callbacks"])
        .write_stdin(fixture("callbacks.javap"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, fixture("callbacks.expected.h"));
}

#[test]
fn header_from_file_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("include/callbacks.h");

    cmd(dir.path())
        .args(["header", "--class", "com.example.jni.Callbacks", "-i"])
        .arg(fixture_path("callbacks.javap"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        fixture("callbacks.expected.h")
    );
}

#[test]
fn header_class_from_manifest() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("JniHeaders.toml"),
        "[javap]\nclass = \"a.B\"\n",
    )
    .unwrap();

    cmd(dir.path())
        .arg("header")
        .write_stdin("public native void doStuff(I)V;\n  Signature: (I)V\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("#ifndef _Callbacks_a_B\n"))
        .stdout(predicate::str::contains("#define DO_STUFF_NAME \"doStuff\"\n"))
        .stdout(predicate::str::contains("#define DO_STUFF_SIGNATURE \"(I)V\"\n"))
        .stdout(predicate::str::ends_with("#endif //_Callbacks_a_B\n"));
}

#[test]
fn header_custom_name_regex() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .args(["header", "--class", "a.B", "--name-regex", r"method (\w+)"])
        .write_stdin("method runTask\n  Signature: ()V\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("#define RUN_TASK_NAME \"runTask\""));
}

#[test]
fn header_error_line_keeps_old_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("callbacks.h");
    fs::write(&out, "previous\n").unwrap();

    cmd(dir.path())
        .args(["header", "--class", "a.B", "-o"])
        .arg(&out)
        .write_stdin("  public static native void onStart();\n    Signature: ()V\nERROR:Could not find a.B\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR:Could not find a.B"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "previous\n");
}

#[test]
fn header_orphan_signature_fails() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .args(["header", "--class", "a.B"])
        .write_stdin("    Signature: ()V\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no name parsed"));
}

#[test]
fn header_public_constructor_is_not_a_method() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .args(["header", "--class", "com.example.jni.Callbacks", "-i"])
        .arg(fixture_path("public_class.javap"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no name parsed"))
        .stderr(predicate::str::contains("descriptor: ()V"));
}

#[test]
fn header_requires_class() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .arg("header")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--class"));
}

#[test]
fn header_rejects_bad_regex() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .args(["header", "--class", "a.B", "--signature-regex", "Signature:.*"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no capture group"));
}

// -- javap / javah with stand-in tools --

#[cfg(unix)]
fn fake_tool(dir: &Path, name: &str, script: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}", script)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn javap_writes_header() {
    let dir = TempDir::new().unwrap();
    let report = fixture_path("callbacks.javap");
    let javap = fake_tool(dir.path(), "javap", &format!("cat '{}'\n", report));
    let out = dir.path().join("callbacks.h");

    cmd(dir.path())
        .args(["javap", "--class", "com.example.jni.Callbacks", "--javap-path"])
        .arg(&javap)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        fixture("callbacks.expected.h")
    );
}

#[cfg(unix)]
#[test]
fn javap_receives_arguments() {
    let dir = TempDir::new().unwrap();
    let args = dir.path().join("args.txt");
    let javap = fake_tool(
        dir.path(),
        "javap",
        &format!("echo \"$@\" > '{}'\n", args.display()),
    );

    cmd(dir.path())
        .args(["javap", "--class", "a.B", "--classpath", "lib/a.jar", "-o", "b.h", "--javap-path"])
        .arg(&javap)
        .assert()
        .success();

    let recorded = fs::read_to_string(&args).unwrap();
    assert!(recorded.starts_with("-s -classpath "));
    assert!(recorded.contains("lib/a.jar"));
    assert!(recorded.trim_end().ends_with(" a.B"));
    assert!(dir.path().join("b.h").is_file());
}

#[cfg(unix)]
#[test]
fn javap_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let javap = fake_tool(dir.path(), "javap", "echo 'class not found: a.B'\nexit 1\n");
    let out = dir.path().join("callbacks.h");

    cmd(dir.path())
        .args(["javap", "--class", "a.B", "--javap-path"])
        .arg(&javap)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("class not found: a.B"));

    assert!(!out.exists());
}

#[cfg(unix)]
#[test]
fn javap_skips_when_output_is_newer() {
    let dir = TempDir::new().unwrap();
    let javap = fake_tool(dir.path(), "javap", "exit 1\n");
    fs::create_dir_all(dir.path().join("src/a")).unwrap();
    fs::write(dir.path().join("src/a/B.java"), "class B {}").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(20));
    let out = dir.path().join("callbacks.h");
    fs::write(&out, "kept\n").unwrap();

    cmd(dir.path())
        .args(["javap", "--class", "a.B", "--source-dir", "src", "--javap-path"])
        .arg(&javap)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("is not modified"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "kept\n");

    cmd(dir.path())
        .args(["javap", "--class", "a.B", "--source-dir", "src", "--force", "--javap-path"])
        .arg(&javap)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure();
}

#[cfg(unix)]
#[test]
fn javap_settings_from_manifest() {
    let dir = TempDir::new().unwrap();
    let report = fixture_path("callbacks.javap");
    let javap = fake_tool(dir.path(), "javap", &format!("cat '{}'\n", report));
    fs::write(
        dir.path().join("JniHeaders.toml"),
        format!(
            "[javap]\nclass = \"com.example.jni.Callbacks\"\noutput = \"gen/callbacks.h\"\npath = \"{}\"\n",
            javap.display()
        ),
    )
    .unwrap();

    cmd(dir.path()).arg("javap").assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("gen/callbacks.h")).unwrap(),
        fixture("callbacks.expected.h")
    );
}

#[cfg(unix)]
#[test]
fn javah_runs_with_output_flag() {
    let dir = TempDir::new().unwrap();
    let args = dir.path().join("args.txt");
    let javah = fake_tool(
        dir.path(),
        "javah",
        &format!("echo \"$@\" > '{}'\necho '/* jni */' > \"$3\"\n", args.display()),
    );

    cmd(dir.path())
        .args(["javah", "--class", "a.B", "--verbose", "-o", "native.h", "--javah-path"])
        .arg(&javah)
        .assert()
        .success();

    let recorded = fs::read_to_string(&args).unwrap();
    assert!(recorded.starts_with("-verbose -o /"));
    assert!(recorded.trim_end().ends_with("native.h a.B"));
    assert_eq!(
        fs::read_to_string(dir.path().join("native.h")).unwrap(),
        "/* jni */\n"
    );
}

#[cfg(unix)]
#[test]
fn javah_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let javah = fake_tool(dir.path(), "javah", "exit 3\n");

    cmd(dir.path())
        .args(["javah", "--class", "a.B", "-o", "native.h", "--javah-path"])
        .arg(&javah)
        .assert()
        .failure()
        .stderr(predicate::str::contains("javah failed"));
}
