//! Integration tests for the ipkit CLI binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const APPINFO: &str =
    r#"{"id":"com.example.app","version":"1.0.0","type":"web","title":"Example"}"#;

// sha256 of b"0123456789"
const TEN_BYTES_SHA256: &str = "84d89877f0d4041efb6bf91a16f0248f2fd573e6af05c19f96bedb9f882f7882";

/// Test context holding a scratch directory with release inputs
struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        Self { temp_dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create fixture dir");
        }
        std::fs::write(&path, content).expect("failed to write fixture");
        path
    }

    fn ipkit(&self) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_ipkit");
        let mut cmd = Command::new(bin_path);
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn collect(&self, appinfo: &Path, package: &Path, suffix: Option<&str>) -> Output {
        let mut cmd = self.ipkit();
        cmd.arg("collect")
            .arg("--appinfo")
            .arg(appinfo)
            .arg("--package-json")
            .arg(package);
        if let Some(suffix) = suffix {
            cmd.arg("--append-version-suffix").arg(suffix);
        }
        cmd.output().expect("failed to run ipkit")
    }

    fn manifest(&self, appinfo: &Path, ipk: &Path, output: &str, extra: &[&str]) -> Output {
        self.ipkit()
            .arg("manifest")
            .arg("--appinfo")
            .arg(appinfo)
            .arg("--ipk")
            .arg(ipk)
            .args(["--output", output])
            .args(["--ipk-url", "https://example.com/app.ipk"])
            .args(["--icon-uri", "https://example.com/icon.png"])
            .args(["--source-url", "https://example.com/src"])
            .args(extra)
            .output()
            .expect("failed to run ipkit")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_command() {
    let ctx = TestContext::new();
    let output = ctx
        .ipkit()
        .arg("--help")
        .output()
        .expect("failed to run ipkit");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_end_to_end_release() {
    let ctx = TestContext::new();
    let appinfo = ctx.write("appinfo.json", APPINFO);
    let package = ctx.write(
        "package.json",
        r#"{"name":"example","description":"An example\r\napp   for TVs"}"#,
    );
    let ipk = ctx.write("dist/app.ipk", b"0123456789");

    let collected = ctx.collect(&appinfo, &package, Some("5"));
    assert!(collected.status.success(), "{collected:?}");
    assert_eq!(
        stdout(&collected),
        "app_id=com.example.app\nversion=1.0.5\ndescription=An example app for TVs\n"
    );

    let rewritten: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&appinfo).unwrap()).unwrap();
    assert_eq!(rewritten["version"], "1.0.5");

    let generated = ctx.manifest(&appinfo, &ipk, "out/manifest.json", &[]);
    assert!(generated.status.success(), "{generated:?}");
    assert_eq!(
        stdout(&generated),
        format!(
            "id=com.example.app\nversion=1.0.5\nsha256={TEN_BYTES_SHA256}\nmanifest_path=out/manifest.json\n"
        )
    );

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(ctx.path("out/manifest.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["version"], "1.0.5");
    assert_eq!(manifest["ipkHash"]["sha256"], TEN_BYTES_SHA256);
    assert_eq!(manifest["rootRequired"], false);
    assert!(manifest.get("appDescription").is_none());
}

#[test]
fn test_collect_rejects_bad_suffix_without_touching_appinfo() {
    let ctx = TestContext::new();
    let appinfo = ctx.write("appinfo.json", APPINFO);
    let package = ctx.write("package.json", "{}");

    for suffix in ["1234567890", "12a", "-3"] {
        let output = ctx.collect(&appinfo, &package, Some(suffix));
        assert!(!output.status.success(), "{suffix} should fail");
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid version suffix"));
        assert_eq!(std::fs::read_to_string(&appinfo).unwrap(), APPINFO);
    }
}

#[test]
fn test_collect_rejects_bad_version() {
    let ctx = TestContext::new();
    let appinfo = ctx.write("appinfo.json", r#"{"id":"a","version":"1.2"}"#);
    let package = ctx.write("package.json", "{}");

    let output = ctx.collect(&appinfo, &package, None);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid version '1.2'"));
}

#[test]
fn test_collect_without_suffix_is_read_only() {
    let ctx = TestContext::new();
    let appinfo = ctx.write("appinfo.json", APPINFO);
    let package = ctx.write("package.json", r#"{"description":"x = y"}"#);

    let output = ctx.collect(&appinfo, &package, Some("   "));
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "app_id=com.example.app\nversion=1.0.0\ndescription=x = y\n"
    );
    assert_eq!(std::fs::read_to_string(&appinfo).unwrap(), APPINFO);
}

#[test]
fn test_collect_null_description_is_empty() {
    let ctx = TestContext::new();
    let appinfo = ctx.write("appinfo.json", APPINFO);
    let package = ctx.write("package.json", r#"{"description":null}"#);

    let output = ctx.collect(&appinfo, &package, None);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        stdout(&output),
        "app_id=com.example.app\nversion=1.0.0\ndescription=\n"
    );
}

#[test]
fn test_manifest_description_override_and_root_optional() {
    let ctx = TestContext::new();
    let appinfo = ctx.write(
        "appinfo.json",
        r#"{"id":"a","version":"1.0.0","type":"web","title":"A","appDescription":"Hello"}"#,
    );
    let ipk = ctx.write("app.ipk", b"");

    let output = ctx.manifest(
        &appinfo,
        &ipk,
        "manifest.json",
        &["--app-description", "  Override  ", "--root-required", "Optional"],
    );
    assert!(output.status.success(), "{output:?}");

    let text = std::fs::read_to_string(ctx.path("manifest.json")).unwrap();
    assert!(text.ends_with("}\n"));
    assert!(text.contains("\n  \"rootRequired\": \"optional\",\n"));
    assert!(text.contains("\"appDescription\": \"Override\""));
    assert!(text.contains("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"));
}

#[test]
fn test_manifest_falls_back_to_appinfo_description() {
    let ctx = TestContext::new();
    let appinfo = ctx.write(
        "appinfo.json",
        r#"{"id":"a","version":"1.0.0","type":"web","title":"A","appDescription":"Hello"}"#,
    );
    let ipk = ctx.write("app.ipk", b"x");

    let output = ctx.manifest(&appinfo, &ipk, "manifest.json", &["--app-description", ""]);
    assert!(output.status.success(), "{output:?}");
    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(ctx.path("manifest.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["appDescription"], "Hello");
}

#[test]
fn test_manifest_rejects_bad_root_required_before_io() {
    let ctx = TestContext::new();
    let appinfo = ctx.write("appinfo.json", APPINFO);
    let ipk = ctx.write("app.ipk", b"x");

    let output = ctx.manifest(&appinfo, &ipk, "manifest.json", &["--root-required", "yes"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!ctx.path("manifest.json").exists());
}

#[test]
fn test_manifest_lists_all_missing_keys() {
    let ctx = TestContext::new();
    let appinfo = ctx.write("appinfo.json", r#"{"id":"a"}"#);
    let ipk = ctx.write("app.ipk", b"x");

    let output = ctx.manifest(&appinfo, &ipk, "out/manifest.json", &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("version, type, title"));
    assert!(!ctx.path("out").exists());
}

#[test]
fn test_manifest_path_is_normalized() {
    let ctx = TestContext::new();
    let appinfo = ctx.write("appinfo.json", APPINFO);
    let ipk = ctx.write("app.ipk", b"0123456789");

    let output = ctx.manifest(&appinfo, &ipk, "./out//manifest.json", &[]);
    assert!(output.status.success(), "{output:?}");
    assert!(
        stdout(&output).ends_with("\nmanifest_path=out/manifest.json\n"),
        "{}",
        stdout(&output)
    );
    assert!(ctx.path("out/manifest.json").exists());
}
