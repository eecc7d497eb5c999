//! Drives the `setup-tweers` binary against a local release server.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use flate2::Compression;
use flate2::write::GzEncoder;
use mockito::{Mock, Server, ServerGuard};
use serde_json::json;
use tempfile::TempDir;

const RELEASES: &str = "/repos/Raven-Book/TweeRS/releases";

/// Runner environment in a temporary directory
struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Command for a linux x86_64 runner.
    fn cmd(&self, server: &ServerGuard) -> Command {
        self.cmd_on(server, "linux")
    }

    fn cmd_on(&self, server: &ServerGuard, os: &str) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_setup-tweers"));
        for key in ["INPUT_VERSION", "INPUT_TOKEN", "GITHUB_OUTPUT", "GITHUB_PATH"] {
            cmd.env_remove(key);
        }
        cmd.env("GITHUB_API_URL", server.url())
            .env("RUNNER_TOOL_CACHE", self.path("toolcache"))
            .env("RUNNER_TEMP", self.path("temp"))
            .args(["--os", os, "--arch", "x86_64"]);
        cmd
    }

    /// Command with `GITHUB_OUTPUT` and `GITHUB_PATH` files set.
    fn runner_cmd(&self, server: &ServerGuard) -> Command {
        self.runner_cmd_on(server, "linux")
    }

    fn runner_cmd_on(&self, server: &ServerGuard, os: &str) -> Command {
        let mut cmd = self.cmd_on(server, os);
        cmd.env("GITHUB_OUTPUT", self.path("output"))
            .env("GITHUB_PATH", self.path("path"));
        cmd
    }

    fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).unwrap_or_default()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn tweers_tar_gz() -> Vec<u8> {
    let data = b"#!/bin/sh\necho tweers 1.0.5\n";
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    let mut header = tar::Header::new_gnu();
    header.set_size(data.len() as u64);
    header.set_mode(0o755);
    header.set_cksum();
    builder
        .append_data(&mut header, "tweers", &data[..])
        .unwrap();
    builder.into_inner().unwrap().finish().unwrap()
}

fn mock_release(server: &mut ServerGuard, path: &str) -> Mock {
    let body = json!({
        "tag_name": "tweers-cli-v1.0.5",
        "assets": [{
            "name": "tweers-linux-x86_64.tar.gz",
            "browser_download_url":
                format!("{}/download/tweers-linux-x86_64.tar.gz", server.url()),
        }],
    });
    server
        .mock("GET", format!("{RELEASES}/{path}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create()
}

fn mock_download(server: &mut ServerGuard) -> Mock {
    server
        .mock("GET", "/download/tweers-linux-x86_64.tar.gz")
        .with_status(200)
        .with_body(tweers_tar_gz())
        .expect(1)
        .create()
}

fn cached_dir(ctx: &TestContext) -> PathBuf {
    ctx.path("toolcache")
        .join("tweers")
        .join("1.0.5")
        .join("x64")
}

fn assert_installed(dir: &Path) {
    assert!(dir.join("tweers").is_file(), "{} has no tweers", dir.display());
}

#[test]
fn test_help_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_setup-tweers"))
        .arg("--help")
        .output()
        .expect("failed to run setup-tweers");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_install_then_cache_hit() {
    let ctx = TestContext::new();
    let mut server = Server::new();
    let _release = mock_release(&mut server, "latest");
    let download = mock_download(&mut server);

    let first = ctx.runner_cmd(&server).output().expect("failed to run");
    let out = stdout(&first);
    assert!(first.status.success(), "{out}");
    assert!(out.contains("Fetching TweeRS release: latest"));
    assert!(out.contains("Resolved version: 1.0.5"));
    assert!(out.contains("Downloading tweers-linux-x86_64.tar.gz"));
    assert!(out.contains("TweeRS 1.0.5 installed successfully"));
    assert_installed(&cached_dir(&ctx));
    assert!(ctx.path("toolcache/tweers/1.0.5/x64.complete").is_file());
    assert_eq!(ctx.read("output"), "version=1.0.5\n");
    assert_eq!(ctx.read("path"), format!("{}\n", cached_dir(&ctx).display()));

    let second = ctx.runner_cmd(&server).output().expect("failed to run");
    let out = stdout(&second);
    assert!(second.status.success(), "{out}");
    assert!(out.contains("Found in tool cache"));
    assert!(!out.contains("Downloading"));
    assert_eq!(ctx.read("output"), "version=1.0.5\nversion=1.0.5\n");

    download.assert();
}

#[test]
fn test_explicit_version_from_input() {
    let ctx = TestContext::new();
    let mut server = Server::new();
    let release = mock_release(&mut server, "tags/tweers-cli-v1.0.5");
    let _download = mock_download(&mut server);

    let output = ctx
        .runner_cmd(&server)
        .env("INPUT_VERSION", "v1.0.5")
        .output()
        .expect("failed to run");

    assert!(output.status.success(), "{}", stdout(&output));
    assert_eq!(ctx.read("output"), "version=1.0.5\n");
    release.assert();
}

#[test]
fn test_legacy_commands_without_runner_files() {
    let ctx = TestContext::new();
    let mut server = Server::new();
    let _release = mock_release(&mut server, "latest");
    let _download = mock_download(&mut server);

    let output = ctx.cmd(&server).output().expect("failed to run");
    let out = stdout(&output);

    assert!(output.status.success(), "{out}");
    assert!(out.contains("::set-output name=version::1.0.5"));
    assert!(out.contains(&format!("::add-path::{}", cached_dir(&ctx).display())));
}

#[test]
fn test_unsupported_platform_fails() {
    let ctx = TestContext::new();
    let mut server = Server::new();
    let _release = mock_release(&mut server, "latest");

    let output = ctx
        .runner_cmd_on(&server, "freebsd")
        .output()
        .expect("failed to run");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("::error::Unsupported platform: freebsd-x86_64"));
    assert_eq!(ctx.read("output"), "");
    assert_eq!(ctx.read("path"), "");
}

#[test]
fn test_unknown_version_fails() {
    let ctx = TestContext::new();
    let mut server = Server::new();
    let _missing = server
        .mock("GET", format!("{RELEASES}/tags/tweers-cli-v99.99.99").as_str())
        .with_status(404)
        .create();

    let output = ctx
        .runner_cmd(&server)
        .args(["--version", "99.99.99"])
        .output()
        .expect("failed to run");

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("::error::Failed to fetch release"), "{out}");
    assert!(out.contains("404"));
}

#[test]
fn test_token_is_sent() {
    let ctx = TestContext::new();
    let mut server = Server::new();
    let release = server
        .mock("GET", format!("{RELEASES}/latest").as_str())
        .match_header("authorization", "Bearer s3cret")
        .with_status(404)
        .expect(1)
        .create();

    let output = ctx
        .runner_cmd(&server)
        .env("INPUT_TOKEN", "s3cret")
        .output()
        .expect("failed to run");

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains("s3cret"));
    release.assert();
}
