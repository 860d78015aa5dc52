#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, pinned to default configuration so a developer's
/// config file cannot leak into assertions
pub fn mp() -> Command {
    let mut cmd = cargo_bin_cmd!("mediapanel");
    cmd.args(["--config", "/nonexistent/mediapanel-test.conf"]);
    cmd
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mediapanel_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a capability table file, one supported type string per line
pub fn write_caps_file(name: &str, types: &[&str]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mediapanel_caps.txt", name));
    fs::write(&path, types.join("\n")).expect("write caps file");
    path.to_string_lossy().to_string()
}

/// Write a single-codec upload file, like the UI's custom-codec upload
pub fn write_codec_file(name: &str, codec: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mediapanel_codec.txt", name));
    fs::write(&path, codec).expect("write codec file");
    path.to_string_lossy().to_string()
}
