#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn buildlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("buildlog").unwrap();
    cmd.env_remove("BUILDLOG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write one day folder with a log.md and optional image files.
pub fn write_day_folder(root: &Path, year: &str, folder: &str, log: &str, images: &[&str]) {
    let dir = root.join("logs").join(year).join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("log.md"), log).unwrap();

    if !images.is_empty() {
        let images_dir = dir.join("images");
        fs::create_dir_all(&images_dir).unwrap();
        for image in images {
            fs::write(images_dir.join(image), "").unwrap();
        }
    }
}

/// A minimal log document with an author header and one bullet.
pub fn sample_log(author: &str, bullet: &str) -> String {
    format!("---\nauthor: {}\n---\n# Entry\n- {}\n", author, bullet)
}
