#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn linktags_cmd() -> Command {
    let mut cmd = Command::cargo_bin("linktags").unwrap();
    cmd.env_remove("LINKTAGS_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A small links page with one grid and a mix of tagged and untagged links.
pub const LINKS_PAGE: &str = r#"+++
title = "Links"
+++

## Institutions

<div class="link-grid">
    <a href="https://instagram.com/museobotero" target="_blank">🇨🇴 Museo Botero • Bogotá</a>
    <a href="https://instagram.com/embamexcol/" target="_blank" data-tags="mexico">🇲🇽 Embassy of Mexico in Colombia</a>
    <a href="https://instagram.com/alcaldiabogota" target="_blank" data-tags="government Team_Ops">Alcaldía de Bogotá</a>
</div>

Example markup: `<a href="https://example.com" data-tags="x">Example</a>`
"#;

/// Initialize a project whose content is `links.md` and write the page.
pub fn init_project(dir: &Path, page: &str) {
    linktags_cmd()
        .arg("init")
        .arg(dir)
        .arg("--content")
        .arg("links.md")
        .assert()
        .success();
    fs::write(dir.join("links.md"), page).unwrap();
}

pub fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}
