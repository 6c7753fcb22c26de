use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Status database with one package per interesting case: explicitly
/// automatic, explicitly manual, unseen base, unseen ordinary, removed.
pub const STATUS_BASIC: &str = "\
Package: libc6
Essential: yes
Status: install ok installed
Priority: required
Section: libs
Architecture: amd64
Version: 2.36-9+deb12u4

Package: python3-requests
Status: install ok installed
Priority: optional
Section: python
Architecture: all
Version: 2.28.1+dfsg-1

Package: vim-tiny
Status: install ok installed
Priority: important
Section: editors
Architecture: amd64
Version: 2:9.0.1378-2

Package: zsh
Status: install ok installed
Priority: optional
Section: shells
Architecture: amd64
Version: 5.9-4+b6

Package: removed-tool
Status: deinstall ok config-files
Priority: optional
Section: utils
Architecture: amd64
Version: 1.0-1
";

/// Markings matching [`STATUS_BASIC`]: libc6 is automatic, python3-requests
/// explicitly manual, the rest unseen.
pub const EXTENDED_BASIC: &str = "\
Package: libc6
Architecture: amd64
Auto-Installed: 1

Package: python3-requests
Architecture: all
Auto-Installed: 0
";

/// Sandbox with an isolated HOME so the user's real config never leaks in.
pub struct TestEnv {
    _tmp: TempDir,
    home: PathBuf,
    dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let dir = tmp.path().to_path_buf();
        Self {
            _tmp: tmp,
            home,
            dir,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("apt-world").expect("binary under test");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    /// A path inside the sandbox that intentionally does not exist.
    pub fn missing_file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn write_config(&self, contents: &str) {
        let dir = self.home.join(".config/apt-world");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), contents).expect("write config");
    }
}
