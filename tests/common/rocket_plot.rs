use std::path::Path;
use std::process::Command;

use assert_cmd::{assert::Assert, prelude::*};

pub struct RocketPlot {
    config_path: Option<String>,
}

impl RocketPlot {
    pub fn new() -> RocketPlot {
        RocketPlot { config_path: None }
    }

    pub fn with_config_env(path: &Path) -> RocketPlot {
        RocketPlot { config_path: Some(path.to_str().unwrap().to_string()) }
    }

    fn command(&self) -> Command {
        let mut command = Command::cargo_bin("rocket-plot").unwrap();
        command.env_remove("CONFIG_PATH").env("RUST_LOG", "warn");
        if let Some(config_path) = &self.config_path {
            command.env("CONFIG_PATH", config_path);
        }
        command
    }

    /// Never opens the chart window
    pub fn dry_run<P: AsRef<Path>>(&self, args: &[&str], files: &[P]) -> Assert {
        self.command()
            .arg("--dry-run")
            .args(args)
            .args(files.iter().map(|e| e.as_ref()))
            .assert()
    }
}
