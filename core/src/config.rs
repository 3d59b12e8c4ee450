use std::path::{Path, PathBuf};
use std::result::Result as StdResult;
use std::time::Duration;

use anyhow::Context as _;
use aocv_webclient::PuzzleRef;
use rust_embed::RustEmbed;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub source_config_file: Option<PathBuf>,
    pub repository: RepoConfig,
    pub build: BuildConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoConfig {
    pub problems_home: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    pub source_ext: String,
    /// argv template, see [`crate::solution::SolutionRunner`]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub years: Vec<u32>,
    #[serde(default = "RunConfig::default_days")]
    pub days: Vec<u32>,
    #[serde(default)]
    pub time_limit_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            years: Vec::new(),
            days: Self::default_days(),
            time_limit_ms: 0,
        }
    }
}

impl RunConfig {
    fn default_days() -> Vec<u32> {
        (1..=25).collect()
    }

    pub fn time_limit(&self) -> Option<Duration> {
        (self.time_limit_ms > 0).then(|| Duration::from_millis(self.time_limit_ms))
    }

    /// Every configured (year, day), ascending and without duplicates.
    pub fn puzzles(&self) -> Vec<PuzzleRef> {
        let mut xs: Vec<_> = self
            .years
            .iter()
            .flat_map(|&year| self.days.iter().map(move |&day| PuzzleRef::new(year, day)))
            .collect();
        xs.sort();
        xs.dedup();
        xs
    }
}

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

fn strip_prefix_dot(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

impl Config {
    pub const FILENAME: &'static str = "aocv.toml";

    pub fn example_toml() -> anyhow::Result<String> {
        let file = Asset::get(Self::FILENAME).context("Bundled example config is missing")?;
        let toml = std::str::from_utf8(file.data.as_ref())
            .context("Bundled example config is not UTF-8")?;
        Ok(toml.to_owned())
    }

    pub fn from_toml(s: &str) -> StdResult<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_toml_file(filepath: PathBuf) -> anyhow::Result<Self> {
        let toml = fsutil::read_to_string(&filepath).context("Cannot read a file")?;
        let mut cfg = Self::from_toml(&toml)
            .with_context(|| format!("Invalid config TOML: {:?}", filepath))?;
        cfg.source_config_file = Some(filepath);
        Ok(cfg)
    }

    /// Find config file ancestor dirs, including current dir.
    pub fn find_file_in_ancestors(cur_dir: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        let cur_dir = cur_dir.as_ref();
        cur_dir
            .ancestors()
            .map(|dir| dir.join(Self::FILENAME))
            .find(|path| path.is_file())
            .with_context(|| {
                format!(
                    "Not in an aocv repository: Cannot find '{}' (run `aocv init` first)",
                    Self::FILENAME
                )
            })
    }

    pub fn from_file_finding_in_ancestors(cur_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_filepath = Config::find_file_in_ancestors(cur_dir)?;
        Self::from_toml_file(config_filepath)
    }

    /// Directory relative paths in this config are resolved against.
    pub fn repo_root(&self) -> &Path {
        self.source_config_file
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(Path::new("."))
    }

    pub fn problems_home(&self) -> PathBuf {
        let path = &self.repository.problems_home;
        if path.is_absolute() {
            path.to_owned()
        } else {
            self.repo_root().join(strip_prefix_dot(path))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn example_toml_should_be_parsable() {
        let toml = Config::example_toml().unwrap();
        let cfg = dbg!(Config::from_toml(&toml)).unwrap();

        let Config {
            source_config_file,
            repository: repo,
            build,
            run,
        } = cfg;

        assert_eq!(source_config_file, None);
        assert_eq!(repo.problems_home, Path::new("./problems"));

        assert_eq!(build.source_ext, "go");
        assert_eq!(
            build.command,
            ["go", "build", "-o", "#{binPath}", "#{srcPath}"]
        );

        assert_eq!(run.years, [2022]);
        assert_eq!(run.days, (1..=25).collect::<Vec<_>>());
        assert_eq!(run.time_limit(), None);
        assert_eq!(run.puzzles().len(), 25);
    }

    #[test]
    fn run_section_is_optional() {
        let cfg = Config::from_toml(
            r##"
            [repository]
            problems_home = "/abs/problems"
            [build]
            source_ext = "rs"
            command = ["rustc", "-O", "-o", "#{binPath}", "#{srcPath}"]
            "##,
        )
        .unwrap();
        assert_eq!(cfg.run, RunConfig::default());
        assert!(cfg.run.puzzles().is_empty());
        assert_eq!(cfg.problems_home(), Path::new("/abs/problems"));
    }

    #[test]
    fn problems_home_is_relative_to_config_file() {
        let mut cfg = Config::from_toml(&Config::example_toml().unwrap()).unwrap();
        cfg.source_config_file = Some(PathBuf::from("/home/elf/aoc/aocv.toml"));
        assert_eq!(cfg.problems_home(), Path::new("/home/elf/aoc/problems"));
    }

    #[test]
    fn puzzles_are_sorted_and_unique() {
        let run = RunConfig {
            years: vec![2023, 2022, 2022],
            days: vec![2, 1],
            time_limit_ms: 1500,
        };
        assert_eq!(
            run.puzzles(),
            [
                PuzzleRef::new(2022, 1),
                PuzzleRef::new(2022, 2),
                PuzzleRef::new(2023, 1),
                PuzzleRef::new(2023, 2),
            ]
        );
        assert_eq!(run.time_limit(), Some(Duration::from_millis(1500)));
    }
}
