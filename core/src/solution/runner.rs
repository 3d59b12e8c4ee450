use std::{
    collections::HashMap,
    ffi::OsString,
    path::Path,
    process::Stdio,
    time::Duration,
};

use anyhow::{anyhow, bail, Context};
use tokio::process::Command;

use crate::str_interp::interp_args;

/// Builds a solution source into an executable and runs it on a puzzle input.
///
/// The build command is an argv template; no shell is involved. Placeholders:
/// `#{srcPath}`, `#{srcDir}`, `#{binPath}`, `#{binDir}`.
#[derive(Debug, Clone)]
pub struct SolutionRunner {
    build_command: Vec<String>,
    execution_time_limit: Option<Duration>,
}

impl SolutionRunner {
    pub fn new(build_command: Vec<String>) -> Self {
        Self {
            build_command,
            execution_time_limit: None,
        }
    }

    pub fn execution_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.execution_time_limit = limit;
        self
    }

    fn make_build_interp_vars(src: &Path, bin: &Path) -> HashMap<&'static str, OsString> {
        let dir_of = |p: &Path| {
            p.parent()
                .filter(|d| !d.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .as_os_str()
                .to_owned()
        };
        let mut m = HashMap::new();
        m.insert("srcPath", src.as_os_str().to_owned());
        m.insert("srcDir", dir_of(src));
        m.insert("binPath", bin.as_os_str().to_owned());
        m.insert("binDir", dir_of(bin));
        m
    }

    pub async fn compile(&self, src: impl AsRef<Path>, bin: impl AsRef<Path>) -> anyhow::Result<()> {
        let (src, bin) = (src.as_ref(), bin.as_ref());
        if !src.is_file() {
            bail!("Source file not found: {}", src.display());
        }

        let vars = Self::make_build_interp_vars(src, bin);
        let argv = interp_args(&self.build_command, &vars).context("Invalid build command")?;
        let Some((program, args)) = argv.split_first() else {
            bail!("Undefined build command")
        };

        log::info!("Compiling {}", src.display());
        log::info!("{:?}", argv);

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .await
            .with_context(|| format!("Failed to spawn {:?}", argv))?;

        match status.code() {
            Some(0) => Ok(()),
            Some(code) => bail!("Compile error: exitcode={}", code),
            None => bail!("Failed to compile: process terminated by signal"),
        }
    }

    /// Run `bin input` and return its trimmed stdout, or `""` if anything goes wrong.
    pub async fn execute(&self, bin: impl AsRef<Path>, input: impl AsRef<Path>) -> String {
        let bin = bin.as_ref();
        self.try_execute(bin, input.as_ref())
            .await
            .unwrap_or_else(|e| {
                log::warn!("Failed to execute {}: {:#}", bin.display(), e);
                String::new()
            })
    }

    async fn try_execute(&self, bin: &Path, input: &Path) -> anyhow::Result<String> {
        let proc = Command::new(bin)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to spawn '{}'", bin.display()))?;

        let fut_output = proc.wait_with_output();
        let output = match self.execution_time_limit {
            Some(limit) => tokio::time::timeout(limit, fut_output)
                .await
                .map_err(|_| anyhow!("Time limit exceeded ({}ms)", limit.as_millis()))?,
            None => fut_output.await,
        }
        .context("Failed to communicate with subprocess")?;

        if !output.status.success() {
            bail!("Runtime error: exitcode={:?}", output.status.code());
        }

        let stdout = String::from_utf8(output.stdout).context("Output is not valid UTF-8")?;
        Ok(trim_answer(&stdout).to_owned())
    }
}

/// Strip surrounding spaces and line terminators.
pub fn trim_answer(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, ' ' | '\r' | '\n'))
}
