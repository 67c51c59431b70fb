use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Runs the `wakeline` binary from the working directory `cwd`.
///
/// # Errors
///
/// Returns an error if the binary is missing or cannot be spawned.
pub fn run_wakeline<I, S>(args: I, cwd: &std::path::Path) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = wakeline_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("WAKELINE_LOG", "error")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .map_err(|err| format!("run wakeline failed: {}", err))
}

fn wakeline_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_wakeline").map_or_else(
        || Err("CARGO_BIN_EXE_wakeline missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

#[must_use]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
