// siad launch helpers
//
// Assembles a `--flag=value` argument list from caller settings and spawns
// siad as a child of the current process. The child inherits the caller's
// effective uid/gid; nothing here elevates or switches users.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use tracing::info;

use crate::error::Result;

/// Defaults applied for any flag the caller does not set, in the order siad
/// conventionally receives them.
const DEFAULT_FLAGS: [(&str, &str); 4] = [
    ("api-addr", "localhost:9980"),
    ("host-addr", ":9982"),
    ("rpc-addr", ":9981"),
    ("modules", "cghmrtw"),
];

/// A single flag value. Booleans render as the literal strings
/// `true`/`false`, matching what siad's flag parser expects.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Text(String),
    Number(i64),
    Bool(bool),
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Text(s) => f.write_str(s),
            FlagValue::Number(n) => write!(f, "{}", n),
            FlagValue::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<&str> for FlagValue {
    fn from(s: &str) -> Self {
        FlagValue::Text(s.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(s: String) -> Self {
        FlagValue::Text(s)
    }
}

impl From<i64> for FlagValue {
    fn from(n: i64) -> Self {
        FlagValue::Number(n)
    }
}

impl From<bool> for FlagValue {
    fn from(b: bool) -> Self {
        FlagValue::Bool(b)
    }
}

/// Flat flag-name → value settings for one launch. No validation happens
/// here: unknown names and bad values go straight to siad, which is the
/// sole validator of its own flags.
#[derive(Debug, Clone, Default)]
pub struct LaunchConfig {
    flags: Vec<(String, FlagValue)>,
    sia_directory: Option<String>,
}

impl LaunchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag, replacing any earlier value for the same name. The
    /// `sia-directory` key is routed to its dedicated field so the working
    /// directory is always emitted as exactly one `--sia-directory` flag.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == "sia-directory" {
            self.sia_directory = Some(value.to_string());
            return self;
        }
        if let Some(slot) = self.flags.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.flags.push((key, value));
        }
        self
    }

    /// Set the daemon's working directory (the `--sia-directory` flag).
    pub fn sia_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sia_directory = Some(dir.into().to_string_lossy().into_owned());
        self
    }

    /// Render the full argument list: defaults first (caller values win),
    /// then remaining caller flags in insertion order, then the working
    /// directory override.
    pub fn to_flags(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(DEFAULT_FLAGS.len() + self.flags.len() + 1);
        for (key, default) in DEFAULT_FLAGS {
            match self.flags.iter().find(|(k, _)| *k == key) {
                Some((_, value)) => out.push(format!("--{}={}", key, value)),
                None => out.push(format!("--{}={}", key, default)),
            }
        }
        for (key, value) in &self.flags {
            if DEFAULT_FLAGS.iter().any(|(k, _)| *k == key.as_str()) {
                continue;
            }
            out.push(format!("--{}={}", key, value));
        }
        if let Some(dir) = &self.sia_directory {
            out.push(format!("--sia-directory={}", dir));
        }
        out
    }
}

/// Process-creation seam. The default implementation spawns a real child;
/// tests substitute a recorder to inspect the path and flags.
pub trait Spawner {
    type Handle;

    fn spawn(&self, path: &Path, flags: &[String]) -> io::Result<Self::Handle>;
}

/// Spawns via `std::process::Command`. The child runs under the caller's
/// own effective uid/gid, which `Command` inherits by default.
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    type Handle = Child;

    fn spawn(&self, path: &Path, flags: &[String]) -> io::Result<Child> {
        Command::new(path).args(flags).spawn()
    }
}

/// Launch siad at `path` with the given settings.
///
/// Spawn failures (missing executable, permission denied) propagate as the
/// underlying `std::io::Error`, untranslated.
pub fn launch(path: impl AsRef<Path>, config: &LaunchConfig) -> Result<Child> {
    launch_with(&ProcessSpawner, path, config)
}

/// Launch through an explicit [`Spawner`].
pub fn launch_with<S: Spawner>(
    spawner: &S,
    path: impl AsRef<Path>,
    config: &LaunchConfig,
) -> Result<S::Handle> {
    let path = path.as_ref();
    let flags = config.to_flags();
    info!(path = %path.display(), ?flags, "spawning siad");
    Ok(spawner.spawn(path, &flags)?)
}
