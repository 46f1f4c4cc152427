use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Starts a program without waiting for it to finish
pub trait Spawn {
    fn spawn(&self, program: &Path, args: &[String]) -> Result<()>;
}

impl<T: Spawn + ?Sized> Spawn for Box<T> {
    fn spawn(&self, program: &Path, args: &[String]) -> Result<()> {
        (**self).spawn(program, args)
    }
}

/// Spawns the process with null stdio and lets it outlive us
pub struct DetachedSpawner;

impl Spawn for DetachedSpawner {
    fn spawn(&self, program: &Path, args: &[String]) -> Result<()> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                Error::Browser(format!("Failed to launch {}: {}", program.display(), e))
            })?;

        Ok(())
    }
}

/// URL that asks the browser to open `url` inside the named container
pub fn container_url(profile: &str, url: &str) -> String {
    format!("ext+container:name={}&url={}", profile, url)
}

/// Opens URLs in a configured browser container
pub struct BrowserLauncher<S: Spawn> {
    executable: PathBuf,
    profiles: Vec<String>,
    spawner: S,
}

impl<S: Spawn> BrowserLauncher<S> {
    pub fn with_spawner(executable: PathBuf, profiles: Vec<String>, spawner: S) -> Self {
        Self {
            executable,
            profiles,
            spawner,
        }
    }

    /// Open `url` in `profile`; unknown profiles are rejected without launching
    pub fn open(&self, url: &str, profile: &str) -> Result<()> {
        if !self.profiles.iter().any(|p| p == profile) {
            return Err(Error::InvalidProfile(profile.to_string()));
        }

        let target = container_url(profile, url);
        tracing::info!("Opening {} in container '{}'", url, profile);

        self.spawner.spawn(&self.executable, &[target])
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }
}
