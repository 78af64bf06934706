use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "chowmap.toml";

const ENV_NAME_PLACES: &str = "CHOWMAP_PLACES";
const ENV_NAME_OVERLAY: &str = "CHOWMAP_OVERLAY";

#[derive(Debug)]
pub struct Config {
    pub catalog: Catalog,
    pub location: Location,
}

#[derive(Debug)]
pub struct Catalog {
    /// JSON array with the base places dataset.
    pub places: PathBuf,
    /// Local edits, created on demand.
    pub overlay: PathBuf,
}

#[derive(Debug)]
pub struct Location {
    /// Shell command that prints `lat,lng` on stdout.
    pub command: Option<String>,
    pub timeout: Duration,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified, trying {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found, using the default configuration",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(places) = env::var(ENV_NAME_PLACES) {
            cfg.catalog.places = places.into();
        }
        if let Ok(overlay) = env::var(ENV_NAME_OVERLAY) {
            cfg.catalog.overlay = overlay.into();
        }
        Ok(cfg)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;

    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { catalog, location } = from;

        let raw::Catalog { places, overlay } = catalog.unwrap_or_default();
        let catalog = Catalog { places, overlay };

        let raw::Location { command, timeout } = location.unwrap_or_default();
        if timeout.is_zero() {
            return Err(anyhow!("The locator timeout must not be zero"));
        }
        // An empty command disables the locator.
        let command = command.filter(|c| !c.trim().is_empty());
        let location = Location { command, timeout };

        Ok(Self { catalog, location })
    }
}
