use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use dehacked_data::{DEFAULT_MAX_INCLUDE_DEPTH, ReaderFlags};

/// Host settings, from an optional TOML file overridden by `DEHACKED_*`
/// environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Deepest include nesting allowed; 0 disables includes.
    pub max_include_depth: usize,
    pub game_id: String,
    pub ignore_eof: bool,
    pub no_text: bool,
    pub no_include: bool,
    /// TOML definitions database; the built-in DOOM skeleton when unset.
    pub definitions: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
            game_id: "doom".into(),
            ignore_eof: false,
            no_text: false,
            no_include: false,
            definitions: None,
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        Self::build(builder)
            .wrap_err_with(|| format!("loading settings from {}", display(path)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder
            .add_source(Environment::with_prefix("DEHACKED").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn reader_flags(&self) -> ReaderFlags {
        let mut flags = ReaderFlags::empty();
        flags.set(ReaderFlags::NO_INCLUDE, self.no_include);
        flags.set(ReaderFlags::NO_TEXT, self.no_text);
        flags.set(ReaderFlags::IGNORE_EOF, self.ignore_eof);
        flags
    }
}

fn display(path: Option<&Path>) -> String {
    path.map_or_else(|| "the environment".into(), |p| p.display().to_string())
}
