//! Optional TOML configuration of the binary.

use {
    crate::domain::seaport::Schema,
    anyhow::{Context, Result},
    serde::Deserialize,
    std::path::{Path, PathBuf},
    url::Url,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// The `cast` executable. Defaults to `cast` on the `PATH`.
    pub cast_path: Option<PathBuf>,

    /// The Ethereum node `cast` fetches transactions from. Without it `cast`
    /// uses its own default.
    pub rpc_url: Option<Url>,

    /// Solidity source declaring the Seaport enums, for example
    /// `ConsiderationEnums.sol`. Enums it declares replace the built-in
    /// definitions.
    pub enums_path: Option<PathBuf>,
}

/// Load the configuration from a TOML file.
pub fn load(path: &Path) -> Result<Config> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("I/O error while reading {path:?}"))?;
    toml::from_str(&data).with_context(|| format!("TOML syntax error while reading {path:?}"))
}

impl Config {
    /// Builds the enum schema the records are mapped with.
    pub fn schema(&self) -> Result<Schema> {
        let Some(path) = &self.enums_path else {
            return Ok(Schema::default());
        };
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("I/O error while reading {path:?}"))?;
        Schema::default()
            .with_solidity(&source)
            .with_context(|| format!("invalid enum declarations in {path:?}"))
    }
}
