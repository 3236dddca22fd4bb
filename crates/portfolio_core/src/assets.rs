/// Path the published site is served under.
pub const PRODUCTION_BASE_PATH: &str = "/gauntlet-portfolio";

/// Where the site is running. Selects the asset prefix and base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    #[default]
    Development,
    Production,
}

impl DeploymentMode {
    pub fn asset_prefix(self) -> &'static str {
        match self {
            DeploymentMode::Development => "",
            DeploymentMode::Production => PRODUCTION_BASE_PATH,
        }
    }

    /// Directory-style path of the site root, always ending in `/`.
    pub fn base_path(self) -> String {
        format!("{}/", self.asset_prefix())
    }
}

/// Prefixes a catalog-relative asset path for the given deployment.
pub fn asset_path(mode: DeploymentMode, raw: &str) -> String {
    format!("{}{}", mode.asset_prefix(), raw)
}
