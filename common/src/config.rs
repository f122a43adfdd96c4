/// Base URL of the public NHTSA vPIC vehicles API.
pub const DEFAULT_ENDPOINT: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

pub struct Config {
    /// Base URL the `DecodeVinValues` path is appended to.
    ///
    /// Points at the public vPIC API unless overridden.
    pub endpoint: String,
    /// 0 prints everything, 1 drops the banner and headers, 2 prints bare values.
    pub quiet: u8,
    pub no_banner: bool,
    /// Print the display state as JSON instead of the styled block.
    pub json: bool,
    /// Ignore proxy settings from the environment.
    pub no_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            quiet: 0,
            no_banner: false,
            json: false,
            no_proxy: false,
        }
    }
}
