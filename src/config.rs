//! Service endpoints, overridable from the command line or the environment.

use clap::Args;

pub const ON_DEMAND_URL: &str = "https://awk.epgsky.com/hawk/ondemand";
pub const REGIONS_URL: &str = "https://epgservices.sky.com/80.1.1/api/2.0/regions/json";
pub const SUGGEST_URL: &str =
    "http://entity.search.sky.com/suggest/v1/skygo/BENQMSHomePageContainerViewController";
pub const PROGRAMME_INFO_URL: &str = "http://entity.search.sky.com/entity/search/v1/skygo/home";
pub const MENU_URL: &str = "https://config.ethan.interactive.sky.com/config-content/r4/menu";

/// Suggestion profile id the search endpoint expects after the region.
pub const SUGGEST_PROFILE: &str = "F4624E62-2E95-40CF-9105-9DC97841F84E";

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base URL of the on demand catalogue service.
    #[arg(long, env = "SKY_ON_DEMAND_URL", default_value = ON_DEMAND_URL)]
    pub on_demand: String,

    #[arg(long, env = "SKY_REGIONS_URL", default_value = REGIONS_URL)]
    pub regions: String,

    #[arg(long, env = "SKY_SUGGEST_URL", default_value = SUGGEST_URL)]
    pub suggest: String,

    #[arg(long, env = "SKY_PROGRAMME_INFO_URL", default_value = PROGRAMME_INFO_URL)]
    pub programme_info: String,

    #[arg(long, env = "SKY_MENU_URL", default_value = MENU_URL)]
    pub menu: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            on_demand: ON_DEMAND_URL.to_string(),
            regions: REGIONS_URL.to_string(),
            suggest: SUGGEST_URL.to_string(),
            programme_info: PROGRAMME_INFO_URL.to_string(),
            menu: MENU_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Points every endpoint at one host, keeping the default paths.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            on_demand: format!("{}/ondemand", base),
            regions: format!("{}/regions", base),
            suggest: format!("{}/suggest", base),
            programme_info: format!("{}/programme", base),
            menu: format!("{}/menu", base),
        }
    }
}
