use reqwest::Url;

use crate::config::{Endpoints, SUGGEST_PROFILE};

use super::{
    decode,
    models::{
        catalogue::Catalogue,
        programme::Programme,
        region::Region,
        search_result::{SearchResult, SearchType},
        shelf_menu::ShelfMenu,
        Decode, Node,
    },
};

/// Content sources the search and programme endpoints look in.
const SOURCES: [&str; 3] = ["svod", "cup", "ott"];

pub const MAX_SEARCH_LIMIT: u8 = 255;

/// Fetches raw response bodies. Failures are passed through untouched.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>, anyhow::Error>;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, url: &str) -> Result<Vec<u8>, anyhow::Error> {
        (**self).get(url).await
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, anyhow::Error> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }
}

pub struct Sky {
    endpoints: Endpoints,
    transport: Box<dyn Transport>,
}

impl Sky {
    pub fn new(endpoints: Endpoints) -> Self {
        Self::with_transport(endpoints, HttpTransport::new())
    }

    pub fn with_transport(endpoints: Endpoints, transport: impl Transport + 'static) -> Self {
        Self {
            endpoints,
            transport: Box::new(transport),
        }
    }

    pub async fn get(&self, url: &str) -> Result<Vec<u8>, anyhow::Error> {
        log::debug!("GET {}", url);
        let body = self.transport.get(url).await?;
        log::trace!("{} bytes from {}", body.len(), url);
        Ok(body)
    }

    fn on_demand_url(&self, region: &Region) -> String {
        format!(
            "{}/{}/{}/cataloguenode",
            self.endpoints.on_demand, region.bouquet, region.subbouquet
        )
    }

    pub async fn get_regions(&self) -> Result<Vec<Region>, anyhow::Error> {
        let body = self.get(&self.endpoints.regions).await?;
        Ok(decode::regions(&body)?)
    }

    /// The programmes matching a filter.
    pub async fn get_catalogue(
        &self,
        id: &str,
        region: &Region,
    ) -> Result<Catalogue<Programme>, anyhow::Error> {
        let url = format!("{}/{}", self.on_demand_url(region), id);
        let body = self.get(&url).await?;
        Ok(decode::catalogue(&body)?)
    }

    /// The root of the on demand catalogue tree. How deep it is decoded is
    /// chosen by `T`.
    pub async fn get_root_catalogue<T: Node + Decode>(
        &self,
        region: &Region,
    ) -> Result<Catalogue<T>, anyhow::Error> {
        let body = self.get(&self.on_demand_url(region)).await?;
        Ok(decode::catalogue(&body)?)
    }

    pub async fn get_menu(&self) -> Result<ShelfMenu, anyhow::Error> {
        let body = self.get(&self.endpoints.menu).await?;
        Ok(decode::menu(&body)?)
    }

    pub async fn get_programme(
        &self,
        id: &str,
        search_type: SearchType,
        region: &Region,
    ) -> Result<Programme, anyhow::Error> {
        let base = format!(
            "{}/{}/{}/user/{}/{}",
            self.endpoints.programme_info, region.bouquet, region.subbouquet, search_type, id
        );
        let mut params: Vec<(&str, &str)> = SOURCES.iter().map(|src| ("src", *src)).collect();
        params.push(("order", "sea"));
        let url = Url::parse_with_params(&base, &params)?;

        let body = self.get(url.as_str()).await?;
        Ok(decode::node(&body)?)
    }

    /// Suggestions for `term`, keeping only results of the given types (all
    /// types when empty).
    pub async fn search(
        &self,
        term: &str,
        region: &Region,
        types: &[SearchType],
        limit: u8,
    ) -> Result<Vec<SearchResult>, anyhow::Error> {
        let base = format!(
            "{}/{}/{}/{}",
            self.endpoints.suggest, region.bouquet, region.subbouquet, SUGGEST_PROFILE
        );
        let limit = limit.to_string();
        let mut params = vec![("limit", limit.as_str()), ("term", term)];
        params.extend(SOURCES.iter().map(|src| ("src", *src)));
        let url = Url::parse_with_params(&base, &params)?;

        let body = self.get(url.as_str()).await?;
        let results: Vec<SearchResult> = decode::keyed_list(&body)?;

        Ok(results
            .into_iter()
            .filter(|result| types.is_empty() || types.contains(&result.search_type))
            .collect())
    }
}
