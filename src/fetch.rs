use crate::view::Direction;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
	#[error("no {0} page available from current view")]
	Exhausted(Direction),

	#[error("dereferenced page is malformed: {0}")]
	Malformed(#[from] crate::FieldErr),

	#[error("error fetching resource: {0}")]
	Client(#[source] Box<dyn std::error::Error + Send + Sync>),

	#[cfg(feature = "fetch")]
	#[error("error fetching resource: {0:?}")]
	Reqwest(#[from] reqwest::Error),

	#[cfg(feature = "fetch")]
	#[error("fetch failed with status {0}: {1}")]
	Fetch(reqwest::StatusCode, String),
}

impl PageError {
	pub fn client(err: impl std::error::Error + Send + Sync + 'static) -> Self {
		PageError::Client(Box::new(err))
	}
}

/// Resolves an IRI into an already-deserialized resource. Shared across all
/// views of a client context, so implementations must be safe to invoke from
/// multiple independent views at once. No retrying happens at this layer:
/// failures surface unchanged to whoever asked for the page.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
	async fn get_resource(&self, iri: &str) -> Result<serde_json::Value, PageError>;
}

#[cfg(feature = "fetch")]
const ACCEPT_LD: &str = "application/ld+json; profile=\"http://www.w3.org/ns/hydra/core#\"";

/// Builtin [Fetcher] over a plain [reqwest::Client].
#[cfg(feature = "fetch")]
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
	client: reqwest::Client,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
	pub fn new(client: reqwest::Client) -> Self {
		HttpFetcher { client }
	}
}

#[cfg(feature = "fetch")]
#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
	async fn get_resource(&self, iri: &str) -> Result<serde_json::Value, PageError> {
		tracing::debug!("fetching resource {iri}");
		let response = self.client
			.get(iri)
			.header(reqwest::header::ACCEPT, ACCEPT_LD)
			.send()
			.await?;
		let status = response.status();
		if !status.is_success() {
			return Err(PageError::Fetch(status, response.text().await.unwrap_or_default()));
		}
		Ok(response.json().await?)
	}
}
