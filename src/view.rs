use std::sync::Arc;

use crate::collections::{FilterableCollection, LinksCollection};
use crate::vocab::hydra;
use crate::{Collection, Fetcher, PageError, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Next,
	Previous,
}

impl Direction {
	/// relation a walk in this direction follows
	pub fn relation(self) -> &'static str {
		match self {
			Direction::Next => hydra::NEXT,
			Direction::Previous => hydra::PREVIOUS,
		}
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Direction::Next => write!(f, "next"),
			Direction::Previous => write!(f, "previous"),
		}
	}
}

/// One fetched batch of a partial collection: the members present on that
/// page and the links to walk on from it.
#[derive(Debug, Clone)]
pub struct Page {
	pub members: FilterableCollection<serde_json::Value>,
	pub links: LinksCollection,
	pub total_items: Option<u64>,
}

impl Page {
	/// Shape check over a fetched resource: pages must carry a member
	/// sequence, anything else is treated as a failed fetch rather than
	/// silently tolerated.
	pub fn from_resource(resource: serde_json::Value) -> Result<Self, PageError> {
		// anything that is not an object cannot carry a member sequence
		if !resource.is_object() || resource.get(hydra::MEMBER).is_none() {
			return Err(PageError::Malformed(crate::FieldErr(hydra::MEMBER)));
		}
		Ok(Page {
			members: resource.members(),
			links: resource.links(),
			total_items: resource.total_items().ok(),
		})
	}
}

/// Pagination cursor over a chain of collection pages reachable via
/// next/previous links.
///
/// The view owns only the *current* page's link set: each navigation step
/// resolves the requested relation on it, fetches the target through the
/// shared client, adopts the fetched page's links as the new cursor and
/// hands the page back. Pages already held are never re-fetched within a
/// step, and the cursor moves only after a fetch fully succeeds, so a
/// failed step leaves the view exactly where it was and may be retried.
///
/// Navigation takes `&mut self`: one view, one outstanding fetch. Distinct
/// views are fully independent and may run concurrently over the same
/// client.
pub struct PartialCollectionView {
	links: LinksCollection,
	client: Arc<dyn Fetcher>,
}

impl PartialCollectionView {
	pub fn new(links: LinksCollection, client: Arc<dyn Fetcher>) -> Self {
		PartialCollectionView { links, client }
	}

	pub fn has_next_page(&self) -> bool {
		self.links.get(hydra::NEXT).is_some()
	}

	pub fn has_previous_page(&self) -> bool {
		self.links.get(hydra::PREVIOUS).is_some()
	}

	pub async fn get_next_page(&mut self) -> Result<Page, PageError> {
		self.advance(Direction::Next).await
	}

	pub async fn get_previous_page(&mut self) -> Result<Page, PageError> {
		self.advance(Direction::Previous).await
	}

	async fn advance(&mut self, direction: Direction) -> Result<Page, PageError> {
		let link = self.links
			.get(direction.relation())
			.ok_or(PageError::Exhausted(direction))?;
		let target = link.href()?.to_string();
		tracing::debug!("walking {direction} to {target}");
		let resource = self.client.get_resource(&target).await?;
		let page = Page::from_resource(resource)?;
		// adopt the new link set only once the whole step succeeded
		self.links = page.links.clone();
		Ok(page)
	}
}
