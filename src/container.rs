use crate::collections::{FilterableCollection, LinksCollection, OperationsCollection};
use crate::vocab::hydra;
use crate::{Collection, Resource};

/// One cohesive view of "what can I do with this resource": its operations,
/// links, discovered collections and, when the resource itself is a
/// collection, its immediate members. Assembled once from already-fetched
/// hypermedia controls and immutable afterwards.
pub struct HypermediaContainer {
	items: FilterableCollection<serde_json::Value>,
	operations: OperationsCollection,
	links: LinksCollection,
	collections: FilterableCollection<serde_json::Value>,
	members: FilterableCollection<serde_json::Value>,
}

impl HypermediaContainer {
	pub fn new(
		items: impl IntoIterator<Item = serde_json::Value>,
		operations: OperationsCollection,
		links: LinksCollection,
		members: Option<FilterableCollection<serde_json::Value>>,
	) -> Self {
		let items = FilterableCollection::new(items);
		let mut collections: Vec<serde_json::Value> = items.iter()
			.filter(|x| x.is_collection())
			.cloned()
			.collect();
		// only the first item exposing a nested `collection` property is
		// honored, even one exposing an empty set; any others are dropped
		// (see DESIGN.md)
		if let Some(nested) = items.iter()
			.map(|x| x.property(hydra::COLLECTION_PROP))
			.find(|x| !x.is_nothing())
		{
			collections.extend(nested.flat().into_iter().filter_map(|x| x.into_value()));
		}
		HypermediaContainer {
			collections: FilterableCollection::new(collections),
			members: members.unwrap_or_default(),
			items,
			operations,
			links,
		}
	}

	/// container for a single already-fetched resource: controls are the
	/// resource itself plus its members, the rest gets extracted in place
	pub fn from_resource(resource: &serde_json::Value) -> Self {
		let members = resource.is_collection().then(|| resource.members());
		HypermediaContainer::new(
			std::iter::once(resource.clone()).chain(resource.members()),
			OperationsCollection::from_resource(resource),
			LinksCollection::from_resource(resource),
			members,
		)
	}

	/// hypermedia controls stored within this container
	pub fn items(&self) -> &FilterableCollection<serde_json::Value> {
		&self.items
	}

	pub fn operations(&self) -> &OperationsCollection {
		&self.operations
	}

	pub fn links(&self) -> &LinksCollection {
		&self.links
	}

	/// collections discovered among the controls: items typed as Collection
	/// plus whatever the first nested `collection` property carried
	pub fn collections(&self) -> &FilterableCollection<serde_json::Value> {
		&self.collections
	}

	/// members of the owning resource; empty unless it is a collection
	pub fn members(&self) -> &FilterableCollection<serde_json::Value> {
		&self.members
	}
}

impl<'a> IntoIterator for &'a HypermediaContainer {
	type Item = &'a serde_json::Value;
	type IntoIter = std::slice::Iter<'a, serde_json::Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
