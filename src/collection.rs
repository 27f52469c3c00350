use std::sync::Arc;

use crate::collections::FilterableCollection;
use crate::vocab::hydra;
use crate::{Fetcher, Node, PartialCollectionView, Resource};

/// Capability contract for resources that may be treated as a paginated
/// collection. Whether a resource satisfies it is decided by a type
/// membership probe, not by its concrete shape.
pub trait Collection: Resource {
	/// member resources present on *this* page only
	fn members(&self) -> FilterableCollection<serde_json::Value>;

	/// total count across the entire collection, not just this page
	fn total_items(&self) -> crate::Field<u64>;

	/// optional IRI template describing how member identifiers are built
	fn member_template(&self) -> Node<serde_json::Value>;

	/// the partial view marker, when the collection is paginated
	fn view(&self) -> Node<serde_json::Value>;

	/// capability probe: does this resource declare the Collection type?
	fn is_collection(&self) -> bool;

	/// pagination cursor over this collection's pages, seeded from the
	/// collection's own links. None when the resource is not a collection
	/// or declares no view at all (a complete, unpaginated collection).
	fn get_view(&self, client: Arc<dyn Fetcher>) -> Option<PartialCollectionView>;
}

impl Collection for serde_json::Value {
	fn members(&self) -> FilterableCollection<serde_json::Value> {
		self.property(hydra::MEMBER)
			.flat()
			.into_iter()
			.filter_map(|x| x.into_value())
			.collect()
	}

	crate::getter! { total_items[hydra::TOTAL_ITEMS] -> u64 }
	crate::getter! { member_template[hydra::MEMBER_TEMPLATE] -> node }
	crate::getter! { view[hydra::VIEW] -> node }

	fn is_collection(&self) -> bool {
		self.types().contains(hydra::COLLECTION)
	}

	fn get_view(&self, client: Arc<dyn Fetcher>) -> Option<PartialCollectionView> {
		if !self.is_collection() || self.view().is_nothing() {
			return None;
		}
		Some(PartialCollectionView::new(self.links(), client))
	}
}

#[cfg(test)]
mod test {
	use super::Collection;
	use crate::vocab::hydra;

	#[test]
	fn members_and_total_items_read_their_terms() {
		let collection = serde_json::json!({
			"@id": "http://localhost:8080/items",
			"@type": hydra::COLLECTION,
			(hydra::TOTAL_ITEMS): 2,
			(hydra::MEMBER): [
				{"@id": "http://localhost:8080/items/1"},
				"http://localhost:8080/items/2",
			],
		});
		assert_eq!(collection.total_items().unwrap(), 2);
		assert_eq!(collection.members().len(), 2);
		assert!(collection.is_collection());
	}

	#[test]
	fn member_template_is_orthogonal_to_pagination() {
		let collection = serde_json::json!({
			"@type": hydra::COLLECTION,
			(hydra::MEMBER_TEMPLATE): {
				"@type": hydra::IRI_TEMPLATE,
				"template": "/items{/id}",
			},
		});
		assert!(collection.member_template().is_object());
		assert!(collection.view().is_nothing());
	}
}
