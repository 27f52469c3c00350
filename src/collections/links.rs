use super::{FilterableCollection, Identified};
use crate::vocab::hydra;
use crate::{Field, Node, Resource};

/// A navigational hypermedia control: a relation identifier pointing at
/// another resource, either by IRI reference or embedded in place.
#[derive(Debug, Clone)]
pub struct Link {
	pub relation: String,
	pub target: Node<serde_json::Value>,
}

impl Link {
	pub fn new(relation: impl Into<String>, target: Node<serde_json::Value>) -> Self {
		Link { relation: relation.into(), target }
	}

	/// IRI this link points at
	pub fn href(&self) -> Field<&str> {
		self.target.id()
	}
}

impl Identified for Link {
	fn identity(&self) -> Option<String> {
		Some(format!("{} {}", self.relation, self.href().ok()?))
	}
}

#[derive(Debug, Clone, Default)]
pub struct LinksCollection(FilterableCollection<Link>);

impl LinksCollection {
	pub fn new(links: impl IntoIterator<Item = Link>) -> Self {
		LinksCollection(FilterableCollection::new(links))
	}

	/// first link carrying the given relation, if any: pagination relations
	/// are expected at most once per page so first match is the match
	pub fn get(&self, relation: &str) -> Option<&Link> {
		self.0.iter().find(|x| x.relation == relation)
	}

	/// links for the well-known Hydra navigation relations declared on a
	/// resource; an embedded `hydra:view` advertises the navigation links of
	/// the collection it belongs to, so its relations get hoisted up too
	pub fn from_resource(resource: &serde_json::Value) -> Self {
		let mut links = Vec::new();
		for rel in hydra::NAV_RELATIONS {
			for node in resource.property(rel).flat() {
				links.push(Link::new(rel, node));
			}
		}
		let view = resource.property(hydra::VIEW);
		if let Some(view) = view.get() {
			for rel in [hydra::FIRST, hydra::NEXT, hydra::PREVIOUS, hydra::LAST] {
				for node in view.property(rel).flat() {
					links.push(Link::new(rel, node));
				}
			}
		}
		LinksCollection::new(links)
	}
}

impl std::ops::Deref for LinksCollection {
	type Target = FilterableCollection<Link>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl IntoIterator for LinksCollection {
	type Item = Link;
	type IntoIter = std::vec::IntoIter<Link>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

#[cfg(test)]
mod test {
	use super::{Link, LinksCollection};
	use crate::vocab::hydra;
	use crate::Node;

	#[test]
	fn get_returns_first_link_for_relation() {
		let links = LinksCollection::new([
			Link::new(hydra::MEMBER, Node::iri("x:1")),
			Link::new(hydra::NEXT, Node::iri("page:2")),
			Link::new(hydra::MEMBER, Node::iri("x:2")),
		]);
		assert_eq!(links.get(hydra::NEXT).unwrap().href().unwrap(), "page:2");
		assert_eq!(links.get(hydra::MEMBER).unwrap().href().unwrap(), "x:1");
		assert!(links.get(hydra::PREVIOUS).is_none());
	}

	#[test]
	fn extraction_hoists_navigation_links_of_an_embedded_view() {
		use crate::Resource;
		let collection = serde_json::json!({
			"@id": "http://localhost:8080/items",
			"@type": hydra::COLLECTION,
			(hydra::VIEW): {
				"@id": "http://localhost:8080/items?page=1",
				"@type": hydra::PARTIAL_COLLECTION_VIEW,
				(hydra::NEXT): "http://localhost:8080/items?page=2",
			},
		});
		let links = collection.links();
		assert_eq!(
			links.get(hydra::NEXT).unwrap().href().unwrap(),
			"http://localhost:8080/items?page=2",
		);
		assert_eq!(
			links.get(hydra::VIEW).unwrap().href().unwrap(),
			"http://localhost:8080/items?page=1",
		);
	}

	#[test]
	fn direct_navigation_links_win_over_hoisted_ones() {
		use crate::Resource;
		let page = serde_json::json!({
			"@id": "page:2",
			(hydra::NEXT): "page:3",
			(hydra::VIEW): { (hydra::NEXT): "page:ignored" },
		});
		assert_eq!(page.links().get(hydra::NEXT).unwrap().href().unwrap(), "page:3");
	}
}
