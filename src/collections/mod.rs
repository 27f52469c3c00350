mod types;
pub use types::TypesCollection;

mod links;
pub use links::{Link, LinksCollection};

mod operations;
pub use operations::{Operation, OperationsCollection};

use crate::Resource;

/// Identity used for de-duplication inside a [FilterableCollection].
/// Items without one are never considered duplicates of anything.
pub trait Identified {
	fn identity(&self) -> Option<String>;
}

impl Identified for String {
	fn identity(&self) -> Option<String> {
		Some(self.clone())
	}
}

impl Identified for serde_json::Value {
	fn identity(&self) -> Option<String> {
		self.iri().ok().map(|x| x.to_string())
	}
}

/// Ordered, de-duplicated-by-identity container of resource-shaped items.
/// Insertion order is preserved; the first occurrence of an identity wins.
/// Never mutates its backing items: filtering yields a new collection.
pub struct FilterableCollection<T> {
	items: Vec<T>,
}

impl<T> Default for FilterableCollection<T> {
	fn default() -> Self {
		FilterableCollection { items: Vec::new() }
	}
}

impl<T: Identified> FilterableCollection<T> {
	pub fn new(items: impl IntoIterator<Item = T>) -> Self {
		let mut seen = std::collections::HashSet::new();
		let mut out = Vec::new();
		for item in items {
			match item.identity() {
				Some(id) => {
					if seen.insert(id) {
						out.push(item);
					}
				},
				None => out.push(item),
			}
		}
		FilterableCollection { items: out }
	}
}

impl<T> FilterableCollection<T> {
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}

	pub fn first(&self) -> Option<&T> {
		self.items.first()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl<T: Clone> FilterableCollection<T> {
	/// new collection holding clones of the items matching `predicate`,
	/// in their original order; the source is left untouched
	pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Self {
		FilterableCollection {
			// already de-duplicated at construction, a subset stays that way
			items: self.items.iter().filter(|x| predicate(x)).cloned().collect(),
		}
	}
}

impl<T: Clone> Clone for FilterableCollection<T> {
	fn clone(&self) -> Self {
		FilterableCollection { items: self.items.clone() }
	}
}

impl<T: std::fmt::Debug> std::fmt::Debug for FilterableCollection<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.items.iter()).finish()
	}
}

impl<T> IntoIterator for FilterableCollection<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a FilterableCollection<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T: Identified> FromIterator<T> for FilterableCollection<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		FilterableCollection::new(iter)
	}
}

#[cfg(test)]
mod test {
	use super::FilterableCollection;

	fn items() -> FilterableCollection<serde_json::Value> {
		FilterableCollection::new([
			serde_json::json!({"@id": "x:1", "kind": "a"}),
			serde_json::json!({"@id": "x:2", "kind": "b"}),
			serde_json::json!({"@id": "x:3", "kind": "a"}),
		])
	}

	#[test]
	fn filtering_preserves_order_and_source() {
		let all = items();
		let a = all.filter(|x| x["kind"] == "a");
		let b = all.filter(|x| x["kind"] == "b");
		assert_eq!(
			a.iter().map(|x| x["@id"].as_str().unwrap()).collect::<Vec<_>>(),
			vec!["x:1", "x:3"],
		);
		assert_eq!(
			b.iter().map(|x| x["@id"].as_str().unwrap()).collect::<Vec<_>>(),
			vec!["x:2"],
		);
		// two passes from the same source stay consistent with the original
		assert_eq!(all.len(), 3);
	}

	#[test]
	fn duplicate_identities_keep_the_first_occurrence() {
		let collection = FilterableCollection::new([
			serde_json::json!({"@id": "x:1", "kind": "first"}),
			serde_json::json!({"@id": "x:2"}),
			serde_json::json!({"@id": "x:1", "kind": "second"}),
		]);
		assert_eq!(collection.len(), 2);
		assert_eq!(collection.first().unwrap()["kind"], "first");
	}

	#[test]
	fn items_without_identity_are_always_kept() {
		let collection = FilterableCollection::new([
			serde_json::json!({"kind": "anonymous"}),
			serde_json::json!({"kind": "anonymous"}),
		]);
		assert_eq!(collection.len(), 2);
	}
}
