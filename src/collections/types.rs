use super::FilterableCollection;

/// The type identifiers a resource declares. Used to probe capabilities,
/// most notably whether something may be treated as a Collection.
#[derive(Debug, Clone, Default)]
pub struct TypesCollection(FilterableCollection<String>);

impl TypesCollection {
	pub fn new(types: impl IntoIterator<Item = String>) -> Self {
		TypesCollection(FilterableCollection::new(types))
	}

	pub fn contains(&self, term: &str) -> bool {
		self.0.iter().any(|x| x == term)
	}
}

impl std::ops::Deref for TypesCollection {
	type Target = FilterableCollection<String>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl IntoIterator for TypesCollection {
	type Item = String;
	type IntoIter = std::vec::IntoIter<String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

#[cfg(test)]
mod test {
	use super::TypesCollection;
	use crate::vocab::hydra;

	#[test]
	fn contains_is_an_exact_equality_test() {
		let types = TypesCollection::new([hydra::COLLECTION.to_string()]);
		assert!(types.contains(hydra::COLLECTION));
		assert!(!types.contains(hydra::PARTIAL_COLLECTION_VIEW));
		assert!(!types.contains("Collection"));
	}

	#[test]
	fn declared_types_are_deduplicated() {
		let types = TypesCollection::new([
			hydra::COLLECTION.to_string(),
			hydra::COLLECTION.to_string(),
		]);
		assert_eq!(types.len(), 1);
	}
}
