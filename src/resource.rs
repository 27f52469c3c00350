use crate::collections::{LinksCollection, TypesCollection};
use crate::{Field, FieldErr, Node};

/// Anything handed over by the upstream deserializer: an identified,
/// typed bag of properties. Implemented for raw [serde_json::Value]
/// documents and for bare IRI strings.
pub trait Resource {
	fn iri(&self) -> Field<&str> { Err(FieldErr("@id")) }
	fn types(&self) -> TypesCollection { TypesCollection::default() }
	fn links(&self) -> LinksCollection { LinksCollection::default() }

	/// raw keyed access to any property of this resource
	fn property(&self, term: &str) -> Node<serde_json::Value> { let _ = term; Node::Empty }
}

impl Resource for String {
	fn iri(&self) -> Field<&str> {
		Ok(self)
	}
}

impl Resource for serde_json::Value {
	fn iri(&self) -> Field<&str> {
		// a bare string value is its own identifier
		if self.is_string() {
			return self.as_str().ok_or(FieldErr("@id"));
		}
		self.get("@id")
			.or_else(|| self.get("id"))
			.and_then(|x| x.as_str())
			.ok_or(FieldErr("@id"))
	}

	fn types(&self) -> TypesCollection {
		match self.get("@type").or_else(|| self.get("type")) {
			None => TypesCollection::default(),
			Some(serde_json::Value::String(x)) => TypesCollection::new([x.clone()]),
			Some(serde_json::Value::Array(arr)) => TypesCollection::new(
				arr.iter()
					.filter_map(|x| x.as_str())
					.map(|x| x.to_string())
			),
			Some(x) => {
				tracing::warn!("ignoring unexpected type value shape: {x}");
				TypesCollection::default()
			},
		}
	}

	fn links(&self) -> LinksCollection {
		LinksCollection::from_resource(self)
	}

	fn property(&self, term: &str) -> Node<serde_json::Value> {
		match self.get(term) {
			Some(x) => Node::from(x.clone()),
			None => Node::Empty,
		}
	}
}

#[cfg(test)]
mod test {
	use super::Resource;
	use crate::vocab::hydra;

	#[test]
	fn iri_falls_back_to_plain_id() {
		let expanded = serde_json::json!({"@id": "http://localhost:8080/items"});
		let compacted = serde_json::json!({"id": "http://localhost:8080/items"});
		assert_eq!(expanded.iri().unwrap(), "http://localhost:8080/items");
		assert_eq!(compacted.iri().unwrap(), "http://localhost:8080/items");
	}

	#[test]
	fn types_read_single_strings_and_arrays() {
		let single = serde_json::json!({"@type": hydra::COLLECTION});
		let many = serde_json::json!({"@type": [hydra::RESOURCE, hydra::COLLECTION]});
		assert!(single.types().contains(hydra::COLLECTION));
		assert!(many.types().contains(hydra::COLLECTION));
		assert!(many.types().contains(hydra::RESOURCE));
		assert!(!single.types().contains(hydra::RESOURCE));
	}

	#[test]
	fn bare_strings_act_as_iri_only_resources() {
		let res = "http://localhost:8080/items/1".to_string();
		assert_eq!(res.iri().unwrap(), "http://localhost:8080/items/1");
		assert!(res.types().is_empty());
	}

	#[test]
	fn property_returns_empty_node_when_absent() {
		let res = serde_json::json!({"@id": "x:1"});
		assert!(res.property(hydra::MEMBER).is_nothing());
	}
}
