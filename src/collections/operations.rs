use super::FilterableCollection;
use crate::vocab::hydra;
use crate::{Node, Resource};

/// A Hydra operation attached to a resource: the HTTP method to invoke
/// plus what the call expects and returns.
pub trait Operation: Resource {
	fn method(&self) -> crate::Field<&str>;
	fn expects(&self) -> Node<serde_json::Value>;
	fn returns(&self) -> Node<serde_json::Value>;
	fn title(&self) -> crate::Field<&str>;
}

impl Operation for serde_json::Value {
	crate::getter! { method[hydra::METHOD] -> &str }
	crate::getter! { expects[hydra::EXPECTS] -> node }
	crate::getter! { returns[hydra::RETURNS] -> node }
	crate::getter! { title[hydra::TITLE] -> &str }
}

#[derive(Debug, Clone, Default)]
pub struct OperationsCollection(FilterableCollection<serde_json::Value>);

impl OperationsCollection {
	pub fn new(operations: impl IntoIterator<Item = serde_json::Value>) -> Self {
		OperationsCollection(FilterableCollection::new(operations))
	}

	/// operations declared under `hydra:operation` on a resource
	pub fn from_resource(resource: &serde_json::Value) -> Self {
		OperationsCollection::new(
			resource.property(hydra::OPERATION_PROP)
				.flat()
				.into_iter()
				.filter_map(|x| x.extract())
		)
	}

	pub fn of_method(&self, method: &str) -> Self {
		OperationsCollection(self.0.filter(|x| x.method().is_ok_and(|m| m.eq_ignore_ascii_case(method))))
	}
}

impl std::ops::Deref for OperationsCollection {
	type Target = FilterableCollection<serde_json::Value>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl IntoIterator for OperationsCollection {
	type Item = serde_json::Value;
	type IntoIter = std::vec::IntoIter<serde_json::Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

#[cfg(test)]
mod test {
	use super::{Operation, OperationsCollection};
	use crate::vocab::hydra;

	fn resource() -> serde_json::Value {
		serde_json::json!({
			"@id": "http://localhost:8080/items",
			(hydra::OPERATION_PROP): [
				{
					"@type": hydra::OPERATION,
					(hydra::METHOD): "GET",
					(hydra::TITLE): "list items",
				},
				{
					"@type": hydra::OPERATION,
					(hydra::METHOD): "POST",
					(hydra::EXPECTS): "http://localhost:8080/doc#Item",
				},
			],
		})
	}

	#[test]
	fn operations_come_from_the_operation_property() {
		let operations = OperationsCollection::from_resource(&resource());
		assert_eq!(operations.len(), 2);
		assert_eq!(operations.first().unwrap().method().unwrap(), "GET");
	}

	#[test]
	fn of_method_filters_without_touching_the_source() {
		let operations = OperationsCollection::from_resource(&resource());
		let posts = operations.of_method("post");
		assert_eq!(posts.len(), 1);
		assert_eq!(
			posts.first().unwrap().expects().id().unwrap(),
			"http://localhost:8080/doc#Item",
		);
		assert_eq!(operations.len(), 2);
	}
}
