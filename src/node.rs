use crate::{Field, FieldErr, OptionalString, Resource};

/// Hypermedia property node, representing either nothing, an IRI reference
/// to something, an embedded resource or multiple of those
pub enum Node<T: Resource> {
	Array(std::collections::VecDeque<Node<T>>),
	Object(Box<T>),
	Iri(String),
	Empty,
}

impl<T: Resource + Clone> Clone for Node<T> {
	fn clone(&self) -> Self {
		match self {
			Node::Empty => Node::Empty,
			Node::Iri(uri) => Node::Iri(uri.clone()),
			Node::Object(x) => Node::Object(x.clone()),
			Node::Array(arr) => Node::Array(arr.clone()),
		}
	}
}

impl<T: Resource + std::fmt::Debug> std::fmt::Debug for Node<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::Empty => write!(f, "Empty"),
			Node::Iri(uri) => f.debug_tuple("Iri").field(uri).finish(),
			Node::Object(x) => f.debug_tuple("Object").field(x).finish(),
			Node::Array(arr) => f.debug_tuple("Array").field(arr).finish(),
		}
	}
}

impl<T: Resource> From<Option<T>> for Node<T> {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(x) => Node::Object(Box::new(x)),
			None => Node::Empty,
		}
	}
}

impl<T: Resource> Iterator for Node<T> {
	type Item = T;

	fn next(&mut self) -> Option<Self::Item> {
		match std::mem::replace(self, Self::Empty) {
			Self::Empty => None,
			Self::Object(res) => Some(*res),
			Self::Iri(uri) => {
				*self = Self::Iri(uri);
				None
			},
			Self::Array(mut arr) => {
				let mut out = None;
				while let Some(res) = arr.pop_front() {
					if let Some(inner) = res.extract() {
						out = Some(inner);
						break;
					}
				}
				*self = Self::Array(arr);
				out
			}
		}
	}
}

impl<T: Resource> Node<T> {
	/// return reference to embedded resource (or first if many are present)
	pub fn get(&self) -> Option<&T> {
		match self {
			Node::Empty | Node::Iri(_) => None,
			Node::Object(x) => Some(x),
			Node::Array(v) => v.iter().filter_map(|x| x.get()).next(),
		}
	}

	/// consume node and return embedded resource (or first if many are present)
	pub fn extract(self) -> Option<T> {
		match self {
			Node::Empty | Node::Iri(_) => None,
			Node::Object(x) => Some(*x),
			Node::Array(mut v) => v.pop_front()?.extract(),
		}
	}

	/// true only if Node is empty
	pub fn is_nothing(&self) -> bool {
		matches!(self, Node::Empty)
	}

	/// true only if Node is an IRI reference
	pub fn is_iri(&self) -> bool {
		matches!(self, Node::Iri(_))
	}

	/// true only if Node contains one embedded resource
	pub fn is_object(&self) -> bool {
		matches!(self, Node::Object(_))
	}

	/// true only if Node contains many embedded resources
	pub fn is_array(&self) -> bool {
		matches!(self, Node::Array(_))
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// returns number of contained items (IRI references count as items for len)
	pub fn len(&self) -> usize {
		match self {
			Node::Empty => 0,
			Node::Iri(_) => 1,
			Node::Object(_) => 1,
			Node::Array(v) => v.len(),
		}
	}

	/// returns identifier of the node: the IRI itself for references, `@id` for
	/// embedded resources, first identified entry for arrays
	pub fn id(&self) -> Field<&str> {
		match self {
			Node::Empty => Err(FieldErr("@id")),
			Node::Iri(uri) => Ok(uri),
			Node::Object(obj) => obj.iri(),
			Node::Array(arr) => arr.front().map(|x| x.id()).ok_or(FieldErr("@id"))?,
		}
	}

	pub fn all_ids(&self) -> Vec<String> {
		match self {
			Node::Empty => vec![],
			Node::Iri(uri) => vec![uri.clone()],
			Node::Object(x) => x.iri().str().map_or(vec![], |x| vec![x]),
			Node::Array(x) => x.iter().filter_map(|x| x.id().str()).collect(),
		}
	}

	pub fn flat(self) -> Vec<Node<T>> {
		match self {
			Node::Empty => vec![],
			Node::Iri(_) | Node::Object(_) => vec![self],
			// nested arrays are not a thing in our model so no need to recurse
			Node::Array(arr) => arr.into(),
		}
	}
}

impl Node<serde_json::Value> {
	pub fn iri(uri: impl Into<String>) -> Self {
		Node::Iri(uri.into())
	}

	pub fn object(x: serde_json::Value) -> Self {
		Node::Object(Box::new(x))
	}

	pub fn maybe_iri(uri: Option<String>) -> Self {
		match uri {
			Some(uri) => Node::Iri(uri),
			None => Node::Empty,
		}
	}

	/// collapse back into a raw value: embedded resources as-is, IRI
	/// references as plain strings, nothing for empty or array nodes
	pub fn into_value(self) -> Option<serde_json::Value> {
		match self {
			Node::Empty | Node::Array(_) => None,
			Node::Iri(uri) => Some(serde_json::Value::String(uri)),
			Node::Object(x) => Some(*x),
		}
	}
}

impl From<serde_json::Value> for Node<serde_json::Value> {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::String(uri) => Node::Iri(uri),
			serde_json::Value::Array(arr) => Node::Array(
				std::collections::VecDeque::from_iter(
					arr.into_iter()
						.map(Node::from)
				)
			),
			serde_json::Value::Object(_) => Node::Object(Box::new(value)),
			_ => Node::Empty,
		}
	}
}
