macro_rules! getter {
	($name:ident[$term:expr] -> &str) => {
		fn $name(&self) -> $crate::Field<&str> {
			self.get($term)
				.and_then(|x| x.as_str())
				.ok_or($crate::FieldErr($term))
		}
	};

	($name:ident[$term:expr] -> u64) => {
		fn $name(&self) -> $crate::Field<u64> {
			self.get($term)
				.and_then(|x| x.as_u64())
				.ok_or($crate::FieldErr($term))
		}
	};

	($name:ident[$term:expr] -> bool) => {
		fn $name(&self) -> $crate::Field<bool> {
			self.get($term)
				.and_then(|x| x.as_bool())
				.ok_or($crate::FieldErr($term))
		}
	};

	($name:ident[$term:expr] -> node) => {
		fn $name(&self) -> $crate::Node<serde_json::Value> {
			match self.get($term) {
				Some(x) => $crate::Node::from(x.clone()),
				None => $crate::Node::Empty,
			}
		}
	};
}

pub(crate) use getter;
