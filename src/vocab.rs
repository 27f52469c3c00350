//! Well-known Hydra core vocabulary identifiers.
//!
//! These are opaque IRIs only ever compared for equality: nothing in this
//! crate parses or validates them. The table is fixed at compile time.

macro_rules! terms {
	( $ns:literal : $( $name:ident => $term:literal ),* $(,)? ) => {
		pub const NAMESPACE: &str = $ns;
		$( pub const $name: &str = concat!($ns, $term); )*
	};
}

pub mod hydra {
	terms! { "http://www.w3.org/ns/hydra/core#" :
		// classes
		COLLECTION => "Collection",
		PARTIAL_COLLECTION_VIEW => "PartialCollectionView",
		OPERATION => "Operation",
		IRI_TEMPLATE => "IriTemplate",
		LINK => "Link",
		RESOURCE => "Resource",

		// collection terms
		COLLECTION_PROP => "collection",
		MEMBER => "member",
		MEMBER_TEMPLATE => "memberTemplate",
		TOTAL_ITEMS => "totalItems",

		// navigation relations
		VIEW => "view",
		FIRST => "first",
		NEXT => "next",
		PREVIOUS => "previous",
		LAST => "last",
		SEARCH => "search",

		// operation terms
		OPERATION_PROP => "operation",
		METHOD => "method",
		EXPECTS => "expects",
		RETURNS => "returns",

		// documentation terms
		TITLE => "title",
		DESCRIPTION => "description",
	}

	/// relations a resource may navigate along, in the order they get scanned
	pub const NAV_RELATIONS: [&str; 7] = [VIEW, FIRST, NEXT, PREVIOUS, LAST, SEARCH, COLLECTION_PROP];
}

#[cfg(test)]
mod test {
	#[test]
	fn terms_expand_under_the_hydra_namespace() {
		assert_eq!(super::hydra::COLLECTION, "http://www.w3.org/ns/hydra/core#Collection");
		assert_eq!(super::hydra::NEXT, "http://www.w3.org/ns/hydra/core#next");
		assert!(super::hydra::NAV_RELATIONS.iter().all(|x| x.starts_with(super::hydra::NAMESPACE)));
	}
}
