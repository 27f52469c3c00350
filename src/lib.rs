mod macros;
pub(crate) use macros::getter;

pub mod vocab;

mod field;
pub use field::{Field, FieldErr, OptionalString};

mod node;
pub use node::Node;

mod resource;
pub use resource::Resource;

pub mod collections;
pub use collections::{
	FilterableCollection, Identified,
	Link, LinksCollection,
	Operation, OperationsCollection,
	TypesCollection,
};

mod collection;
pub use collection::Collection;

mod container;
pub use container::HypermediaContainer;

mod view;
pub use view::{Direction, Page, PartialCollectionView};

mod fetch;
pub use fetch::{Fetcher, PageError};
#[cfg(feature = "fetch")]
pub use fetch::HttpFetcher;
