pub mod extractor;
pub mod resolver;
pub mod search;

pub use extractor::PhoneExtractor;
pub use resolver::{PhoneLookup, PhoneResolver, PHONE_NOT_FOUND};
pub use search::{HtmlSearchProvider, SearchProvider};
