pub mod catalog;
pub mod enumerator;

pub use catalog::CityCatalog;
pub use enumerator::{CityDirectory, CityEnumerator, DirectorySource};
