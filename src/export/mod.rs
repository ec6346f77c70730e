pub mod exporter;

pub use exporter::ParkingExporter;
