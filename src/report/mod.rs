pub mod formatter;

pub use formatter::{format_quantity, BoundingBox, BoxReport, Measurements};
