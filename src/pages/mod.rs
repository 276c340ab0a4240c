//! Page Components

pub mod dataset_detail;
pub mod new_dataset;

pub use dataset_detail::DatasetDetail;
pub use new_dataset::NewDataset;
