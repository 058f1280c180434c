pub mod campaigns;
pub mod data_sources;
pub mod templates;
