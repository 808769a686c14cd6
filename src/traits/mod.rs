pub mod candidate;
pub mod metadata_source;

pub use candidate::Candidate;
pub use metadata_source::MetadataSource;
