//! Domain types - pure values shared by every check

pub mod artifacts;
pub mod range;
pub mod tag;
pub mod version;

pub use artifacts::LinkageArtifacts;
pub use range::ChangeRange;
pub use tag::ReleaseTag;
pub use version::Version;
