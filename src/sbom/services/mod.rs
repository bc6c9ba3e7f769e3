pub mod classifier;
pub mod fragments;
pub mod integrity;
pub mod report;
pub mod resolver;

pub use classifier::{classify, kernel_module_copy_is_generated, PackageClass};
pub use fragments::{FragmentBuilder, SbomFragment};
pub use integrity::verification_code;
pub use report::{GenReport, IssueCategory};
pub use resolver::MetadataResolver;
