/// SBOM core - domain model and the attribution/graph-building services
pub mod domain;
pub mod services;
