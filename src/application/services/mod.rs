pub mod substitution_pipeline;

pub use substitution_pipeline::SubstitutionPipeline;
