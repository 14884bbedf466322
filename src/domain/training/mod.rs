//! Training artifact compilation.
//!
//! The compiler turns the full intent catalog into the three artifacts the
//! dialogue engine trains on: NLU examples, the domain/response definitions,
//! and the story document. Compilation is a pure function of the catalog.

mod artifacts;
mod compiler;
mod errors;

pub use artifacts::{
    ButtonSpec, CompiledArtifacts, DomainFile, ExampleSet, NluData, TrainingExample,
    UtterResponse,
};
pub use compiler::compile;
pub use errors::CompileError;
