// lexsim: pairwise lexical similarity across a document collection
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: gather paths, profile documents, score pairs, report.

pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod profile;
pub mod similarity;
