//! Decoding logic. Nothing in here performs I/O except through the
//! collaborator traits of the [`pipeline`].

pub mod pipeline;
pub mod seaport;
pub mod text;
