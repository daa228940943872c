pub mod config;
pub mod consts;
pub mod corpus;
pub mod error;
pub mod key;
pub mod ngram;
pub mod optimizer;
pub mod samples;
pub mod scorer;
pub mod text;
// cmd and reports are binary modules, declared in main.rs.
