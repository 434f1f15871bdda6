pub mod fake;
pub mod remote;
pub mod repo;
pub mod runner;

pub use fake::FakeGit;
pub use runner::{GIT_PROGRAM_ENV, GitOutput, GitRunner, SystemGit, ensure_installed};
