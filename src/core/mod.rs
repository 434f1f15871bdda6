pub mod git;
pub mod manifest;
pub mod scaffold;
