// Reusable library API, shared by the CLI binary and the integration tests
pub mod errors;
pub mod log;
pub mod output;
pub mod prefix_index;
pub mod solver;
pub mod word_list;
