mod args;

pub use args::{CliArgs, Command, RecommendArgs, SliceArgs};
