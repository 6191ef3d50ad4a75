//! Configuration types for the ascender CLI

mod cli;


pub use cli::{
    parse_args, Cli, Command, InfoArgs, OutputFormat, PromoteArgs, RegisterArgs, RunArgs,
    ValidateArgs, ValueArgs,
};
