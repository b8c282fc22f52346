// Module exports for CLI subcommands.
//
// Each module handles a specific CLI subcommand; main.rs stays focused on
// parsing and dispatch.

pub mod route;
