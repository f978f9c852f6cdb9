//! Command implementations, one module per subcommand.

pub mod collect;
pub mod manifest;
