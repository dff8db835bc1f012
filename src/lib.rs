//! Generates a Solidity interface contract from a contract's source.
//!
//! The generated `I<Name>` contract declares the public functions and the
//! getters of public state variables of the first contract in the source,
//! including those inherited from imported base contracts.

pub mod error;
pub mod generator;
pub mod interface;
pub mod parser;


pub use error::{InterfaceError, Result};
pub use interface::resolver::{FsLoader, SourceLoader};
pub use interface::{generate_interface, generate_interface_from_fs, Options};
