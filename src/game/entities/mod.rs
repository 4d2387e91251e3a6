//! Game entities module.
//!
//! This module organizes the shared actor model and its character and enemy roles.

pub mod actor;
pub mod character;
pub mod enemy;

pub use actor::*;
pub use character::*;
pub use enemy::*;
