/*!
 * Core Types
 * Common types used across the simulator
 */

/// Owner symbol of a process segment (a single uppercase letter in practice)
pub type Owner = char;

/// Address type for memory operations
pub type Address = usize;

/// Size type for memory operations, in address units
pub type Size = usize;
