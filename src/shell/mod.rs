/*!
 * Shell Module
 * Line-oriented command interface over the memory manager
 *
 * Commands: `A <owner> <size> <F|B|W>`, `F <owner>`, `S`, `C`, `R <file>`, `E`.
 */

pub mod command;
pub mod executor;
pub mod normalize;

pub use command::Command;
pub use executor::{Flow, Shell};
pub use normalize::normalize_line;
