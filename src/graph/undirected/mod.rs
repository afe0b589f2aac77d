//! Undirected graphs.

mod adjacent_list;
pub use self::adjacent_list::*;
mod weighted;
pub use self::weighted::*;
