//! Graph algorithms
//!
//! Every algorithm runs to completion in its constructor and answers queries
//! afterwards. Depth-first searches run on an explicit stack, so they do not
//! overflow on long paths.
mod walk;

mod paths;
pub use self::paths::*;
mod order;
pub use self::order::*;
mod cycle;
pub use self::cycle::*;
mod toposort;
pub use self::toposort::*;
mod scc;
pub use self::scc::*;
mod connected;
pub use self::connected::*;
mod closure;
pub use self::closure::*;
mod mst;
pub use self::mst::*;
mod sp;
pub use self::sp::*;
pub mod graphviz;
