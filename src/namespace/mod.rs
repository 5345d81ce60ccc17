//! The namespace graph and how files are mounted into it.
//!
//! # Architecture
//!
//! ```text
//! FileSet (path -> name)          namespace graph
//! ======================          ===============
//! .../admin/users/list.json  ->   admin (router)
//!                                  └── users (router)
//!                                       └── list (object)
//! .../index.json             ->   index (object) + members spliced into root
//! ```
//!
//! # Module Structure
//!
//! - [`value`]: [`Value`] and native [`Function`]s
//! - [`node`]: shared [`NodeRef`] handles, routers and calls
//! - [`leaf`]: installing one loaded file at its key
//! - [`assemble`]: walking a name and auto-vivifying routers
//! - [`batch`]: installing file sets with index files deferred

mod assemble;
mod batch;
mod leaf;
mod node;
mod value;

pub use assemble::install_at_path;
pub use batch::{is_index_file, load_file_sets};
pub use leaf::load_leaf;
pub use node::{Callable, INDEX_KEY, NodeRef};
pub use value::{Function, Value};
