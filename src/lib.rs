//! nsmount - mount directories of modules and templates as one namespace graph.
//!
//! Files under each configured namespace directory (`controllers/`,
//! `models/`, `views/`, ...) become members of a router node named after
//! the directory. Nested directories become nested routers, `index` files
//! extend their parent, and templates become callable renderers.
//!
//! ```text
//! app/
//! ├── controllers/
//! │   ├── admin/users/controller.json  -> controllers.admin.users.controller
//! │   └── users.json                   -> controllers.users
//! ├── helpers/string-utils.json        -> helpers.stringUtils
//! ├── models/
//! │   ├── index.json                   -> models.index, members also on models
//! │   └── user.json                    -> models.user
//! └── views/test.hbs                   -> views.test(data)
//! ```
//!
//! Native behavior is supplied through a [`Registry`] keyed by module path;
//! plain JSON and TOML files load as data.

pub mod app;
pub mod config;
pub mod discover;
pub mod error;
pub mod fileset;
pub mod logger;
pub mod module;
pub mod namespace;
pub mod template;
pub mod utils;

pub use app::{App, LoadReport, Mount};
pub use config::{AppConfig, ConfigError};
pub use error::{CallError, LoadError};
pub use fileset::FileSet;
pub use module::{Extensions, ModuleLoader, Registry, SourceKind, SourceLoader};
pub use namespace::{Callable, Function, NodeRef, Value};
pub use template::{Template, TemplateError};
