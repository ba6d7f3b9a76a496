//! Dynamic resource navigation.
//!
//! Resources are not modelled as Rust types. Instead, a class is addressed by
//! name at runtime and every instance is a JSON object:
//!
//! - [`ResourceInterface`]: one class at one URL prefix, with collection verbs
//! - [`ResourceObject`]: one instance, with instance verbs
//! - [`unwind_result`] / [`wrap_data`]: the `{"data": ...}` envelope and the
//!   mapping of response items back to objects
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use stackapi::resource::RequestOptions;
//!
//! let group = stack.navigate_class("Group")?;
//! let mut new_group = group.call(Some(json!({"name": "web servers"})))?;
//! new_group.create(None).await?;
//!
//! let members = new_group.navigate_class("Instance")?;
//! let instances = members.list(&RequestOptions::default()).await?;
//! ```

mod envelope;
mod errors;
mod interface;
mod naming;
mod object;
mod options;
mod path;

pub use envelope::{unwind_result, wrap_data, ResourceData, WrapResult};
pub use errors::{json_type_name, ResourceError};
pub use interface::ResourceInterface;
pub use naming::{endpoint_segment, parse_class_from_resource, to_rest_class};
pub use object::ResourceObject;
pub use options::RequestOptions;
pub use path::{append_action, id_segment, versioned_endpoint};
