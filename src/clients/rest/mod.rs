//! The shared client handle used by every resource.
//!
//! [`RestClient`] binds a [`Transport`](crate::clients::Transport) to the
//! API version and entrypoint of one [`StackApi`](crate::StackApi). It is
//! held behind an `Arc` and shared read-only by every
//! [`ResourceInterface`](crate::resource::ResourceInterface) and
//! [`ResourceObject`](crate::resource::ResourceObject) derived from that entry point.

mod client;

pub use client::RestClient;
