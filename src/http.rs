//! Request, response and middleware primitives.
//!
//! # Examples
//!
//! ```rust
//! use gqldoc::http::{Request, Response};
//!
//! let request = Request::builder().uri("/graphql").build().unwrap();
//! assert_eq!(request.path(), "/graphql");
//! assert!(Response::ok().body.is_empty());
//! ```

pub use gqldoc_http::*;
