//! # cog-core
//!
//! Round-trip reader/writer for the **cog** configuration format: sectioned
//! `key = value` text with typed values and `//` comments.
//!
//! A document loaded and saved again keeps its section order, key order and
//! per-key comments. Values are typed at parse time (boolean, integer, float,
//! string) and keep that type through `get`/`set`/`save`.
//!
//! ## Quick start
//!
//! ```rust
//! use cog_core::{ConfigDocument, Value};
//!
//! let text = "mode = 1\n\n[Display]\n// screen width\nwidth = 800\nfullscreen = false\n";
//! let mut doc: ConfigDocument = text.parse().unwrap();
//!
//! assert_eq!(doc.get("mode", None), Some(&Value::Integer(1)));
//! assert_eq!(doc.get("fullscreen", Some("Display")), Some(&Value::Boolean(false)));
//! assert_eq!(doc.get("missing", Some("NoSuchSection")), None);
//!
//! doc.set("new_option", true, Some("Experimental"));
//! assert_eq!(
//!     doc.to_cog_string(),
//!     "mode = 1\n\n[Display]\nwidth = 800 // screen width\nfullscreen = false\n\n[Experimental]\nnew_option = true\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`document`] — `ConfigDocument`: load, get, set, save
//! - [`decoder`] — cog text → document, value type inference
//! - [`encoder`] — document → cog text
//! - [`types`] — `Value`, `Section`, `Entry`
//! - [`error`] — Error types for I/O and save-target failures

pub mod decoder;
pub mod document;
pub mod encoder;
pub mod error;
pub mod types;

pub use decoder::decode;
pub use document::ConfigDocument;
pub use encoder::encode;
pub use error::CogError;
pub use types::{Entry, Section, Value, DEFAULT_SECTION};
