//! Core logic for Skill Icons.
//!
//! This crate turns short icon names into one grid-layout SVG image:
//!
//! - **Catalogue**: the immutable icon key to SVG markup mapping
//! - **Alias resolution**: canonical names, themed names and short aliases
//! - **Normalization**: mapping request tokens to catalogue keys
//! - **Grid composition**: tiling icons into a single scaled SVG
//!
//! Everything is built once at startup and read-only afterwards. The
//! [`IconService`] ties the pieces together behind the four operations a
//! handler needs.
//!
//! # Example
//!
//! ```ignore
//! use skill_icons_core::{AliasPolicy, IconService, Theme};
//!
//! let service = IconService::embedded(AliasPolicy::Lenient)?;
//!
//! // "js" is an alias, "react" has light/dark variants
//! let keys = service.resolve(&["js", "react"], Theme::Dark);
//! assert_eq!(keys, ["javascript", "react-dark"]);
//!
//! let svg = service.compose(&keys, 15);
//! ```
//!
//! # Request Validation
//!
//! ```ignore
//! use skill_icons_core::RequestSpec;
//!
//! let spec = RequestSpec::from_params(Some("js,html,css"), Some("light"), Some("2"))?;
//! let svg = service.render(&spec)?;
//! ```

pub mod alias;
pub mod catalogue;
mod error;
pub mod grid;
pub mod logging;
pub mod normalize;
pub mod request;
mod service;
pub mod theme;

pub use alias::{AliasPolicy, AliasResolver};
pub use catalogue::Catalogue;
pub use error::{CoreError, Result};
pub use grid::GridLayout;
pub use normalize::IconSelection;
pub use request::{RequestError, RequestSpec};
pub use service::IconService;
pub use theme::Theme;
