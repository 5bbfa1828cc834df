//! Views module.
//!
//! View lifecycle, region composition and configuration.
//!
//! # Examples
//!
//! ```rust
//! use tessera::views::ViewSettings;
//!
//! let settings = ViewSettings::from_toml_str(r#"tag_name = "aside""#).unwrap();
//! assert_eq!(settings.tag_name.as_deref(), Some("aside"));
//! ```

pub use tessera_views::*;
