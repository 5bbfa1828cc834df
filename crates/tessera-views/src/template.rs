//! Content compilers

use serde_json::Value;

/// Turns serialized view data into markup
///
/// Any `Fn(&Value) -> String` is a template.
///
/// # Examples
///
/// ```
/// use tessera_views::Template;
/// use serde_json::json;
///
/// let template = |data: &serde_json::Value| format!("<h1>{}</h1>", data["title"].as_str().unwrap_or(""));
/// assert_eq!(template.render(&json!({"title": "Hi"})), "<h1>Hi</h1>");
/// ```
pub trait Template {
	/// Produces the content for `data`
	fn render(&self, data: &Value) -> String;
}

impl<F> Template for F
where
	F: Fn(&Value) -> String,
{
	fn render(&self, data: &Value) -> String {
		self(data)
	}
}

/// Template producing the same markup regardless of data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticTemplate(String);

impl StaticTemplate {
	/// Creates a template that always renders `markup`
	pub fn new(markup: impl Into<String>) -> Self {
		Self(markup.into())
	}
}

impl Template for StaticTemplate {
	fn render(&self, _data: &Value) -> String {
		self.0.clone()
	}
}
