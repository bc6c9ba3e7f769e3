mod json;
mod tag_value;

pub use json::JsonFormatter;
pub use tag_value::TagValueFormatter;
