mod render;
mod spinner;
mod style;

pub use render::render_result;
pub use spinner::with_spinner;
pub use style::Style;
