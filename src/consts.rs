// TEXT
pub const DEFAULT_FONT_SIZE: f64 = 16.;
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
