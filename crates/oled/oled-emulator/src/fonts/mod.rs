//! Built-in fonts

mod font_6x8;

pub use font_6x8::FONT_6X8;
