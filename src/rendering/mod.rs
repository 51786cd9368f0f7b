//! Rendering helpers shared by the table header and body.

pub mod text_utils;
