pub mod color_tag;
pub mod history_entry;
pub mod key;
pub mod operator;
pub mod step;
pub mod theme;
