pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{header, info, success};
pub use table::{TableBuilder, summary_table};
pub use theme::{theme, Theme};
