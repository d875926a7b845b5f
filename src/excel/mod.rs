//! NSF COA template handling
//!
//! - Layout: fixed geometry of the vendor template
//! - Template: primary + reference workbooks and shape validation
//! - Expander: grows Table 4 to one row per author record

mod cells;
mod expander;
mod layout;
mod template;

pub use cells::table_range;
pub use expander::{expand, TableExpander};
pub use layout::{TemplateLayout, NSF_TEMPLATE_URL};
pub use template::CoaTemplate;
