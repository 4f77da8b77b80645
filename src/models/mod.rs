pub use blog_post::*;
pub use custom_page::*;
pub use entity::*;
pub use page_template::*;

mod blog_post;
mod custom_page;
mod entity;
mod page_template;
