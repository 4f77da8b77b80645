pub use blog_posts::*;
pub use custom_pages::*;
pub use db::*;
pub use entities::*;

mod blog_posts;
mod custom_pages;
mod db;
mod entities;
