pub use pages::*;

mod pages;
