use askama::Template;

use dronesite::models::BlogPost;

#[derive(Debug, Clone, PartialEq)]
pub struct ListingItem {
    pub title: String,
    pub href: String,
    pub summary: String,
}

#[derive(Template)]
#[template(path = "public/custom_page.html")]
pub struct CustomPageTemplate {
    pub title: String,
    pub layout: String,
    pub content: String,
}

#[derive(Template)]
#[template(path = "public/entity_page.html")]
pub struct EntityPageTemplate {
    pub title: String,
    pub family_title: String,
    pub family_href: String,
    pub summary: String,
    pub description: String,
    pub hero_image_url: String,
    pub highlights: Vec<String>,
}

#[derive(Template)]
#[template(path = "public/home.html")]
pub struct HomeTemplate {
    pub solutions: Vec<ListingItem>,
    pub products: Vec<ListingItem>,
}

#[derive(Template)]
#[template(path = "public/listing.html")]
pub struct ListingTemplate {
    pub title: String,
    pub items: Vec<ListingItem>,
}

#[derive(Template)]
#[template(path = "public/fallback_detail.html")]
pub struct FallbackDetailTemplate {
    pub title: String,
    pub family_title: String,
    pub family_href: String,
}

#[derive(Template)]
#[template(path = "public/info.html")]
pub struct InfoTemplate {
    pub title: String,
    pub paragraphs: Vec<&'static str>,
}

#[derive(Template)]
#[template(path = "public/blog_index.html")]
pub struct BlogIndexTemplate {
    pub posts: Vec<BlogPost>,
}

#[derive(Template)]
#[template(path = "public/blog_post.html")]
pub struct BlogPostTemplate {
    pub post: BlogPost,
}

#[derive(Template)]
#[template(path = "public/not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

#[derive(Template)]
#[template(path = "admin/shell.html")]
pub struct AdminShellTemplate {
    pub title: String,
    pub sections: Vec<ListingItem>,
}

#[derive(Template)]
#[template(path = "admin/auth.html")]
pub struct AuthTemplate;
