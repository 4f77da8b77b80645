use serde::Serialize;

use crate::models::EntityKind;
use crate::routing::within;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteCategory {
    /// A published custom page at the same path replaces the component.
    Overridable,
    /// Never shadowed by custom content. Covers the route's whole subtree.
    Protected,
}

/// Hand-written product pages, kept until each product is migrated into the
/// `product_families` table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum ProductPage {
    AutelMapper,
    AutelEvoMax4t,
    AutelEvoLite,
    AutelAlpha,
    AutelDragonfish,
}

impl ProductPage {
    pub const ALL: [Self; 5] = [
        Self::AutelMapper,
        Self::AutelEvoMax4t,
        Self::AutelEvoLite,
        Self::AutelAlpha,
        Self::AutelDragonfish,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::AutelMapper => "autel-mapper",
            Self::AutelEvoMax4t => "autel-evo-max-4t",
            Self::AutelEvoLite => "autel-evo-lite",
            Self::AutelAlpha => "autel-alpha",
            Self::AutelDragonfish => "autel-dragonfish",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::AutelMapper => "Autel Mapper",
            Self::AutelEvoMax4t => "Autel EVO Max 4T",
            Self::AutelEvoLite => "Autel EVO Lite",
            Self::AutelAlpha => "Autel Alpha",
            Self::AutelDragonfish => "Autel Dragonfish",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

/// Hand-written solution pages, the solution counterpart of [`ProductPage`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum SolutionPage {
    Industrial,
    SegurancaPublica,
    Agricultura,
    Topografia,
    Energia,
}

impl SolutionPage {
    pub const ALL: [Self; 5] = [
        Self::Industrial,
        Self::SegurancaPublica,
        Self::Agricultura,
        Self::Topografia,
        Self::Energia,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Industrial => "industrial",
            Self::SegurancaPublica => "seguranca-publica",
            Self::Agricultura => "agricultura",
            Self::Topografia => "topografia",
            Self::Energia => "energia",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Industrial => "Inspeção Industrial",
            Self::SegurancaPublica => "Segurança Pública",
            Self::Agricultura => "Agricultura de Precisão",
            Self::Topografia => "Topografia e Mapeamento",
            Self::Energia => "Energia e Utilities",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

/// Every statically coded page the site ships with.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(tag = "page", content = "detail")]
pub enum StaticPage {
    Home,
    Products,
    Product(ProductPage),
    Solutions,
    Solution(SolutionPage),
    About,
    Contact,
    PrivacyPolicy,
    TermsOfUse,
    BlogIndex,
    Auth,
    Admin(AdminSection),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum AdminSection {
    Dashboard,
    Pages,
    Blog,
    Solutions,
    Products,
    Settings,
}

impl AdminSection {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Painel",
            Self::Pages => "Páginas",
            Self::Blog => "Blog",
            Self::Solutions => "Soluções",
            Self::Products => "Produtos",
            Self::Settings => "Configurações",
        }
    }
}

impl StaticPage {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Início",
            Self::Products => "Produtos",
            Self::Product(p) => p.title(),
            Self::Solutions => "Soluções",
            Self::Solution(s) => s.title(),
            Self::About => "Sobre nós",
            Self::Contact => "Contato",
            Self::PrivacyPolicy => "Política de Privacidade",
            Self::TermsOfUse => "Termos de Uso",
            Self::BlogIndex => "Blog",
            Self::Auth => "Entrar",
            Self::Admin(section) => section.title(),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct StaticRouteDescriptor {
    pub path: &'static str,
    pub category: RouteCategory,
    pub page: StaticPage,
}

const fn overridable(path: &'static str, page: StaticPage) -> StaticRouteDescriptor {
    StaticRouteDescriptor {
        path,
        category: RouteCategory::Overridable,
        page,
    }
}

const fn protected(path: &'static str, page: StaticPage) -> StaticRouteDescriptor {
    StaticRouteDescriptor {
        path,
        category: RouteCategory::Protected,
        page,
    }
}

pub const BLOG_PREFIX: &str = "/blog";

pub const STATIC_ROUTES: &[StaticRouteDescriptor] = &[
    overridable("/", StaticPage::Home),
    overridable("/produtos", StaticPage::Products),
    overridable("/produtos/autel-mapper", StaticPage::Product(ProductPage::AutelMapper)),
    overridable("/produtos/autel-evo-max-4t", StaticPage::Product(ProductPage::AutelEvoMax4t)),
    overridable("/produtos/autel-evo-lite", StaticPage::Product(ProductPage::AutelEvoLite)),
    overridable("/produtos/autel-alpha", StaticPage::Product(ProductPage::AutelAlpha)),
    overridable("/produtos/autel-dragonfish", StaticPage::Product(ProductPage::AutelDragonfish)),
    overridable("/solucoes", StaticPage::Solutions),
    overridable("/solucoes/industrial", StaticPage::Solution(SolutionPage::Industrial)),
    overridable("/solucoes/seguranca-publica", StaticPage::Solution(SolutionPage::SegurancaPublica)),
    overridable("/solucoes/agricultura", StaticPage::Solution(SolutionPage::Agricultura)),
    overridable("/solucoes/topografia", StaticPage::Solution(SolutionPage::Topografia)),
    overridable("/solucoes/energia", StaticPage::Solution(SolutionPage::Energia)),
    overridable("/sobre", StaticPage::About),
    overridable("/contato", StaticPage::Contact),
    overridable("/politica-de-privacidade", StaticPage::PrivacyPolicy),
    overridable("/termos-de-uso", StaticPage::TermsOfUse),
    protected("/admin", StaticPage::Admin(AdminSection::Dashboard)),
    protected("/admin/paginas", StaticPage::Admin(AdminSection::Pages)),
    protected("/admin/blog", StaticPage::Admin(AdminSection::Blog)),
    protected("/admin/solucoes", StaticPage::Admin(AdminSection::Solutions)),
    protected("/admin/produtos", StaticPage::Admin(AdminSection::Products)),
    protected("/admin/configuracoes", StaticPage::Admin(AdminSection::Settings)),
    protected("/auth", StaticPage::Auth),
    protected(BLOG_PREFIX, StaticPage::BlogIndex),
];

/// Exact static route for `path`, if any.
pub fn static_route(path: &str) -> Option<&'static StaticRouteDescriptor> {
    STATIC_ROUTES.iter().find(|route| route.path == path)
}

/// The protected route `path` equals or falls beneath. The deepest match
/// wins so `/admin/blog` maps to its own section rather than `/admin`.
pub fn protected_route(path: &str) -> Option<&'static StaticRouteDescriptor> {
    STATIC_ROUTES
        .iter()
        .filter(|route| route.category == RouteCategory::Protected)
        .filter(|route| within(path, route.path))
        .max_by_key(|route| route.path.len())
}

pub fn is_protected_path(path: &str) -> bool {
    protected_route(path).is_some()
}

/// `/blog/<slug>` with exactly one non-empty segment.
pub fn is_blog_post_path(path: &str) -> bool {
    blog_post_slug(path).is_some()
}

pub fn blog_post_slug(path: &str) -> Option<&str> {
    let slug = path.strip_prefix(BLOG_PREFIX)?.strip_prefix('/')?;
    (!slug.is_empty() && !slug.contains('/')).then_some(slug)
}

/// Hardcoded component for an entity detail page, used when no active
/// database record exists for the slug.
pub fn fallback_component(kind: EntityKind, slug: &str) -> Option<StaticPage> {
    match kind {
        EntityKind::Product => ProductPage::from_slug(slug).map(StaticPage::Product),
        EntityKind::Solution => SolutionPage::from_slug(slug).map(StaticPage::Solution),
    }
}

/// Paths editors may target with a custom page. Protected paths are never
/// offered.
pub fn customizable_paths() -> impl Iterator<Item = &'static str> {
    STATIC_ROUTES
        .iter()
        .filter(|route| route.category == RouteCategory::Overridable)
        .map(|route| route.path)
}

pub fn protected_paths() -> impl Iterator<Item = &'static str> {
    STATIC_ROUTES
        .iter()
        .filter(|route| route.category == RouteCategory::Protected)
        .map(|route| route.path)
}
