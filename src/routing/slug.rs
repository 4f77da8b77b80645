use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::common::ValidationError;
use crate::routing::{is_blog_post_path, is_protected_path};

pub const MAX_PATH_LEN: usize = 255;

/// Namespaces owned by the application itself.
pub const RESERVED_PREFIXES: [&str; 3] = ["/admin", "/auth", "/api"];

/// Turns a human title into a URL slug: accents are stripped after
/// canonical decomposition, so "São Paulo" becomes "sao-paulo".
pub fn generate_slug(title: &str) -> String {
    let folded: String = title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    let mut slug = String::with_capacity(folded.len());
    let mut pending_dash = false;

    for ch in folded.trim().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
        // anything else is dropped without introducing a separator
    }

    slug
}

/// Lowercase alphanumeric segments joined by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Checks a path an editor wants to publish a custom page at.
pub fn validate_dynamic_path(path: &str) -> Result<(), ValidationError> {
    if !path.starts_with('/') {
        return Err(ValidationError::InvalidPath(path.to_string()));
    }

    if is_protected_path(path) {
        return Err(ValidationError::ProtectedPath(path.to_string()));
    }

    if RESERVED_PREFIXES.iter().any(|prefix| within(path, prefix)) {
        return Err(ValidationError::ReservedPrefix(path.to_string()));
    }

    if is_blog_post_path(path) {
        return Err(ValidationError::BlogPostPath(path.to_string()));
    }

    if path.len() > MAX_PATH_LEN {
        return Err(ValidationError::PathTooLong(path.to_string()));
    }

    let well_formed = path.len() > 1
        && path[1..]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '/');
    if !well_formed {
        return Err(ValidationError::InvalidPath(path.to_string()));
    }

    Ok(())
}

pub fn is_valid_dynamic_path(path: &str) -> bool {
    validate_dynamic_path(path).is_ok()
}

/// `path` equals `prefix` or lies beneath it.
pub(crate) fn within(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_slug_strips_accents() {
        assert_eq!(generate_slug("São Paulo"), "sao-paulo");
        assert_eq!(generate_slug("Ação"), "acao");
        assert_eq!(generate_slug("São Paulo - Ação!"), "sao-paulo-acao");
    }

    #[test]
    fn test_generate_slug_collapses_separators() {
        assert_eq!(generate_slug("  Drones   para\tAgricultura  "), "drones-para-agricultura");
        assert_eq!(generate_slug("--Inspeção -- de  Linhas--"), "inspecao-de-linhas");
        assert_eq!(generate_slug("EVO Max 4T"), "evo-max-4t");
    }

    #[test]
    fn test_generate_slug_drops_symbols() {
        assert_eq!(generate_slug("R$ 10.000,00"), "r-1000000");
        assert_eq!(generate_slug("Segurança & Defesa"), "seguranca-defesa");
        assert_eq!(generate_slug("!!!"), "");
        assert_eq!(generate_slug(""), "");
    }

    #[test]
    fn test_generated_slugs_are_valid() {
        let titles = [
            "São Paulo - Ação!",
            "Autel EVO II Pro 6K",
            "  Mapeamento 3D / Topografia ",
            "Über Ärger",
            "a",
            "-x-",
            "Ação — Rápida",
        ];

        for title in titles {
            let slug = generate_slug(title);
            assert!(!slug.is_empty(), "{title:?} produced an empty slug");
            assert!(is_valid_slug(&slug), "{title:?} produced invalid slug {slug:?}");
        }
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("industrial"));
        assert!(is_valid_slug("autel-evo-max-4t"));
        assert!(is_valid_slug("2024"));

        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-industrial"));
        assert!(!is_valid_slug("industrial-"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("Upper"));
        assert!(!is_valid_slug("acentuação"));
        assert!(!is_valid_slug("with space"));
    }

    #[test]
    fn test_dynamic_path_accepts_marketing_paths() {
        assert!(is_valid_dynamic_path("/sobre"));
        assert!(is_valid_dynamic_path("/produtos/autel-mapper"));
        assert!(is_valid_dynamic_path("/campanhas/black-friday-2026"));
    }

    #[test]
    fn test_dynamic_path_rejections() {
        assert_eq!(
            validate_dynamic_path("sobre"),
            Err(ValidationError::InvalidPath("sobre".into()))
        );
        assert_eq!(
            validate_dynamic_path("/admin/blog"),
            Err(ValidationError::ProtectedPath("/admin/blog".into()))
        );
        assert_eq!(
            validate_dynamic_path("/admin/anything/else"),
            Err(ValidationError::ProtectedPath("/admin/anything/else".into()))
        );
        assert_eq!(
            validate_dynamic_path("/api/pages"),
            Err(ValidationError::ReservedPrefix("/api/pages".into()))
        );
        assert_eq!(
            validate_dynamic_path("/Sobre"),
            Err(ValidationError::InvalidPath("/Sobre".into()))
        );
        assert_eq!(validate_dynamic_path("/"), Err(ValidationError::InvalidPath("/".into())));

        let long = format!("/{}", "a".repeat(MAX_PATH_LEN));
        assert_eq!(validate_dynamic_path(&long), Err(ValidationError::PathTooLong(long.clone())));
    }

    #[test]
    fn test_reserved_prefix_requires_segment_boundary() {
        assert!(is_valid_dynamic_path("/apis-industriais"));
        assert!(is_valid_dynamic_path("/authentic"));
        assert!(!is_valid_dynamic_path("/api"));
    }

    #[test]
    fn test_blog_paths_rejected() {
        assert!(!is_valid_dynamic_path("/blog"));
        assert!(!is_valid_dynamic_path("/blog/my-post"));
    }
}
