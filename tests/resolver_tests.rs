mod common;

#[cfg(test)]
pub mod resolver_tests {
    use std::time::Duration;

    use super::common::*;

    use dronesite::models::{EntityKind, EntityRecord};
    use dronesite::routing::*;

    #[tokio::test]
    async fn test_admin_blog_is_never_shadowed() {
        let h = harness();
        h.store.add_page("/admin/blog", true);

        let resolution = h.resolver.classify("/admin/blog").await;

        assert_eq!(
            resolution,
            Resolution::StaticComponent {
                page: StaticPage::Admin(AdminSection::Blog)
            }
        );
        assert_eq!(h.store.path_calls(), 0, "protected routes need no lookups");
    }

    #[tokio::test]
    async fn test_unknown_admin_subpath_is_not_found() {
        let h = harness();
        h.store.add_page("/admin/usuarios", true);

        assert_eq!(h.resolver.classify("/admin/usuarios").await, Resolution::NotFound);
        assert_eq!(h.resolver.resolve("/admin/usuarios").await, RenderTarget::NotFound);
    }

    #[tokio::test]
    async fn test_blog_post_resolves_and_ignores_custom_pages() {
        let h = harness();
        let post = h.store.add_post("my-post", true);
        h.store.add_page("/blog/my-post", true);

        assert_eq!(
            h.resolver.classify("/blog/my-post").await,
            Resolution::BlogPost {
                slug: "my-post".to_string()
            }
        );
        assert_eq!(h.resolver.resolve("/blog/my-post").await, RenderTarget::BlogPost(post));
    }

    #[tokio::test]
    async fn test_unpublished_blog_post_is_not_found() {
        let h = harness();
        h.store.add_post("rascunho", false);

        assert_eq!(h.resolver.resolve("/blog/rascunho").await, RenderTarget::NotFound);
    }

    #[tokio::test]
    async fn test_hardcoded_product_fallback_without_records() {
        let h = harness();

        let target = h.resolver.resolve("/produtos/autel-mapper").await;

        assert_eq!(
            target,
            RenderTarget::StaticComponent(StaticPage::Product(ProductPage::AutelMapper))
        );
        assert_eq!(h.store.entity_calls(), 1);
    }

    #[tokio::test]
    async fn test_active_solution_wins_over_fallback() {
        let h = harness();
        let record = h.store.add_solution("industrial", true);

        let target = h.resolver.resolve("/solucoes/industrial").await;

        assert_eq!(target, RenderTarget::EntityPage(record));
    }

    #[tokio::test]
    async fn test_inactive_solution_uses_fallback() {
        let h = harness();
        h.store.add_solution("industrial", false);

        let target = h.resolver.resolve("/solucoes/industrial").await;

        assert_eq!(
            target,
            RenderTarget::StaticComponent(StaticPage::Solution(SolutionPage::Industrial))
        );
    }

    #[tokio::test]
    async fn test_entity_wins_over_custom_page() {
        let h = harness();
        let record = h.store.add_product("autel-evo-max-4t", true);
        h.store.add_page("/produtos/autel-evo-max-4t", true);

        let target = h.resolver.resolve("/produtos/autel-evo-max-4t").await;

        assert_eq!(target, RenderTarget::EntityPage(record));
    }

    #[tokio::test]
    async fn test_custom_page_overrides_static_page() {
        let h = harness();
        let page = h.store.add_page("/sobre", true);

        assert_eq!(h.resolver.resolve("/sobre").await, RenderTarget::CustomPage(page));
        assert_eq!(h.resolver.resolve("/contato").await, RenderTarget::StaticComponent(StaticPage::Contact));
    }

    #[tokio::test]
    async fn test_custom_page_at_unregistered_path() {
        let h = harness();
        let page = h.store.add_page("/campanhas/feira-agro", true);

        assert_eq!(
            h.resolver.resolve("/campanhas/feira-agro/").await,
            RenderTarget::CustomPage(page)
        );
    }

    #[tokio::test]
    async fn test_unpublished_custom_page_is_ignored() {
        let h = harness();
        h.store.add_page("/sobre", false);
        h.store.add_page("/campanhas/feira-agro", false);

        assert_eq!(h.resolver.resolve("/sobre").await, RenderTarget::StaticComponent(StaticPage::About));
        assert_eq!(h.resolver.resolve("/campanhas/feira-agro").await, RenderTarget::NotFound);
    }

    #[tokio::test]
    async fn test_published_page_visible_after_invalidate() {
        let h = harness();
        h.store.add_page("/campanhas/feira-agro", false);
        assert_eq!(h.resolver.resolve("/campanhas/feira-agro").await, RenderTarget::NotFound);

        h.store.set_published("/campanhas/feira-agro", true);
        assert_eq!(
            h.resolver.resolve("/campanhas/feira-agro").await,
            RenderTarget::NotFound,
            "snapshot is still fresh"
        );

        h.resolver.invalidate(None);
        assert!(matches!(
            h.resolver.resolve("/campanhas/feira-agro").await,
            RenderTarget::CustomPage(page) if page.path == "/campanhas/feira-agro"
        ));
    }

    #[tokio::test]
    async fn test_published_page_visible_after_ttl() {
        let h = harness();
        h.store.add_page("/campanhas/feira-agro", false);
        h.resolver.resolve("/campanhas/feira-agro").await;

        h.store.set_published("/campanhas/feira-agro", true);
        h.clock.advance(TTL);

        assert!(matches!(
            h.resolver.resolve("/campanhas/feira-agro").await,
            RenderTarget::CustomPage(_)
        ));
    }

    #[tokio::test]
    async fn test_cache_failure_fails_closed_to_static_pages() {
        let h = harness();
        h.store.add_page("/sobre", true);
        h.store.add_page("/campanhas/feira-agro", true);
        h.store.path_failures.fail_always();

        assert_eq!(h.resolver.resolve("/sobre").await, RenderTarget::StaticComponent(StaticPage::About));
        assert_eq!(h.resolver.resolve("/campanhas/feira-agro").await, RenderTarget::NotFound);
        assert_eq!(h.store.page_calls(), 0);
        assert!(h.resolver.published_paths().last_refresh_failed());
    }

    #[tokio::test]
    async fn test_custom_page_vanishing_falls_back_to_static() {
        let h = harness();
        h.store.add_page("/sobre", true);
        h.resolver.published_paths().refresh().await;

        // Unpublished after the snapshot was taken.
        h.store.set_published("/sobre", false);

        assert_eq!(h.resolver.resolve("/sobre").await, RenderTarget::StaticComponent(StaticPage::About));
        assert_eq!(h.store.page_calls(), 1);
    }

    #[tokio::test]
    async fn test_custom_page_fetch_failure_falls_back_to_static() {
        let h = harness();
        h.store.add_page("/sobre", true);
        h.store.page_failures.fail_always();

        assert_eq!(h.resolver.resolve("/sobre").await, RenderTarget::StaticComponent(StaticPage::About));
        assert_eq!(h.store.page_calls(), 3);
    }

    #[tokio::test]
    async fn test_entity_probe_answers_are_cached() {
        let h = harness();
        h.store.add_solution("industrial", true);

        h.resolver.resolve("/solucoes/industrial").await;
        h.store.remove_entities();
        let target = h.resolver.resolve("/solucoes/industrial").await;

        assert!(matches!(target, RenderTarget::EntityPage(EntityRecord::Solution(_))));
        assert_eq!(h.store.entity_calls(), 1);

        h.clock.advance(ENTITY_TTL);
        assert_eq!(
            h.resolver.resolve("/solucoes/industrial").await,
            RenderTarget::StaticComponent(StaticPage::Solution(SolutionPage::Industrial))
        );
        assert_eq!(h.store.entity_calls(), 2);
    }

    #[tokio::test]
    async fn test_entity_probe_forget_drops_one_answer() {
        let h = harness();
        h.store.add_product("autel-alpha", true);
        h.resolver.resolve("/produtos/autel-alpha").await;
        h.store.remove_entities();

        h.resolver.invalidate(Some((EntityKind::Product, "autel-alpha")));

        assert_eq!(
            h.resolver.resolve("/produtos/autel-alpha").await,
            RenderTarget::StaticComponent(StaticPage::Product(ProductPage::AutelAlpha))
        );
        assert_eq!(h.store.entity_calls(), 2);
    }

    #[tokio::test]
    async fn test_entity_probe_failure_falls_back_and_is_not_cached() {
        let h = harness();
        h.store.add_solution("energia", true);
        h.store.entity_failures.fail_always();

        assert_eq!(
            h.resolver.resolve("/solucoes/energia").await,
            RenderTarget::StaticComponent(StaticPage::Solution(SolutionPage::Energia))
        );
        assert_eq!(h.store.entity_calls(), 3);

        h.store.entity_failures.heal();
        assert!(matches!(
            h.resolver.resolve("/solucoes/energia").await,
            RenderTarget::EntityPage(_)
        ));
        assert_eq!(h.store.entity_calls(), 4);
    }

    #[tokio::test]
    async fn test_entity_probe_transient_failure_recovers() {
        let h = harness();
        h.store.add_solution("agricultura", true);
        h.store.entity_failures.fail_next(1);

        assert!(matches!(
            h.resolver.resolve("/solucoes/agricultura").await,
            RenderTarget::EntityPage(_)
        ));
        assert_eq!(h.store.entity_calls(), 2);
    }

    #[tokio::test]
    async fn test_unknown_entity_slug_is_not_found() {
        let h = harness();

        assert_eq!(h.resolver.resolve("/produtos/nao-existe").await, RenderTarget::NotFound);
        assert_eq!(h.resolver.resolve("/produtos/a/b").await, RenderTarget::NotFound);
    }

    #[tokio::test]
    async fn test_family_listing_and_home() {
        let h = harness();

        assert_eq!(h.resolver.resolve("/").await, RenderTarget::StaticComponent(StaticPage::Home));
        assert_eq!(h.resolver.resolve("").await, RenderTarget::StaticComponent(StaticPage::Home));
        assert_eq!(
            h.resolver.resolve("/produtos/").await,
            RenderTarget::StaticComponent(StaticPage::Products)
        );
        assert_eq!(
            h.resolver.resolve("/solucoes").await,
            RenderTarget::StaticComponent(StaticPage::Solutions)
        );
    }

    #[tokio::test]
    async fn test_entity_ttl_boundary() {
        let h = harness();
        h.store.add_product("autel-evo-lite", true);
        h.resolver.resolve("/produtos/autel-evo-lite").await;

        h.clock.advance(ENTITY_TTL - Duration::from_secs(1));
        h.resolver.resolve("/produtos/autel-evo-lite").await;

        assert_eq!(h.store.entity_calls(), 1);
    }

    #[test]
    fn test_navigation_keeps_previous_view_while_loading() {
        let mut nav = NavigationState::new();
        let first = nav.begin();
        nav.settle(first, Resolution::StaticComponent { page: StaticPage::Home });

        let second = nav.begin();
        let view = nav.settle(second, Resolution::Loading);

        assert_eq!(
            view,
            Some(NavigationView::Target(Resolution::StaticComponent {
                page: StaticPage::Home
            }))
        );
        assert_eq!(nav.settle(first, Resolution::NotFound), None);
    }
}
