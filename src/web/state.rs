use std::sync::Arc;

use dronesite::routing::RouteResolver;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RouteResolver>,
}
