//! wsaddr runtime
//!
//! - Loads bindings and service references from `wsaddr.yaml` (or the first argument)
//! - Assembles bindings and resolves references once; setup errors abort boot
//! - Serves policy metadata and per-message compliance checks over HTTP

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use wsaddr_runtime::refs::{DeclaredAddressResolver, ReferenceRegistry};
use wsaddr_runtime::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "wsaddr.yaml".into());
    let cfg = config::load_from_file(&path).expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    // References carry their own addresses in config; hosts embedding the
    // runtime register their own resolvers instead.
    let registry = ReferenceRegistry::new();
    for r in &cfg.references {
        registry.register(r.name.clone(), Arc::new(DeclaredAddressResolver));
    }

    let state = app_state::AppState::build(cfg, &registry)
        .await
        .expect("runtime setup failed");
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "wsaddr-runtime starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
