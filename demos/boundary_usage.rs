//! Embedding example for acmeguard-core
//!
//! Shows how an HTTP update handler would run one request through the
//! boundary checks. The "stored" tenant record is hard-coded here; a real
//! service would load it from its database after `check_credentials`.

use acmeguard_core::{CidrList, GuardConfig, UpdateGuard, UpdateRequest};
use std::net::IpAddr;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

/// What the service would have stored for the tenant
struct StoredTenant {
    key_hash: &'static str,
    allow_from: CidrList,
}

fn stored_tenant() -> StoredTenant {
    StoredTenant {
        key_hash: "$2a$10$ldVoGU5yrdlbPzuPUbUfleVovGjaRelP9tql0IltVUJk778gf.2tu",
        allow_from: ["invalid", "127.0.0.0/8", "::1/128"].into_iter().collect(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = GuardConfig::from_json(r#"{"allow_from": ["127.0.0.0/8", "::1/128"]}"#)?;
    let guard = UpdateGuard::new(config)?;

    // Headers and body as they would arrive
    let user = "5ec1d7f2-496d-11e9-8646-d663bd873d93";
    let key = "PUrNTjU24JYNEOCeS2JcjaJGv1sinT80oV9--dpX";
    let source: IpAddr = "127.0.0.1".parse()?;
    let body = r#"{"subdomain": "5ec1d7f2-496d-11e9-8646-d663bd873d93",
                   "txt": "LHDhK3oGRvkiefQnx7OOczTY5Tic_xZ6HcMOc_gmtoM"}"#;

    let (tenant, key) = guard.check_credentials(user, key)?;
    let record = stored_tenant();
    info!(
        "Tenant {} allows updates from {}",
        tenant,
        record.allow_from.to_json()?
    );

    guard.check_source(source, &record.allow_from)?;

    if !guard.verify_secret_offloaded(&key, record.key_hash).await {
        warn!("Authentication failed for {}", tenant);
        anyhow::bail!("invalid credentials");
    }

    let request: UpdateRequest = serde_json::from_str(body)?;
    guard.check_update(&request)?;
    info!("Update for {} accepted", request.subdomain);

    // A request that fails the payload check
    let bad = UpdateRequest::new(request.subdomain.clone(), "too-short");
    match guard.check_update(&bad) {
        Ok(()) => warn!("Malformed update was accepted"),
        Err(e) => info!("Malformed update rejected: {}", e),
    }

    Ok(())
}
