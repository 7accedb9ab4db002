// # Update Guard
//
// Runs the boundary checks for one update request in the order the API
// layer needs them:
//
// 1. `check_credentials`: tenant identifier, then API key shape
// 2. `check_source`: request address against the pooled global and
//    tenant allow lists (any valid range is enough)
// 3. `verify_secret`: API key against the tenant's stored hash
// 4. `check_update`: subdomain, then TXT payload
//
// The guard only reports whether input is well-formed and whether the
// secret matches. Whether a tenant may write a given record is decided by
// the caller. Rejections name the field, never the rejected value.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use tracing::debug;

use crate::cidr::CidrList;
use crate::config::GuardConfig;
use crate::credential::{verify_password, verify_password_offloaded};
use crate::error::{Error, Result};
use crate::identifier::TenantId;
use crate::key::ApiKey;
use crate::payload::is_valid_record_payload;
use crate::subdomain::is_valid_subdomain;

/// Body of a TXT update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Subdomain whose TXT record is replaced
    pub subdomain: String,
    /// New TXT value
    pub txt: String,
}

impl UpdateRequest {
    /// Create a new update request
    pub fn new(subdomain: impl Into<String>, txt: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
            txt: txt.into(),
        }
    }
}

/// Boundary checks for update requests
#[derive(Debug, Clone)]
pub struct UpdateGuard {
    config: GuardConfig,
}

impl UpdateGuard {
    /// Create a guard from a validated configuration
    pub fn new(config: GuardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Parse the presented username and API key
    pub fn check_credentials(&self, user: &str, key: &str) -> Result<(TenantId, ApiKey)> {
        let tenant: TenantId = user.parse().inspect_err(|e| {
            debug!("Rejected username: {}", e);
        })?;

        let key: ApiKey = key.parse().inspect_err(|_| {
            debug!("Rejected API key for {}", tenant);
        })?;

        Ok((tenant, key))
    }

    /// Check the request address against the global and tenant allow lists
    ///
    /// The valid ranges of both lists are pooled. An empty pool does not
    /// restrict; otherwise any range containing the address is enough.
    pub fn check_source(&self, ip: IpAddr, tenant_allow_from: &CidrList) -> Result<()> {
        let mut networks = self.config.allow_from.networks();
        networks.extend(tenant_allow_from.networks());

        let permitted = networks.is_empty() || networks.iter().any(|net| net.contains(&ip));

        if permitted {
            Ok(())
        } else {
            debug!("Rejected update source {}", ip);
            Err(Error::SourceNotAllowed(ip))
        }
    }

    /// Verify the API key against the tenant's stored hash
    pub fn verify_secret(&self, key: &ApiKey, stored_hash: &str) -> bool {
        verify_password(key.expose(), stored_hash)
    }

    /// [`Self::verify_secret`] on the blocking pool
    pub async fn verify_secret_offloaded(&self, key: &ApiKey, stored_hash: &str) -> bool {
        verify_password_offloaded(key.expose().to_string(), stored_hash.to_string()).await
    }

    /// Check the subdomain and TXT value of an update
    pub fn check_update(&self, request: &UpdateRequest) -> Result<()> {
        if !is_valid_subdomain(&request.subdomain) {
            debug!("Rejected update: bad subdomain");
            return Err(Error::InvalidSubdomain);
        }

        if !is_valid_record_payload(&request.txt) {
            debug!("Rejected update: bad TXT");
            return Err(Error::InvalidRecordPayload);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    const USER: &str = "5ec1d7f2-496d-11e9-8646-d663bd873d93";
    const KEY: &str = "PUrNTjU24JYNEOCeS2JcjaJGv1sinT80oV9--dpX";

    fn guard() -> UpdateGuard {
        UpdateGuard::new(GuardConfig::default()).unwrap()
    }

    #[test]
    fn test_check_credentials() {
        let (tenant, key) = guard().check_credentials(USER, KEY).unwrap();
        assert_eq!(tenant.to_string(), USER);
        assert_eq!(key.expose(), KEY);
    }

    #[test]
    fn test_check_credentials_rejections() {
        let upper = USER.to_uppercase();
        assert!(matches!(
            guard().check_credentials(&upper, KEY),
            Err(Error::Format(FormatError::NotLowercase))
        ));
        assert!(matches!(
            guard().check_credentials(USER, "short"),
            Err(Error::InvalidKey)
        ));
    }

    #[test]
    fn test_check_update() {
        let txt = "a".repeat(43);
        assert!(guard().check_update(&UpdateRequest::new(USER, &txt)).is_ok());
        assert!(matches!(
            guard().check_update(&UpdateRequest::new("Bad.sub", &txt)),
            Err(Error::InvalidSubdomain)
        ));
        assert!(matches!(
            guard().check_update(&UpdateRequest::new(USER, "short")),
            Err(Error::InvalidRecordPayload)
        ));
    }

    #[test]
    fn test_update_request_json() {
        let request: UpdateRequest =
            serde_json::from_str(r#"{"subdomain":"abc","txt":"def"}"#).unwrap();
        assert_eq!(request, UpdateRequest::new("abc", "def"));
    }

    #[test]
    fn test_check_source_unrestricted() {
        let ip: IpAddr = "203.0.113.9".parse().unwrap();
        assert!(guard().check_source(ip, &CidrList::default()).is_ok());
        let junk: CidrList = ["junk"].into_iter().collect();
        assert!(guard().check_source(ip, &junk).is_ok());
    }

    #[test]
    fn test_check_source_tenant_list() {
        let tenant: CidrList = ["192.168.0.0/16"].into_iter().collect();
        assert!(guard().check_source("192.168.4.4".parse().unwrap(), &tenant).is_ok());
        assert!(matches!(
            guard().check_source("10.1.1.1".parse().unwrap(), &tenant),
            Err(Error::SourceNotAllowed(_))
        ));
    }

    #[test]
    fn test_check_source_global_and_tenant() {
        let config = GuardConfig::new().with_allow_from(vec!["10.0.0.0/8".to_string()]);
        let guard = UpdateGuard::new(config).unwrap();
        let tenant: CidrList = ["10.1.0.0/16"].into_iter().collect();

        assert!(guard.check_source("10.1.2.3".parse().unwrap(), &tenant).is_ok());
        assert!(guard.check_source("10.2.2.3".parse().unwrap(), &tenant).is_ok());
        assert!(guard.check_source("10.2.2.3".parse().unwrap(), &CidrList::default()).is_ok());
        assert!(guard.check_source("::1".parse().unwrap(), &CidrList::default()).is_err());
        assert!(guard.check_source("::1".parse().unwrap(), &tenant).is_err());
    }

    #[test]
    fn test_check_source_either_list_is_enough() {
        let config = GuardConfig::new().with_allow_from(vec!["10.0.0.0/8".to_string()]);
        let guard = UpdateGuard::new(config).unwrap();
        let tenant: CidrList = ["bogus", "192.168.0.0/16"].into_iter().collect();

        // Tenant range only
        assert!(guard.check_source("192.168.1.1".parse().unwrap(), &tenant).is_ok());
        // Global range only
        assert!(guard.check_source("10.9.9.9".parse().unwrap(), &tenant).is_ok());
        assert!(matches!(
            guard.check_source("172.16.0.1".parse().unwrap(), &tenant),
            Err(Error::SourceNotAllowed(_))
        ));
    }

    #[test]
    fn test_check_source_tenant_list_without_global() {
        let tenant: CidrList = ["junk", "2001:db8::/32"].into_iter().collect();
        assert!(guard().check_source("2001:db8::7".parse().unwrap(), &tenant).is_ok());
        assert!(guard().check_source("2001:db9::7".parse().unwrap(), &tenant).is_err());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GuardConfig::new().with_allow_from(vec!["bad".to_string()]);
        assert!(matches!(UpdateGuard::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn test_verify_secret() {
        let key: ApiKey = KEY.parse().unwrap();
        let hash = bcrypt::hash(KEY, 4).unwrap();
        assert!(guard().verify_secret(&key, &hash));
        assert!(!guard().verify_secret(&key, ""));
    }
}
