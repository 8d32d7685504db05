use async_trait::async_trait;

use wsaddr_core::error::{Result, WsAddrError};

use super::registry::ServiceRefDecl;

/// Resolves a declared reference to a concrete endpoint address.
#[async_trait]
pub trait ReferenceResolver: Send + Sync {
    async fn resolve(&self, decl: &ServiceRefDecl) -> Result<String>;
}

/// Always resolves to a fixed address.
#[derive(Debug, Clone)]
pub struct StaticResolver {
    address: String,
}

impl StaticResolver {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[async_trait]
impl ReferenceResolver for StaticResolver {
    async fn resolve(&self, _decl: &ServiceRefDecl) -> Result<String> {
        Ok(self.address.clone())
    }
}

/// Uses the address carried by the declaration itself.
///
/// Precedence: `lookup`, then `mapped_name`, then `wsdl_location` with a
/// trailing `?wsdl` query removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredAddressResolver;

#[async_trait]
impl ReferenceResolver for DeclaredAddressResolver {
    async fn resolve(&self, decl: &ServiceRefDecl) -> Result<String> {
        let non_empty = |s: &Option<String>| {
            s.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        if let Some(a) = non_empty(&decl.lookup).or_else(|| non_empty(&decl.mapped_name)) {
            return Ok(a);
        }
        if let Some(w) = non_empty(&decl.wsdl_location) {
            let lower = w.to_ascii_lowercase();
            return Ok(match lower.strip_suffix("?wsdl") {
                Some(stem) => w[..stem.len()].to_string(),
                None => w,
            });
        }
        Err(WsAddrError::Unresolved {
            name: decl.name.clone(),
            reason: "no lookup, mapped_name or wsdl_location declared".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl() -> ServiceRefDecl {
        ServiceRefDecl {
            name: "stockQuoteProvider".into(),
            service: "StockQuoteService".into(),
            service_type: None,
            wsdl_location: None,
            lookup: None,
            mapped_name: None,
            features: Vec::new(),
        }
    }

    #[tokio::test]
    async fn lookup_wins_over_wsdl_location() {
        let mut d = decl();
        d.lookup = Some("http://quotes.example/svc".into());
        d.wsdl_location = Some("http://other.example/svc?wsdl".into());
        assert_eq!(
            DeclaredAddressResolver.resolve(&d).await.unwrap(),
            "http://quotes.example/svc"
        );
    }

    #[tokio::test]
    async fn wsdl_location_query_is_stripped() {
        let mut d = decl();
        d.mapped_name = Some("  ".into());
        d.wsdl_location = Some("http://quotes.example/svc?WSDL".into());
        assert_eq!(
            DeclaredAddressResolver.resolve(&d).await.unwrap(),
            "http://quotes.example/svc"
        );
    }

    #[tokio::test]
    async fn nothing_declared_is_unresolved() {
        let err = DeclaredAddressResolver.resolve(&decl()).await.unwrap_err();
        assert_eq!(err.code().as_str(), "UNRESOLVED");
    }

    #[tokio::test]
    async fn static_resolver_ignores_declaration() {
        let r = StaticResolver::new("http://fixed.example/svc");
        assert_eq!(r.resolve(&decl()).await.unwrap(), "http://fixed.example/svc");
    }
}
