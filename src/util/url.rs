use crate::Error;
use url::{Host, Url};

/// Allow-listed registrable domain for file downloads.
const STEDI_DOMAIN: &str = "stedi.com";

pub(crate) fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let url = Url::parse(raw).map_err(|err| Error::InvalidConfig {
        message: "invalid base_url".into(),
        source: Some(Box::new(err)),
    })?;

    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::InvalidConfig {
            message: "base_url must not include query or fragment".into(),
            source: None,
        });
    }
    if url.cannot_be_a_base() {
        return Err(Error::InvalidConfig {
            message: "base_url must be a hierarchical URL".into(),
            source: None,
        });
    }
    Ok(url)
}

/// `{base}/{path}` with exactly one separator: a single trailing `/` on the
/// base and a single leading `/` on the path are dropped before joining.
pub(crate) fn endpoint_url(base_url: &Url, path: &str) -> Result<Url, Error> {
    let base = base_url.as_str();
    let base = base.strip_suffix('/').unwrap_or(base);
    let path = path.strip_prefix('/').unwrap_or(path);

    Url::parse(&format!("{base}/{path}")).map_err(|err| Error::InvalidConfig {
        message: "invalid request path".into(),
        source: Some(Box::new(err)),
    })
}

pub(crate) fn sanitize_url_for_error(url: &Url) -> Url {
    let mut safe = url.clone();
    safe.set_query(None);
    safe.set_fragment(None);
    let _ = safe.set_username("");
    let _ = safe.set_password(None);
    safe
}

/// Parse and allow-list a download target: `https` only, host `stedi.com` or
/// a `*.stedi.com` subdomain, no credentials and no explicit port.
pub(crate) fn validate_download_url(raw: &str) -> Result<Url, Error> {
    let url = Url::parse(raw).map_err(|_| Error::invalid_url(raw))?;

    let host_ok = match url.host() {
        Some(Host::Domain(host)) => is_stedi_host(host),
        _ => false,
    };

    if url.scheme() != "https"
        || !host_ok
        || url.port().is_some()
        || !url.username().is_empty()
        || url.password().is_some()
    {
        return Err(Error::invalid_url(raw));
    }
    Ok(url)
}

fn is_stedi_host(host: &str) -> bool {
    let Some(prefix) = host.strip_suffix(STEDI_DOMAIN) else {
        return false;
    };
    if prefix.is_empty() {
        return true;
    }
    let Some(subdomain) = prefix.strip_suffix('.') else {
        return false;
    };
    !subdomain.is_empty()
        && subdomain.split('.').all(|label| {
            !label.is_empty() && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        })
}
