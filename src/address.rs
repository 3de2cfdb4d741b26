//! Reading the article identifier out of a page address.

use lazy_static::lazy_static;
use regex::Regex;

use crate::article::ArticleId;

const ID_PARAM: &str = "id";

lazy_static! {
    static ref LEADING_INTEGER: Regex =
        Regex::new(r"^\s*([+-]?)(?:0[xX]([0-9a-fA-F]+)|([0-9]+))").unwrap();
}

/// An article id as requested by a page address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedId {
    Id(ArticleId),
    /// A number too large for an [`ArticleId`]; no article can have it.
    OutOfRange,
}

impl From<ArticleId> for RequestedId {
    fn from(id: ArticleId) -> Self {
        RequestedId::Id(id)
    }
}

/// Query string of a page address: after the first `?`, before any `#`.
pub fn query_of(address: &str) -> &str {
    let address = address.split_once('#').map_or(address, |(before, _)| before);
    address.split_once('?').map_or("", |(_, query)| query)
}

/// First value of `name` in the address query, form-decoded.
pub fn query_param(address: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query_of(address).as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Integer prefix of `raw`: leading whitespace, an optional sign, then
/// either `0x`/`0X` and hex digits or decimal digits. Anything after the
/// digits is ignored. `None` when there are no digits at all.
pub fn parse_leading_int(raw: &str) -> Option<RequestedId> {
    let captures = LEADING_INTEGER.captures(raw)?;
    let sign = captures.get(1).map_or("", |m| m.as_str());
    let (digits, radix) = match (captures.get(2), captures.get(3)) {
        (Some(hex), _) => (hex.as_str(), 16),
        (None, Some(decimal)) => (decimal.as_str(), 10),
        (None, None) => return None,
    };
    // The digit run is already validated, so the only failure is overflow.
    let parsed = match ArticleId::from_str_radix(&format!("{sign}{digits}"), radix) {
        Ok(id) => RequestedId::Id(id),
        Err(_) => RequestedId::OutOfRange,
    };
    Some(parsed)
}

/// The `id` the detail page should show, or `None` when the address has no
/// usable id (absent, not a number, or zero) and the visitor belongs on the
/// listing page instead.
pub fn article_id(address: &str) -> Option<RequestedId> {
    let raw = query_param(address, ID_PARAM)?;
    parse_leading_int(&raw).filter(|requested| *requested != RequestedId::Id(0))
}
