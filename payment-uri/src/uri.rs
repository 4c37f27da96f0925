use std::{borrow::Cow, fmt};

use percent_encoding::{percent_decode_str, utf8_percent_encode};

/// A raw, parsed URI. The body and params (both key and value) are
/// percent-decoded. See [URI syntax - RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986).
///
/// Unlike a general purpose URI parser, we never interpret an authority
/// component: `scheme://body` is read exactly like `scheme:body`, and the body
/// keeps its original casing. Generic parsers lowercase the "host" after `//`,
/// which would corrupt case-sensitive Base58 addresses.
///
/// ex: `PRiVCY://PAddr?label=Joe%20Bloggs&amount=1`
/// -> Uri {
///     scheme: "PRiVCY",
///     body: "PAddr",
///     params: [("label", "Joe Bloggs"), ("amount", "1")],
/// }
#[derive(Debug)]
pub(crate) struct Uri<'a> {
    pub scheme: &'a str,
    pub body: Cow<'a, str>,
    pub params: Vec<UriParam<'a>>,
}

impl<'a> Uri<'a> {
    /// These are the ASCII characters that we will percent-encode inside a URI
    /// body or a query string key or value. We're somewhat conservative here
    /// and require all non-alphanumeric characters to be percent-encoded
    /// (with the exception of a few unreserved characters, designated in
    /// [RFC 3986]).
    ///
    /// Only used for encoding. We will decode all percent-encoded characters.
    ///
    /// [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986#section-2.3
    const PERCENT_ENCODE_ASCII_SET: percent_encoding::AsciiSet =
        percent_encoding::NON_ALPHANUMERIC
            .remove(b'-')
            .remove(b'.')
            .remove(b'_')
            .remove(b'~');

    // syntax: `<scheme>:[//]<body>?<key1>=<value1>&<key2>=<value2>&...[#..]`
    pub fn parse(s: &'a str) -> Option<Self> {
        // parse scheme
        // ex: "PRiVCY:PAddr..." -> `scheme = "PRiVCY"`
        let (scheme, rest) = s.split_once(':')?;
        if scheme.is_empty() {
            return None;
        }

        // ex: "PRiVCY://PAddr..." -> `rest = "PAddr..."`
        let rest = rest.strip_prefix("//").unwrap_or(rest);

        // Drop any `#fragment`. A literal `#` in a value must be `%23`.
        // ex: "PAddr...?amount=1#top" -> `rest = "PAddr...?amount=1"`
        let rest = rest.split_once('#').map_or(rest, |(rest, _)| rest);

        // ex: "PRiVCY:PAddr...?label=hello" -> `body = "PAddr..."`
        let (body, query) = rest.split_once('?').unwrap_or((rest, ""));
        let body = percent_decode_str(body).decode_utf8_lossy();

        // ex: "PRiVCY:PAddr...?label=hello%20world&amount=0.1"
        //     -> `params = [("label", "hello world"), ("amount", "0.1")]`
        let params = query
            .split('&')
            .filter(|param| !param.is_empty())
            .map(UriParam::parse)
            .collect::<Vec<_>>();

        Some(Self {
            scheme,
            body,
            params,
        })
    }
}

// "{scheme}:{body}?{key1}={value1}&{key2}={value2}&..."
impl fmt::Display for Uri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.scheme;
        let body =
            utf8_percent_encode(&self.body, &Self::PERCENT_ENCODE_ASCII_SET);

        write!(f, "{scheme}:{body}")?;

        let mut sep: char = '?';
        for param in &self.params {
            write!(f, "{sep}{param}")?;
            sep = '&';
        }
        Ok(())
    }
}

/// A single `<key>=<value>` URI parameter.
///
/// + Both `key` and `value` are percent-encoded when displayed.
/// + A bare `<key>` with no `=` has an empty `value`.
#[derive(Debug)]
pub(crate) struct UriParam<'a> {
    pub key: Cow<'a, str>,
    pub value: Cow<'a, str>,
}

impl<'a> UriParam<'a> {
    pub fn parse(s: &'a str) -> Self {
        let (key, value) = s.split_once('=').unwrap_or((s, ""));
        // Invalid UTF-8 sequences become U+FFFD rather than dropping the
        // param, so a mangled `req-` key still gets rejected.
        let key = percent_decode_str(key).decode_utf8_lossy();
        let value = percent_decode_str(value).decode_utf8_lossy();
        Self { key, value }
    }

    pub fn key_parsed(&self) -> UriParamKey<'_> {
        UriParamKey::parse(&self.key)
    }
}

// "{key}={value}"
impl fmt::Display for UriParam<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key =
            utf8_percent_encode(&self.key, &Uri::PERCENT_ENCODE_ASCII_SET);
        let value =
            utf8_percent_encode(&self.value, &Uri::PERCENT_ENCODE_ASCII_SET);
        write!(f, "{key}={value}")
    }
}

/// Parsed key from a URI "{key}={value}" parameter.
pub(crate) struct UriParamKey<'a> {
    /// The key name. This is case-sensitive.
    ///
    /// ex:     "amount" -> `name = "amount"`
    /// ex: "req-amount" -> `name = "amount"`
    /// ex: "REQ-AMOUNT" -> `name = "REQ-AMOUNT"`
    pub name: &'a str,
    /// Whether this key is a required parameter. Required parameters are
    /// prefixed by exactly "req-".
    pub is_req: bool,
}

impl<'a> UriParamKey<'a> {
    const REQUIRED_PREFIX: &'static str = "req-";

    pub fn parse(key: &'a str) -> Self {
        match key.strip_prefix(Self::REQUIRED_PREFIX) {
            Some(name) => Self { name, is_req: true },
            None => Self {
                name: key,
                is_req: false,
            },
        }
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}
