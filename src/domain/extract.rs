//! Extraction of valid domains from free text.

use std::borrow::Cow;

use super::{Decomposer, Domain};

/// Splits text on whitespace, replacing URL tokens by their host.
///
/// Any token containing `://` is parsed as a URL; if it has a host, the host
/// takes its place. Tokens that do not parse as URLs are returned unchanged.
pub fn tokens(text: &str) -> impl Iterator<Item = Cow<'_, str>> {
    text.split_whitespace().map(host_or_token)
}

fn host_or_token(token: &str) -> Cow<'_, str> {
    if !token.contains("://") {
        return Cow::Borrowed(token);
    }
    match url::Url::parse(token) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => Cow::Owned(host.to_string()),
            None => Cow::Borrowed(token),
        },
        Err(e) => {
            log::debug!("Token {:?} looks like a URL but does not parse: {}", token, e);
            Cow::Borrowed(token)
        }
    }
}

impl<'a> Decomposer<'a> {
    /// Decomposes every token of `text`, pairing each with the token it came
    /// from.
    ///
    /// Tokens are those of [`tokens`]; invalid results are kept, so callers
    /// can count them.
    pub fn scan<'t>(&self, text: &'t str) -> impl Iterator<Item = (Cow<'t, str>, Domain)> + 't
    where
        'a: 't,
    {
        let decomposer: Decomposer<'t> = *self;
        tokens(text).map(move |token| {
            let domain = decomposer.decompose(&token);
            (token, domain)
        })
    }

    /// Returns every valid domain found in `text`, in order of appearance.
    ///
    /// ```
    /// use domaintools::{Decomposer, SuffixDatabase};
    ///
    /// let db = SuffixDatabase::parse("com\nnet\n").unwrap();
    /// let found = Decomposer::new(&db).extract("www.foo.com notadomain baz.bar.net");
    /// let names: Vec<String> = found.iter().map(ToString::to_string).collect();
    /// assert_eq!(names, ["www.foo.com", "baz.bar.net"]);
    /// ```
    pub fn extract(&self, text: &str) -> Vec<Domain> {
        let mut found = Vec::new();
        self.extract_into(text, &mut found);
        found
    }

    /// Like [`Decomposer::extract`], over a sequence of lines.
    pub fn extract_lines<I, S>(&self, lines: I) -> Vec<Domain>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut found = Vec::new();
        for line in lines {
            self.extract_into(line.as_ref(), &mut found);
        }
        found
    }

    fn extract_into(&self, text: &str, found: &mut Vec<Domain>) {
        found.extend(
            self.scan(text)
                .map(|(_, domain)| domain)
                .filter(Domain::valid),
        );
    }
}
