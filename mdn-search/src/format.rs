//! Mapping validated documents into launcher result items.

use crate::error::SearchError;
use crate::types::{Document, ItemType, ResultItem, ResultText};
use url::Url;

/// Build the absolute article URL for a site-relative `path`.
///
/// The base URL's path is replaced by `path`; its query and fragment are
/// dropped. A path without a leading `/` gets one. Characters not allowed
/// in a path are percent-encoded.
///
/// # Errors
///
/// Returns [`SearchError::UrlConstruction`] if `base_url` cannot carry a path.
pub fn build_article_url(path: &str, base_url: &Url) -> Result<Url, SearchError> {
    if base_url.cannot_be_a_base() {
        return Err(SearchError::UrlConstruction(format!(
            "base URL `{base_url}` cannot carry a path"
        )));
    }

    let mut url = base_url.clone();
    if path.starts_with('/') {
        url.set_path(path);
    } else {
        url.set_path(&format!("/{path}"));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Format one document as a result item.
///
/// `arg`, `quicklookurl` and `text.copy` all hold the article URL;
/// `subtitle` and `text.largetype` hold the summary with leading and
/// trailing whitespace removed. Inner whitespace is left untouched.
///
/// # Errors
///
/// Returns [`SearchError::UrlConstruction`] if the article URL cannot be built.
pub fn format_document(document: &Document, base_url: &Url) -> Result<ResultItem, SearchError> {
    let article_url = String::from(build_article_url(&document.mdn_url, base_url)?);
    let subtitle = document.summary.trim().to_owned();

    Ok(ResultItem {
        title: document.title.clone(),
        arg: article_url.clone(),
        subtitle: subtitle.clone(),
        quicklookurl: article_url.clone(),
        text: ResultText {
            copy: article_url,
            largetype: subtitle,
        },
        item_type: ItemType::Default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DOC_BASE_URL;
    use crate::types::Highlight;

    fn base() -> Url {
        Url::parse(DOC_BASE_URL).expect("valid base")
    }

    fn make_document(mdn_url: &str, summary: &str) -> Document {
        Document {
            mdn_url: mdn_url.into(),
            score: 1.0,
            title: "Array".into(),
            locale: "ja".into(),
            slug: "Array".into(),
            popularity: 100.0,
            summary: summary.into(),
            highlight: Highlight {
                body: vec![summary.into()],
                title: vec!["Array".into()],
            },
        }
    }

    #[test]
    fn article_url_replaces_base_path() {
        let doc = make_document("/ja/docs/Web/JavaScript/Reference/Global_Objects/Array", "x");
        let item = format_document(&doc, &base()).expect("format");
        assert_eq!(
            item.arg,
            "https://developer.mozilla.org/ja/docs/Web/JavaScript/Reference/Global_Objects/Array"
        );
    }

    #[test]
    fn derived_fields_mirror_each_other() {
        let doc = make_document("/en-US/docs/Web/API/fetch", "\n  Starts fetching a resource.\t ");
        let item = format_document(&doc, &base()).expect("format");

        assert_eq!(item.arg, item.quicklookurl);
        assert_eq!(item.arg, item.text.copy);
        assert_eq!(item.subtitle, "Starts fetching a resource.");
        assert_eq!(item.subtitle, item.text.largetype);
        assert_eq!(item.title, "Array");
        assert_eq!(item.item_type, ItemType::Default);
    }

    #[test]
    fn inner_whitespace_is_preserved() {
        let doc = make_document("/en-US/docs/Web/CSS", "  CSS is\n\na  stylesheet language. ");
        let item = format_document(&doc, &base()).expect("format");
        assert_eq!(item.subtitle, "CSS is\n\na  stylesheet language.");
    }

    #[test]
    fn base_path_query_and_fragment_are_dropped() {
        let base = Url::parse("https://docs.example.com/old/path?x=1#top").expect("valid base");
        let url = build_article_url("/en-US/docs/Web", &base).expect("article url");
        assert_eq!(url.as_str(), "https://docs.example.com/en-US/docs/Web");
    }

    #[test]
    fn base_port_is_kept() {
        let base = Url::parse("http://127.0.0.1:8080").expect("valid base");
        let url = build_article_url("/en-US/docs/Glossary/HTTP", &base).expect("article url");
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/en-US/docs/Glossary/HTTP");
    }

    #[test]
    fn path_characters_are_percent_encoded() {
        let url =
            build_article_url("/en-US/docs/Web/CSS/:has selector", &base()).expect("article url");
        assert_eq!(
            url.as_str(),
            "https://developer.mozilla.org/en-US/docs/Web/CSS/:has%20selector"
        );
    }

    #[test]
    fn relative_path_gets_leading_slash() {
        let doc = make_document("en-US/docs/Web", "x");
        let item = format_document(&doc, &base()).expect("format");
        assert_eq!(item.arg, "https://developer.mozilla.org/en-US/docs/Web");
    }

    #[test]
    fn empty_path_resolves_to_site_root() {
        let url = build_article_url("", &base()).expect("article url");
        assert_eq!(url.as_str(), "https://developer.mozilla.org/");
    }

    #[test]
    fn cannot_be_a_base_url_is_rejected() {
        let base = Url::parse("mailto:docs@example.com").expect("valid url");
        let err = build_article_url("/en-US/docs/Web", &base).unwrap_err();
        assert!(err.to_string().contains("cannot carry a path"));
    }
}
