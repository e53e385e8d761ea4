//! Structural validation of search API responses.
//!
//! [`validate`] walks a parsed JSON value and either returns a typed
//! [`SearchResponse`] or a [`SchemaError`] listing every violation found.
//! Types are checked exactly: numeric-looking strings are not numbers and
//! numbers are not strings. Unknown fields are ignored.

use crate::error::{SchemaError, Violation};
use crate::types::{Document, Highlight, SearchResponse};
use serde_json::{Map, Value};

/// Validate a parsed response body.
///
/// # Errors
///
/// Returns [`SchemaError`] with one [`Violation`] per missing or mistyped
/// value. A single violation anywhere rejects the whole response.
pub fn validate(json: &Value) -> Result<SearchResponse, SchemaError> {
    let mut checker = Checker::default();
    match checker.search_response(json) {
        Some(response) if checker.violations.is_empty() => Ok(response),
        _ => Err(SchemaError::new(checker.violations)),
    }
}

/// Collects violations while building typed values.
///
/// Each method returns `None` when its value is invalid; the violation has
/// already been recorded by then.
#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn search_response(&mut self, value: &Value) -> Option<SearchResponse> {
        let obj = self.object("", value)?;
        let documents = self.array(obj, "", "documents", |c, path, item| c.document(&path, item))?;
        Some(SearchResponse { documents })
    }

    fn document(&mut self, path: &str, value: &Value) -> Option<Document> {
        let obj = self.object(path, value)?;

        // Check every field before combining so all violations are recorded.
        let mdn_url = self.string(obj, path, "mdn_url");
        let score = self.number(obj, path, "score");
        let title = self.string(obj, path, "title");
        let locale = self.string(obj, path, "locale");
        let slug = self.string(obj, path, "slug");
        let popularity = self.number(obj, path, "popularity");
        let summary = self.string(obj, path, "summary");
        let highlight = self.field(obj, path, "highlight", "object", |c, path, v| {
            c.highlight(&path, v)
        });

        Some(Document {
            mdn_url: mdn_url?,
            score: score?,
            title: title?,
            locale: locale?,
            slug: slug?,
            popularity: popularity?,
            summary: summary?,
            highlight: highlight?,
        })
    }

    fn highlight(&mut self, path: &str, value: &Value) -> Option<Highlight> {
        let obj = self.object(path, value)?;
        let body = self.string_array(obj, path, "body");
        let title = self.string_array(obj, path, "title");
        Some(Highlight {
            body: body?,
            title: title?,
        })
    }

    fn object<'v>(&mut self, path: &str, value: &'v Value) -> Option<&'v Map<String, Value>> {
        match value {
            Value::Object(obj) => Some(obj),
            other => {
                self.mismatch(path, "object", type_name(other));
                None
            }
        }
    }

    /// Look up `key` and run `check` on it, recording a `missing` violation
    /// when the key is absent.
    fn field<T>(
        &mut self,
        obj: &Map<String, Value>,
        parent: &str,
        key: &str,
        expected: &str,
        check: impl FnOnce(&mut Self, String, &Value) -> Option<T>,
    ) -> Option<T> {
        let path = join(parent, key);
        match obj.get(key) {
            Some(value) => check(self, path, value),
            None => {
                self.mismatch(&path, expected, "missing");
                None
            }
        }
    }

    fn string(&mut self, obj: &Map<String, Value>, parent: &str, key: &str) -> Option<String> {
        self.field(obj, parent, key, "string", |c, path, value| c.string_value(&path, value))
    }

    fn number(&mut self, obj: &Map<String, Value>, parent: &str, key: &str) -> Option<f64> {
        self.field(obj, parent, key, "number", |c, path, value| {
            let number = match value {
                Value::Number(n) => n.as_f64(),
                _ => None,
            };
            if number.is_none() {
                c.mismatch(&path, "number", type_name(value));
            }
            number
        })
    }

    fn string_array(
        &mut self,
        obj: &Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<Vec<String>> {
        self.array(obj, parent, key, |c, path, item| c.string_value(&path, item))
    }

    fn string_value(&mut self, path: &str, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.mismatch(path, "string", type_name(other));
                None
            }
        }
    }

    /// Validate `key` as an array, checking every element with `item`.
    fn array<T>(
        &mut self,
        obj: &Map<String, Value>,
        parent: &str,
        key: &str,
        mut item: impl FnMut(&mut Self, String, &Value) -> Option<T>,
    ) -> Option<Vec<T>> {
        self.field(obj, parent, key, "array", |c, path, value| {
            let Value::Array(elements) = value else {
                c.mismatch(&path, "array", type_name(value));
                return None;
            };
            let mut out = Vec::with_capacity(elements.len());
            let mut ok = true;
            for (index, element) in elements.iter().enumerate() {
                match item(c, format!("{path}[{index}]"), element) {
                    Some(v) => out.push(v),
                    None => ok = false,
                }
            }
            ok.then_some(out)
        })
    }

    fn mismatch(&mut self, path: &str, expected: &str, found: &str) {
        self.violations.push(Violation {
            path: path.to_owned(),
            expected: expected.to_owned(),
            found: found.to_owned(),
        });
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document_json() -> Value {
        json!({
            "mdn_url": "/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array",
            "score": 41.5,
            "title": "Array",
            "locale": "en-US",
            "slug": "Web/JavaScript/Reference/Global_Objects/Array",
            "popularity": 0.98,
            "summary": "  The Array object enables storing a collection of items.  ",
            "highlight": {
                "body": ["The <mark>Array</mark> object"],
                "title": ["<mark>Array</mark>"],
            },
        })
    }

    fn paths(err: &SchemaError) -> Vec<&str> {
        err.violations().iter().map(|v| v.path.as_str()).collect()
    }

    #[test]
    fn valid_response_is_accepted() {
        let json = json!({ "documents": [document_json()] });
        let response = validate(&json).expect("valid response");
        assert_eq!(response.documents.len(), 1);

        let doc = &response.documents[0];
        assert_eq!(doc.mdn_url, "/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array");
        assert_eq!(doc.title, "Array");
        assert!((doc.score - 41.5).abs() < f64::EPSILON);
        assert!((doc.popularity - 0.98).abs() < f64::EPSILON);
        assert_eq!(doc.highlight.title, ["<mark>Array</mark>"]);
    }

    #[test]
    fn empty_documents_is_valid() {
        let response = validate(&json!({ "documents": [] })).expect("valid response");
        assert!(response.documents.is_empty());
    }

    #[test]
    fn integer_numbers_are_accepted() {
        let mut doc = document_json();
        doc["score"] = json!(1);
        doc["popularity"] = json!(100);
        let response = validate(&json!({ "documents": [doc] })).expect("valid response");
        assert!((response.documents[0].popularity - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut doc = document_json();
        doc["archived"] = json!(false);
        let json = json!({
            "documents": [doc],
            "metadata": { "took_ms": 12, "total": { "value": 1 } },
            "suggestions": [],
        });
        assert!(validate(&json).is_ok());
    }

    #[test]
    fn number_in_string_field_is_rejected() {
        let mut doc = document_json();
        doc["mdn_url"] = json!(99);
        let err = validate(&json!({ "documents": [doc] })).unwrap_err();
        assert_eq!(
            err.violations(),
            [Violation {
                path: "documents[0].mdn_url".into(),
                expected: "string".into(),
                found: "number".into(),
            }]
        );
    }

    #[test]
    fn numeric_string_is_not_coerced() {
        let mut doc = document_json();
        doc["score"] = json!("41.5");
        let err = validate(&json!({ "documents": [doc] })).unwrap_err();
        assert_eq!(err.violations()[0].path, "documents[0].score");
        assert_eq!(err.violations()[0].expected, "number");
        assert_eq!(err.violations()[0].found, "string");
    }

    #[test]
    fn every_violation_is_reported() {
        let mut first = document_json();
        first["title"] = Value::Null;
        first.as_object_mut().expect("object").remove("slug");
        let mut second = document_json();
        second["highlight"]["body"] = json!(["ok", 7]);
        second["highlight"]["title"] = json!("Array");

        let err = validate(&json!({ "documents": [first, second] })).unwrap_err();
        assert_eq!(
            paths(&err),
            [
                "documents[0].title",
                "documents[0].slug",
                "documents[1].highlight.body[1]",
                "documents[1].highlight.title",
            ]
        );
        assert_eq!(err.violations()[1].found, "missing");
        assert_eq!(err.violations()[2].expected, "string");
        assert_eq!(err.violations()[3].expected, "array");
    }

    #[test]
    fn one_bad_document_rejects_the_whole_response() {
        let mut bad = document_json();
        bad["popularity"] = json!(true);
        let json = json!({ "documents": [document_json(), bad, document_json()] });
        let err = validate(&json).unwrap_err();
        assert_eq!(paths(&err), ["documents[1].popularity"]);
    }

    #[test]
    fn missing_documents_field() {
        let err = validate(&json!({ "results": [] })).unwrap_err();
        assert_eq!(
            err.violations(),
            [Violation {
                path: "documents".into(),
                expected: "array".into(),
                found: "missing".into(),
            }]
        );
    }

    #[test]
    fn documents_must_be_an_array() {
        let err = validate(&json!({ "documents": { "0": document_json() } })).unwrap_err();
        assert_eq!(err.violations()[0].path, "documents");
        assert_eq!(err.violations()[0].found, "object");
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = validate(&json!([document_json()])).unwrap_err();
        assert_eq!(
            err.violations(),
            [Violation {
                path: String::new(),
                expected: "object".into(),
                found: "array".into(),
            }]
        );
    }

    #[test]
    fn non_object_document_is_rejected() {
        let err = validate(&json!({ "documents": ["Array"] })).unwrap_err();
        assert_eq!(paths(&err), ["documents[0]"]);
        assert_eq!(err.violations()[0].expected, "object");
    }

    #[test]
    fn missing_highlight_reports_object() {
        let mut doc = document_json();
        doc.as_object_mut().expect("object").remove("highlight");
        let err = validate(&json!({ "documents": [doc] })).unwrap_err();
        assert_eq!(err.violations()[0].path, "documents[0].highlight");
        assert_eq!(err.violations()[0].expected, "object");
    }
}
