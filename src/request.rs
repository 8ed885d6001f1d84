use crate::{ConversionDirection, convert};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// File name used when the input did not come from a named file.
pub const DEFAULT_FILENAME: &str = "converted.net";

/// Input of one conversion: the text, the direction, and (optionally) the name of the
/// file the text was read from.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionRequest {
    pub text: String,
    pub direction: ConversionDirection,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Result of one conversion, together with the file name suggested for saving it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResponse {
    pub text: String,
    pub suggested_filename: String,
}

impl ConversionRequest {
    #[must_use]
    pub fn new(text: impl Into<String>, direction: ConversionDirection) -> Self {
        ConversionRequest {
            text: text.into(),
            direction,
            filename: None,
        }
    }

    /// Attach the name of the input file.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Run the conversion and compute the suggested output file name.
    #[must_use]
    pub fn run(&self) -> ConversionResponse {
        ConversionResponse {
            text: convert(&self.text, self.direction),
            suggested_filename: suggested_filename(self.direction, self.filename.as_deref()),
        }
    }
}

impl ConversionResponse {
    /// An empty result is not worth saving.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Convert the response into a JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Same as [`ConversionResponse::to_json_string`], but using a human-readable formatting.
    pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Output file name for the given direction: the direction prefix followed by the input file
/// name, or by [`DEFAULT_FILENAME`] if there is no (non-blank) input file name.
#[must_use]
pub fn suggested_filename(direction: ConversionDirection, input_filename: Option<&str>) -> String {
    let name = input_filename
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_FILENAME);
    format!("{}{}", direction.file_prefix(), name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConversionDirection::{HuginToOlca, OlcaToHugin};

    #[test]
    fn test_suggested_filename() {
        assert_eq!(
            suggested_filename(OlcaToHugin, Some("model.net")),
            "OLCA2Hugin-model.net"
        );
        assert_eq!(
            suggested_filename(HuginToOlca, Some("model.net")),
            "Hugin2OLCA-model.net"
        );
        assert_eq!(suggested_filename(OlcaToHugin, None), "OLCA2Hugin-converted.net");
        assert_eq!(suggested_filename(HuginToOlca, Some("  ")), "Hugin2OLCA-converted.net");
    }

    #[test]
    fn test_run_request() {
        let request = ConversionRequest::new("node A {\n  states(a b);\n}", HuginToOlca)
            .with_filename("a.net");
        let response = request.run();
        assert_eq!(
            response.text,
            "File generated in OLCATool\n\nnode A {\n  states(a, b);\n}"
        );
        assert_eq!(response.suggested_filename, "Hugin2OLCA-a.net");
        assert!(!response.is_empty());

        let response = ConversionRequest::new("\n\n", OlcaToHugin).run();
        assert!(response.is_empty());
        assert_eq!(response.suggested_filename, "OLCA2Hugin-converted.net");
    }

    #[test]
    fn test_request_serde() {
        let request = ConversionRequest::new("x | )", OlcaToHugin);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"text":"x | )","direction":"olca-to-hugin"}"#);

        let parsed: ConversionRequest =
            serde_json::from_str(r#"{"text":"x","direction":"hugin-to-olca","filename":"b.net"}"#)
                .unwrap();
        assert_eq!(
            parsed,
            ConversionRequest::new("x", HuginToOlca).with_filename("b.net")
        );
    }

    #[test]
    fn test_response_json() {
        let response = ConversionRequest::new("x | )", OlcaToHugin).run();
        let json = response.to_json_string().unwrap();
        assert_eq!(
            json,
            r#"{"text":"x |)","suggested_filename":"OLCA2Hugin-converted.net"}"#
        );
        let parsed: ConversionResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
