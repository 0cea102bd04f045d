//! Naming-convention classifier: the type-name suffix decides which
//! binding shape a message gets.

/// Binding shape of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// `*Req`: outgoing request with a `Pack` method.
    Request,
    /// `*Resp` / `*Push`: incoming payload with an `Unpack` wrapper and
    /// a paired data holder.
    Response,
    /// `*Data`: plain struct with bidirectional conversion.
    PlainData,
    /// No recognized suffix; contributes nothing to the output.
    Unclassified,
}

/// Pure function of the name; suffixes are checked in order.
///
/// `data_fallback` maps unsuffixed names to `PlainData`, for schemas
/// written without the `Data` convention.
pub fn classify(name: &str, data_fallback: bool) -> Classification {
    if name.ends_with("Req") {
        Classification::Request
    } else if name.ends_with("Resp") || name.ends_with("Push") {
        Classification::Response
    } else if name.ends_with("Data") || data_fallback {
        Classification::PlainData
    } else {
        Classification::Unclassified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("LoginReq", Classification::Request; "req suffix")]
    #[test_case("LoginResp", Classification::Response; "resp suffix")]
    #[test_case("KickPush", Classification::Response; "push suffix")]
    #[test_case("ItemData", Classification::PlainData; "data suffix")]
    #[test_case("Helper", Classification::Unclassified; "no suffix")]
    #[test_case("Request", Classification::Unclassified; "full word is not the suffix")]
    #[test_case("Req", Classification::Request; "bare suffix still matches")]
    fn test_classify(name: &str, expected: Classification) {
        assert_eq!(classify(name, false), expected);
    }

    #[test]
    fn test_data_fallback_only_affects_unsuffixed_names() {
        assert_eq!(classify("Helper", true), Classification::PlainData);
        assert_eq!(classify("LoginReq", true), Classification::Request);
    }

    #[test]
    fn test_classification_is_stable() {
        for name in ["LoginReq", "LoginResp", "ItemData", "Helper"] {
            assert_eq!(classify(name, false), classify(name, false));
        }
    }
}
