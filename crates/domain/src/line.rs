//! Parser for one line of upstream payload text.
//!
//! Each line follows `[TYPE [TTL]] DATA`. The leading type keyword is only
//! recognized when at least one further token follows it, and the TTL is
//! only consumed when the payload would not become empty by doing so, so a
//! line like `A 300` still answers with the literal payload `300`.

/// DNS type mnemonics recognized at the start of a line, sorted for binary
/// search. Recognition is broader than the three answerable types so that
/// a backend serving mixed output (say, an `MX` line) does not leak that
/// line into a TXT answer as free text.
const TYPE_KEYWORDS: &[&str] = &[
    "A", "AAAA", "AFSDB", "ANY", "APL", "AXFR", "CAA", "CDNSKEY", "CDS", "CERT", "CNAME", "CSYNC",
    "DHCID", "DLV", "DNAME", "DNSKEY", "DS", "EUI48", "EUI64", "HINFO", "HIP", "HTTPS", "IPSECKEY",
    "IXFR", "KEY", "KX", "LOC", "MX", "NAPTR", "NS", "NSEC", "NSEC3", "NSEC3PARAM", "NULL",
    "OPENPGPKEY", "OPT", "PTR", "RP", "RRSIG", "SIG", "SMIMEA", "SOA", "SRV", "SSHFP", "SVCB",
    "TA", "TKEY", "TLSA", "TSIG", "TXT", "URI", "ZONEMD",
];

/// True when `token` is a DNS type mnemonic, regardless of case.
pub fn is_type_keyword(token: &str) -> bool {
    TYPE_KEYWORDS
        .binary_search(&token.to_ascii_uppercase().as_str())
        .is_ok()
}

/// One parsed line of upstream response text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    /// Recognized leading type keyword, uppercased.
    pub explicit_type: Option<String>,
    /// Per-line TTL override in seconds.
    pub explicit_ttl: Option<u32>,
    /// Record data, verbatim for untyped lines.
    pub payload: String,
}

impl RecordLine {
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() < 2 || !is_type_keyword(tokens[0]) {
            // Not a typed line: the whole line, untouched, is the payload.
            return Self {
                explicit_type: None,
                explicit_ttl: None,
                payload: line.to_owned(),
            };
        }

        let explicit_type = Some(tokens[0].to_ascii_uppercase());
        let mut rest = &tokens[1..];
        let mut explicit_ttl = None;

        if rest.len() >= 2 {
            if let Ok(ttl) = rest[0].parse::<u32>() {
                explicit_ttl = Some(ttl);
                rest = &rest[1..];
            }
        }

        Self {
            explicit_type,
            explicit_ttl,
            payload: rest.join(" "),
        }
    }

    /// True when the line is untyped or explicitly typed `keyword`.
    pub fn accepts_type(&self, keyword: &str) -> bool {
        match self.explicit_type.as_deref() {
            None => true,
            Some(explicit) => explicit == keyword,
        }
    }
}

/// Split a whole response body into parsed lines, skipping blank ones.
pub fn split_lines(body: &str) -> Vec<RecordLine> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(RecordLine::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untyped_line_is_verbatim_payload() {
        let line = RecordLine::parse("Hello world");
        assert_eq!(line.explicit_type, None);
        assert_eq!(line.explicit_ttl, None);
        assert_eq!(line.payload, "Hello world");
    }

    #[test]
    fn test_typed_line() {
        let line = RecordLine::parse("A 1.2.3.4");
        assert_eq!(line.explicit_type.as_deref(), Some("A"));
        assert_eq!(line.explicit_ttl, None);
        assert_eq!(line.payload, "1.2.3.4");
    }

    #[test]
    fn test_typed_line_with_ttl() {
        let line = RecordLine::parse("AAAA 1800 ::1");
        assert_eq!(line.explicit_type.as_deref(), Some("AAAA"));
        assert_eq!(line.explicit_ttl, Some(1800));
        assert_eq!(line.payload, "::1");
    }

    #[test]
    fn test_type_keyword_is_case_insensitive() {
        let line = RecordLine::parse("txt 60 hello");
        assert_eq!(line.explicit_type.as_deref(), Some("TXT"));
        assert_eq!(line.explicit_ttl, Some(60));
        assert_eq!(line.payload, "hello");
    }

    #[test]
    fn test_type_keyword_without_data_is_payload() {
        // A bare keyword has nothing following it, so it cannot be a type.
        let line = RecordLine::parse("TXT");
        assert_eq!(line.explicit_type, None);
        assert_eq!(line.payload, "TXT");
    }

    #[test]
    fn test_ttl_is_not_consumed_when_it_is_the_only_data() {
        // `A 300` keeps `300` as the payload rather than eating it as a TTL.
        let line = RecordLine::parse("A 300");
        assert_eq!(line.explicit_type.as_deref(), Some("A"));
        assert_eq!(line.explicit_ttl, None);
        assert_eq!(line.payload, "300");
    }

    #[test]
    fn test_non_numeric_second_token_stays_in_payload() {
        let line = RecordLine::parse("TXT hello world");
        assert_eq!(line.explicit_type.as_deref(), Some("TXT"));
        assert_eq!(line.explicit_ttl, None);
        assert_eq!(line.payload, "hello world");
    }

    #[test]
    fn test_negative_ttl_stays_in_payload() {
        let line = RecordLine::parse("TXT -5 hello");
        assert_eq!(line.explicit_ttl, None);
        assert_eq!(line.payload, "-5 hello");
    }

    #[test]
    fn test_unrelated_type_keyword_is_still_recognized() {
        let line = RecordLine::parse("MX 10 mail.example.com.");
        assert_eq!(line.explicit_type.as_deref(), Some("MX"));
        assert_eq!(line.explicit_ttl, Some(10));
        assert!(!line.accepts_type("TXT"));
    }

    #[test]
    fn test_payload_whitespace_is_collapsed_on_typed_lines() {
        let line = RecordLine::parse("TXT   spaced   out");
        assert_eq!(line.payload, "spaced out");
    }

    #[test]
    fn test_split_lines_skips_blanks() {
        let lines = split_lines("1.2.3.4\n\n   \n::1\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].payload, "1.2.3.4");
        assert_eq!(lines[1].payload, "::1");
    }

    #[test]
    fn test_split_lines_empty_body() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n\n").is_empty());
    }

    #[test]
    fn test_type_keywords_are_sorted() {
        let mut sorted = TYPE_KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, TYPE_KEYWORDS);
    }
}
