//! Hstore text parser
//!
//! Reads the PostgreSQL hstore text representation in one left-to-right
//! pass. The parser is lenient: it never rejects input, malformed sequences
//! are absorbed into the key or value being read.

use crate::errors::HstoreError;
use crate::hstore::Hstore;
use crate::types::PostgresValue;

/// Which half of the current pair bytes are appended to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Key,
    Value,
}

/// Parser mode flags, reset for every pair
#[derive(Debug)]
struct ScanState {
    escaping: bool,
    inside_quote: bool,
    /// Set when a quoted segment closes; an unquoted `NULL` value means SQL NULL
    last_quoted: bool,
    slot: Slot,
}

impl ScanState {
    fn new() -> Self {
        Self {
            escaping: false,
            inside_quote: false,
            last_quoted: false,
            slot: Slot::Key,
        }
    }
}

/// Key and value accumulated for the pair being read
#[derive(Debug, Default)]
struct PairBuffer {
    key: Vec<u8>,
    value: Vec<u8>,
}

impl PairBuffer {
    fn push(&mut self, slot: Slot, byte: u8) {
        match slot {
            Slot::Key => self.key.push(byte),
            Slot::Value => self.value.push(byte),
        }
    }
}

fn is_noise(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'=')
}

/// Store the buffered pair into `target` and start a new one
fn commit(target: &mut Hstore, buffer: &mut PairBuffer, state: &mut ScanState) {
    let pair = std::mem::take(buffer);
    let slot = state.slot;
    let last_quoted = state.last_quoted;
    state.slot = Slot::Key;

    // Blank input and trailing commas leave nothing behind
    if pair.key.is_empty() && pair.value.is_empty() && slot == Slot::Key {
        return;
    }

    let key = String::from_utf8_lossy(&pair.key).into_owned();
    let value = String::from_utf8_lossy(&pair.value).into_owned();

    if !last_quoted && value.eq_ignore_ascii_case("NULL") {
        trace_log!("hstore pair committed: {:?} => NULL", key);
        target.set(key, None);
    } else {
        trace_log!("hstore pair committed: {:?} => {:?}", key, value);
        target.set(key, Some(value));
    }
}

/// Parse `input` and merge the pairs found into `target`
fn scan_into(target: &mut Hstore, input: &[u8]) {
    let input = input.trim_ascii();
    if input.is_empty() {
        return;
    }

    let mut state = ScanState::new();
    let mut buffer = PairBuffer::default();

    for &byte in input {
        if state.escaping {
            state.escaping = false;
            buffer.push(state.slot, byte);
            continue;
        }

        match byte {
            b'\\' => state.escaping = true,
            b'"' => {
                state.inside_quote = !state.inside_quote;
                if !state.inside_quote {
                    state.last_quoted = true;
                }
            }
            _ if state.inside_quote => buffer.push(state.slot, byte),
            _ if is_noise(byte) => {}
            b'>' => {
                // A second `>` in the same pair keeps reading the value
                state.slot = Slot::Value;
                state.last_quoted = false;
            }
            b',' => commit(target, &mut buffer, &mut state),
            _ => buffer.push(state.slot, byte),
        }
    }

    commit(target, &mut buffer, &mut state);
}

/// Parse hstore text into a new `Hstore`
pub fn parse_text(input: impl AsRef<[u8]>) -> Hstore {
    let mut hstore = Hstore::new();
    scan_into(&mut hstore, input.as_ref());
    hstore
}

impl Hstore {
    /// Parse hstore text, merging the pairs into this hstore
    pub fn scan_text(&mut self, input: &str) {
        scan_into(self, input.as_bytes());
    }

    pub fn scan_bytes(&mut self, input: &[u8]) {
        scan_into(self, input);
    }

    /// Read a raw driver value into this hstore.
    ///
    /// `Null` leaves the hstore untouched, text and bytes are parsed and
    /// merged in, an already decoded hstore is merged as is. Any other value
    /// is the wrong column type.
    pub fn scan(&mut self, value: &PostgresValue) -> Result<(), HstoreError> {
        match value {
            PostgresValue::Null => Ok(()),
            PostgresValue::Hstore(other) => {
                self.merge(other.clone());
                Ok(())
            }
            PostgresValue::Text(text) => {
                self.scan_text(text);
                Ok(())
            }
            PostgresValue::Bytes(bytes) => {
                self.scan_bytes(bytes);
                Ok(())
            }
            other => Err(HstoreError::InvalidInputType(other.type_name().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Inputs from PostgreSQL's contrib/hstore regression suite
    const POSTGRES_FIXTURES: &str = r#"

a=>b
 a=>b
a =>b
a=>b
a=> b
"a"=>"b"
 "a"=>"b"
"a" =>"b"
"a"=>"b"
"a"=> "b"
aa=>bb
 aa=>bb
aa =>bb
aa=>bb
aa=> bb
"aa"=>"bb"
 "aa"=>"bb"
"aa" =>"bb"
"aa"=>"bb"
"aa"=> "bb"
aa=>bb, cc=>dd
aa=>bb , cc=>dd
aa=>bb ,cc=>dd
aa=>bb, "cc"=>dd
aa=>bb , "cc"=>dd
aa=>bb ,"cc"=>dd
aa=>"bb", cc=>dd
aa=>"bb" , cc=>dd
aa=>"bb" ,cc=>dd
aa=>null
aa=>NuLl
aa=>"NuLl"
\\=a=>q=w
"=a"=>q\\=w
"\\"a"=>q>w
\\"a=>q"w


"#;

    fn single(key: &str, value: &str) -> Hstore {
        Hstore::from_map([(key, value)])
    }

    #[test]
    fn test_every_fixture_line_scans() {
        for line in POSTGRES_FIXTURES.split('\n') {
            let mut hs = Hstore::new();
            assert!(hs.scan(&PostgresValue::from(line)).is_ok(), "line {:?}", line);
        }
    }

    #[test]
    fn test_whitespace_insensitive() {
        for input in ["a=>b", " a=>b", "a =>b", "a=> b", "a=>b ", r#""a"=>"b""#, r#" "a"=>"b""#, r#""a" =>"b""#, r#""a"=> "b""#] {
            assert_eq!(parse_text(input), single("a", "b"), "input {:?}", input);
        }
        for input in ["aa=>bb", " aa=>bb", "aa =>bb", "aa=> bb", r#""aa"=>"bb""#, r#""aa"=>"bb" "#] {
            assert_eq!(parse_text(input), single("aa", "bb"), "input {:?}", input);
        }
    }

    #[test]
    fn test_multiple_pairs_with_mixed_quoting() {
        let expected = Hstore::from_map([("aa", "bb"), ("cc", "dd")]);
        for input in [
            "aa=>bb, cc=>dd",
            "aa=>bb , cc=>dd",
            "aa=>bb ,cc=>dd",
            r#"aa=>bb, "cc"=>dd"#,
            r#"aa=>bb , "cc"=>dd"#,
            r#"aa=>bb ,"cc"=>dd"#,
            r#"aa=>"bb", cc=>dd"#,
            r#"aa=>"bb" , cc=>dd"#,
            r#"aa=>"bb" ,cc=>dd"#,
        ] {
            assert_eq!(parse_text(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_unquoted_null_is_sql_null() {
        for input in ["aa=>null", "aa=>NuLl", "aa=>NULL"] {
            let hs = parse_text(input);
            assert_eq!(hs.len(), 1);
            assert_eq!(hs.entry_of("aa"), Some(None), "input {:?}", input);
        }
    }

    #[test]
    fn test_quoted_null_is_text() {
        assert_eq!(parse_text(r#"aa=>"NuLl""#), single("aa", "NuLl"));
        // A quoted key does not protect the unquoted value
        assert_eq!(parse_text(r#""aa"=>NULL"#).entry_of("aa"), Some(None));
    }

    #[test]
    fn test_blank_input_is_empty() {
        for input in ["", " ", "\t", "\n\r\t ", ","] {
            assert!(parse_text(input).is_empty(), "input {:?}", input);
        }
    }

    #[test]
    fn test_trailing_comma_adds_nothing() {
        assert_eq!(parse_text("a=>b,"), single("a", "b"));
    }

    #[test]
    fn test_empty_key_and_value_survive_when_quoted() {
        assert_eq!(parse_text(r#"""=>"x""#), single("", "x"));
        assert_eq!(parse_text(r#""k"=>"""#), single("k", ""));
    }

    #[test]
    fn test_backslash_escapes() {
        assert_eq!(parse_text(r"\\=a=>q=w"), single(r"\a", "qw"));
        assert_eq!(parse_text(r#""=a"=>q\\=w"#), single("=a", r"q\w"));
        assert_eq!(parse_text(r#"\\"a=>q"w"#), single(r"\a=>qw", ""));
        assert_eq!(parse_text(r#""a\"b"=>"c\\d""#), single(r#"a"b"#, r"c\d"));
        assert_eq!(parse_text(r"a\,b=>c"), single("a,b", "c"));
    }

    #[test]
    fn test_unterminated_quote_swallows_the_rest() {
        assert_eq!(parse_text(r#""\\"a"=>q>w"#), single(r"\a=>q>w", ""));
    }

    #[test]
    fn test_lenient_separators() {
        assert_eq!(parse_text("a>b"), single("a", "b"));
        assert_eq!(parse_text("a=>b=>c"), single("a", "bc"));
    }

    #[test]
    fn test_last_duplicate_key_wins() {
        assert_eq!(parse_text("a=>1, a=>2"), single("a", "2"));
    }

    #[test]
    fn test_scan_merges_into_existing() {
        let mut hs = Hstore::from_map([("keep", "me")]);
        hs.scan(&PostgresValue::from("a=>b")).unwrap();
        assert_eq!(hs, Hstore::from_map([("keep", "me"), ("a", "b")]));
    }

    #[test]
    fn test_scan_null_leaves_target_untouched() {
        let mut hs = Hstore::from_map([("keep", "me")]);
        hs.scan(&PostgresValue::Null).unwrap();
        assert_eq!(hs, Hstore::from_map([("keep", "me")]));

        let mut empty = Hstore::new();
        empty.scan(&PostgresValue::Null).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_scan_bytes() {
        let mut hs = Hstore::new();
        hs.scan(&PostgresValue::from(b"\"a\"=>\"b\"".as_slice())).unwrap();
        assert_eq!(hs, single("a", "b"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut hs = Hstore::new();
        hs.scan(&PostgresValue::from(b"a=>\xff\xfe".as_slice())).unwrap();
        assert_eq!(hs, single("a", "\u{FFFD}\u{FFFD}"));

        let mut hs = Hstore::new();
        hs.scan_bytes(b"\"k\x80ey\"=>\"v\", b=>\xc3");
        assert_eq!(
            hs,
            Hstore::from_map([("k\u{FFFD}ey", "v"), ("b", "\u{FFFD}")])
        );
    }

    #[test]
    fn test_any_byte_sequence_parses() {
        let inputs: [&[u8]; 6] = [
            b"\xff",
            b"\"\xff",
            b"\\",
            b"=>=>=>",
            b",,\x00,\"",
            b"\xf0\x9f\x98=>\"\\\xe2\x82\"",
        ];
        for input in inputs {
            let mut hs = Hstore::new();
            assert!(hs.scan(&PostgresValue::from(input)).is_ok());
        }

        let all_bytes: Vec<u8> = (0..=255u8).collect();
        let mut hs = Hstore::new();
        assert!(hs.scan(&PostgresValue::Bytes(all_bytes)).is_ok());
    }

    #[test]
    fn test_scan_merges_decoded_hstore() {
        let mut hs = Hstore::from_map([("keep", "me"), ("a", "old")]);
        let mut decoded = Hstore::from_map([("a", "new")]);
        decoded.set("gone", None);
        hs.scan(&PostgresValue::Hstore(decoded)).unwrap();

        let mut expected = Hstore::from_map([("keep", "me"), ("a", "new")]);
        expected.set("gone", None);
        assert_eq!(hs, expected);
    }

    #[test]
    fn test_scan_rejects_other_types() {
        let mut hs = Hstore::new();
        let err = hs.scan(&PostgresValue::Integer(42)).unwrap_err();
        assert!(matches!(err, HstoreError::InvalidInputType(ref t) if t == "integer"));
        assert_eq!(err.to_string(), "invalid input type: integer");
        assert!(hs.is_empty());
    }

    #[test]
    fn test_serialized_text_parses_back() {
        let mut original = Hstore::from_map([
            ("k1", "v1"),
            ("NOT NULL", "NULL"),
            ("a'a", "b'b"),
            (r#""a""#, r#""b""#),
            ("tes t", "test test"),
            ("hs", "a=>b"),
            ("hs2", r#""a"=>b""#),
            ("a\tb", "\nabc\t"),
            ("back\\slash", "\\"),
            ("empty", ""),
        ]);
        original.set("NULL", None);

        let text = original.to_text();
        assert_eq!(parse_text(&text), original);
        // Parsing canonical text again changes nothing
        assert_eq!(parse_text(parse_text(&text).to_text()), original);
    }
}
