use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Iter;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::debug;

use crate::error::{MorilleError, MorilleResult};
use crate::{RESULT_CODE, RETURN_CODE, SUCCESS};

/// Fixed name of the wrapping element. The gateway expects every payload
/// under an `<xml>` root, whatever the caller would otherwise name it.
const WRAPPER_TAG: &str = "xml";

/// # Params
///
/// ## Description
///
/// This struct is the flat string map every gateway request and response
/// is made of. Every value is stored as a string, integers as their
/// base 10 representation. The map iterates in lexicographic key order
/// so the marshalled output is reproducible.
///
/// ## Example
///
/// ```rust
/// use morille::prelude::Params;
/// let params = Params::new()
///     .set_string("body", "test order")
///     .set_int64("total_fee", 888);
/// assert_eq!(params.get_string("body"), "test order");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// # new
    ///
    /// ## Description
    ///
    /// Create a new Params empty map
    ///
    /// ## Example
    ///
    /// ```rust
    /// use morille::prelude::Params;
    /// let params = Params::new();
    /// ```
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }
    /// # set_string
    ///
    /// ## Description
    ///
    /// Insert or overwrite the value stored under `key`, and give the map
    /// back so calls can be chained.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use morille::prelude::Params;
    /// let params = Params::new().set_string("body", "test order");
    /// ```
    pub fn set_string(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }
    /// # get_string
    ///
    /// ## Description
    ///
    /// Return the value stored under `key`, or the empty string when the
    /// key is absent. This accessor never fails.
    pub fn get_string(&self, key: &str) -> String {
        self.0.get(key).cloned().unwrap_or_default()
    }
    /// # set_int64
    ///
    /// ## Description
    ///
    /// Store the base 10 representation of `value` under `key`, and give
    /// the map back so calls can be chained.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use morille::prelude::Params;
    /// let params = Params::new().set_int64("total_fee", 888);
    /// assert_eq!(params.get_string("total_fee"), "888");
    /// ```
    pub fn set_int64(mut self, key: &str, value: i64) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }
    /// # get_int64
    ///
    /// ## Description
    ///
    /// Parse the value stored under `key` as a signed 64 bit integer.
    /// Absent keys and values that do not parse degrade to `0`, callers
    /// rely on the default instead of an error.
    pub fn get_int64(&self, key: &str) -> i64 {
        self.get_string(key).parse::<i64>().unwrap_or(0)
    }
    // true when the key is present, whatever the value holds
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
    /// # is_success
    ///
    /// ## Description
    ///
    /// Check whether a gateway response reports success: both
    /// `return_code` and `result_code` must be present and equal to
    /// [`SUCCESS`](crate::SUCCESS). Read only, no field is touched.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use morille::prelude::*;
    /// let response = Params::new()
    ///     .set_string("return_code", SUCCESS)
    ///     .set_string("result_code", SUCCESS);
    /// assert!(response.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        self.get_string(RETURN_CODE) == SUCCESS && self.get_string(RESULT_CODE) == SUCCESS
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }
    /// # write_xml
    ///
    /// ## Description
    ///
    /// Marshal the map onto a caller supplied [`quick_xml::Writer`]: a
    /// `<xml>` wrapping element holding one child element per entry, the
    /// tag named after the key and the text holding the value. An empty
    /// map writes nothing at all, not even an empty `<xml/>`.
    pub fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> MorilleResult<()> {
        if self.0.is_empty() {
            return Ok(());
        }
        writer.write_event(Event::Start(BytesStart::new(WRAPPER_TAG)))?;
        for (key, value) in &self.0 {
            writer.write_event(Event::Start(BytesStart::new(key.as_str())))?;
            writer.write_event(Event::Text(BytesText::new(value)))?;
            writer.write_event(Event::End(BytesEnd::new(key.as_str())))?;
        }
        writer.write_event(Event::End(BytesEnd::new(WRAPPER_TAG)))?;
        Ok(())
    }
    /// # to_xml
    ///
    /// ## Description
    ///
    /// Marshal the map to an in memory string, see
    /// [`write_xml`](Params::write_xml).
    ///
    /// ## Example
    ///
    /// ```rust
    /// use morille::prelude::Params;
    /// let params = Params::new().set_string("body", "test order");
    /// assert_eq!(params.to_xml().unwrap(), "<xml><body>test order</body></xml>");
    /// ```
    pub fn to_xml(&self) -> MorilleResult<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_xml(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
    /// # from_xml
    ///
    /// ## Description
    ///
    /// Unmarshal a gateway payload into a fresh map. The wrapping element
    /// name is ignored, each child element becomes one entry with the tag
    /// as key and the text or CDATA content as value. A repeated key
    /// keeps the last value. Empty input decodes to an empty map, a
    /// document cut off before its closing tags is a decode error.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use morille::prelude::Params;
    /// let body = "<xml><return_code><![CDATA[SUCCESS]]></return_code></xml>";
    /// let response = Params::from_xml(body).unwrap();
    /// assert_eq!(response.get_string("return_code"), "SUCCESS");
    /// ```
    pub fn from_xml(input: &str) -> MorilleResult<Params> {
        let mut reader = Reader::from_str(input);
        let mut params = Params::new();
        // Seek the wrapping element, empty input decodes to an empty map.
        loop {
            match reader.read_event()? {
                Event::Start(_) => break,
                Event::Eof => return Ok(params),
                _ => {}
            }
        }
        loop {
            match reader.read_event()? {
                Event::Start(child) => {
                    let key = String::from_utf8_lossy(child.name().as_ref()).into_owned();
                    let value = read_element_text(&mut reader, &key)?;
                    params.0.insert(key, value);
                }
                Event::Empty(child) => {
                    let key = String::from_utf8_lossy(child.name().as_ref()).into_owned();
                    params.0.insert(key, String::new());
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(MorilleError::UnclosedElement(WRAPPER_TAG.to_string()))
                }
                _ => {}
            }
        }
        debug!("decoded {} params from xml", params.len());
        Ok(params)
    }
}

// Collect the text and CDATA content of the element opened as `key` up to
// its end tag. The gateway wraps most response values in CDATA sections.
fn read_element_text(reader: &mut Reader<&[u8]>, key: &str) -> MorilleResult<String> {
    let mut value = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(text) => value.push_str(&text.unescape()?),
            Event::CData(text) => value.push_str(&String::from_utf8_lossy(&text.into_inner())),
            Event::End(_) => break,
            Event::Eof => return Err(MorilleError::UnclosedElement(key.to_string())),
            _ => {}
        }
    }
    Ok(value)
}

#[test]
fn test_set_get_string() {
    let params = Params::new().set_string("body", "test order");
    assert_eq!(params.get_string("body"), "test order");
    assert_eq!(params.get_string("missing"), "");
}

#[test]
fn test_set_get_int64() {
    let params = Params::new()
        .set_int64("total_fee", 888)
        .set_int64("refund_fee", -12);
    assert_eq!(params.get_int64("total_fee"), 888);
    assert_eq!(params.get_int64("refund_fee"), -12);
    assert_eq!(params.get_string("total_fee"), "888");
}

#[test]
fn test_get_int64_degrades_to_zero() {
    let params = Params::new().set_string("total_fee", "not a number");
    assert_eq!(params.get_int64("total_fee"), 0);
    assert_eq!(params.get_int64("missing"), 0);
}

#[test]
fn test_contains_key() {
    let params = Params::new().set_string("device_info", "");
    assert!(params.contains_key("device_info"));
    assert!(!params.contains_key("missing"));
    assert_eq!(params.get_string("device_info"), "");
}

#[test]
fn test_is_success() {
    let ok = Params::new()
        .set_string("return_code", "SUCCESS")
        .set_string("result_code", "SUCCESS");
    assert!(ok.is_success());
    let missing_result = Params::new().set_string("return_code", "SUCCESS");
    assert!(!missing_result.is_success());
    assert!(!Params::new().is_success());
    let failed = Params::new()
        .set_string("return_code", "FAIL")
        .set_string("result_code", "SUCCESS");
    assert!(!failed.is_success());
}

#[test]
fn test_to_xml_is_sorted() {
    let params = Params::new()
        .set_string("mch_id", "10000100")
        .set_string("appid", "wx2421b1c4370ec43b")
        .set_int64("total_fee", 1);
    assert_eq!(
        params.to_xml().unwrap(),
        "<xml><appid>wx2421b1c4370ec43b</appid><mch_id>10000100</mch_id><total_fee>1</total_fee></xml>"
    );
}

#[test]
fn test_to_xml_escapes_text() {
    let params = Params::new().set_string("body", "fish & chips <large>");
    assert_eq!(
        params.to_xml().unwrap(),
        "<xml><body>fish &amp; chips &lt;large&gt;</body></xml>"
    );
}

#[test]
fn test_empty_map_marshals_to_nothing() {
    assert_eq!(Params::new().to_xml().unwrap(), "");
}

#[test]
fn test_from_xml_empty_input() {
    let params = Params::from_xml("").unwrap();
    assert!(params.is_empty());
}

#[test]
fn test_from_xml_cdata_and_whitespace() {
    let body = "<xml>\n  <return_code><![CDATA[SUCCESS]]></return_code>\n  <return_msg><![CDATA[OK]]></return_msg>\n</xml>";
    let params = Params::from_xml(body).unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(params.get_string("return_code"), "SUCCESS");
    assert_eq!(params.get_string("return_msg"), "OK");
}

#[test]
fn test_from_xml_self_closing_child() {
    let params = Params::from_xml("<xml><device_info/></xml>").unwrap();
    assert!(params.contains_key("device_info"));
    assert_eq!(params.get_string("device_info"), "");
}

#[test]
fn test_from_xml_repeated_key_keeps_last() {
    let params = Params::from_xml("<xml><a>1</a><a>2</a></xml>").unwrap();
    assert_eq!(params.get_string("a"), "2");
    assert_eq!(params.len(), 1);
}

#[test]
fn test_from_xml_truncated_input_fails() {
    assert!(Params::from_xml("<xml><return_code>SUCCESS").is_err());
    assert!(Params::from_xml("<xml>").is_err());
}

#[test]
fn test_from_xml_mismatched_end_tag_fails() {
    assert!(Params::from_xml("<xml><a>1</b></xml>").is_err());
}

#[test]
fn test_roundtrip() {
    let params = Params::new()
        .set_string("body", "test order")
        .set_string("out_trade_no", "20260101s001")
        .set_int64("total_fee", 888);
    let decoded = Params::from_xml(&params.to_xml().unwrap()).unwrap();
    assert_eq!(decoded, params);
}
