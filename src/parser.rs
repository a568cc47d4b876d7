//! Inflection service response parser
//!
//! The service answers with an XML document whose root element holds zero or
//! more `<inflection>` children, one per grammatical case, in service order:
//!
//! ```xml
//! <inflections>
//!   <original>книга</original>
//!   <inflection case="1">книга</inflection>
//!   <inflection case="2">книги</inflection>
//!   ...
//! </inflections>
//! ```

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::InflectError;
use crate::InflectionSet;

/// Name of the root child that carries one inflected form
const INFLECTION_TAG: &[u8] = b"inflection";

fn malformed(reason: impl Into<String>) -> InflectError {
    InflectError::MalformedResponse(reason.into())
}

/// Parse a raw service response into an ordered inflection set.
///
/// # Returns
/// * `Ok(InflectionSet)` - One entry per `<inflection>` child, in document order.
///   Empty elements yield empty strings so positions are preserved.
/// * `Err(InflectError::MalformedResponse)` - If the body is not well-formed XML
/// * `Err(InflectError::UnexpectedSchema)` - If the root has no `<inflection>` child
pub fn parse_response(body: &str) -> Result<InflectionSet, InflectError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(false);

    let mut depth: usize = 0;
    let mut root_seen = false;
    let mut current: Option<String> = None;
    let mut inflections = InflectionSet::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if depth == 0 {
                    if root_seen {
                        return Err(malformed("more than one root element"));
                    }
                    root_seen = true;
                } else if depth == 1 && e.local_name().as_ref() == INFLECTION_TAG {
                    current = Some(String::new());
                }
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                if depth == 0 {
                    if root_seen {
                        return Err(malformed("more than one root element"));
                    }
                    root_seen = true;
                } else if depth == 1 && e.local_name().as_ref() == INFLECTION_TAG {
                    inflections.push(String::new());
                }
            }
            Ok(Event::End(ref e)) => {
                depth = depth.saturating_sub(1);
                if depth == 1 && e.local_name().as_ref() == INFLECTION_TAG {
                    if let Some(text) = current.take() {
                        inflections.push(text.trim().to_string());
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if depth == 0 {
                    if !e.iter().all(u8::is_ascii_whitespace) {
                        return Err(malformed("text outside of the root element"));
                    }
                } else if let Some(buf) = current.as_mut() {
                    let text = e
                        .decode()
                        .map_err(|e| malformed(format!("XML decode error: {e}")))?;
                    buf.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(buf) = current.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::GeneralRef(ref e)) => {
                if depth == 0 {
                    return Err(malformed("entity reference outside of the root element"));
                }
                if let Some(buf) = current.as_mut() {
                    let resolved = e
                        .resolve_char_ref()
                        .map_err(|e| malformed(format!("XML character reference error: {e}")))?;
                    match resolved {
                        Some(ch) => buf.push(ch),
                        None => {
                            let name = e
                                .decode()
                                .map_err(|e| malformed(format!("XML decode error: {e}")))?;
                            let value = resolve_predefined_entity(&name)
                                .ok_or_else(|| malformed(format!("unknown entity &{name};")))?;
                            buf.push_str(value);
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(malformed(format!("XML parse error: {e}"))),
            _ => {}
        }
    }

    if !root_seen {
        return Err(malformed("empty document"));
    }
    if depth > 0 {
        return Err(malformed("document ended inside an open element"));
    }
    if inflections.is_empty() {
        return Err(InflectError::UnexpectedSchema);
    }

    Ok(inflections)
}
