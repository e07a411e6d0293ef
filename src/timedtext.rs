use crate::error::Result;

/// Parse timedtext caption XML into the text snippets of its `<text>`
/// elements, in document order, HTML entities decoded.
pub fn parse_caption_xml(xml: &str) -> Result<Vec<String>> {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(xml);
    let mut snippets = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"text" => {
                in_text = true;
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"text" => {
                in_text = false;
            }
            Ok(Event::Text(ref e)) if in_text => {
                let raw_text = e.unescape().unwrap_or_default().to_string();
                let text = html_escape::decode_html_entities(&raw_text).to_string();
                if !text.is_empty() {
                    snippets.push(text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
    }

    Ok(snippets)
}

/// Join parsed caption snippets into a flat transcript string.
pub fn to_transcript(snippets: &[String]) -> String {
    snippets.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_caption_xml_basic() {
        let xml = r#"<?xml version="1.0" encoding="utf-8" ?>
<transcript>
    <text start="0.21" dur="2.34">Hello world</text>
    <text start="2.55" dur="1.50">This is a test</text>
</transcript>"#;

        let snippets = parse_caption_xml(xml).unwrap();
        assert_eq!(snippets, vec!["Hello world", "This is a test"]);
    }

    #[test]
    fn test_parse_caption_xml_html_entities() {
        let xml = r#"<?xml version="1.0" encoding="utf-8" ?>
<transcript>
    <text start="0.0" dur="1.0">it&amp;#39;s a &amp;quot;test&amp;quot;</text>
</transcript>"#;

        let snippets = parse_caption_xml(xml).unwrap();
        assert_eq!(snippets, vec!["it's a \"test\""]);
    }

    #[test]
    fn test_parse_caption_xml_empty() {
        let xml = r#"<?xml version="1.0" encoding="utf-8" ?><transcript></transcript>"#;
        let snippets = parse_caption_xml(xml).unwrap();
        assert!(snippets.is_empty());
    }

    #[test]
    fn test_self_closing_text_skipped() {
        let xml = r#"<transcript><text start="0" dur="1"/><text start="1" dur="1">kept</text></transcript>"#;
        let snippets = parse_caption_xml(xml).unwrap();
        assert_eq!(snippets, vec!["kept"]);
    }

    #[test]
    fn test_to_transcript() {
        let snippets = vec!["Hello world".to_string(), "again".to_string()];
        assert_eq!(to_transcript(&snippets), "Hello world again");
    }

    #[test]
    fn test_to_transcript_empty() {
        assert_eq!(to_transcript(&[]), "");
    }
}
