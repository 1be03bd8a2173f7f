use crate::dom::document::{Document, NodeId, NodeKind};

pub fn serialize(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let node = doc.node(id);
    match &node.kind {
        NodeKind::Fragment => {
            for child in &node.children {
                write_node(doc, *child, out);
            }
        }
        NodeKind::Element(tag) => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in &node.attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape(value, true));
                out.push('"');
            }
            out.push('>');
            out.push_str(&escape(&node.text, false));
            for child in &node.children {
                write_node(doc, *child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

pub fn escape(input: &str, in_attribute: bool) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if in_attribute => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_nested_elements() {
        let mut doc = Document::empty();
        let section = doc.create_element("section");
        doc.set_data(section, "post_id", "7");
        doc.add_class(section, "comments");
        let h3 = doc.create_element("h3");
        doc.set_text_content(h3, "a < b & c");
        doc.append(section, h3);

        assert_eq!(
            doc.to_html(section),
            r#"<section data-post-id="7" class="comments"><h3>a &lt; b &amp; c</h3></section>"#
        );
    }

    #[test]
    fn test_attribute_quotes_are_escaped() {
        assert_eq!(escape(r#"say "hi""#, true), "say &quot;hi&quot;");
        assert_eq!(escape(r#"say "hi""#, false), r#"say "hi""#);
    }

    #[test]
    fn test_skeleton_html() {
        let doc = Document::new();
        assert_eq!(
            doc.document_html(),
            concat!(
                r#"<body><header><select id="selectMenu">"#,
                r#"<option value="">Employees</option></select></header>"#,
                "<main></main></body>"
            )
        );
    }
}
