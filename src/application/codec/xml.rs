//! XML export
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <Topology>
//!   <CI name="SUP_PR1">
//!     <CI name="Cronjobs">
//!       <CI name="Archive"/>
//!     </CI>
//!   </CI>
//! </Topology>
//! ```

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::application::codec::CodecError;
use crate::domain::{ConfigItem, Topology};

pub const TOPOLOGY_TAG: &str = "Topology";
pub const ITEM_TAG: &str = "CI";
pub const NAME_ATTR: &str = "name";

/// Encode `topology` as an indented XML document with declaration.
pub fn encode(topology: &Topology, indent: usize) -> Result<Vec<u8>, CodecError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', indent);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    if topology.roots.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(TOPOLOGY_TAG)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(TOPOLOGY_TAG)))?;
        for root in &topology.roots {
            write_item(&mut writer, root)?;
        }
        writer.write_event(Event::End(BytesEnd::new(TOPOLOGY_TAG)))?;
    }

    let mut out = writer.into_inner();
    out.push(b'\n');
    Ok(out)
}

fn write_item(writer: &mut Writer<Vec<u8>>, item: &ConfigItem) -> Result<(), CodecError> {
    if !is_xml_text(&item.name) {
        return Err(CodecError::InvalidXmlName {
            name: item.name.clone(),
        });
    }

    let mut start = BytesStart::new(ITEM_TAG);
    start.push_attribute((NAME_ATTR, item.name.as_str()));

    if item.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &item.children {
        write_item(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(ITEM_TAG)))?;
    Ok(())
}

/// True if every character matches the XML 1.0 `Char` production.
fn is_xml_text(s: &str) -> bool {
    s.chars().all(|c| {
        matches!(c, '\t' | '\n' | '\r')
            || ('\u{20}'..='\u{D7FF}').contains(&c)
            || ('\u{E000}'..='\u{FFFD}').contains(&c)
            || c >= '\u{10000}'
    })
}
