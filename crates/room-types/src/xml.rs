//! XML rendering for documents served to the channel.
//!
//! Sequence fields render as repeated sibling elements sharing the field's
//! name, which is how the client expects repeated groups (`msginfo`,
//! `msglist`) to appear.

use serde::Serialize;
use thiserror::Error;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Error)]
#[error("XML serialization failed: {0}")]
pub struct XmlError(String);

/// Render `value` as a complete XML document rooted at `<root>`.
pub fn to_document<T: Serialize>(root: &str, value: &T) -> Result<String, XmlError> {
    let body = quick_xml::se::to_string_with_root(root, value).map_err(|e| XmlError(e.to_string()))?;

    let mut doc = String::with_capacity(XML_DECLARATION.len() + 1 + body.len());
    doc.push_str(XML_DECLARATION);
    doc.push('\n');
    doc.push_str(&body);
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CONCIERGE_MII_NODE, ConciergeMii, MsgEntry, MsgInfo};

    fn sample(msginfo: Vec<MsgInfo>) -> ConciergeMii {
        ConciergeMii {
            miiid: 3,
            clothes: 1,
            color1: "0x1a".into(),
            color2: "0x2b".into(),
            action: 2,
            prof: "Chef".into(),
            name: "Tom".into(),
            msginfo,
            movieid: 9,
            voice: 1,
        }
    }

    #[test]
    fn renders_fields_in_wire_order() {
        let doc = to_document(CONCIERGE_MII_NODE, &sample(vec![])).unwrap();
        assert_eq!(
            doc,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <ConciergeMii><miiid>3</miiid><clothes>1</clothes><color1>0x1a</color1>\
             <color2>0x2b</color2><action>2</action><prof>Chef</prof><name>Tom</name>\
             <movieid>9</movieid><voice>1</voice></ConciergeMii>"
        );
    }

    #[test]
    fn repeated_groups_become_sibling_elements() {
        let msginfo = vec![
            MsgInfo {
                kind: 1,
                msglist: vec![
                    MsgEntry { seq: 1, msg: "Hi".into(), face: 0 },
                    MsgEntry { seq: 2, msg: "Bye".into(), face: 3 },
                ],
            },
            MsgInfo {
                kind: 2,
                msglist: vec![MsgEntry { seq: 1, msg: "Yo".into(), face: 1 }],
            },
        ];
        let doc = to_document(CONCIERGE_MII_NODE, &sample(msginfo)).unwrap();

        assert!(doc.contains(
            "<name>Tom</name>\
             <msginfo><type>1</type>\
             <msglist><seq>1</seq><msg>Hi</msg><face>0</face></msglist>\
             <msglist><seq>2</seq><msg>Bye</msg><face>3</face></msglist></msginfo>\
             <msginfo><type>2</type>\
             <msglist><seq>1</seq><msg>Yo</msg><face>1</face></msglist></msginfo>\
             <movieid>9</movieid>"
        ));
    }

    #[test]
    fn text_is_escaped() {
        let mut mii = sample(vec![]);
        mii.name = "Tom & <Jerry>".into();
        let doc = to_document(CONCIERGE_MII_NODE, &mii).unwrap();
        assert!(doc.contains("Tom &amp; &lt;Jerry&gt;"));
    }
}
