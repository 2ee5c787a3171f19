//! Type-tagged JSON document for the contact file.
//!
//! Every object carries a `$type` tag so the record type is explicit on load:
//!
//! ```json
//! {"$type":"ContactCollection","$values":[
//!   {"$type":"Contact","name":"Ann","phoneNumber":"111","email":"ann@example.com"}
//! ]}
//! ```
//!
//! A single tagged `Contact` object is accepted as a one-element collection.

use crate::models::Contact;
use serde::{Deserialize, Serialize};

/// A tagged record inside the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "$type")]
enum Record {
    #[serde(rename = "Contact")]
    Contact(Contact),
}

/// Top-level document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "$type")]
enum Document {
    #[serde(rename = "ContactCollection")]
    Collection {
        #[serde(rename = "$values")]
        values: Vec<Record>,
    },

    #[serde(rename = "Contact")]
    Single(Contact),
}

/// Encode the collection as pretty-printed JSON.
pub fn encode(contacts: &[Contact]) -> serde_json::Result<String> {
    let document = Document::Collection {
        values: contacts.iter().cloned().map(Record::Contact).collect(),
    };
    serde_json::to_string_pretty(&document)
}

/// Decode a contact file.
///
/// Empty or whitespace-only input decodes to an empty collection. Bytes that
/// are not valid UTF-8 are a decode error like any other malformed input.
pub fn decode(bytes: &[u8]) -> serde_json::Result<Vec<Contact>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let document: Document = serde_json::from_slice(bytes)?;
    Ok(match document {
        Document::Collection { values } => values
            .into_iter()
            .map(|record| match record {
                Record::Contact(contact) => contact,
            })
            .collect(),
        Document::Single(contact) => vec![contact],
    })
}
