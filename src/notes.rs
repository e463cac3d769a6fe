use base64ct::{Base64, Encoding};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("malformed sealed payload")]
    Malformed,
    #[error("sealed payload is not valid utf-8")]
    NotUtf8,
}

/// Reversible transform applied to symptom notes before they reach the store
/// and reversed after retrieval. Callers only ever handle plaintext; the
/// sealed form is what lands in the `notes` column. Swapping in a real
/// encryption scheme means providing another implementation of this trait.
pub trait NotesCodec: Send + Sync {
    fn seal(&self, plaintext: &str) -> String;
    fn open(&self, sealed: &str) -> Result<String, CodecError>;
}

/// Base64 transform. Obfuscation only, not confidentiality.
pub struct Base64NotesCodec;

impl NotesCodec for Base64NotesCodec {
    fn seal(&self, plaintext: &str) -> String {
        if plaintext.is_empty() {
            return String::new();
        }
        Base64::encode_string(plaintext.as_bytes())
    }

    fn open(&self, sealed: &str) -> Result<String, CodecError> {
        if sealed.is_empty() {
            return Ok(String::new());
        }
        let bytes = Base64::decode_vec(sealed).map_err(|_| CodecError::Malformed)?;
        String::from_utf8(bytes).map_err(|_| CodecError::NotUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_and_open_roundtrip() {
        let codec = Base64NotesCodec;
        let sealed = codec.seal("felt bloated after lunch, worse by 3pm");
        assert_ne!(sealed, "felt bloated after lunch, worse by 3pm");
        let opened = codec.open(&sealed).expect("open should succeed");
        assert_eq!(opened, "felt bloated after lunch, worse by 3pm");
    }

    #[test]
    fn roundtrip_preserves_non_ascii() {
        let codec = Base64NotesCodec;
        let text = "crêpes + café ☕, mild nausea after";
        let opened = codec.open(&codec.seal(text)).expect("open should succeed");
        assert_eq!(opened, text);
    }

    #[test]
    fn empty_string_stays_empty() {
        let codec = Base64NotesCodec;
        assert_eq!(codec.seal(""), "");
        assert_eq!(codec.open("").expect("empty is fine"), "");
    }

    #[test]
    fn open_rejects_garbage() {
        let codec = Base64NotesCodec;
        let err = codec.open("not%valid%base64!").unwrap_err();
        assert!(matches!(err, CodecError::Malformed));
    }

    #[test]
    fn open_rejects_non_utf8_payload() {
        let codec = Base64NotesCodec;
        let sealed = Base64::encode_string(&[0xff, 0xfe, 0x00, 0x80]);
        let err = codec.open(&sealed).unwrap_err();
        assert!(matches!(err, CodecError::NotUtf8));
    }
}
