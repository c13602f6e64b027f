use log::debug;
use lopdf::{Document, EncryptionState, EncryptionVersion, Object, Permissions, StringFormat};
use md5::{Digest, Md5};

use crate::error::{Error, Result};

/// Key length of the protection policy, in bits.
pub const ENCRYPTION_KEY_LENGTH: usize = 128;

/// Applies a password-based protection policy to a PDF document.
///
/// The same password is used for both the owner and the user role, all
/// access permissions are granted, and the encryption key is
/// [`ENCRYPTION_KEY_LENGTH`] bits long. Returns the serialized protected
/// document.
///
/// Fails with [`Error::DocumentLoad`] if `source` is not a parseable PDF,
/// with [`Error::AlreadyProtected`] if the document is already encrypted,
/// and with [`Error::Encryption`] if applying the policy or serializing the
/// result fails. The in-memory document model is dropped on every exit path.
pub fn protect(source: &[u8], password: &str) -> Result<Vec<u8>> {
    if password.is_empty() {
        return Err(Error::InvalidArgument("password must not be empty".to_string()));
    }

    let mut doc = Document::load_mem(source).map_err(Error::DocumentLoad)?;
    if doc.is_encrypted() {
        return Err(Error::AlreadyProtected);
    }

    ensure_file_id(&mut doc, source);

    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: password,
        user_password: password,
        key_length: ENCRYPTION_KEY_LENGTH,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).map_err(|err| Error::Encryption(err.into()))?;
    doc.encrypt(&state).map_err(|err| Error::Encryption(err.into()))?;

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).map_err(|err| Error::Encryption(err.into()))?;
    Ok(buffer)
}

/// Key derivation requires the first element of the trailer `/ID`. Documents
/// produced by most writers carry one; synthesize it from a digest of the
/// source bytes otherwise.
fn ensure_file_id(doc: &mut Document, source: &[u8]) {
    if doc.trailer.get(b"ID").is_ok() {
        return;
    }
    debug!("source document has no /ID, deriving one from its content");
    let digest = Md5::digest(source).to_vec();
    let id = Object::String(digest, StringFormat::Literal);
    doc.trailer.set("ID", Object::Array(vec![id.clone(), id]));
}
