use ring::digest::{Context, SHA256};

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

pub fn hex_encode(data: &[u8]) -> String {
    data_encoding::HEXLOWER.encode(data)
}

/// Accepts upper or lower case hex
pub fn hex_decode(data: &str) -> crate::error::Result<Vec<u8>> {
    Ok(data_encoding::HEXLOWER_PERMISSIVE.decode(data.trim().as_bytes())?)
}
