use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn signature_payload(order_id: &str, payment_id: &str) -> String {
    format!("{order_id}|{payment_id}")
}

/// Checks the provider's checkout callback signature: HMAC-SHA256 over
/// `"{order_id}|{payment_id}"` keyed with the shared secret, hex-encoded.
/// Malformed input verifies as false, never panics.
pub fn verify_payment_signature(
    order_id: &str,
    payment_id: &str,
    signature_hex: &str,
    secret: &str,
) -> bool {
    let Ok(signature) = hex::decode(signature_hex) else {
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(signature_payload(order_id, payment_id).as_bytes());
    mac.verify_slice(&signature).is_ok()
}
