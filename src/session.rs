use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

pub const SESSION_COOKIE: &str = "session";
pub const SESSION_ID_BYTES: usize = 32;

/// A fresh URL-safe session id from the OS RNG.
pub fn generate_session_id() -> String {
    let mut rng = OsRng;
    generate_id(&mut rng, SESSION_ID_BYTES)
}

/// Base64 URL-safe, no padding. 32 bytes give a 43 char id.
pub fn generate_id<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// Picks the session id out of a `Cookie` header value.
pub fn session_id_from_cookies(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

pub fn session_cookie(id: &str) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
