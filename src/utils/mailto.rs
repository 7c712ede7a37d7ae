/// Builds a `mailto:` link with a pre-filled subject and body.
pub fn mailto(address: &str, subject: &str, body: &str) -> String {
    format!("mailto:{}?subject={}&body={}", address, encode(subject), encode(body))
}

// Everything but RFC 3986 unreserved characters is escaped.
fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
