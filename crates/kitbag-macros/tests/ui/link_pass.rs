//! Valid link! literals expand to web URLs.

use kitbag::link;

fn main() {
    let docs = link!("https://example.com/docs?lang=en");
    assert_eq!(docs.scheme(), "https");
    assert_eq!(docs.host_str(), Some("example.com"));

    let local = link!("http://localhost:8080/health");
    assert_eq!(local.port(), Some(8080));
}
