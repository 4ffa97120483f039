//! Valid url! literals expand to working URLs.

use kitbag::url;

fn main() {
    let homepage = url!("https://example.com");
    assert_eq!(homepage.scheme(), "https");
    assert_eq!(homepage.host_str(), Some("example.com"));

    let custom = url!("app://internal/route?tab=2");
    assert_eq!(custom.scheme(), "app");
    assert_eq!(custom.query(), Some("tab=2"));
}
