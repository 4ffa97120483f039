//! Valid mailto! literals expand to mailto URLs.

use kitbag::mailto;

fn main() {
    let contact = mailto!("team@example.com");
    assert_eq!(contact.scheme(), "mailto");
    assert_eq!(contact.as_str(), "mailto:team@example.com");

    let tagged = mailto!("team+billing@example.co.uk");
    assert_eq!(tagged.path(), "team+billing@example.co.uk");
}
