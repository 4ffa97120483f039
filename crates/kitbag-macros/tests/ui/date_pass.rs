//! Valid date! literals expand to calendar dates.

use kitbag::date;

fn main() {
    let iso = date!("2024-02-29");
    assert_eq!(iso.to_string(), "2024-02-29");

    let dashed = date!("08-22-1995");
    assert_eq!(dashed.to_string(), "1995-08-22");

    let slashed = date!("1999/12/31");
    assert_eq!(slashed.to_string(), "1999-12-31");

    let us = date!("12/31/1999");
    assert_eq!(us, slashed);
}
