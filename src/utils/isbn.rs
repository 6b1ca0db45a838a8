// Shape check for ISBN-10 and ISBN-13: an optional 978/979 prefix, nine
// digits, then a check character that is a digit or 'X'. Check digits are not
// verified arithmetically.
pub(crate) fn is_valid_isbn(isbn: &str) -> bool {
    let bytes = isbn.as_bytes();
    let rest = match bytes.len() {
        10 => bytes,
        13 if bytes.starts_with(b"978") || bytes.starts_with(b"979") => &bytes[3..],
        _ => return false,
    };
    let (digits, check) = rest.split_at(9);
    digits.iter().all(u8::is_ascii_digit) && (check[0].is_ascii_digit() || check[0] == b'X')
}
