use super::cursor::ByteCursor;
use super::error::DecodeError;
use super::value::{Dict, Value};

/// Decodes a single bencoded value from the front of `input`.
///
/// Trailing bytes after the first complete value are ignored, matching the
/// lenient behaviour of most torrent tooling.
pub fn decode(input: &[u8]) -> Result<Value, DecodeError> {
    let mut cursor = ByteCursor::new(input);
    decode_value(&mut cursor)
}

/// Single entry point of the recursive-descent grammar; dispatches on the
/// peeked type character. One byte of lookahead, no backtracking.
pub fn decode_value(cursor: &mut ByteCursor) -> Result<Value, DecodeError> {
    match cursor.peek()? {
        b'd' => decode_dict(cursor),
        b'l' => decode_list(cursor),
        b'i' => decode_integer(cursor),
        b'0'..=b'9' => Ok(Value::ByteString(decode_string(cursor)?)),
        c => Err(DecodeError::UnknownTypeChar(c as char)),
    }
}

/// `i<digits>e`. Lenient: leading zeros and `-0` are accepted; only what
/// `i64` refuses to parse is an error.
fn decode_integer(cursor: &mut ByteCursor) -> Result<Value, DecodeError> {
    cursor.take(1)?; // 'i'
    let digits = cursor.take_until(b'e')?;
    let parsed = String::from_utf8_lossy(digits).parse::<i64>()?;
    Ok(Value::Integer(parsed))
}

/// `<length>:<raw bytes>`. The payload is arbitrary bytes, never assumed to
/// be text.
fn decode_string(cursor: &mut ByteCursor) -> Result<Vec<u8>, DecodeError> {
    let digits = cursor.take_until(b':')?;
    let length = String::from_utf8_lossy(digits).parse::<usize>()?;
    Ok(cursor.take(length)?.to_vec())
}

/// `l<items>e`.
fn decode_list(cursor: &mut ByteCursor) -> Result<Value, DecodeError> {
    cursor.take(1)?; // 'l'
    let mut items = Vec::new();
    while cursor.peek()? != b'e' {
        items.push(decode_value(cursor)?);
    }
    cursor.take(1)?; // 'e'
    Ok(Value::List(items))
}

/// `d(<key><value>)*e`. Keys always go through the string production since
/// bencode mandates string keys.
fn decode_dict(cursor: &mut ByteCursor) -> Result<Value, DecodeError> {
    cursor.take(1)?; // 'd'
    let mut dict = Dict::new();
    while cursor.peek()? != b'e' {
        let key = decode_string(cursor)?;
        let value = decode_value(cursor)?;
        dict.insert(key, value);
    }
    cursor.take(1)?; // 'e'
    Ok(Value::Dict(dict))
}
