use crate::{AlignError, Side};

/// Decode `data` as UTF-8, naming `side` in the error if it's invalid.
pub fn decode(data: &[u8], side: Side) -> Result<&str, AlignError> {
    std::str::from_utf8(data).map_err(|error| AlignError::InvalidUtf8 {
        side,
        valid_up_to: error.valid_up_to(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_decode() {
        assert_eq!(decode(b"hello", Side::Left), Ok("hello"));
        assert_eq!(decode("héllo".as_bytes(), Side::Right), Ok("héllo"));
        assert_eq!(decode(b"", Side::Left), Ok(""));

        assert_eq!(
            decode(&[b'a', b'b', 159, 146, 150], Side::Right),
            Err(AlignError::InvalidUtf8 {
                side: Side::Right,
                valid_up_to: 2,
            })
        );

        // A truncated multi-byte character
        assert_eq!(
            decode(&"é".as_bytes()[..1], Side::Left),
            Err(AlignError::InvalidUtf8 {
                side: Side::Left,
                valid_up_to: 0,
            })
        );
    }
}
