//! Interactive CAVLC mode selection.

use std::io::{BufRead, Write};

use lut_model::{CavlcMode, LutError};

pub const CAVLC_PROMPT: &str = "Select output: 1 = generate LUT, 2 = generate sizes: ";

/// Ask for the CAVLC output mode and read a single answer line.
pub fn read_cavlc_mode<R, W>(input: &mut R, output: &mut W) -> Result<CavlcMode, LutError>
where
    R: BufRead,
    W: Write,
{
    let stdio_error = |source| LutError::Io {
        operation: "prompt on",
        path: "stdio".into(),
        source,
    };
    output.write_all(CAVLC_PROMPT.as_bytes()).map_err(stdio_error)?;
    output.flush().map_err(stdio_error)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(stdio_error)?;
    CavlcMode::from_choice(&answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn accepts_one_and_two() {
        let mut shown = Vec::new();
        let mode = read_cavlc_mode(&mut Cursor::new("1\n"), &mut shown).unwrap();
        assert_eq!(mode, CavlcMode::Lut);
        assert_eq!(String::from_utf8(shown).unwrap(), CAVLC_PROMPT);

        let mode = read_cavlc_mode(&mut Cursor::new("2\r\n"), &mut Vec::new()).unwrap();
        assert_eq!(mode, CavlcMode::Sizes);
    }

    #[test]
    fn rejects_anything_else() {
        for answer in ["", "0\n", "lut\n", "12\n"] {
            let err = read_cavlc_mode(&mut Cursor::new(answer), &mut Vec::new()).unwrap_err();
            assert!(matches!(err, LutError::InvalidChoice { .. }), "{answer:?}");
        }
    }
}
