pub mod crack;
pub mod encrypt;
pub mod ngrams;
pub mod score;

use cipherforge::error::CfResult;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Text from the positional argument, else `--file`, else stdin.
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> CfResult<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
