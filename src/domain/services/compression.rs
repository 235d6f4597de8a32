#[cfg(test)]
#[path = "compression_test.rs"]
mod tests;

use std::io::Read;
use std::io::Write;

use anyhow::Result;
use base64::engine::general_purpose::URL_SAFE_NO_PAD as b64;
use base64::Engine;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use tokio::task;

pub struct Compression {}

impl Compression {
    /// Maps arbitrary text to a string safe for use as a URL query value
    /// without further escaping. Empty text stays empty so absent
    /// documents never round-trip through the compressor.
    pub async fn compress(text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok("".to_string());
        }

        let text = text.to_string();
        return task::spawn_blocking(move || {
            let mut encoder = DeflateEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(text.as_bytes())?;
            let deflated = encoder.finish()?;

            return Ok(b64.encode(deflated));
        })
        .await?;
    }

    pub async fn decompress(payload: &str) -> Result<String> {
        if payload.is_empty() {
            return Ok("".to_string());
        }

        let payload = payload.to_string();
        return task::spawn_blocking(move || {
            let deflated = b64.decode(payload)?;
            let mut text = String::new();
            DeflateDecoder::new(&deflated[..]).read_to_string(&mut text)?;

            return Ok(text);
        })
        .await?;
    }
}
