// crates/pixelmap-cli/src/io/raw.rs
//
// Headerless little-endian buffers: images as u32 ARGB, signals as f32.

use anyhow::{bail, Context};

fn read_words(path: &str, what: &str) -> anyhow::Result<Vec<[u8; 4]>> {
    let bytes = std::fs::read(path).with_context(|| format!("read {what}: {path}"))?;
    if bytes.len() % 4 != 0 {
        bail!("{what}: {path} has {} bytes, not a multiple of 4", bytes.len());
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| [c[0], c[1], c[2], c[3]])
        .collect())
}

pub fn read_u32_file(path: &str) -> anyhow::Result<Vec<u32>> {
    Ok(read_words(path, "image")?
        .into_iter()
        .map(u32::from_le_bytes)
        .collect())
}

pub fn read_f32_file(path: &str) -> anyhow::Result<Vec<f32>> {
    Ok(read_words(path, "signal")?
        .into_iter()
        .map(f32::from_le_bytes)
        .collect())
}

pub fn u32_bytes(vals: &[u32]) -> Vec<u8> {
    vals.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn f32_bytes(vals: &[f32]) -> Vec<u8> {
    vals.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Writes `bytes` and returns their crc32.
pub fn write_bytes_file(path: &str, bytes: &[u8]) -> anyhow::Result<u32> {
    std::fs::write(path, bytes).with_context(|| format!("write raw: {path}"))?;
    Ok(crc32fast::hash(bytes))
}
