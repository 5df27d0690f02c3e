// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::Path;

const DEFAULT_FILENAME: &str = ".env";

/// Loads `.env` into the process environment for debug builds. A missing
/// file is not an error; already-set variables are left alone.
pub fn load() -> Result<()> {
  load_from(Path::new(DEFAULT_FILENAME))
}

pub fn load_from(path: &Path) -> Result<()> {
  if !path.exists() {
    return Ok(());
  }

  let content =
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

  for (line_num, line) in content.lines().enumerate() {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
      continue;
    }

    let (key, value) = parse_line(trimmed)
      .with_context(|| format!("{}: line {}", path.display(), line_num + 1))?;

    if env::var_os(&key).is_none() {
      env::set_var(key, value);
    }
  }

  Ok(())
}

fn parse_line(line: &str) -> Result<(String, String)> {
  let (key, value) = line.split_once('=').context("missing '='")?;

  let key = key.trim();
  if key.is_empty() {
    bail!("empty key");
  }

  let value = value.trim().trim_matches('"').trim_matches('\'');
  Ok((key.to_string(), value.to_string()))
}
