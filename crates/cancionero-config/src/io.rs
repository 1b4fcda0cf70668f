use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escribe en un `.tmp` hermano y luego renombra, para no dejar nunca un
/// archivo de configuración a medias.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn replaces_contents_and_leaves_no_tmp() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("cancionero.toml");
    fs::write(&path, "old").unwrap();

    atomic_write_str(&path, "new").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    assert!(!path.with_extension("tmp").exists());
  }
}
