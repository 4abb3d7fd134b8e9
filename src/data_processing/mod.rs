use crate::error::ConfigError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads a JSON or JSON5 file. JSON5 is a superset, so one parser covers both
/// and hand-written session files may carry comments.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    Ok(json5::from_str(&contents)?)
}

pub fn write_json<T: Serialize + ?Sized>(
    value: &T,
    path: impl AsRef<Path>,
) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path.as_ref(), json)?;
    Ok(())
}

fn write_to_csv<T: Serialize>(values: &[T], path: &Path) -> Result<(), ConfigError> {
    let mut writer = csv::Writer::from_path(path)?;
    for value in values {
        writer.serialize(value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes rows as CSV or JSON, chosen by the file extension.
pub fn write_slice_to_file<T: Serialize>(
    values: &[T],
    path: impl AsRef<Path>,
) -> Result<(), ConfigError> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => write_json(values, path)?,
        Some("csv") => write_to_csv(values, path)?,
        _ => return Err(ConfigError::Extension(path.to_path_buf())),
    }
    tracing::info!("Successfully wrote to {:?}", path);
    Ok(())
}

/// Like `write_slice_to_file`, but logs failures instead of returning them.
pub fn try_write_slice_to_file<T: Serialize>(values: &[T], path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Err(err) = write_slice_to_file(values, path) {
        tracing::error!("Failed write to {:?}: {}", path, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_matches, assert_ok};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        value: u32,
    }

    fn temp_path(file_name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("doubles-skill-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(file_name)
    }

    #[test]
    fn json_rows_can_be_read_back() {
        let rows = vec![
            Row { name: "a".into(), value: 1 },
            Row { name: "b".into(), value: 2 },
        ];
        let path = temp_path("rows.json");
        assert_ok!(write_slice_to_file(&rows, &path));
        let read: Vec<Row> = assert_ok!(read_json(&path));
        assert_eq!(read, rows);
    }

    #[test]
    fn csv_rows_have_a_header() {
        let path = temp_path("rows.csv");
        assert_ok!(write_slice_to_file(&[Row { name: "a".into(), value: 7 }], &path));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "name,value\na,7\n");
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let path = temp_path("rows.txt");
        assert_matches!(
            write_slice_to_file(&[Row { name: "a".into(), value: 7 }], &path),
            Err(ConfigError::Extension(_))
        );
    }

    #[test]
    fn missing_files_are_an_io_error() {
        assert_err!(read_json::<Vec<Row>>(temp_path("does-not-exist.json")));
    }
}
