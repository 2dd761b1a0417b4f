use crate::StrError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Reads a JSON file and deserializes its contents
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
/// * `parse_error` -- message returned when the contents cannot be deserialized
pub fn read_json_file<T, P>(full_path: &P, parse_error: StrError) -> Result<T, StrError>
where
    T: DeserializeOwned,
    P: AsRef<OsStr> + ?Sized,
{
    let file = File::open(Path::new(full_path)).map_err(|_| "file not found")?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|_| parse_error)
}

/// Serializes the data into a pretty-printed JSON file
///
/// The parent directory is created if missing.
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
pub fn write_json_file<T, P>(data: &T, full_path: &P) -> Result<(), StrError>
where
    T: Serialize + ?Sized,
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path);
    if let Some(p) = path.parent() {
        fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
    }
    let mut file = File::create(path).map_err(|_| "cannot create file")?;
    serde_json::to_writer_pretty(&mut file, data).map_err(|_| "cannot write file")?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{read_json_file, write_json_file};
    use crate::base::{ParamLayer, DEFAULT_TEST_DIR};
    use crate::StrError;
    use std::fs;

    #[test]
    fn write_and_read_work() -> Result<(), StrError> {
        let params = vec![
            ParamLayer {
                thickness: 1.5,
                conductivity: 2e-3,
            },
            ParamLayer {
                thickness: 0.5,
                conductivity: 7e-6,
            },
        ];
        let full_path = format!("{}/json_file/nested/params.json", DEFAULT_TEST_DIR);
        write_json_file(&params, &full_path)?;
        let read: Vec<ParamLayer> = read_json_file(&full_path, "cannot parse params")?;
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].thickness, 1.5);
        assert_eq!(read[0].conductivity, 2e-3);
        assert_eq!(read[1].thickness, 0.5);
        assert_eq!(read[1].conductivity, 7e-6);
        Ok(())
    }

    #[test]
    fn captures_errors() -> Result<(), StrError> {
        let res: Result<Vec<ParamLayer>, _> = read_json_file("/tmp/keff/__missing__.json", "cannot parse params");
        assert_eq!(res.err(), Some("file not found"));

        let full_path = format!("{}/json_file/garbage.json", DEFAULT_TEST_DIR);
        fs::create_dir_all(format!("{}/json_file", DEFAULT_TEST_DIR)).map_err(|_| "cannot create directory")?;
        fs::write(&full_path, "{ not json").map_err(|_| "cannot write file")?;
        let res: Result<Vec<ParamLayer>, _> = read_json_file(&full_path, "cannot parse params");
        assert_eq!(res.err(), Some("cannot parse params"));
        Ok(())
    }
}
