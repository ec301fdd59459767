use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default output filename with format: {format}-{YYMMDD}.csv
pub fn generate_default_output_filename(format_id: &str) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("{}-{:02}{:02}{:02}.csv", format_id, year, month, day);
    PathBuf::from("output").join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_output_filename() {
        let filename = generate_default_output_filename("ghcnd-stations");
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("output/"));
        assert!(filename_str.ends_with(".csv"));

        let parts: Vec<&str> = filename_str.split('/').collect();
        assert_eq!(parts.len(), 2);

        // ghcnd-stations-YYMMDD.csv
        let file_part = parts[1];
        assert!(file_part.starts_with("ghcnd-stations-"));
        assert_eq!(file_part.len(), "ghcnd-stations-".len() + 6 + ".csv".len());
    }
}
