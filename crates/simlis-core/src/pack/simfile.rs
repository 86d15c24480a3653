use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::chart::{Chart, FormatVariant, Song};
use crate::error::{Error, Result};
use crate::pack::msd::{Tag, parse_tags};

/// Classify a simfile by extension.
pub fn format_variant(path: &Path) -> Result<FormatVariant> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "sm" => Ok(FormatVariant::Legacy),
        "ssc" => Ok(FormatVariant::Modern),
        _ => Err(Error::UnsupportedExtension(ext)),
    }
}

/// Parse one simfile into a `Song`.
///
/// Modern files get their `#NOTEDATA:` blocks parsed into charts. Legacy
/// files only have their header tags read, since legacy songs are skipped
/// by the summarizer and only need a title/artist for the diagnostic.
pub fn parse_simfile(path: &Path) -> Result<Song> {
    let format = format_variant(path)?;
    let content = read_lossy(path)?;
    let tags = parse_tags(&content);

    let song = match format {
        FormatVariant::Legacy => parse_header(path, format, &tags)?,
        FormatVariant::Modern => {
            let mut song = parse_header(path, format, &tags)?;
            song.charts = parse_chart_blocks(&tags);
            song
        }
    };

    debug!(
        "Parsed {:?}: {} ({} charts)",
        path,
        song.label(),
        song.charts.len()
    );
    Ok(song)
}

/// Read file contents as UTF-8, falling back to windows-1252 for the
/// latin-1-encoded simfiles older tools produced.
fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            warn!("{:?} is not valid UTF-8, decoding as windows-1252", path);
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(e.as_bytes());
            Ok(decoded.into_owned())
        }
    }
}

fn parse_header(path: &Path, format: FormatVariant, tags: &[Tag]) -> Result<Song> {
    let mut title = None;
    let mut artist = None;

    for tag in tags {
        // Header section ends where the first chart block begins
        if tag.key == "NOTEDATA" || tag.key == "NOTES" {
            break;
        }
        match tag.key.as_str() {
            "TITLE" => title = Some(clean_tag(&tag.value)),
            "ARTIST" => artist = Some(clean_tag(&tag.value)),
            _ => {}
        }
    }

    let title = title.ok_or_else(|| Error::MalformedSimfile {
        path: path.to_path_buf(),
        message: "missing #TITLE tag".to_string(),
    })?;

    Ok(Song {
        title,
        artist: artist.unwrap_or_default(),
        format,
        charts: Vec::new(),
        simfile_path: path.to_path_buf(),
    })
}

/// Collect the per-chart metadata of every `#NOTEDATA:` block, in file order.
fn parse_chart_blocks(tags: &[Tag]) -> Vec<Chart> {
    let mut charts = Vec::new();
    let mut current: Option<Chart> = None;

    for tag in tags {
        if tag.key == "NOTEDATA" {
            if let Some(chart) = current.take() {
                charts.push(chart);
            }
            current = Some(Chart::default());
            continue;
        }

        let Some(chart) = current.as_mut() else {
            continue;
        };
        match tag.key.as_str() {
            "CHARTNAME" => chart.chart_name = clean_tag(&tag.value),
            "DESCRIPTION" => chart.description = clean_tag(&tag.value),
            "DIFFICULTY" => chart.difficulty = clean_tag(&tag.value),
            "METER" => chart.meter = clean_tag(&tag.value),
            "CREDIT" => chart.credit = clean_tag(&tag.value),
            _ => {}
        }
    }

    if let Some(chart) = current.take() {
        charts.push(chart);
    }

    charts
}

/// Drop control characters and zero-width spaces some editors leave behind.
fn clean_tag(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_control() && *c != '\u{200b}')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_simfile(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const SSC: &str = "\
#VERSION:0.83;
#TITLE:Springtime;
#ARTIST:Kommisar;
#NOTEDATA:;
#CHARTNAME:HardStep;
#STEPSTYPE:dance-single;
#DESCRIPTION:stamina;
#DIFFICULTY:Hard;
#METER:9;
#CREDIT:Ash;
#NOTES:
0000
;
#NOTEDATA:;
#STEPSTYPE:dance-single;
#DIFFICULTY:Challenge;
#METER:13;
#CREDIT:Zaia;
#NOTES:
0000
;
";

    #[test]
    fn test_format_variant_from_extension() {
        assert_eq!(
            format_variant(Path::new("a/b.sm")).unwrap(),
            FormatVariant::Legacy
        );
        assert_eq!(
            format_variant(Path::new("a/b.SSC")).unwrap(),
            FormatVariant::Modern
        );
        assert!(matches!(
            format_variant(Path::new("a/b.dwi")),
            Err(Error::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_parse_modern_simfile() {
        let dir = TempDir::new().unwrap();
        let path = write_simfile(&dir, "song.ssc", SSC);

        let song = parse_simfile(&path).unwrap();
        assert_eq!(song.title, "Springtime");
        assert_eq!(song.artist, "Kommisar");
        assert_eq!(song.format, FormatVariant::Modern);
        assert_eq!(song.charts.len(), 2);

        assert_eq!(song.charts[0].difficulty, "Hard");
        assert_eq!(song.charts[0].meter, "9");
        assert_eq!(song.charts[0].credit, "Ash");
        assert_eq!(song.charts[0].chart_name, "HardStep");
        assert_eq!(song.charts[0].description, "stamina");

        assert_eq!(song.charts[1].difficulty, "Challenge");
        assert_eq!(song.charts[1].chart_name, "");
    }

    #[test]
    fn test_parse_legacy_header_only() {
        let dir = TempDir::new().unwrap();
        let sm = "#TITLE:Old Song;\n#ARTIST:Someone;\n#NOTES:\n dance-single:\n desc:\n Hard:\n 9:\n :\n0000\n;\n";
        let path = write_simfile(&dir, "song.sm", sm);

        let song = parse_simfile(&path).unwrap();
        assert_eq!(song.format, FormatVariant::Legacy);
        assert_eq!(song.title, "Old Song");
        assert_eq!(song.artist, "Someone");
        // Legacy charts are never parsed
        assert!(song.charts.is_empty());
    }

    #[test]
    fn test_missing_title_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_simfile(&dir, "song.ssc", "#ARTIST:Nobody;\n");

        assert!(matches!(
            parse_simfile(&path),
            Err(Error::MalformedSimfile { .. })
        ));
    }

    #[test]
    fn test_windows_1252_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("song.ssc");
        // "Café" with a latin-1 0xE9
        fs::write(&path, b"#TITLE:Caf\xe9;\n#ARTIST:X;\n").unwrap();

        let song = parse_simfile(&path).unwrap();
        assert_eq!(song.title, "Café");
    }
}
