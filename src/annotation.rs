use std::fs;
use std::path::Path;

use crate::error::Error;

/// Bytes preceding the comment: the magic number and the whitespace after it.
const MAGIC_NUMBER_LENGTH: usize = 3;

/// Inserts `#comment` as a header line right after the magic number of an
/// already written PNM file.
///
/// The file is read completely and rewritten in place, so a failure while
/// writing leaves it truncated.
pub fn comment_pnm_file(path: &Path, comment: &str) -> crate::Result<()> {
    let display_path = path.display().to_string();
    let contents = fs::read(path)
        .map_err(|e| Error::UnableToReadFileForAnnotation(display_path.clone(), e))?;
    let annotated = insert_comment(&contents, comment)
        .ok_or_else(|| Error::FileTooShortForAnnotation(display_path.clone(), contents.len()))?;
    fs::write(path, &annotated)
        .map_err(|e| Error::UnableToRewriteFileForAnnotation(display_path, e))?;
    log::info!(
        "Annotated '{}' with {} header bytes",
        path.display(),
        annotated.len() - contents.len()
    );
    Ok(())
}

/// Returns `None` if `contents` is too short to hold a magic number.
pub fn insert_comment(contents: &[u8], comment: &str) -> Option<Vec<u8>> {
    if contents.len() < MAGIC_NUMBER_LENGTH {
        return None;
    }
    let (magic_number, rest) = contents.split_at(MAGIC_NUMBER_LENGTH);
    let mut annotated = Vec::with_capacity(contents.len() + comment.len() + 2);
    annotated.extend_from_slice(magic_number);
    annotated.push(b'#');
    annotated.extend_from_slice(comment.as_bytes());
    annotated.push(b'\n');
    annotated.extend_from_slice(rest);
    Some(annotated)
}

#[cfg(test)]
mod test {
    use std::fs;

    use crate::error::Error;

    use super::{comment_pnm_file, insert_comment};

    const PGM: &[u8] = b"P5\n2 2\n255\n\x00\x01\x02\x03";

    fn temp_file(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "nist_downsampler_{}_{}",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).expect("Writing of temporary file failed");
        path
    }

    #[test]
    fn comment_follows_magic_number() {
        let annotated = insert_comment(PGM, "hello").unwrap();
        assert_eq!(annotated, b"P5\n#hello\n2 2\n255\n\x00\x01\x02\x03");
    }

    #[test]
    fn only_header_grows() {
        let comment = "DsmID: test ";
        let annotated = insert_comment(PGM, comment).unwrap();
        assert_eq!(annotated.len(), PGM.len() + comment.len() + 2);
        assert_eq!(&annotated[annotated.len() - 4..], &PGM[PGM.len() - 4..]);
    }

    #[test]
    fn short_contents_rejected() {
        assert_eq!(insert_comment(b"P5", "x"), None);
        assert_eq!(insert_comment(b"P5\n", "x").unwrap(), b"P5\n#x\n");
    }

    #[test]
    fn file_is_rewritten_in_place() {
        let path = temp_file("annotate.pgm", PGM);
        comment_pnm_file(&path, "stamp").unwrap();
        let contents = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(contents, b"P5\n#stamp\n2 2\n255\n\x00\x01\x02\x03");
    }

    #[test]
    fn missing_file_names_path() {
        let path = std::env::temp_dir().join("nist_downsampler_does_not_exist.pgm");
        match comment_pnm_file(&path, "stamp") {
            Err(Error::UnableToReadFileForAnnotation(reported, _)) => {
                assert_eq!(reported, path.display().to_string())
            }
            other => panic!("Missing file not reported, got {:?}", other),
        }
    }

    #[test]
    fn truncated_file_rejected() {
        let path = temp_file("truncated.pgm", b"P");
        let result = comment_pnm_file(&path, "stamp");
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::FileTooShortForAnnotation(_, 1))));
    }
}
