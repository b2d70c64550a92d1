//! Report labels derived from input paths.

use std::path::Path;

/// How a report names an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// The path as given, minus a trailing `.txt` (case-insensitive).
    StripTxt,
    /// The file stem of the final path component.
    Stem,
    /// The path exactly as given.
    Path,
}

impl LabelStyle {
    pub fn apply(self, path: &Path) -> String {
        let display = path.to_string_lossy();
        match self {
            LabelStyle::StripTxt => strip_txt(&display).to_string(),
            LabelStyle::Stem => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| display.into_owned()),
            LabelStyle::Path => display.into_owned(),
        }
    }
}

fn strip_txt(name: &str) -> &str {
    let split = name.len().saturating_sub(4);
    match (name.get(..split), name.get(split..)) {
        (Some(head), Some(ext)) if ext.eq_ignore_ascii_case(".txt") => head,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_txt_removes_extension_only() {
        assert_eq!(LabelStyle::StripTxt.apply(Path::new("TC1.txt")), "TC1");
        assert_eq!(LabelStyle::StripTxt.apply(Path::new("data/TC2.TXT")), "data/TC2");
        assert_eq!(LabelStyle::StripTxt.apply(Path::new("numbers.csv")), "numbers.csv");
        assert_eq!(LabelStyle::StripTxt.apply(Path::new("ext")), "ext");
    }

    #[test]
    fn strip_txt_keeps_text_ending_in_t() {
        // `.txt` is removed as a suffix, never character by character.
        assert_eq!(LabelStyle::StripTxt.apply(Path::new("test.txt")), "test");
        assert_eq!(LabelStyle::StripTxt.apply(Path::new("text")), "text");
    }

    #[test]
    fn stem_uses_final_component() {
        assert_eq!(LabelStyle::Stem.apply(Path::new("inputs/TC1.txt")), "TC1");
        assert_eq!(LabelStyle::Stem.apply(Path::new("archive.tar.gz")), "archive.tar");
    }

    #[test]
    fn path_is_verbatim() {
        assert_eq!(LabelStyle::Path.apply(Path::new("inputs/TC1.txt")), "inputs/TC1.txt");
    }

    #[test]
    fn strip_txt_handles_multibyte_names() {
        assert_eq!(LabelStyle::StripTxt.apply(Path::new("número.txt")), "número");
        assert_eq!(LabelStyle::StripTxt.apply(Path::new("ñú")), "ñú");
    }
}
