//! Font resources looked up by file name.

use std::path::{Path, PathBuf};

/// How deep below each font directory to search (`/usr/share/fonts/truetype/dejavu`).
const SEARCH_DEPTH: usize = 3;

/// Supplies raw font bytes by name.
pub trait FontProvider {
    /// Load the font file called `name`, or `None` if it is unavailable.
    fn load(&self, name: &str) -> Option<Vec<u8>>;
}

/// Searches a list of directories (and their subdirectories) for font files.
#[derive(Debug, Clone)]
pub struct SystemFonts {
    dirs: Vec<PathBuf>,
}

impl SystemFonts {
    /// Search the given directories, in order.
    #[must_use]
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Common font directories on Linux, macOS and Windows.
    #[must_use]
    pub fn default_dirs() -> Vec<PathBuf> {
        let mut dirs = vec![
            PathBuf::from("/usr/share/fonts"),
            PathBuf::from("/usr/local/share/fonts"),
            PathBuf::from("/Library/Fonts"),
            PathBuf::from("/System/Library/Fonts"),
            PathBuf::from(r"C:\Windows\Fonts"),
        ];
        if let Ok(home) = std::env::var("HOME") {
            dirs.push(PathBuf::from(&home).join(".local/share/fonts"));
            dirs.push(PathBuf::from(home).join(".fonts"));
        }
        dirs
    }
}

impl Default for SystemFonts {
    fn default() -> Self {
        Self::new(Self::default_dirs())
    }
}

impl FontProvider for SystemFonts {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        let direct = Path::new(name);
        let path = if direct.is_absolute() {
            direct.is_file().then(|| direct.to_path_buf())
        } else {
            self.dirs.iter().find_map(|dir| find_file(dir, name, SEARCH_DEPTH))
        }?;
        std::fs::read(&path).ok()
    }
}

/// Always reports fonts as unavailable, forcing the built-in bitmap font.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFonts;

impl FontProvider for NoFonts {
    fn load(&self, _name: &str) -> Option<Vec<u8>> {
        None
    }
}

fn find_file(dir: &Path, name: &str, depth: usize) -> Option<PathBuf> {
    let candidate = dir.join(name);
    if candidate.is_file() {
        return Some(candidate);
    }
    if depth == 0 {
        return None;
    }
    let mut subdirs: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    subdirs.sort();
    subdirs.iter().find_map(|sub| find_file(sub, name, depth - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fonts_misses() {
        assert!(NoFonts.load("DejaVuSans.ttf").is_none());
    }

    #[test]
    fn missing_dirs_miss() {
        let fonts = SystemFonts::new(vec![PathBuf::from("/nonexistent/matryoshka/fonts")]);
        assert!(fonts.load("DejaVuSans.ttf").is_none());
    }

    #[test]
    fn finds_nested_font_file() {
        let dir = std::env::temp_dir().join("matryoshka_fonts_nested_test");
        let nested = dir.join("truetype").join("fake");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("Fake.ttf"), b"not really a font").unwrap();

        let fonts = SystemFonts::new(vec![dir.clone()]);
        assert_eq!(fonts.load("Fake.ttf").as_deref(), Some(&b"not really a font"[..]));
        assert!(fonts.load("Other.ttf").is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn absolute_path_loads_directly() {
        let dir = std::env::temp_dir().join("matryoshka_fonts_absolute_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("Direct.ttf");
        std::fs::write(&path, b"bytes").unwrap();

        let fonts = SystemFonts::new(Vec::new());
        assert_eq!(fonts.load(path.to_str().unwrap()).as_deref(), Some(&b"bytes"[..]));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
