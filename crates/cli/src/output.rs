//! Output layout: console, one Markdown file, or a directory of slide files.
//!
//! Images are written as raw resource bytes under an `img/` directory next
//! to the Markdown, named with the same rule the formatter uses for links.

use anyhow::{Context, Result};
use pptx2md_core::{image_file_name, render_slides, SlideFormatter, SlideModel};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory (relative to the Markdown output) holding slide images.
pub const IMAGE_DIR: &str = "img";

/// Where converted slides go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Print everything to stdout; no image files are written.
    Console,
    /// All slides concatenated into one `.md` file.
    SingleFile(PathBuf),
    /// One `slideN.md` per slide inside a directory.
    Directory(PathBuf),
}

impl OutputTarget {
    /// A path ending in `.md` (any case) is a single file, anything else a directory.
    pub fn from_arg(output: Option<&Path>) -> Self {
        match output {
            None => Self::Console,
            Some(path) => {
                let is_markdown = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map_or(false, |e| e.eq_ignore_ascii_case("md"));
                if is_markdown {
                    Self::SingleFile(path.to_path_buf())
                } else {
                    Self::Directory(path.to_path_buf())
                }
            }
        }
    }

    /// Prefix for image links in the rendered Markdown.
    pub fn resource_path(&self) -> String {
        format!("./{}", IMAGE_DIR)
    }

    /// Directory receiving the Markdown output, if any.
    fn output_dir(&self) -> Option<PathBuf> {
        match self {
            Self::Console => None,
            Self::SingleFile(path) => Some(
                path.parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
            ),
            Self::Directory(dir) => Some(dir.clone()),
        }
    }

    /// Render and write all slides.
    pub fn write(&self, slides: &[SlideModel], formatter: &dyn SlideFormatter) -> Result<()> {
        let resource_path = self.resource_path();
        let rendered = render_slides(formatter, slides, &resource_path);

        if let Some(dir) = self.output_dir() {
            write_images(&dir.join(IMAGE_DIR), slides)?;
        }

        match self {
            Self::Console => {
                let document: String = rendered.iter().map(|(_, md)| md.as_str()).collect();
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(document.as_bytes())
                    .context("Failed to write to stdout")?;
                stdout.flush().context("Failed to flush stdout")?;
            }
            Self::SingleFile(path) => {
                let document: String = rendered.iter().map(|(_, md)| md.as_str()).collect();
                write_file(path, document.as_bytes())?;
                log::info!("Written to: {}", path.display());
            }
            Self::Directory(dir) => {
                for (idx, (_, markdown)) in rendered.iter().enumerate() {
                    let path = dir.join(format!("slide{}.md", idx + 1));
                    write_file(&path, markdown.as_bytes())?;
                }
                log::info!("Written {} slide(s) to: {}", rendered.len(), dir.display());
            }
        }

        Ok(())
    }
}

/// Write every slide image into `img_dir`, creating it as needed.
pub fn write_images(img_dir: &Path, slides: &[SlideModel]) -> Result<()> {
    fs::create_dir_all(img_dir)
        .with_context(|| format!("Failed to create directory: {}", img_dir.display()))?;

    for slide in slides {
        for (idx, image) in slide.images.iter().enumerate() {
            let path = img_dir.join(image_file_name(slide, idx, image));
            write_file(&path, &image.data)?;
            log::debug!("Image {} -> {}", image.filename, path.display());
        }
    }

    Ok(())
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    let mut file =
        fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content)
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_arg() {
        assert_eq!(OutputTarget::from_arg(None), OutputTarget::Console);
        assert_eq!(
            OutputTarget::from_arg(Some(Path::new("out/deck.md"))),
            OutputTarget::SingleFile(PathBuf::from("out/deck.md"))
        );
        assert_eq!(
            OutputTarget::from_arg(Some(Path::new("out/DECK.MD"))),
            OutputTarget::SingleFile(PathBuf::from("out/DECK.MD"))
        );
        assert_eq!(
            OutputTarget::from_arg(Some(Path::new("out/slides"))),
            OutputTarget::Directory(PathBuf::from("out/slides"))
        );
    }

    #[test]
    fn test_output_dir() {
        assert_eq!(OutputTarget::Console.output_dir(), None);
        assert_eq!(
            OutputTarget::SingleFile(PathBuf::from("deck.md")).output_dir(),
            Some(PathBuf::from("."))
        );
        assert_eq!(
            OutputTarget::SingleFile(PathBuf::from("out/deck.md")).output_dir(),
            Some(PathBuf::from("out"))
        );
        assert_eq!(
            OutputTarget::Directory(PathBuf::from("out")).output_dir(),
            Some(PathBuf::from("out"))
        );
    }

    #[test]
    fn test_resource_path() {
        assert_eq!(OutputTarget::Console.resource_path(), "./img");
    }
}
