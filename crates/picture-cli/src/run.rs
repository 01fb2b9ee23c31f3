//! Execute a parsed command: decode, transform, encode.

use anyhow::{Context, Result};
use log::info;
use picture_core::{PixelBuffer, Transform};

use crate::cli::{Cli, Command};

/// Run the command described by `cli`.
pub fn run(cli: &Cli) -> Result<()> {
    let mut pictures = cli
        .command
        .sources()
        .iter()
        .map(|path| {
            PixelBuffer::open(path).with_context(|| format!("failed to load {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    if pictures.is_empty() {
        anyhow::bail!("no source pictures given");
    }
    let source = pictures.remove(0);
    let transform = transform_for(&cli.command, pictures)?;

    let destination = cli.command.destination();
    info!(
        "{}: {}x{} -> {}",
        transform.name(),
        source.width(),
        source.height(),
        destination.display()
    );

    let output = transform
        .apply(&source)
        .with_context(|| format!("{} failed", transform.name()))?;

    let format = cli.output_format();
    output
        .save(destination, format)
        .with_context(|| format!("failed to save {}", destination.display()))?;

    info!(
        "wrote {}x{} {} picture",
        output.width(),
        output.height(),
        format.name()
    );
    Ok(())
}

/// Build the transform for `command`; `extra` holds every source after the first.
fn transform_for(command: &Command, extra: Vec<PixelBuffer>) -> Result<Transform> {
    let transform = match command {
        Command::Invert { .. } => Transform::Invert,
        Command::Grayscale { .. } => Transform::Grayscale,
        Command::Rotate { angle, .. } => Transform::rotate(*angle)?,
        Command::Flip { direction, .. } => Transform::Flip(*direction),
        Command::Blend { .. } => Transform::Blend(extra),
        Command::Blur { .. } => Transform::Blur,
    };
    Ok(transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use picture_core::{Color, OutputFormat};
    use std::path::{Path, PathBuf};

    /// Scratch directory unique to one test.
    struct Scratch(PathBuf);

    impl Scratch {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("picture-cli-{}-{name}", std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            Scratch(dir)
        }

        fn path(&self, file: &str) -> String {
            self.0.join(file).display().to_string()
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn write_picture(path: &str, picture: &PixelBuffer) {
        picture.save(path, OutputFormat::Png).unwrap();
    }

    fn run_args(args: &[&str]) -> Result<()> {
        let cli = Cli::try_parse_from(std::iter::once("picture").chain(args.iter().copied()))?;
        run(&cli)
    }

    fn sample() -> PixelBuffer {
        PixelBuffer::from_fn(4, 3, |x, y| Color::new(x as u8 * 60, y as u8 * 100, 30))
    }

    #[test]
    fn test_run_each_single_source_command() {
        let scratch = Scratch::new("single");
        let src = scratch.path("in.png");
        let dst = scratch.path("out.png");
        write_picture(&src, &sample());

        run_args(&["invert", &src, &dst]).unwrap();
        assert_eq!(PixelBuffer::open(&dst).unwrap(), sample().invert());

        run_args(&["grayscale", &src, &dst]).unwrap();
        assert_eq!(PixelBuffer::open(&dst).unwrap(), sample().grayscale());

        run_args(&["rotate", "90", &src, &dst]).unwrap();
        assert_eq!(PixelBuffer::open(&dst).unwrap(), sample().rotate(90).unwrap());

        run_args(&["flip", "V", &src, &dst]).unwrap();
        assert_eq!(
            PixelBuffer::open(&dst).unwrap(),
            sample().flip(picture_core::FlipDirection::Vertical)
        );

        run_args(&["blur", &src, &dst]).unwrap();
        assert_eq!(PixelBuffer::open(&dst).unwrap(), sample().blur());
    }

    #[test]
    fn test_run_blend() {
        let scratch = Scratch::new("blend");
        let a = scratch.path("a.png");
        let b = scratch.path("b.png");
        let dst = scratch.path("out.png");
        let other = PixelBuffer::from_fn(3, 5, |_, _| Color::gray(200));
        write_picture(&a, &sample());
        write_picture(&b, &other);

        run_args(&["blend", &a, &b, &dst]).unwrap();
        let blended = PixelBuffer::open(&dst).unwrap();
        assert_eq!(blended.dimensions(), (3, 3));
        assert_eq!(blended, sample().blend(&[other]));
    }

    #[test]
    fn test_run_jpeg_output() {
        let scratch = Scratch::new("jpeg");
        let src = scratch.path("in.png");
        let dst = scratch.path("out.jpg");
        write_picture(&src, &sample());

        run_args(&["invert", &src, &dst]).unwrap();
        let bytes = std::fs::read(&dst).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_run_reports_failures() {
        let scratch = Scratch::new("failures");
        let src = scratch.path("in.png");
        let dst = scratch.path("out.png");
        write_picture(&src, &sample());

        let err = run_args(&["rotate", "45", &src, &dst]).unwrap_err();
        assert!(format!("{err:#}").contains("multiple of 90"));

        let err = run_args(&["rotate", "-90", &src, &dst]).unwrap_err();
        assert!(format!("{err:#}").contains("non-negative"));

        let missing = scratch.path("missing.png");
        let err = run_args(&["invert", &missing, &dst]).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load"));

        assert!(!Path::new(&dst).exists());
    }
}
